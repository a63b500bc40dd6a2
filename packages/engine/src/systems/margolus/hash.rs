//! Deterministic per-block randomness
//!
//! The kernel never owns RNG state: each block derives its roll from its
//! block index and the frame counter, so replays are bit-identical.

const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Multiply-xorshift finalizer.
#[inline]
fn mix64(mut h: u64) -> u64 {
    h = h.wrapping_mul(0x517c_c1b7_2722_0a95);
    h ^= h >> 32;
    h = h.wrapping_mul(0x517c_c1b7_2722_0a95);
    h ^= h >> 32;
    h
}

/// Hash a block index and frame counter.
#[inline]
pub fn block_hash(bx: i32, by: i32, frame: u64) -> u64 {
    let a = bx as u32 as u64;
    let b = (by as u32 as u64).rotate_left(21);
    let c = frame.rotate_left(42);
    mix64(SEED ^ a ^ b ^ c)
}

/// Map a hash to `[0, 1)` using its top 24 bits.
#[inline]
pub fn unit_f32(h: u64) -> f32 {
    (h >> 40) as f32 / (1u64 << 24) as f32
}

#[inline]
pub fn block_roll(bx: i32, by: i32, frame: u64) -> f32 {
    unit_f32(block_hash(bx, by, frame))
}

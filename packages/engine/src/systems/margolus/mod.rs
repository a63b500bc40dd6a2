//! Margolus-neighborhood sand update
//!
//! - `kernel`   - pure 2x2 block rule
//! - `hash`     - stateless per-block rolls
//! - `phase`    - frame counter and block partition per phase
//! - `dispatch` - runs one phase over front -> back

pub mod dispatch;
pub mod hash;
pub mod kernel;
pub mod phase;

pub use dispatch::dispatch_phase;
pub use kernel::{apply_block, per_phase_probability, Block, KernelParams};
pub use phase::{BlockLayout, Phase, PhaseScheduler};

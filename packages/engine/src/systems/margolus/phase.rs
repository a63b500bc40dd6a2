//! Phase scheduling - which 2x2 partition is updated this dispatch
//!
//! `phase = frame & 3`, offset `(dx, dy) = (phase & 1, (phase >> 1) ^ dx)`,
//! giving (0,0), (1,1), (0,1), (1,0) over four consecutive frames.
//! Blocks are anchored at `(dx + 2*bx, dy + 2*by)`; with an offset of 1 the
//! `-1` block row/column is included so edge cells still get a block.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase(u8);

impl Phase {
    #[inline]
    pub fn from_frame(frame: u64) -> Self {
        Phase((frame & 3) as u8)
    }

    /// Block-grid offset for this phase.
    #[inline]
    pub fn offset(self) -> (u32, u32) {
        let dx = (self.0 & 1) as u32;
        let dy = ((self.0 >> 1) as u32) ^ dx;
        (dx, dy)
    }
}

/// Block partition of a `width x height` grid under one phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockLayout {
    pub dx: i32,
    pub dy: i32,
    pub bx_start: i32,
    pub bx_end: i32,
    pub by_start: i32,
    pub by_end: i32,
}

impl BlockLayout {
    pub fn new(width: u32, height: u32, phase: Phase) -> Self {
        let (dx, dy) = phase.offset();
        let (dx, dy) = (dx as i32, dy as i32);
        let (w, h) = (width.max(1) as i32, height.max(1) as i32);
        Self {
            dx,
            dy,
            bx_start: -dx,
            bx_end: (w - dx + 1) / 2,
            by_start: -dy,
            by_end: (h - dy + 1) / 2,
        }
    }

    /// Top-left cell of block `(bx, by)`; may be `-1` on either axis.
    #[inline]
    pub fn origin(&self, bx: i32, by: i32) -> (i32, i32) {
        (self.dx + 2 * bx, self.dy + 2 * by)
    }

    #[inline]
    pub fn blocks_x(&self) -> u32 {
        (self.bx_end - self.bx_start) as u32
    }

    #[inline]
    pub fn blocks_y(&self) -> u32 {
        (self.by_end - self.by_start) as u32
    }

    pub fn block_count(&self) -> u32 {
        self.blocks_x() * self.blocks_y()
    }
}

/// Frame counter driving the phase cycle. Reset to 0 on reallocation.
#[derive(Clone, Debug, Default)]
pub struct PhaseScheduler {
    frame: u64,
}

impl PhaseScheduler {
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        Phase::from_frame(self.frame)
    }

    pub fn layout(&self, width: u32, height: u32) -> BlockLayout {
        BlockLayout::new(width, height, self.phase())
    }

    /// Called once per completed dispatch, before the buffer swap.
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn set_frame(&mut self, frame: u64) {
        self.frame = frame;
    }
}

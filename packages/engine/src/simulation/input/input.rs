//! Canvas and pointer state reported by the host page
//!
//! Everything is kept in device pixels (CSS size times device pixel ratio),
//! the same space `cell_size_px` and the brush radius are measured in.

use crate::spatial::grid::clamp_dim;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub height_px: f32,
}

impl Viewport {
    /// Build from a CSS-pixel canvas size and a device pixel ratio.
    /// Non-finite or non-positive values fall back to 1.
    pub fn from_css(css_width: f32, css_height: f32, dpr: f32) -> Self {
        let dpr = sanitize(dpr);
        Self {
            width_px: sanitize(css_width) * dpr,
            height_px: sanitize(css_height) * dpr,
        }
    }

    /// Viewport exactly covering a `width x height` cell grid.
    pub fn from_cells(width: u32, height: u32, cell_size_px: u32) -> Self {
        let cell = cell_size_px.max(1) as f32;
        Self {
            width_px: width.max(1) as f32 * cell,
            height_px: height.max(1) as f32 * cell,
        }
    }

    /// Grid dimensions: `floor(px / cell)` on each axis, clamped into
    /// `1..=MAX_GRID_DIM`.
    pub fn sim_size(&self, cell_size_px: u32) -> (u32, u32) {
        let cell = cell_size_px.max(1) as f32;
        let w = (self.width_px / cell).floor() as u32;
        let h = (self.height_px / cell).floor() as u32;
        (clamp_dim(w), clamp_dim(h))
    }

    /// Device-normalized coordinates (center origin, y up) to canvas pixels
    /// (top-left origin, y down).
    pub fn ndc_to_px(&self, ndc_x: f32, ndc_y: f32) -> (f32, f32) {
        let x = (ndc_x + 1.0) * 0.5 * self.width_px;
        let y = (-ndc_y + 1.0) * 0.5 * self.height_px;
        (x, y)
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 1.0 }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub down: bool,
    pub x_px: f32,
    pub y_px: f32,
}

impl PointerState {
    pub fn press(&mut self, x_px: f32, y_px: f32) {
        self.down = true;
        self.moved(x_px, y_px);
    }

    pub fn moved(&mut self, x_px: f32, y_px: f32) {
        self.x_px = x_px;
        self.y_px = y_px;
    }

    /// Pointer up or pointer leaving the canvas.
    pub fn release(&mut self) {
        self.down = false;
    }
}

//! Cell vocabulary - the two-state sand model
//!
//! Cells are stored as raw bytes so the front buffer can be handed to JS
//! as a `Uint8Array` view without conversion.

pub type CellId = u8;

pub const CELL_EMPTY: CellId = 0;
pub const CELL_OCCUPIED: CellId = 1;

/// Normalize any non-zero byte to `CELL_OCCUPIED`.
///
/// Buffers written from JS are not trusted to carry canonical values.
#[inline]
pub fn normalize(cell: CellId) -> CellId {
    if cell == CELL_EMPTY { CELL_EMPTY } else { CELL_OCCUPIED }
}

//! Spatial layer - grid storage, double buffering and edge semantics

pub mod boundary;
pub mod grid;
pub mod store;

pub use boundary::Boundary;
pub use grid::{Grid, MAX_GRID_DIM};
pub use store::{BufferRole, GridStore};

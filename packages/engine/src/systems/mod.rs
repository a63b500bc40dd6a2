//! Systems - the kernels run against the grid store

pub mod backend;
pub mod margolus;
pub mod paint;

pub use backend::ComputeBackend;
pub use paint::Brush;

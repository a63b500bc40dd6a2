pub mod cell;
pub mod config;
pub mod error;

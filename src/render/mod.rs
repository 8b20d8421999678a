//! Main script rendering and writing.

pub mod generator;
pub mod writer;

pub use generator::{render, IncludeStyle};

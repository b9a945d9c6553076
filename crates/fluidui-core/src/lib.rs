#![forbid(unsafe_code)]

//! Core: geometric primitives shared by the fluidui layout crates.

pub mod geometry;

pub use geometry::{Rect, Sides, Size};

// src/math/geometry/polygon/operations/mod.rs
pub mod boolean;
pub mod clipping;

pub use boolean::*;
pub use clipping::*;

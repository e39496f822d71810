//! Foundation types for the classic skin subsystem.
//!
//! This crate contains the small value types shared by the skin loader and
//! its consumers: packed RGB colors, integer rectangles, and the error type.

pub mod color;
pub mod error;
pub mod geometry;

pub use color::Color;
pub use error::{Result, SkinError};
pub use geometry::Rect;

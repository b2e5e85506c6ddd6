//! Pure math/data for geometry and paint in SlideToggle
//!
//! This crate contains the geometry primitives, colors, brushes and unit
//! types shared by the toggle's gesture, animation and surface layers.

mod brush;
mod color;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::Dp;
}

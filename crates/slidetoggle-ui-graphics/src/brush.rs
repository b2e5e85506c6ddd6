//! Background paint handles the host surface knows how to draw.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(Vec<Color>),
    /// Opaque resource owned by the host (an image, a nine-patch, ...).
    Resource(u32),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    pub fn resource(id: u32) -> Self {
        Brush::Resource(id)
    }
}

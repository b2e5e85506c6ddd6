//! Drag recognition for the toggle block.

mod clamp;
mod classifier;

pub use clamp::DragClamp;
pub use classifier::{GestureClassifier, GestureState, PointerUp};

//! Pointer input and gesture recognition for SlideToggle
//!
//! Turns raw pointer events into drag positions, taps and releases for a
//! single horizontally draggable block.

pub mod gesture_constants;
pub mod gestures;
pub mod input;
pub mod velocity_tracker;

pub use gestures::{DragClamp, GestureClassifier, GestureState, PointerUp};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
    pub use crate::gestures::{DragClamp, GestureClassifier, GestureState, PointerUp};
    pub use crate::input::{PointerEvent, PointerEventKind, PointerId};
}

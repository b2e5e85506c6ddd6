use slidetoggle_ui_graphics::{Point, Rect};
use smallvec::SmallVec;

use super::DragClamp;
use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
use crate::input::{PointerEvent, PointerId};
use crate::velocity_tracker::VelocityTracker1D;

/// Where the block currently is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureState {
    /// Nothing captured and nothing animating.
    #[default]
    Idle,
    /// A pointer pressed the block but has not moved past the touch slop.
    PossibleDrag,
    /// The block follows the captured pointer.
    Dragging,
    /// The block is animating toward a resting edge.
    Settling,
}

/// Result of lifting a pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerUp {
    /// The pointer was not driving a gesture on the block.
    Ignored,
    /// Press and release without crossing the touch slop.
    Tap,
    /// A drag ended with the block at `position`, moving at `velocity` px/s.
    Released { position: Point, velocity: f32 },
}

/// Decides whether pointer input on the block is a tap or a drag.
///
/// Only one pointer drives the block at a time. Pointers that land while a
/// gesture is live are tracked only so that a tap is not reported while
/// another finger is down.
pub struct GestureClassifier {
    state: GestureState,
    touch_slop: f32,
    max_fling_velocity: f32,
    min_fling_velocity: f32,
    active_pointer: Option<PointerId>,
    other_pointers: SmallVec<[PointerId; 4]>,
    down_position: Point,
    block_origin: Point,
    block_position: Point,
    velocity: VelocityTracker1D,
}

impl GestureClassifier {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            state: GestureState::Idle,
            touch_slop: touch_slop.max(0.0),
            max_fling_velocity: MAX_FLING_VELOCITY,
            min_fling_velocity: MIN_FLING_VELOCITY,
            active_pointer: None,
            other_pointers: SmallVec::new(),
            down_position: Point::ZERO,
            block_origin: Point::ZERO,
            block_position: Point::ZERO,
            velocity: VelocityTracker1D::new(),
        }
    }

    pub fn set_fling_limits(&mut self, min_velocity: f32, max_velocity: f32) {
        self.min_fling_velocity = min_velocity.max(0.0);
        self.max_fling_velocity = max_velocity.max(self.min_fling_velocity);
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    pub fn set_touch_slop(&mut self, touch_slop: f32) {
        self.touch_slop = touch_slop.max(0.0);
    }

    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    pub fn is_tracking_pointer(&self) -> bool {
        matches!(self.state, GestureState::PossibleDrag | GestureState::Dragging)
    }

    /// Tries to capture the block. `block_bounds` is the block's current rect.
    ///
    /// Capturing while settling is allowed; the caller stops the animation
    /// and passes the block's in-flight bounds.
    pub fn on_pointer_down(&mut self, event: &PointerEvent, block_bounds: Rect) -> bool {
        if self.active_pointer.is_some() || !block_bounds.contains(event.position) {
            if self.active_pointer != Some(event.id) && !self.other_pointers.contains(&event.id) {
                self.other_pointers.push(event.id);
            }
            return false;
        }

        self.state = GestureState::PossibleDrag;
        self.active_pointer = Some(event.id);
        self.down_position = event.position;
        self.block_origin = block_bounds.origin();
        self.block_position = self.block_origin;
        self.velocity.reset();
        self.velocity
            .add_position(event.uptime_millis, event.position.x);
        log::trace!(
            "pointer {} captured block at {:?}",
            event.id,
            self.block_origin
        );
        true
    }

    /// Returns the clamped block position to apply, if the block should move.
    pub fn on_pointer_move(&mut self, event: &PointerEvent, clamp: &DragClamp) -> Option<Point> {
        if self.active_pointer != Some(event.id) {
            return None;
        }
        self.velocity
            .add_position(event.uptime_millis, event.position.x);

        if self.state == GestureState::PossibleDrag {
            let offset = event.position.offset_from(self.down_position);
            if offset.x.hypot(offset.y) <= self.touch_slop {
                return None;
            }
            self.state = GestureState::Dragging;
            log::trace!("pointer {} crossed touch slop", event.id);
        }

        if self.state != GestureState::Dragging {
            return None;
        }
        event.consume();
        self.block_position = self.follow(event.position, clamp);
        Some(self.block_position)
    }

    pub fn on_pointer_up(&mut self, event: &PointerEvent, clamp: &DragClamp) -> PointerUp {
        if self.active_pointer != Some(event.id) {
            self.other_pointers.retain(|id| *id != event.id);
            return PointerUp::Ignored;
        }
        self.active_pointer = None;
        self.velocity
            .add_position(event.uptime_millis, event.position.x);

        match self.state {
            GestureState::PossibleDrag => {
                self.state = GestureState::Idle;
                if self.other_pointers.is_empty() {
                    log::trace!("pointer {} tapped block", event.id);
                    PointerUp::Tap
                } else {
                    PointerUp::Ignored
                }
            }
            GestureState::Dragging => {
                event.consume();
                self.block_position = self.follow(event.position, clamp);
                self.state = GestureState::Settling;
                let velocity = self.release_velocity();
                log::trace!(
                    "pointer {} released block at {:?} with velocity {}",
                    event.id,
                    self.block_position,
                    velocity
                );
                PointerUp::Released {
                    position: self.block_position,
                    velocity,
                }
            }
            GestureState::Idle | GestureState::Settling => PointerUp::Ignored,
        }
    }

    /// Aborts any live pointer gesture and forgets every tracked pointer.
    ///
    /// Returns the state the gesture was in. A settle in progress is not a
    /// pointer gesture and keeps running.
    pub fn on_pointer_cancel(&mut self) -> GestureState {
        let previous = self.state;
        self.active_pointer = None;
        self.other_pointers.clear();
        self.velocity.reset();
        if self.is_tracking_pointer() {
            log::trace!("gesture cancelled in {:?}", previous);
            self.state = GestureState::Idle;
        }
        previous
    }

    /// Marks a programmatic settle. Ignored while a pointer drives the block.
    pub fn begin_settling(&mut self) -> bool {
        match self.state {
            GestureState::Idle | GestureState::Settling => {
                self.state = GestureState::Settling;
                true
            }
            GestureState::PossibleDrag | GestureState::Dragging => false,
        }
    }

    pub fn finish_settling(&mut self) {
        if self.state == GestureState::Settling {
            self.state = GestureState::Idle;
        }
    }

    /// Block position derived from the latest drag input.
    pub fn block_position(&self) -> Point {
        self.block_position
    }

    fn follow(&self, pointer: Point, clamp: &DragClamp) -> Point {
        clamp.clamp(self.block_origin + pointer.offset_from(self.down_position))
    }

    fn release_velocity(&self) -> f32 {
        let velocity = self.velocity.velocity_with_max(self.max_fling_velocity);
        if velocity.abs() < self.min_fling_velocity {
            0.0
        } else {
            velocity
        }
    }
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD)
    }
}

#[cfg(test)]
#[path = "tests/classifier_tests.rs"]
mod tests;

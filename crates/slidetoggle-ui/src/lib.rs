//! Draggable slide toggle
//!
//! A track holds a block the user drags horizontally. Releasing it far enough
//! from its resting edge commits the toggle to the other state, optionally
//! after an asynchronous veto listener agrees; otherwise it settles back.
//! Drawing is left to a host [`SlideSurface`].

mod config;
mod geometry;
mod slide_toggle;
mod state_machine;
mod surface;

pub use config::{ConfigError, SlideToggleConfig};
pub use geometry::{TrackGeometry, TrackMetrics};
pub use slide_toggle::{SlideToggle, ToggleFuture, VetoFuture, WeakSlideToggle};
pub use state_machine::{
    decide_release, PendingTransition, ReleaseDecision, ToggleState, ToggleStateMachine,
    TransitionError, TransitionOutcome,
};
pub use surface::SlideSurface;

pub use slidetoggle_animation::{Easing, SettleSpec};
pub use slidetoggle_core::{Lifecycle, Runtime, RuntimeHandle};
pub use slidetoggle_foundation::{GestureState, PointerEvent, PointerEventKind, PointerId};
pub use slidetoggle_ui_graphics::{Brush, Color, Dp, EdgeInsets, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::SlideToggleConfig;
    pub use crate::geometry::TrackMetrics;
    pub use crate::slide_toggle::SlideToggle;
    pub use crate::state_machine::ToggleState;
    pub use crate::surface::SlideSurface;
    pub use slidetoggle_foundation::PointerEvent;
    pub use slidetoggle_ui_graphics::prelude::*;
}

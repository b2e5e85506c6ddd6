//! Animation primitives for SlideToggle
//!
//! Provides easing curves and the [`SettlingAnimator`] that carries the block
//! from its release position to a resting edge over successive frames.

mod animation;
mod settle;

pub use animation::{Easing, Lerp};
pub use settle::{SettleBounds, SettleFrame, SettleSpec, SettlingAnimator};

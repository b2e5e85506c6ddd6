//! Shared gesture constants for pointer handling.
//!
//! Values are in logical pixels (and logical pixels per second). Hosts with
//! dense touch screens scale them through the toggle's configuration.

/// Drag threshold (touch slop) in logical pixels.
///
/// Once the pointer moves farther than this from the press position the
/// gesture becomes a drag and can no longer produce a tap.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Release velocities above this magnitude are clamped, in px/s.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Release velocities below this magnitude count as "no velocity", in px/s.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

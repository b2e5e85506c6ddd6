//! Settling animation: moves the block to a target over successive frames.
//!
//! Duration selection follows the drag-helper model: with a known release
//! velocity the settle lasts roughly as long as the block would take to cover
//! the distance at that speed, otherwise a base duration is scaled by how much
//! of the available travel is covered. Both are capped.

use slidetoggle_ui_graphics::Point;

use crate::animation::{Easing, Lerp};

/// Timing configuration for settle animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleSpec {
    /// Duration of a settle that covers the full travel range with no velocity
    /// is twice this value.
    pub base_duration_millis: u64,
    /// Upper bound for any settle.
    pub max_duration_millis: u64,
    pub easing: Easing,
}

impl SettleSpec {
    pub fn new(base_duration_millis: u64, max_duration_millis: u64, easing: Easing) -> Self {
        Self {
            base_duration_millis,
            max_duration_millis,
            easing,
        }
    }

    /// Settle that always takes exactly `duration_millis`.
    pub fn fixed(duration_millis: u64, easing: Easing) -> Self {
        Self {
            base_duration_millis: duration_millis,
            max_duration_millis: duration_millis,
            easing,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Duration in milliseconds for moving `delta` along `bounds`, blending
    /// both axes.
    pub fn duration_millis(&self, delta: Point, velocity: Point, bounds: SettleBounds) -> u64 {
        let abs_dx = delta.x.abs();
        let abs_dy = delta.y.abs();
        let abs_vx = velocity.x.abs();
        let abs_vy = velocity.y.abs();
        let added_velocity = abs_vx + abs_vy;
        let added_distance = abs_dx + abs_dy;
        if added_distance == 0.0 {
            return 0;
        }

        let x_weight = if abs_vx > 0.0 {
            abs_vx / added_velocity
        } else {
            abs_dx / added_distance
        };
        let y_weight = if abs_vy > 0.0 {
            abs_vy / added_velocity
        } else {
            abs_dy / added_distance
        };

        let x_duration = self.axis_duration(delta.x, velocity.x, bounds.horizontal_range, bounds);
        let y_duration = self.axis_duration(delta.y, velocity.y, bounds.vertical_range, bounds);
        let blended = x_duration * x_weight + y_duration * y_weight;
        (blended.max(0.0) as u64).min(self.max_duration_millis)
    }

    fn axis_duration(&self, delta: f32, velocity: f32, range: f32, bounds: SettleBounds) -> f32 {
        if delta == 0.0 {
            return 0.0;
        }
        let velocity = velocity.abs();
        let duration = if velocity > 0.0 {
            let extent = bounds.container_width.max(1.0);
            let half = extent / 2.0;
            let distance_ratio = (delta.abs() / extent).min(1.0);
            let distance = half + half * distance_influence(distance_ratio);
            4.0 * (1000.0 * (distance / velocity)).round()
        } else if range > 0.0 {
            (delta.abs() / range + 1.0) * self.base_duration_millis as f32
        } else {
            self.max_duration_millis as f32
        };
        duration.min(self.max_duration_millis as f32)
    }
}

impl Default for SettleSpec {
    fn default() -> Self {
        Self::new(256, 600, Easing::QuinticOut)
    }
}

/// Eases the influence of distance on the settle duration.
fn distance_influence(fraction: f32) -> f32 {
    let centered = (fraction - 0.5) * 0.3 * std::f32::consts::FRAC_PI_2;
    centered.sin()
}

/// Geometry the duration model needs to know about.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SettleBounds {
    pub horizontal_range: f32,
    pub vertical_range: f32,
    pub container_width: f32,
}

/// One animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleFrame {
    pub position: Point,
    pub finished: bool,
}

/// Drives a point toward a target with an eased, time-based interpolation.
///
/// A new [`start_settle`](Self::start_settle) replaces whatever target was in
/// flight; there is no queueing.
#[derive(Debug, Clone)]
pub struct SettlingAnimator {
    spec: SettleSpec,
    start: Point,
    target: Point,
    current: Point,
    start_time_nanos: u64,
    duration_nanos: u64,
    active: bool,
}

impl SettlingAnimator {
    pub fn new(spec: SettleSpec) -> Self {
        Self {
            spec,
            start: Point::ZERO,
            target: Point::ZERO,
            current: Point::ZERO,
            start_time_nanos: 0,
            duration_nanos: 0,
            active: false,
        }
    }

    pub fn spec(&self) -> SettleSpec {
        self.spec
    }

    pub fn set_spec(&mut self, spec: SettleSpec) {
        self.spec = spec;
    }

    /// Starts moving from `from` to `target`. Returns `false` when there is
    /// nothing to animate, in which case the animator is idle at `target`.
    pub fn start_settle(
        &mut self,
        from: Point,
        target: Point,
        velocity: Option<f32>,
        bounds: SettleBounds,
        now_nanos: u64,
    ) -> bool {
        self.start = from;
        self.current = from;
        self.target = target;
        self.start_time_nanos = now_nanos;

        let delta = target - from;
        if delta == Point::ZERO {
            self.active = false;
            self.current = target;
            self.duration_nanos = 0;
            return false;
        }

        let velocity = Point::new(velocity.unwrap_or(0.0), 0.0);
        let millis = self.spec.duration_millis(delta, velocity, bounds);
        self.duration_nanos = millis.saturating_mul(1_000_000);
        self.active = true;
        log::trace!(
            "settle {:?} -> {:?} over {}ms (velocity {:?})",
            from,
            target,
            millis,
            velocity.x
        );
        true
    }

    /// Advances to `now_nanos`. Finished frames leave the animator idle.
    pub fn tick(&mut self, now_nanos: u64) -> SettleFrame {
        if !self.active {
            return SettleFrame {
                position: self.current,
                finished: true,
            };
        }

        let elapsed = now_nanos.saturating_sub(self.start_time_nanos);
        if elapsed >= self.duration_nanos {
            self.current = self.target;
            self.active = false;
            return SettleFrame {
                position: self.current,
                finished: true,
            };
        }

        let linear = elapsed as f32 / self.duration_nanos as f32;
        let progress = self.spec.easing.transform(linear);
        self.current = self.start.lerp(&self.target, progress);
        SettleFrame {
            position: self.current,
            finished: false,
        }
    }

    /// Stops in place, keeping the last interpolated position.
    pub fn stop(&mut self) -> Point {
        self.active = false;
        self.current
    }

    pub fn is_settling(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> Point {
        self.target
    }

    pub fn position(&self) -> Point {
        self.current
    }

    pub fn duration_millis(&self) -> u64 {
        self.duration_nanos / 1_000_000
    }
}

impl Default for SettlingAnimator {
    fn default() -> Self {
        Self::new(SettleSpec::default())
    }
}

#[cfg(test)]
#[path = "tests/settle_tests.rs"]
mod tests;

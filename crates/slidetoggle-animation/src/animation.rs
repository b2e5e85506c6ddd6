//! Interpolation and easing curves.

use slidetoggle_ui_graphics::Point;

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

/// Easing curves applied to a linear time fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-out, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Material "fast out, slow in", `cubic-bezier(0.4, 0, 0.2, 1)`.
    FastOutSlowIn,
    /// `1 - (1 - t)^5`: the deceleration curve used by drag-helper settles.
    QuinticOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
            Easing::QuinticOut => {
                let t = fraction - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

/// Evaluates a CSS-style cubic bezier easing at `x = fraction`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let curve = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    };
    let slope = |p1: f32, p2: f32, t: f32| {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    };

    // Newton-Raphson on x(t) = fraction, bisection when the slope flattens.
    let mut t = fraction;
    let mut low = 0.0f32;
    let mut high = 1.0f32;
    for _ in 0..16 {
        let error = curve(x1, x2, t) - fraction;
        if error.abs() < 1e-6 {
            break;
        }
        if error > 0.0 {
            high = t;
        } else {
            low = t;
        }
        let dx = slope(x1, x2, t);
        let next = if dx.abs() > 1e-6 { t - error / dx } else { f32::NAN };
        t = if next > low && next < high {
            next
        } else {
            0.5 * (low + high)
        };
    }

    curve(y1, y2, t)
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

//! Release velocity estimation for the dragged block.
//!
//! Uses the impulse strategy: each recent segment of motion adds or removes
//! kinetic energy, and the final velocity is the one that energy implies.
//! Only the horizontal axis matters for the toggle, so a single axis is
//! tracked.

const HISTORY_SIZE: usize = 20;

/// Samples older than this relative to the newest one are ignored.
const HORIZON_MILLIS: i64 = 100;

/// A gap this long between consecutive samples means the pointer stopped.
pub const ASSUME_STOPPED_MILLIS: i64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_millis: i64,
    position: f32,
}

/// Single-axis velocity tracker over absolute positions.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Sample; HISTORY_SIZE],
    /// Slot the next sample is written to.
    head: usize,
    len: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [Sample::default(); HISTORY_SIZE],
            head: 0,
            len: 0,
        }
    }

    pub fn add_position(&mut self, time_millis: i64, position: f32) {
        self.samples[self.head] = Sample {
            time_millis,
            position,
        };
        self.head = (self.head + 1) % HISTORY_SIZE;
        self.len = (self.len + 1).min(HISTORY_SIZE);
    }

    pub fn reset(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Velocity in units per second. Zero with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let recent = self.recent_samples();
        if recent.len() < 2 {
            return 0.0;
        }

        let mut work = 0.0f32;
        for (index, pair) in recent.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            let elapsed = (current.time_millis - previous.time_millis) as f32;
            if elapsed <= 0.0 {
                continue;
            }
            let segment_velocity = (current.position - previous.position) / elapsed;
            let carried_velocity = kinetic_energy_to_velocity(work);
            work += (segment_velocity - carried_velocity) * segment_velocity.abs();
            if index == 0 {
                work *= 0.5;
            }
        }

        kinetic_energy_to_velocity(work) * 1000.0
    }

    /// Velocity clamped to `[-max_velocity, max_velocity]`.
    pub fn velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if !velocity.is_finite() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Samples inside the horizon, oldest first, stopping at the first pause.
    fn recent_samples(&self) -> Vec<Sample> {
        let mut collected = Vec::with_capacity(self.len);
        let Some(newest) = self.nth_newest(0) else {
            return collected;
        };
        let mut later = newest;
        for age_rank in 0..self.len {
            let Some(sample) = self.nth_newest(age_rank) else {
                break;
            };
            if newest.time_millis - sample.time_millis > HORIZON_MILLIS
                || later.time_millis - sample.time_millis > ASSUME_STOPPED_MILLIS
            {
                break;
            }
            collected.push(sample);
            later = sample;
        }
        collected.reverse();
        collected
    }

    fn nth_newest(&self, n: usize) -> Option<Sample> {
        if n >= self.len {
            return None;
        }
        let slot = (self.head + HISTORY_SIZE - 1 - n) % HISTORY_SIZE;
        Some(self.samples[slot])
    }
}

fn kinetic_energy_to_velocity(work: f32) -> f32 {
    work.signum() * (2.0 * work.abs()).sqrt()
}

#[cfg(test)]
#[path = "tests/velocity_tracker_tests.rs"]
mod tests;

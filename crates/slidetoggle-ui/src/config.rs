//! Options recognized by a slide toggle.

use slidetoggle_animation::SettleSpec;
use slidetoggle_foundation::gesture_constants::DRAG_THRESHOLD;
use slidetoggle_ui_graphics::{Brush, Color, Dp, EdgeInsets};

/// Configuration of a [`SlideToggle`](crate::SlideToggle).
///
/// Lengths in `Dp` are converted with `density`; the rest are pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideToggleConfig {
    pub open_text: Option<String>,
    pub close_text: Option<String>,
    pub text_color: Color,
    pub text_size: Dp,
    /// Minimum travel from the resting edge that commits a toggle.
    pub remain_distance: f32,
    pub block_margins: EdgeInsets,
    pub block_width: Dp,
    pub open_background: Option<Brush>,
    pub close_background: Option<Brush>,
    pub touch_slop: f32,
    pub settle: SettleSpec,
    pub highlight_delay_millis: u64,
    pub density: f32,
}

impl Default for SlideToggleConfig {
    fn default() -> Self {
        Self {
            open_text: None,
            close_text: None,
            text_color: Color::WHITE,
            text_size: Dp(14.0),
            remain_distance: 10.0,
            block_margins: EdgeInsets::uniform(1.0),
            block_width: Dp(50.0),
            open_background: None,
            close_background: None,
            touch_slop: DRAG_THRESHOLD,
            settle: SettleSpec::default(),
            highlight_delay_millis: 100,
            density: 1.0,
        }
    }
}

impl SlideToggleConfig {
    pub fn with_open_text(mut self, text: impl Into<String>) -> Self {
        self.open_text = Some(text.into());
        self
    }

    pub fn with_close_text(mut self, text: impl Into<String>) -> Self {
        self.close_text = Some(text.into());
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_text_size(mut self, size: Dp) -> Self {
        self.text_size = size;
        self
    }

    pub fn with_remain_distance(mut self, distance: f32) -> Self {
        self.remain_distance = distance;
        self
    }

    pub fn with_block_margins(mut self, margins: EdgeInsets) -> Self {
        self.block_margins = margins;
        self
    }

    pub fn with_block_width(mut self, width: Dp) -> Self {
        self.block_width = width;
        self
    }

    pub fn with_open_background(mut self, background: Brush) -> Self {
        self.open_background = Some(background);
        self
    }

    pub fn with_close_background(mut self, background: Brush) -> Self {
        self.close_background = Some(background);
        self
    }

    pub fn with_touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop;
        self
    }

    pub fn with_settle(mut self, settle: SettleSpec) -> Self {
        self.settle = settle;
        self
    }

    pub fn with_highlight_delay_millis(mut self, delay: u64) -> Self {
        self.highlight_delay_millis = delay;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn block_width_px(&self) -> f32 {
        self.block_width.to_px(self.density)
    }

    pub fn text_size_px(&self) -> f32 {
        self.text_size.to_px(self.density)
    }

    /// Rejects values no geometry can be derived from. Degenerate but finite
    /// values are accepted and only logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("remain_distance", self.remain_distance),
            ("block_margins.left", self.block_margins.left),
            ("block_margins.top", self.block_margins.top),
            ("block_margins.right", self.block_margins.right),
            ("block_margins.bottom", self.block_margins.bottom),
            ("block_width", self.block_width.0),
            ("text_size", self.text_size.0),
            ("touch_slop", self.touch_slop),
        ];
        for (field, value) in lengths {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::InvalidDensity {
                density: self.density,
            });
        }

        if self.remain_distance <= 0.0 {
            log::warn!(
                "remain distance {} lets any release commit",
                self.remain_distance
            );
        }
        if self.block_margins.non_negative() != self.block_margins {
            log::warn!("negative block margins {:?}", self.block_margins);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    NonFinite { field: &'static str, value: f32 },
    InvalidDensity { density: f32 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonFinite { field, value } => {
                write!(f, "config value {field} is not finite ({value})")
            }
            ConfigError::InvalidDensity { density } => {
                write!(f, "density must be a positive finite number, got {density}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

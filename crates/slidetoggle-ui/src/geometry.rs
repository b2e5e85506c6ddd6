//! Track geometry: where the block may rest and how far it may travel.

use slidetoggle_animation::SettleBounds;
use slidetoggle_foundation::DragClamp;
use slidetoggle_ui_graphics::{EdgeInsets, Point, Rect, Size};

use crate::state_machine::ToggleState;

/// What the host reports about the track on each layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TrackMetrics {
    pub size: Size,
    pub padding: EdgeInsets,
}

impl TrackMetrics {
    pub fn new(size: Size, padding: EdgeInsets) -> Self {
        Self { size, padding }
    }
}

/// Derived block bounds for one measured track.
///
/// `slide_total` is never negative: a track too small for the block yields a
/// zero travel range and the block stays at `min_left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    metrics: TrackMetrics,
    margins: EdgeInsets,
    block_size: Size,
    min_left: f32,
    slide_total: f32,
}

impl TrackGeometry {
    pub fn new(metrics: TrackMetrics, block_width: f32, margins: EdgeInsets) -> Self {
        let padding = metrics.padding;
        let block_height = (metrics.size.height
            - padding.vertical_sum()
            - margins.top
            - margins.bottom)
            .max(0.0);
        let block_size = Size::new(block_width.max(0.0), block_height);
        let min_left = padding.left + margins.left;
        let raw_total = metrics.size.width
            - padding.horizontal_sum()
            - margins.left
            - margins.right
            - block_size.width;
        let slide_total = if raw_total.is_finite() && raw_total >= 0.0 {
            raw_total
        } else {
            log::warn!(
                "track {:?} too small for block {:?}; slide range collapsed to zero",
                metrics.size,
                block_size
            );
            0.0
        };
        Self {
            metrics,
            margins,
            block_size,
            min_left,
            slide_total,
        }
    }

    pub fn metrics(&self) -> TrackMetrics {
        self.metrics
    }

    pub fn margins(&self) -> EdgeInsets {
        self.margins
    }

    pub fn block_size(&self) -> Size {
        self.block_size
    }

    pub fn slide_total(&self) -> f32 {
        self.slide_total
    }

    pub fn min_left(&self) -> f32 {
        self.min_left
    }

    pub fn max_left(&self) -> f32 {
        self.min_left + self.slide_total
    }

    pub fn resting_top(&self) -> f32 {
        self.metrics.padding.top + self.margins.top
    }

    pub fn resting_left(&self, state: ToggleState) -> f32 {
        match state {
            ToggleState::Closed => self.min_left(),
            ToggleState::Open => self.max_left(),
        }
    }

    pub fn resting_position(&self, state: ToggleState) -> Point {
        Point::new(self.resting_left(state), self.resting_top())
    }

    /// Horizontal distance of `left` from the closed edge.
    pub fn displacement(&self, left: f32) -> f32 {
        left - self.min_left
    }

    pub fn block_bounds(&self, position: Point) -> Rect {
        Rect::from_origin_size(position, self.block_size)
    }

    pub fn drag_clamp(&self) -> DragClamp {
        let top_bound = self.metrics.padding.top;
        let bottom_bound = self.metrics.size.height - self.block_size.height;
        DragClamp::new(self.min_left(), self.max_left(), top_bound, bottom_bound)
    }

    pub fn settle_bounds(&self) -> SettleBounds {
        SettleBounds {
            horizontal_range: self.slide_total,
            vertical_range: 0.0,
            container_width: self.metrics.size.width,
        }
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;

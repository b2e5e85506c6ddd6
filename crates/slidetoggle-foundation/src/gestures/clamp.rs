use slidetoggle_ui_graphics::Point;

/// Bounds a proposed block position to the track.
///
/// Horizontal positions stay in `[min_left, max_left]`; vertical positions in
/// `[top_bound, bottom_bound]`. An inverted range collapses onto its lower
/// edge, so a track too small for the block pins the block at `min_left`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragClamp {
    min_left: f32,
    max_left: f32,
    top_bound: f32,
    bottom_bound: f32,
}

impl DragClamp {
    pub fn new(min_left: f32, max_left: f32, top_bound: f32, bottom_bound: f32) -> Self {
        Self {
            min_left,
            max_left: max_left.max(min_left),
            top_bound,
            bottom_bound: bottom_bound.max(top_bound),
        }
    }

    /// Clamp that allows no motion away from `origin`.
    pub fn pinned(origin: Point) -> Self {
        Self::new(origin.x, origin.x, origin.y, origin.y)
    }

    pub fn clamp_horizontal(&self, proposed_left: f32) -> f32 {
        self.min_left.max(proposed_left.min(self.max_left))
    }

    pub fn clamp_vertical(&self, proposed_top: f32) -> f32 {
        self.top_bound.max(proposed_top.min(self.bottom_bound))
    }

    pub fn clamp(&self, proposed: Point) -> Point {
        Point::new(
            self.clamp_horizontal(proposed.x),
            self.clamp_vertical(proposed.y),
        )
    }

    pub fn min_left(&self) -> f32 {
        self.min_left
    }

    pub fn max_left(&self) -> f32 {
        self.max_left
    }

    pub fn top_bound(&self) -> f32 {
        self.top_bound
    }

    pub fn bottom_bound(&self) -> f32 {
        self.bottom_bound
    }

    /// Horizontal travel available to the block.
    pub fn horizontal_range(&self) -> f32 {
        self.max_left - self.min_left
    }
}

#[cfg(test)]
#[path = "tests/clamp_tests.rs"]
mod tests;

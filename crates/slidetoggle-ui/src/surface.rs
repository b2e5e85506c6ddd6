use slidetoggle_ui_graphics::{Brush, Color, Point};

use crate::geometry::TrackMetrics;

/// Host that owns the track's real geometry and draws the block.
///
/// The toggle only computes positions and decoration; the surface applies
/// them. All calls happen on the UI thread. A surface must not call back into
/// its toggle from inside these methods.
pub trait SlideSurface {
    /// Track size and padding, read on each layout pass.
    fn measure_track(&self) -> TrackMetrics;

    /// Ask the host for another render pass.
    fn request_redraw(&mut self);

    fn set_block_position(&mut self, position: Point);

    /// `None` clears the background.
    fn set_background(&mut self, background: Option<&Brush>);

    fn set_display_text(&mut self, text: &str);

    fn set_text_style(&mut self, _color: Color, _size_px: f32) {}

    /// Toggles the decorative highlight sweep over the text.
    fn set_highlight(&mut self, _enabled: bool) {}

    fn request_layout(&mut self) {}
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slidetoggle_ui::{SlideSurface, TrackMetrics};
use slidetoggle_ui_graphics::{Brush, Color, Point};

/// One call the toggle made on its surface.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceCall {
    Redraw,
    BlockPosition(Point),
    Background(Option<Brush>),
    DisplayText(String),
    TextStyle(Color, f32),
    Highlight(bool),
    RequestLayout,
}

/// Surface that records calls instead of drawing.
///
/// Clones share the same log and metrics, so a test keeps one clone while
/// the toggle owns another.
#[derive(Clone)]
pub struct RecordingSurface {
    metrics: Rc<Cell<TrackMetrics>>,
    calls: Rc<RefCell<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn new(metrics: TrackMetrics) -> Self {
        Self {
            metrics: Rc::new(Cell::new(metrics)),
            calls: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn set_metrics(&self, metrics: TrackMetrics) {
        self.metrics.set(metrics);
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn redraw_count(&self) -> usize {
        self.count(|call| matches!(call, SurfaceCall::Redraw))
    }

    pub fn layout_requests(&self) -> usize {
        self.count(|call| matches!(call, SurfaceCall::RequestLayout))
    }

    pub fn block_position(&self) -> Option<Point> {
        self.last(|call| match call {
            SurfaceCall::BlockPosition(position) => Some(*position),
            _ => None,
        })
    }

    pub fn display_text(&self) -> Option<String> {
        self.last(|call| match call {
            SurfaceCall::DisplayText(text) => Some(text.clone()),
            _ => None,
        })
    }

    pub fn background(&self) -> Option<Option<Brush>> {
        self.last(|call| match call {
            SurfaceCall::Background(background) => Some(background.clone()),
            _ => None,
        })
    }

    pub fn highlight(&self) -> Option<bool> {
        self.last(|call| match call {
            SurfaceCall::Highlight(enabled) => Some(*enabled),
            _ => None,
        })
    }

    fn count(&self, predicate: impl Fn(&SurfaceCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    fn last<T>(&self, extract: impl Fn(&SurfaceCall) -> Option<T>) -> Option<T> {
        self.calls.borrow().iter().rev().find_map(extract)
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl SlideSurface for RecordingSurface {
    fn measure_track(&self) -> TrackMetrics {
        self.metrics.get()
    }

    fn request_redraw(&mut self) {
        self.record(SurfaceCall::Redraw);
    }

    fn set_block_position(&mut self, position: Point) {
        self.record(SurfaceCall::BlockPosition(position));
    }

    fn set_background(&mut self, background: Option<&Brush>) {
        self.record(SurfaceCall::Background(background.cloned()));
    }

    fn set_display_text(&mut self, text: &str) {
        self.record(SurfaceCall::DisplayText(text.to_owned()));
    }

    fn set_text_style(&mut self, color: Color, size_px: f32) {
        self.record(SurfaceCall::TextStyle(color, size_px));
    }

    fn set_highlight(&mut self, enabled: bool) {
        self.record(SurfaceCall::Highlight(enabled));
    }

    fn request_layout(&mut self) {
        self.record(SurfaceCall::RequestLayout);
    }
}

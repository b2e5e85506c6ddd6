//! A console "window" for the toggle: the surface prints what it would draw
//! and the host loop pumps frames until the toggle is idle.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use slidetoggle_core::{Lifecycle, Runtime, RuntimeScheduler, StdClock};
use slidetoggle_ui::{
    Brush, Color, Point, PointerEvent, SlideSurface, SlideToggle, SlideToggleConfig, TrackMetrics,
};

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 600;

/// Scheduler that remembers whether the runtime asked for a frame.
#[derive(Default)]
pub struct FrameRequests {
    requested: AtomicBool,
}

impl FrameRequests {
    fn take(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }
}

impl RuntimeScheduler for FrameRequests {
    fn schedule_frame(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct ConsoleState {
    text: String,
    block: Point,
    redraw_requested: bool,
}

/// Surface that reports through the log instead of drawing.
#[derive(Clone)]
pub struct ConsoleSurface {
    metrics: TrackMetrics,
    state: Rc<RefCell<ConsoleState>>,
}

impl ConsoleSurface {
    pub fn new(metrics: TrackMetrics) -> Self {
        Self {
            metrics,
            state: Rc::new(RefCell::new(ConsoleState::default())),
        }
    }

    fn take_redraw(&self) -> bool {
        std::mem::take(&mut self.state.borrow_mut().redraw_requested)
    }

    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    pub fn block(&self) -> Point {
        self.state.borrow().block
    }
}

impl SlideSurface for ConsoleSurface {
    fn measure_track(&self) -> TrackMetrics {
        self.metrics
    }

    fn request_redraw(&mut self) {
        self.state.borrow_mut().redraw_requested = true;
    }

    fn set_block_position(&mut self, position: Point) {
        self.state.borrow_mut().block = position;
    }

    fn set_background(&mut self, background: Option<&Brush>) {
        log::info!("background -> {background:?}");
    }

    fn set_display_text(&mut self, text: &str) {
        log::info!("text -> {text:?}");
        self.state.borrow_mut().text = text.to_owned();
    }

    fn set_highlight(&mut self, enabled: bool) {
        log::info!("highlight -> {enabled}");
    }

    fn request_layout(&mut self) {
        log::debug!("layout requested");
    }
}

pub struct Host {
    runtime: Runtime,
    frames: Arc<FrameRequests>,
    surface: ConsoleSurface,
    toggle: SlideToggle<ConsoleSurface>,
    pointer: u64,
}

impl Host {
    pub fn new(config: SlideToggleConfig) -> anyhow::Result<Self> {
        let frames = Arc::new(FrameRequests::default());
        let runtime = Runtime::new(frames.clone(), Arc::new(StdClock::new()));
        let surface = ConsoleSurface::new(TrackMetrics::new(
            slidetoggle_ui::Size::new(320.0, 56.0),
            slidetoggle_ui::EdgeInsets::uniform(4.0),
        ));
        let toggle = SlideToggle::new(surface.clone(), config, runtime.handle())?;
        toggle.on_layout(true);
        runtime.handle().set_lifecycle(Lifecycle::Resumed);
        Ok(Self {
            runtime,
            frames,
            surface,
            toggle,
            pointer: 0,
        })
    }

    pub fn default_config() -> SlideToggleConfig {
        SlideToggleConfig::default()
            .with_open_text("Running")
            .with_close_text("Slide to start")
            .with_open_background(Brush::linear_gradient(vec![
                Color::from_argb(0xFF2E7D32),
                Color::from_argb(0xFF66BB6A),
            ]))
            .with_close_background(Brush::solid(Color::from_argb(0xFF424242)))
            .with_density(2.0)
    }

    pub fn toggle(&self) -> &SlideToggle<ConsoleSurface> {
        &self.toggle
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn surface(&self) -> &ConsoleSurface {
        &self.surface
    }

    /// Drags from the block's center by `dx` in `steps` frames and releases.
    pub fn drag(&mut self, dx: f32, steps: u32) {
        self.pointer += 1;
        let id = self.pointer;
        let start = self.block_center();
        let mut now = 0;
        self.toggle.handle_pointer_event(&PointerEvent::down(id, start, now));
        let mut end = start;
        for step in 1..=steps {
            now += FRAME.as_millis() as i64;
            end = Point::new(start.x + dx * step as f32 / steps as f32, start.y);
            self.toggle
                .handle_pointer_event(&PointerEvent::moved(id, end, now));
        }
        self.toggle
            .handle_pointer_event(&PointerEvent::up(id, end, now + 200));
        log::info!("released after dragging {dx}px; state {:?}", self.toggle.state());
    }

    pub fn tap(&mut self) {
        self.pointer += 1;
        let center = self.block_center();
        self.toggle
            .handle_pointer_event(&PointerEvent::down(self.pointer, center, 0));
        self.toggle
            .handle_pointer_event(&PointerEvent::up(self.pointer, center, 80));
    }

    /// Renders frames until there is nothing left to animate or run.
    pub fn run_until_idle(&self) -> usize {
        let handle = self.runtime.handle();
        let mut frames = 0;
        while frames < MAX_FRAMES {
            handle.drain_ui();
            let animating = self.toggle.continue_settling(true);
            let redraw = self.surface.take_redraw();
            let more_work = self.frames.take()
                || handle.next_delayed_due_nanos().is_some()
                || self.toggle.is_veto_pending();
            if !animating && !redraw && !more_work {
                break;
            }
            frames += 1;
            std::thread::sleep(FRAME);
        }
        log::debug!(
            "idle after {frames} frame(s); block at {:?}",
            self.surface.block()
        );
        frames
    }

    fn block_center(&self) -> Point {
        let position = self.toggle.block_position();
        let size = self.toggle.geometry().block_size();
        Point::new(position.x + size.width / 2.0, position.y + size.height / 2.0)
    }
}

use super::*;
use crate::geometry::TrackMetrics;
use slidetoggle_core::{Lifecycle, ManualClock, Runtime, TestScheduler};
use slidetoggle_ui_graphics::{Brush, Color, Dp, EdgeInsets, Size};

#[derive(Default)]
struct FakeSurface {
    metrics: TrackMetrics,
    position: Point,
    text: String,
    background: Option<Brush>,
    highlight: Option<bool>,
    redraws: usize,
    layouts: usize,
}

impl SlideSurface for FakeSurface {
    fn measure_track(&self) -> TrackMetrics {
        self.metrics
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }

    fn set_block_position(&mut self, position: Point) {
        self.position = position;
    }

    fn set_background(&mut self, background: Option<&Brush>) {
        self.background = background.cloned();
    }

    fn set_display_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    fn set_highlight(&mut self, enabled: bool) {
        self.highlight = Some(enabled);
    }

    fn request_layout(&mut self) {
        self.layouts += 1;
    }
}

struct Fixture {
    _runtime: Runtime,
    clock: ManualClock,
    toggle: SlideToggle<FakeSurface>,
}

impl Fixture {
    fn new(config: SlideToggleConfig) -> Self {
        let clock = ManualClock::new();
        let runtime = Runtime::new(Arc::new(TestScheduler::default()), Arc::new(clock.clone()));
        runtime.handle().set_lifecycle(Lifecycle::Resumed);
        let surface = FakeSurface {
            metrics: TrackMetrics::new(Size::new(152.0, 52.0), EdgeInsets::default()),
            ..FakeSurface::default()
        };
        let toggle = SlideToggle::new(surface, config, runtime.handle()).unwrap();
        Self {
            _runtime: runtime,
            clock,
            toggle,
        }
    }

    fn drag_by(&self, dx: f32) {
        let start = self.toggle.block_position();
        let down = Point::new(start.x + 10.0, 20.0);
        let end = Point::new(down.x + dx, 20.0);
        assert!(self.toggle.on_pointer_down(&PointerEvent::down(1, down, 0)));
        self.toggle.on_pointer_move(&PointerEvent::moved(1, end, 16));
        self.toggle.on_pointer_up(&PointerEvent::up(1, end, 500));
    }

    fn settle(&self) {
        for _ in 0..200 {
            self.clock.advance_millis(16);
            if !self.toggle.continue_settling(true) {
                return;
            }
        }
        panic!("settle did not finish");
    }
}

fn config() -> SlideToggleConfig {
    SlideToggleConfig::default()
        .with_open_text("open")
        .with_close_text("closed")
        .with_open_background(Brush::solid(Color::BLACK))
        .with_close_background(Brush::solid(Color::WHITE))
}

#[test]
fn construction_applies_closed_decoration() {
    let fixture = Fixture::new(config());
    fixture.toggle.with_surface(|surface| {
        assert_eq!(surface.text, "closed");
        assert_eq!(surface.background, Some(Brush::solid(Color::WHITE)));
        assert_eq!(surface.highlight, Some(true));
        assert_eq!(surface.position, Point::new(1.0, 1.0));
    });
    assert_eq!(fixture.toggle.state(), ToggleState::Closed);
    assert_eq!(fixture.toggle.geometry().slide_total(), 100.0);
}

#[test]
fn invalid_config_is_rejected() {
    let runtime = Runtime::new(
        Arc::new(TestScheduler::default()),
        Arc::new(ManualClock::new()),
    );
    let result = SlideToggle::new(
        FakeSurface::default(),
        SlideToggleConfig::default().with_touch_slop(f32::NAN),
        runtime.handle(),
    );
    assert!(result.is_err());
}

#[test]
fn live_drag_moves_block_without_animating() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    toggle.on_pointer_down(&PointerEvent::down(1, Point::new(20.0, 20.0), 0));
    let drag = PointerEvent::moved(1, Point::new(60.0, 20.0), 16);
    assert!(toggle.handle_pointer_event(&drag));
    assert_eq!(toggle.block_position(), Point::new(41.0, 1.0));
    assert_eq!(toggle.gesture_state(), GestureState::Dragging);
    assert!(!toggle.is_settling());
    assert_eq!(toggle.state(), ToggleState::Closed);
}

#[test]
fn each_unfinished_frame_requests_one_redraw() {
    let fixture = Fixture::new(config());
    fixture.drag_by(50.0);
    assert!(fixture.toggle.is_settling());

    loop {
        fixture.clock.advance_millis(16);
        let before = fixture.toggle.with_surface(|surface| surface.redraws);
        let running = fixture.toggle.continue_settling(true);
        let after = fixture.toggle.with_surface(|surface| surface.redraws);
        if !running {
            break;
        }
        assert_eq!(after - before, 1);
    }
    assert_eq!(fixture.toggle.block_position(), Point::new(101.0, 1.0));
    assert_eq!(fixture.toggle.gesture_state(), GestureState::Idle);
}

#[test]
fn commit_swaps_text_and_background_immediately() {
    let fixture = Fixture::new(config());
    fixture.drag_by(40.0);
    assert_eq!(fixture.toggle.state(), ToggleState::Open);
    fixture.toggle.with_surface(|surface| {
        assert_eq!(surface.text, "open");
        assert_eq!(surface.background, Some(Brush::solid(Color::BLACK)));
        assert_eq!(surface.highlight, Some(true));
    });
    assert!(fixture.toggle.is_settling());
}

#[test]
fn highlight_follows_commit_after_delay() {
    let fixture = Fixture::new(config());
    fixture.drag_by(40.0);
    fixture.clock.advance_millis(99);
    fixture.toggle.runtime().drain_ui();
    assert_eq!(fixture.toggle.with_surface(|s| s.highlight), Some(true));

    fixture.clock.advance_millis(1);
    fixture.toggle.runtime().drain_ui();
    assert_eq!(fixture.toggle.with_surface(|s| s.highlight), Some(false));
}

#[test]
fn cancel_mid_drag_settles_back() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    toggle.on_pointer_down(&PointerEvent::down(1, Point::new(20.0, 20.0), 0));
    toggle.on_pointer_move(&PointerEvent::moved(1, Point::new(90.0, 20.0), 16));
    toggle.handle_pointer_event(&PointerEvent::cancel(1, 32));

    assert_eq!(toggle.gesture_state(), GestureState::Settling);
    fixture.settle();
    assert_eq!(toggle.block_position(), Point::new(1.0, 1.0));
    assert_eq!(toggle.state(), ToggleState::Closed);
    assert_eq!(toggle.gesture_state(), GestureState::Idle);
}

#[test]
fn toggle_rejected_while_dragging() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    toggle.on_pointer_down(&PointerEvent::down(1, Point::new(20.0, 20.0), 0));
    assert!(matches!(
        toggle.try_toggle(),
        Err(TransitionError::GestureActive)
    ));
}

#[test]
fn layout_snaps_idle_block_to_new_edge() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    let future = toggle.toggle();
    drop(future);
    fixture.settle();
    assert_eq!(toggle.block_position(), Point::new(101.0, 1.0));

    toggle.with_surface_mut(|surface| {
        surface.metrics = TrackMetrics::new(Size::new(252.0, 52.0), EdgeInsets::default());
    });
    toggle.on_layout(true);
    assert_eq!(toggle.geometry().slide_total(), 200.0);
    assert_eq!(toggle.block_position(), Point::new(201.0, 1.0));
    assert_eq!(toggle.with_surface(|s| s.position), Point::new(201.0, 1.0));
}

#[test]
fn layout_without_change_keeps_geometry() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    toggle.with_surface_mut(|surface| {
        surface.metrics = TrackMetrics::new(Size::new(252.0, 52.0), EdgeInsets::default());
    });
    toggle.on_layout(false);
    assert_eq!(toggle.geometry().slide_total(), 100.0);
}

#[test]
fn reconfigure_recomputes_geometry_and_requests_layout() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    toggle
        .reconfigure(|config| {
            config.block_width = Dp(30.0);
            config.remain_distance = 40.0;
        })
        .unwrap();
    assert_eq!(toggle.geometry().slide_total(), 120.0);
    assert_eq!(toggle.with_surface(|s| s.layouts), 1);

    fixture.drag_by(30.0);
    assert_eq!(toggle.state(), ToggleState::Closed);
}

#[test]
fn failed_reconfigure_keeps_old_config() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    let result = toggle.reconfigure(|config| config.density = -1.0);
    assert!(result.is_err());
    assert_eq!(toggle.config().density, 1.0);
    assert_eq!(toggle.with_surface(|s| s.layouts), 0);
}

#[test]
fn update_display_text_replaces_current_state_text() {
    let fixture = Fixture::new(config());
    let toggle = &fixture.toggle;
    toggle.update_display_text("slide to unlock");
    assert_eq!(toggle.with_surface(|s| s.text.clone()), "slide to unlock");
    assert_eq!(toggle.config().close_text.as_deref(), Some("slide to unlock"));
    assert_eq!(toggle.config().open_text.as_deref(), Some("open"));
}

#[test]
fn request_layout_is_forwarded_outside_layout_pass() {
    let fixture = Fixture::new(config());
    fixture.toggle.request_layout();
    assert_eq!(fixture.toggle.with_surface(|s| s.layouts), 1);
}

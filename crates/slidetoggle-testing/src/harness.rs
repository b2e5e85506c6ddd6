//! A toggle wired to a manual clock, a counting scheduler and a recording
//! surface, plus gesture helpers.

use std::cell::Cell;
use std::sync::Arc;

use slidetoggle_core::{Lifecycle, ManualClock, Runtime, RuntimeHandle, TestScheduler};
use slidetoggle_foundation::{PointerEvent, PointerId};
use slidetoggle_ui::{ConfigError, SlideToggle, SlideToggleConfig, TrackMetrics};
use slidetoggle_ui_graphics::{EdgeInsets, Point, Size};

use crate::surface::RecordingSurface;

/// Simulated frame interval.
pub const FRAME_MILLIS: u64 = 16;

const MAX_SETTLE_FRAMES: usize = 1_000;

pub struct ToggleHarness {
    runtime: Runtime,
    clock: ManualClock,
    scheduler: Arc<TestScheduler>,
    surface: RecordingSurface,
    toggle: SlideToggle<RecordingSurface>,
    next_pointer: Cell<PointerId>,
}

impl ToggleHarness {
    /// Track sized so that the default configuration has a slide total of
    /// 100px between `min_left = 1` and `max_left = 101`.
    pub fn default_track() -> TrackMetrics {
        TrackMetrics::new(Size::new(152.0, 52.0), EdgeInsets::default())
    }

    /// Resumed harness on [`default_track`](Self::default_track).
    pub fn new(config: SlideToggleConfig) -> Result<Self, ConfigError> {
        Self::with_track(config, Self::default_track())
    }

    pub fn with_track(
        config: SlideToggleConfig,
        metrics: TrackMetrics,
    ) -> Result<Self, ConfigError> {
        let clock = ManualClock::new();
        let scheduler = Arc::new(TestScheduler::default());
        let runtime = Runtime::new(scheduler.clone(), Arc::new(clock.clone()));
        let surface = RecordingSurface::new(metrics);
        let toggle = SlideToggle::new(surface.clone(), config, runtime.handle())?;
        runtime.handle().set_lifecycle(Lifecycle::Resumed);
        Ok(Self {
            runtime,
            clock,
            scheduler,
            surface,
            toggle,
            next_pointer: Cell::new(1),
        })
    }

    pub fn toggle(&self) -> &SlideToggle<RecordingSurface> {
        &self.toggle
    }

    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn frames_requested(&self) -> usize {
        self.scheduler.frames_requested()
    }

    pub fn now_millis(&self) -> i64 {
        use slidetoggle_core::Clock;
        (self.clock.now_nanos() / 1_000_000) as i64
    }

    pub fn advance_millis(&self, millis: u64) {
        self.clock.advance_millis(millis);
    }

    pub fn set_lifecycle(&self, lifecycle: Lifecycle) {
        self.runtime.handle().set_lifecycle(lifecycle);
    }

    /// Runs queued UI work and polls veto futures.
    pub fn pump(&self) {
        self.runtime.handle().drain_ui();
    }

    pub fn block_center(&self) -> Point {
        let position = self.toggle.block_position();
        let size = self.toggle.geometry().block_size();
        Point::new(position.x + size.width / 2.0, position.y + size.height / 2.0)
    }

    /// Presses the block's center. Returns the pointer id used.
    pub fn press(&self) -> PointerId {
        let id = self.next_pointer.get();
        self.next_pointer.set(id + 1);
        self.press_at(id, self.block_center());
        id
    }

    pub fn press_at(&self, id: PointerId, position: Point) -> bool {
        self.toggle
            .on_pointer_down(&PointerEvent::down(id, position, self.now_millis()))
    }

    pub fn move_to(&self, id: PointerId, position: Point) -> PointerEvent {
        let event = PointerEvent::moved(id, position, self.now_millis());
        self.toggle.on_pointer_move(&event);
        event
    }

    pub fn release_at(&self, id: PointerId, position: Point) -> PointerEvent {
        let event = PointerEvent::up(id, position, self.now_millis());
        self.toggle.on_pointer_up(&event);
        event
    }

    /// Drags the block by `dx` over four frames, holds still, then releases
    /// with no velocity.
    pub fn drag_by(&self, dx: f32) {
        let id = self.press();
        let end = self.move_in_steps(id, dx);
        self.advance_millis(100);
        self.release_at(id, end);
    }

    /// Like [`drag_by`](Self::drag_by) but releases while still moving.
    pub fn fling_by(&self, dx: f32) {
        let id = self.press();
        let end = self.move_in_steps(id, dx);
        self.advance_millis(FRAME_MILLIS);
        self.release_at(id, end);
    }

    /// Drags through horizontal `offsets` from the press point, one per
    /// frame, then holds still and releases at the last one.
    pub fn drag_through(&self, offsets: &[f32]) {
        let id = self.press();
        let start = self.block_center();
        let mut end = start;
        for offset in offsets {
            self.advance_millis(FRAME_MILLIS);
            end = Point::new(start.x + offset, start.y);
            self.move_to(id, end);
        }
        self.advance_millis(100);
        self.release_at(id, end);
    }

    pub fn tap(&self) {
        let id = self.press();
        self.advance_millis(50);
        self.release_at(id, self.block_center());
    }

    /// One render pass: advance the clock, run UI work, tick the animation.
    pub fn frame(&self) -> bool {
        self.advance_millis(FRAME_MILLIS);
        self.pump();
        self.toggle.continue_settling(true)
    }

    /// Renders frames until the block stops. Returns the number of frames.
    pub fn settle(&self) -> usize {
        let mut frames = 0;
        while self.frame() {
            frames += 1;
            assert!(
                frames < MAX_SETTLE_FRAMES,
                "block still settling after {frames} frames"
            );
        }
        frames
    }

    fn move_in_steps(&self, id: PointerId, dx: f32) -> Point {
        let start = self.block_center();
        let mut end = start;
        for step in 1..=4 {
            self.advance_millis(FRAME_MILLIS);
            end = Point::new(start.x + dx * (step as f32 / 4.0), start.y);
            self.move_to(id, end);
        }
        end
    }
}

//! The slide toggle controller.
//!
//! `SlideToggle` glues the pieces together: pointer events go through the
//! [`GestureClassifier`], live drags are clamped to the track, releases are
//! decided by the [`ToggleStateMachine`], and the [`SettlingAnimator`] moves
//! the block to its resting edge one frame at a time. Veto listeners run as
//! futures on the UI runtime; while one is pending the block stays where it
//! was released and cannot be captured again.
//!
//! Listeners are always invoked after the controller's internal borrow has
//! been released, so they may call back into the toggle.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use slidetoggle_animation::SettlingAnimator;
use slidetoggle_core::{Clock, RuntimeHandle, StdClock, TaskHandle};
use slidetoggle_foundation::{
    GestureClassifier, GestureState, PointerEvent, PointerEventKind, PointerUp,
};
use slidetoggle_ui_graphics::Point;

use crate::config::{ConfigError, SlideToggleConfig};
use crate::geometry::TrackGeometry;
use crate::state_machine::{
    PendingTransition, ReleaseDecision, ToggleState, ToggleStateMachine, TransitionError,
    TransitionOutcome,
};
use crate::surface::SlideSurface;

/// Future returned by a veto listener. Resolving to `true` blocks the change.
pub type VetoFuture = Pin<Box<dyn Future<Output = bool>>>;

/// Future returned by [`SlideToggle::toggle`]; resolves to whether the
/// toggle committed.
pub type ToggleFuture = Pin<Box<dyn Future<Output = bool>>>;

type VetoListener = Rc<dyn Fn() -> VetoFuture>;
type StateListener = Rc<dyn Fn(ToggleState)>;
type ClickListener = Rc<dyn Fn()>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LayoutPass {
    Idle,
    InProgress,
}

struct Shared<S> {
    layout_pass: Cell<LayoutPass>,
    inner: RefCell<ToggleInner<S>>,
}

struct ToggleInner<S> {
    surface: S,
    config: SlideToggleConfig,
    geometry: TrackGeometry,
    machine: ToggleStateMachine,
    classifier: GestureClassifier,
    animator: SettlingAnimator,
    block_position: Point,
    clock: Arc<dyn Clock>,
    veto_task: Option<TaskHandle>,
    highlight_task: Option<TaskHandle>,
    on_state_changed: Option<StateListener>,
    on_open_before: Option<VetoListener>,
    on_close_before: Option<VetoListener>,
    on_click: Option<ClickListener>,
}

impl<S: SlideSurface> ToggleInner<S> {
    fn move_block(&mut self, position: Point) {
        self.block_position = position;
        self.surface.set_block_position(position);
    }

    /// Animates the block to the resting edge of `state`.
    fn settle_to(&mut self, state: ToggleState, velocity: Option<f32>) {
        let target = self.geometry.resting_position(state);
        let velocity = velocity.filter(|velocity| *velocity != 0.0);
        let now = self.clock.now_nanos();
        let started = self.animator.start_settle(
            self.block_position,
            target,
            velocity,
            self.geometry.settle_bounds(),
            now,
        );
        if started {
            self.classifier.begin_settling();
            self.surface.request_redraw();
        } else {
            self.move_block(target);
            self.finish_settling_if_idle();
        }
    }

    /// Sends a block that a press caught mid-settle back to its edge once
    /// that press ends without a drag.
    fn settle_if_displaced(&mut self) {
        if !self.is_at_rest() {
            return;
        }
        let state = self.machine.state();
        if self.block_position != self.geometry.resting_position(state) {
            log::trace!("press ended off the edge at {:?}", self.block_position);
            self.settle_to(state, None);
        }
    }

    fn finish_settling_if_idle(&mut self) {
        if !self.animator.is_settling() && !self.machine.is_veto_pending() {
            self.classifier.finish_settling();
        }
    }

    fn display_text(&self, state: ToggleState) -> &str {
        let text = match state {
            ToggleState::Open => &self.config.open_text,
            ToggleState::Closed => &self.config.close_text,
        };
        text.as_deref().unwrap_or_default()
    }

    fn apply_decoration(&mut self, state: ToggleState) {
        let text = self.display_text(state).to_owned();
        self.surface.set_display_text(&text);
        let background = match state {
            ToggleState::Open => self.config.open_background.as_ref(),
            ToggleState::Closed => self.config.close_background.as_ref(),
        };
        self.surface.set_background(background);
    }

    fn veto_listener(&self, requested: ToggleState) -> Option<VetoListener> {
        match requested {
            ToggleState::Open => self.on_open_before.clone(),
            ToggleState::Closed => self.on_close_before.clone(),
        }
    }

    fn is_at_rest(&self) -> bool {
        !self.animator.is_settling()
            && !self.classifier.is_tracking_pointer()
            && !self.machine.is_veto_pending()
    }

    /// Puts the block where the current geometry allows after a geometry
    /// change: snapped to its edge when idle, clamped otherwise.
    fn place_block(&mut self) {
        let state = self.machine.state();
        if self.animator.is_settling() {
            let target = self.geometry.resting_position(state);
            if self.animator.target() != target {
                let position = self.animator.stop();
                self.block_position = self.geometry.drag_clamp().clamp(position);
                self.settle_to(state, None);
            }
            return;
        }

        let position = if self.is_at_rest() {
            self.geometry.resting_position(state)
        } else {
            self.geometry.drag_clamp().clamp(self.block_position)
        };
        let moved = position != self.block_position;
        self.move_block(position);
        if moved {
            self.surface.request_redraw();
        }
    }

    fn remeasure(&mut self) {
        let metrics = self.surface.measure_track();
        self.geometry = TrackGeometry::new(
            metrics,
            self.config.block_width_px(),
            self.config.block_margins,
        );
        log::trace!(
            "measured track {:?}, slide total {}",
            metrics.size,
            self.geometry.slide_total()
        );
    }

    fn apply_config(&mut self, config: SlideToggleConfig) {
        self.machine.set_remain_distance(config.remain_distance);
        self.classifier.set_touch_slop(config.touch_slop);
        self.animator.set_spec(config.settle);
        self.geometry = TrackGeometry::new(
            self.geometry.metrics(),
            config.block_width_px(),
            config.block_margins,
        );
        self.surface
            .set_text_style(config.text_color, config.text_size_px());
        self.config = config;
        let state = self.machine.state();
        self.apply_decoration(state);
        self.place_block();
        log::debug!(
            "reconfigured; slide total {}, remain distance {}",
            self.geometry.slide_total(),
            self.machine.remain_distance()
        );
    }
}

/// How a started transition continues.
enum TransitionStart {
    /// Resolved on the spot; `true` if it committed.
    Finished(bool),
    AwaitingVeto(ToggleFuture),
}

/// Runs its callback when dropped before being disarmed.
///
/// Lives inside a veto future so that a future dropped unresolved, because
/// the runtime was destroyed or the caller gave up on it, releases the
/// pending transition.
struct AbandonGuard {
    on_abandon: Option<Box<dyn FnOnce()>>,
}

impl AbandonGuard {
    fn new(on_abandon: impl FnOnce() + 'static) -> Self {
        Self {
            on_abandon: Some(Box::new(on_abandon)),
        }
    }

    fn disarm(&mut self) {
        self.on_abandon = None;
    }
}

impl Drop for AbandonGuard {
    fn drop(&mut self) {
        if let Some(on_abandon) = self.on_abandon.take() {
            on_abandon();
        }
    }
}

fn abandon_transition<S: SlideSurface + 'static>(
    shared: &Weak<Shared<S>>,
    runtime: &RuntimeHandle,
    generation: u64,
) {
    let Some(strong) = shared.upgrade() else {
        return;
    };
    let Ok(mut inner) = strong.inner.try_borrow_mut() else {
        log::debug!("toggle busy; releasing abandoned transition {generation} later");
        let shared = shared.clone();
        let retry = runtime.clone();
        runtime.enqueue_ui_task(move || abandon_transition(&shared, &retry, generation));
        return;
    };
    if inner.machine.abandon(generation) {
        inner.veto_task = None;
        inner.finish_settling_if_idle();
    }
}

/// A draggable two-state toggle drawn by a [`SlideSurface`].
///
/// Cloning yields another handle to the same toggle. Listeners that need to
/// reach the toggle should capture a [`WeakSlideToggle`] to avoid a cycle.
pub struct SlideToggle<S: SlideSurface + 'static> {
    shared: Rc<Shared<S>>,
    runtime: RuntimeHandle,
}

impl<S: SlideSurface + 'static> Clone for SlideToggle<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

pub struct WeakSlideToggle<S: SlideSurface + 'static> {
    shared: Weak<Shared<S>>,
    runtime: RuntimeHandle,
}

impl<S: SlideSurface + 'static> Clone for WeakSlideToggle<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
            runtime: self.runtime.clone(),
        }
    }
}

impl<S: SlideSurface + 'static> WeakSlideToggle<S> {
    pub fn upgrade(&self) -> Option<SlideToggle<S>> {
        self.shared.upgrade().map(|shared| SlideToggle {
            shared,
            runtime: self.runtime.clone(),
        })
    }
}

impl<S: SlideSurface + 'static> SlideToggle<S> {
    /// Builds a closed toggle and applies its initial decoration to `surface`.
    pub fn new(
        surface: S,
        config: SlideToggleConfig,
        runtime: RuntimeHandle,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock: Arc<dyn Clock> = match runtime.clock() {
            Some(clock) => clock,
            None => Arc::new(StdClock::new()),
        };
        let geometry = TrackGeometry::new(
            surface.measure_track(),
            config.block_width_px(),
            config.block_margins,
        );
        let block_position = geometry.resting_position(ToggleState::Closed);
        let mut inner = ToggleInner {
            surface,
            machine: ToggleStateMachine::new(config.remain_distance),
            classifier: GestureClassifier::new(config.touch_slop),
            animator: SettlingAnimator::new(config.settle),
            config,
            geometry,
            block_position,
            clock,
            veto_task: None,
            highlight_task: None,
            on_state_changed: None,
            on_open_before: None,
            on_close_before: None,
            on_click: None,
        };
        inner
            .surface
            .set_text_style(inner.config.text_color, inner.config.text_size_px());
        inner.apply_decoration(ToggleState::Closed);
        inner.surface.set_highlight(true);
        inner.move_block(block_position);

        Ok(Self {
            shared: Rc::new(Shared {
                layout_pass: Cell::new(LayoutPass::Idle),
                inner: RefCell::new(inner),
            }),
            runtime,
        })
    }

    pub fn downgrade(&self) -> WeakSlideToggle<S> {
        WeakSlideToggle {
            shared: Rc::downgrade(&self.shared),
            runtime: self.runtime.clone(),
        }
    }

    pub fn runtime(&self) -> &RuntimeHandle {
        &self.runtime
    }

    // ── Listeners ──────────────────────────────────────────────────────

    /// Called once per committed transition with the new state.
    pub fn set_on_state_changed(&self, listener: impl Fn(ToggleState) + 'static) {
        self.shared.inner.borrow_mut().on_state_changed = Some(Rc::new(listener));
    }

    /// Asked before committing `Open`; resolve to `true` to block.
    pub fn set_on_open_before<F, Fut>(&self, listener: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        self.shared.inner.borrow_mut().on_open_before =
            Some(Rc::new(move || -> VetoFuture { Box::pin(listener()) }));
    }

    /// Asked before committing `Closed`; resolve to `true` to block.
    pub fn set_on_close_before<F, Fut>(&self, listener: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = bool> + 'static,
    {
        self.shared.inner.borrow_mut().on_close_before =
            Some(Rc::new(move || -> VetoFuture { Box::pin(listener()) }));
    }

    pub fn set_on_click(&self, listener: impl Fn() + 'static) {
        self.shared.inner.borrow_mut().on_click = Some(Rc::new(listener));
    }

    pub fn clear_listeners(&self) {
        let mut inner = self.shared.inner.borrow_mut();
        inner.on_state_changed = None;
        inner.on_open_before = None;
        inner.on_close_before = None;
        inner.on_click = None;
    }

    // ── State ──────────────────────────────────────────────────────────

    pub fn state(&self) -> ToggleState {
        self.shared.inner.borrow().machine.state()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn gesture_state(&self) -> GestureState {
        self.shared.inner.borrow().classifier.state()
    }

    pub fn is_veto_pending(&self) -> bool {
        self.shared.inner.borrow().machine.is_veto_pending()
    }

    pub fn is_settling(&self) -> bool {
        self.shared.inner.borrow().animator.is_settling()
    }

    pub fn block_position(&self) -> Point {
        self.shared.inner.borrow().block_position
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.shared.inner.borrow().geometry
    }

    pub fn config(&self) -> SlideToggleConfig {
        self.shared.inner.borrow().config.clone()
    }

    pub fn with_surface<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.shared.inner.borrow().surface)
    }

    pub fn with_surface_mut<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.shared.inner.borrow_mut().surface)
    }

    // ── Pointer input ──────────────────────────────────────────────────

    /// Routes `event` by kind. Returns whether the toggle intercepted it.
    pub fn handle_pointer_event(&self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                self.on_pointer_down(event);
            }
            PointerEventKind::Move => {
                self.on_pointer_move(event);
            }
            PointerEventKind::Up => self.on_pointer_up(event),
            PointerEventKind::Cancel => self.on_pointer_cancel(),
        }
        event.is_consumed()
    }

    /// Returns whether the block was captured by this press.
    pub fn on_pointer_down(&self, event: &PointerEvent) -> bool {
        self.runtime.assert_ui_thread();
        let mut guard = self.shared.inner.borrow_mut();
        let inner = &mut *guard;
        if inner.machine.is_veto_pending() {
            log::trace!("press ignored: transition awaiting veto");
            return false;
        }
        let bounds = inner.geometry.block_bounds(inner.block_position);
        let was_settling = inner.animator.is_settling();
        if !inner.classifier.on_pointer_down(event, bounds) {
            return false;
        }
        if was_settling {
            inner.block_position = inner.animator.stop();
            log::trace!("caught settling block at {:?}", inner.block_position);
        }
        true
    }

    /// Returns whether the block moved.
    pub fn on_pointer_move(&self, event: &PointerEvent) -> bool {
        self.runtime.assert_ui_thread();
        let mut guard = self.shared.inner.borrow_mut();
        let inner = &mut *guard;
        let clamp = inner.geometry.drag_clamp();
        match inner.classifier.on_pointer_move(event, &clamp) {
            Some(position) => {
                inner.move_block(position);
                inner.surface.request_redraw();
                true
            }
            None => false,
        }
    }

    pub fn on_pointer_up(&self, event: &PointerEvent) {
        self.runtime.assert_ui_thread();
        let result = {
            let mut inner = self.shared.inner.borrow_mut();
            let clamp = inner.geometry.drag_clamp();
            let result = inner.classifier.on_pointer_up(event, &clamp);
            if !matches!(result, PointerUp::Released { .. }) {
                inner.settle_if_displaced();
            }
            result
        };
        match result {
            PointerUp::Ignored => {}
            PointerUp::Tap => {
                log::debug!("block tapped");
                let listener = self.shared.inner.borrow().on_click.clone();
                if let Some(listener) = listener {
                    listener();
                }
            }
            PointerUp::Released { position, velocity } => self.handle_release(position, velocity),
        }
    }

    /// Aborts a live gesture. A dragged or caught block settles back to its
    /// edge.
    pub fn on_pointer_cancel(&self) {
        self.runtime.assert_ui_thread();
        let mut inner = self.shared.inner.borrow_mut();
        if inner.classifier.on_pointer_cancel() == GestureState::Dragging {
            let state = inner.machine.state();
            inner.settle_to(state, None);
        } else {
            inner.settle_if_displaced();
        }
    }

    fn handle_release(&self, position: Point, velocity: f32) {
        let (decision, displacement) = {
            let mut guard = self.shared.inner.borrow_mut();
            let inner = &mut *guard;
            inner.move_block(position);
            inner.surface.request_redraw();
            let displacement = inner.geometry.displacement(position.x);
            let decision = inner
                .machine
                .on_released(displacement, inner.geometry.slide_total());
            if let ReleaseDecision::Revert(state) = decision {
                inner.settle_to(state, Some(velocity));
            }
            (decision, displacement)
        };

        if let ReleaseDecision::Commit(_) = decision {
            match self.start_transition(Some(displacement), Some(velocity)) {
                Ok(TransitionStart::Finished(_)) => {}
                Ok(TransitionStart::AwaitingVeto(wait)) => {
                    let task = self.runtime.spawn_ui(async move {
                        wait.await;
                    });
                    match task {
                        Some(task) => self.shared.inner.borrow_mut().veto_task = Some(task),
                        None => log::debug!("runtime gone; release abandoned"),
                    }
                }
                Err(err) => {
                    log::debug!("release not committed: {err}");
                    let mut inner = self.shared.inner.borrow_mut();
                    let state = inner.machine.state();
                    inner.settle_to(state, Some(velocity));
                }
            }
        }
    }

    // ── Transitions ────────────────────────────────────────────────────

    /// Requests the opposite state as if the user had clicked.
    ///
    /// Without a veto listener the toggle commits before this returns and the
    /// future is already complete. Otherwise the listener is first asked when
    /// the future is first polled, and the future resolves to `false` if it
    /// vetoed. Hosts that want the listener gated by the lifecycle spawn the
    /// future with [`RuntimeHandle::spawn_ui`].
    pub fn toggle(&self) -> ToggleFuture {
        match self.try_toggle() {
            Ok(future) => future,
            Err(err) => {
                log::debug!("toggle rejected: {err}");
                Box::pin(std::future::ready(false))
            }
        }
    }

    /// Like [`toggle`](Self::toggle) but reports why nothing started.
    pub fn try_toggle(&self) -> Result<ToggleFuture, TransitionError> {
        self.runtime.assert_ui_thread();
        if self.shared.inner.borrow().classifier.is_tracking_pointer() {
            return Err(TransitionError::GestureActive);
        }
        match self.start_transition(None, None)? {
            TransitionStart::Finished(committed) => Ok(Box::pin(std::future::ready(committed))),
            TransitionStart::AwaitingVeto(wait) => Ok(wait),
        }
    }

    /// Force-closes without asking the veto listener. No-op when closed.
    pub fn reset(&self) {
        self.runtime.assert_ui_thread();
        let (veto_task, listener) = {
            let mut guard = self.shared.inner.borrow_mut();
            let inner = &mut *guard;
            if !inner.machine.force_close() {
                return;
            }
            let veto_task = inner.veto_task.take();
            if inner.classifier.is_tracking_pointer() {
                inner.classifier.on_pointer_cancel();
            }
            inner.settle_to(ToggleState::Closed, None);
            inner.apply_decoration(ToggleState::Closed);
            self.schedule_highlight(inner, ToggleState::Closed);
            (veto_task, inner.on_state_changed.clone())
        };
        if let Some(task) = veto_task {
            task.cancel();
        }
        if let Some(listener) = listener {
            listener(ToggleState::Closed);
        }
    }

    fn start_transition(
        &self,
        release_displacement: Option<f32>,
        velocity: Option<f32>,
    ) -> Result<TransitionStart, TransitionError> {
        let (transition, veto_listener) = {
            let mut inner = self.shared.inner.borrow_mut();
            let transition = inner.machine.begin_transition(release_displacement)?;
            (transition, inner.veto_listener(transition.requested))
        };

        let Some(veto_listener) = veto_listener else {
            let committed = self.finish_transition(&transition, false, velocity);
            return Ok(TransitionStart::Finished(committed));
        };

        let weak = Rc::downgrade(&self.shared);
        let generation = transition.generation();
        let guard = AbandonGuard::new({
            let weak = weak.clone();
            let runtime = self.runtime.clone();
            move || abandon_transition(&weak, &runtime, generation)
        });
        let runtime = self.runtime.clone();
        // The listener itself runs on first poll, so a paused host never sees it.
        Ok(TransitionStart::AwaitingVeto(Box::pin(async move {
            let mut guard = guard;
            log::debug!("asking veto listener before {:?}", transition.requested);
            let vetoed = veto_listener().await;
            guard.disarm();
            match weak.upgrade() {
                Some(shared) => SlideToggle {
                    shared,
                    runtime,
                }
                .finish_transition(&transition, vetoed, None),
                None => false,
            }
        })))
    }

    /// Applies a veto verdict. Returns whether the transition committed.
    fn finish_transition(
        &self,
        transition: &PendingTransition,
        vetoed: bool,
        velocity: Option<f32>,
    ) -> bool {
        let committed = {
            let mut guard = self.shared.inner.borrow_mut();
            let inner = &mut *guard;
            let Some(outcome) = inner.machine.resolve(transition, vetoed) else {
                return false;
            };
            inner.veto_task = None;
            match outcome {
                TransitionOutcome::Vetoed(state) => {
                    inner.settle_to(state, velocity);
                    None
                }
                TransitionOutcome::Committed(state) => {
                    inner.settle_to(state, velocity);
                    inner.apply_decoration(state);
                    self.schedule_highlight(inner, state);
                    Some((state, inner.on_state_changed.clone()))
                }
            }
        };

        match committed {
            Some((state, listener)) => {
                if let Some(listener) = listener {
                    listener(state);
                }
                true
            }
            None => false,
        }
    }

    /// Highlight off once opened, on once closed, after the configured delay.
    fn schedule_highlight(&self, inner: &mut ToggleInner<S>, state: ToggleState) {
        if let Some(previous) = inner.highlight_task.take() {
            previous.cancel();
        }
        let enabled = state == ToggleState::Closed;
        let weak = Rc::downgrade(&self.shared);
        inner.highlight_task =
            self.runtime
                .post_delayed(inner.config.highlight_delay_millis, move || {
                    let Some(shared) = weak.upgrade() else {
                        return;
                    };
                    let Ok(mut inner) = shared.inner.try_borrow_mut() else {
                        return;
                    };
                    inner.highlight_task = None;
                    inner.surface.set_highlight(enabled);
                });
    }

    // ── Frames & layout ────────────────────────────────────────────────

    /// Advances the settle animation by one frame.
    ///
    /// Call once per render pass; keep scheduling passes while this returns
    /// `true`. With `redraw` set, each unfinished frame requests exactly one
    /// redraw.
    pub fn continue_settling(&self, redraw: bool) -> bool {
        let mut guard = self.shared.inner.borrow_mut();
        let inner = &mut *guard;
        if !inner.animator.is_settling() {
            inner.finish_settling_if_idle();
            return false;
        }

        let now = inner.clock.now_nanos();
        let frame = inner.animator.tick(now);
        let moved = frame.position != inner.block_position;
        inner.move_block(frame.position);
        log::trace!(
            "settle frame at {:?} (finished: {})",
            frame.position,
            frame.finished
        );

        if frame.finished {
            if redraw && moved {
                inner.surface.request_redraw();
            }
            inner.finish_settling_if_idle();
            return false;
        }
        if redraw {
            inner.surface.request_redraw();
        }
        true
    }

    /// Layout pass from the host. Re-measures the track when `changed` and
    /// places the block for the current geometry.
    pub fn on_layout(&self, changed: bool) {
        self.shared.layout_pass.set(LayoutPass::InProgress);
        {
            let mut inner = self.shared.inner.borrow_mut();
            if changed {
                inner.remeasure();
            }
            inner.place_block();
        }
        self.shared.layout_pass.set(LayoutPass::Idle);
    }

    /// Forwards a layout request to the surface unless a layout pass is
    /// already running.
    pub fn request_layout(&self) {
        if self.shared.layout_pass.get() == LayoutPass::InProgress {
            log::trace!("layout request dropped during layout pass");
            return;
        }
        match self.shared.inner.try_borrow_mut() {
            Ok(mut inner) => inner.surface.request_layout(),
            Err(_) => log::trace!("layout request dropped: toggle busy"),
        }
    }

    // ── Configuration ──────────────────────────────────────────────────

    /// Edits the configuration in place. Geometry is recomputed and the block
    /// re-clamped; an invalid result leaves the old configuration active.
    ///
    /// `update` must not call back into this toggle.
    pub fn reconfigure(
        &self,
        update: impl FnOnce(&mut SlideToggleConfig),
    ) -> Result<(), ConfigError> {
        {
            let mut inner = self.shared.inner.borrow_mut();
            let mut config = inner.config.clone();
            update(&mut config);
            config.validate()?;
            inner.apply_config(config);
        }
        self.request_layout();
        Ok(())
    }

    /// Replaces the text of the current state and shows it.
    pub fn update_display_text(&self, text: impl Into<String>) {
        let text = text.into();
        let mut inner = self.shared.inner.borrow_mut();
        inner.surface.set_display_text(&text);
        match inner.machine.state() {
            ToggleState::Open => inner.config.open_text = Some(text),
            ToggleState::Closed => inner.config.close_text = Some(text),
        }
    }
}

#[cfg(test)]
#[path = "tests/slide_toggle_tests.rs"]
mod tests;

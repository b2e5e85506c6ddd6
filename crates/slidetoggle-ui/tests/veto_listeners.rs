//! Veto listeners, lifecycle gating and programmatic toggles.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use slidetoggle_testing::{immediate_veto, ManualVeto, ToggleHarness};
use slidetoggle_ui::{
    Lifecycle, Point, SlideToggleConfig, ToggleState, TransitionError,
};

const MIN_LEFT: f32 = 1.0;
const MAX_LEFT: f32 = 101.0;

fn harness() -> ToggleHarness {
    let config = SlideToggleConfig::default()
        .with_open_text("on")
        .with_close_text("off");
    ToggleHarness::new(config).unwrap()
}

fn record_states(harness: &ToggleHarness) -> Rc<RefCell<Vec<ToggleState>>> {
    let states = Rc::new(RefCell::new(Vec::new()));
    let sink = states.clone();
    harness
        .toggle()
        .set_on_state_changed(move |state| sink.borrow_mut().push(state));
    states
}

/// Spawns `toggle()` on the runtime and exposes its result.
fn spawn_toggle(harness: &ToggleHarness) -> Rc<Cell<Option<bool>>> {
    let result = Rc::new(Cell::new(None));
    let sink = result.clone();
    let toggle = harness.toggle().toggle();
    harness
        .runtime()
        .spawn_ui(async move { sink.set(Some(toggle.await)) })
        .unwrap();
    result
}

#[test]
fn block_stays_at_release_while_veto_pending() {
    let harness = harness();
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    harness.drag_by(40.0);
    assert!(harness.toggle().is_veto_pending());
    harness.pump();
    assert_eq!(veto.times_asked(), 1);
    assert_eq!(harness.settle(), 0);
    assert_eq!(harness.toggle().block_position(), Point::new(41.0, 1.0));
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
    assert_eq!(harness.surface().display_text().as_deref(), Some("off"));
}

#[test]
fn vetoed_open_returns_to_closed_edge() {
    let harness = harness();
    let states = record_states(&harness);
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    harness.drag_by(40.0);
    harness.pump();
    assert!(veto.block());
    harness.settle();

    assert_eq!(harness.toggle().state(), ToggleState::Closed);
    assert_eq!(harness.toggle().block_position(), Point::new(MIN_LEFT, 1.0));
    assert!(!harness.toggle().is_veto_pending());
    assert!(states.borrow().is_empty());
    assert_eq!(harness.surface().display_text().as_deref(), Some("off"));
}

#[test]
fn allowed_open_commits_after_listener_resolves() {
    let harness = harness();
    let states = record_states(&harness);
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    harness.drag_by(40.0);
    harness.pump();
    assert!(states.borrow().is_empty());

    assert!(veto.allow());
    harness.settle();

    assert_eq!(harness.toggle().state(), ToggleState::Open);
    assert_eq!(harness.toggle().block_position(), Point::new(MAX_LEFT, 1.0));
    assert_eq!(*states.borrow(), vec![ToggleState::Open]);
    assert_eq!(harness.surface().display_text().as_deref(), Some("on"));
}

#[test]
fn veto_wins_regardless_of_displacement() {
    for displacement in [10.0, 55.0, 100.0, 400.0] {
        let harness = harness();
        harness.toggle().set_on_open_before(immediate_veto(true));
        harness.drag_by(displacement);
        harness.settle();
        assert_eq!(harness.toggle().state(), ToggleState::Closed);
        assert_eq!(harness.toggle().block_position().x, MIN_LEFT);
    }
}

#[test]
fn vetoed_close_returns_to_open_edge() {
    let harness = harness();
    harness.drag_by(60.0);
    harness.settle();
    assert_eq!(harness.toggle().state(), ToggleState::Open);

    let veto = ManualVeto::new();
    harness.toggle().set_on_close_before(veto.listener());
    harness.drag_by(-60.0);
    assert_eq!(harness.toggle().block_position().x, 41.0);
    harness.pump();
    veto.block();
    harness.settle();

    assert_eq!(harness.toggle().state(), ToggleState::Open);
    assert_eq!(harness.toggle().block_position().x, MAX_LEFT);
}

#[test]
fn press_is_refused_while_veto_pending() {
    let harness = harness();
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());
    harness.drag_by(40.0);
    harness.pump();

    let center = harness.block_center();
    assert!(!harness.press_at(9, center));
    assert!(matches!(
        harness.toggle().try_toggle(),
        Err(TransitionError::VetoPending)
    ));
    assert_eq!(veto.times_asked(), 1);
}

#[test]
fn paused_host_defers_veto_until_resumed() {
    let harness = harness();
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    harness.set_lifecycle(Lifecycle::Paused);
    harness.drag_by(40.0);
    harness.pump();
    assert_eq!(veto.times_asked(), 0);
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
    assert!(harness.toggle().is_veto_pending());

    harness.set_lifecycle(Lifecycle::Resumed);
    harness.pump();
    assert_eq!(veto.times_asked(), 1);
    assert!(veto.allow());
    harness.pump();
    assert_eq!(harness.toggle().state(), ToggleState::Open);
}

#[test]
fn listener_never_runs_while_paused_then_destroyed() {
    let harness = harness();
    let asked = Rc::new(Cell::new(0));
    let counter = asked.clone();
    harness.toggle().set_on_open_before(move || {
        counter.set(counter.get() + 1);
        std::future::ready(false)
    });

    harness.set_lifecycle(Lifecycle::Paused);
    harness.drag_by(60.0);
    harness.pump();
    harness.set_lifecycle(Lifecycle::Destroyed);

    assert_eq!(asked.get(), 0);
    assert!(!harness.toggle().is_veto_pending());
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
}

#[test]
fn destroyed_host_abandons_pending_transition() {
    let harness = harness();
    let states = record_states(&harness);
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    harness.drag_by(40.0);
    harness.pump();
    let calls_before = harness.surface().calls().len();

    harness.set_lifecycle(Lifecycle::Destroyed);
    assert_eq!(veto.abandoned(), 1);
    assert!(!harness.toggle().is_veto_pending());
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
    assert_eq!(harness.surface().calls().len(), calls_before);
    assert!(states.borrow().is_empty());

    assert!(!veto.allow());
    harness.pump();
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
}

#[test]
fn programmatic_toggle_without_listener_commits_immediately() {
    let harness = harness();
    let states = record_states(&harness);

    let result = spawn_toggle(&harness);
    assert_eq!(harness.toggle().state(), ToggleState::Open);
    harness.pump();
    assert_eq!(result.get(), Some(true));
    harness.settle();

    assert_eq!(harness.toggle().block_position().x, MAX_LEFT);
    assert_eq!(*states.borrow(), vec![ToggleState::Open]);
}

#[test]
fn programmatic_toggle_reports_veto() {
    let harness = harness();
    let states = record_states(&harness);
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    let result = spawn_toggle(&harness);
    harness.pump();
    assert_eq!(result.get(), None);

    veto.block();
    harness.pump();
    assert_eq!(result.get(), Some(false));
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
    assert!(!harness.toggle().is_settling());
    assert!(states.borrow().is_empty());
}

#[test]
fn programmatic_toggle_commits_after_allow() {
    let harness = harness();
    let states = record_states(&harness);
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    let result = spawn_toggle(&harness);
    harness.pump();
    veto.allow();
    harness.pump();

    assert_eq!(result.get(), Some(true));
    assert_eq!(harness.toggle().state(), ToggleState::Open);
    assert_eq!(*states.borrow(), vec![ToggleState::Open]);
}

#[test]
fn dropping_toggle_future_releases_pending_transition() {
    let harness = harness();
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    let pending = harness.toggle().toggle();
    assert!(harness.toggle().is_veto_pending());
    drop(pending);

    assert!(!harness.toggle().is_veto_pending());
    assert_eq!(veto.times_asked(), 0);
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
}

#[test]
fn spawned_toggle_dropped_after_asking_counts_as_abandoned() {
    let harness = harness();
    let veto = ManualVeto::new();
    harness.toggle().set_on_open_before(veto.listener());

    let _ = spawn_toggle(&harness);
    harness.pump();
    assert_eq!(veto.times_asked(), 1);

    harness.set_lifecycle(Lifecycle::Destroyed);
    assert_eq!(veto.abandoned(), 1);
    assert!(!harness.toggle().is_veto_pending());
}

#[test]
fn future_dropped_while_toggle_busy_is_released_on_next_drain() {
    let harness = harness();
    harness.toggle().set_on_open_before(immediate_veto(false));

    let pending = harness.toggle().toggle();
    harness.toggle().with_surface_mut(|_| drop(pending));
    assert!(harness.toggle().is_veto_pending());

    harness.pump();
    assert!(!harness.toggle().is_veto_pending());
    assert_eq!(harness.toggle().state(), ToggleState::Closed);
    let center = harness.block_center();
    assert!(harness.press_at(7, center));
}

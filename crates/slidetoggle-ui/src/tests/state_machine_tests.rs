use super::*;

#[test]
fn closed_release_commits_at_remain_distance() {
    for displacement in 0..=100 {
        let decision = decide_release(ToggleState::Closed, displacement as f32, 100.0, 10.0);
        if displacement >= 10 {
            assert_eq!(decision, ReleaseDecision::Commit(ToggleState::Open));
        } else {
            assert_eq!(decision, ReleaseDecision::Revert(ToggleState::Closed));
        }
    }
}

#[test]
fn open_release_commits_when_far_enough_from_right_edge() {
    for displacement in 0..=100 {
        let decision = decide_release(ToggleState::Open, displacement as f32, 100.0, 10.0);
        if 100 - displacement >= 10 {
            assert_eq!(decision, ReleaseDecision::Commit(ToggleState::Closed));
        } else {
            assert_eq!(decision, ReleaseDecision::Revert(ToggleState::Open));
        }
    }
}

#[test]
fn state_side_encoding() {
    assert_eq!(ToggleState::Closed.side(), 0);
    assert_eq!(ToggleState::Open.side(), 1);
    assert_eq!(ToggleState::Closed.toggled(), ToggleState::Open);
}

#[test]
fn commit_flips_state_only_on_resolve() {
    let mut machine = ToggleStateMachine::new(10.0);
    let pending = machine.begin_transition(Some(15.0)).unwrap();
    assert_eq!(pending.from, ToggleState::Closed);
    assert_eq!(pending.requested, ToggleState::Open);
    assert_eq!(machine.state(), ToggleState::Closed);
    assert!(machine.is_veto_pending());

    assert_eq!(
        machine.resolve(&pending, false),
        Some(TransitionOutcome::Committed(ToggleState::Open))
    );
    assert_eq!(machine.state(), ToggleState::Open);
    assert!(!machine.is_veto_pending());
}

#[test]
fn veto_keeps_state() {
    let mut machine = ToggleStateMachine::new(10.0);
    let pending = machine.begin_transition(None).unwrap();
    assert_eq!(
        machine.resolve(&pending, true),
        Some(TransitionOutcome::Vetoed(ToggleState::Closed))
    );
    assert_eq!(machine.state(), ToggleState::Closed);
}

#[test]
fn only_one_transition_in_flight() {
    let mut machine = ToggleStateMachine::new(10.0);
    let _pending = machine.begin_transition(None).unwrap();
    assert_eq!(
        machine.begin_transition(None),
        Err(TransitionError::VetoPending)
    );
}

#[test]
fn force_close_supersedes_pending_transition() {
    let mut machine = ToggleStateMachine::new(10.0);
    let open = machine.begin_transition(None).unwrap();
    machine.resolve(&open, false);

    let close = machine.begin_transition(Some(50.0)).unwrap();
    assert!(machine.force_close());
    assert_eq!(machine.state(), ToggleState::Closed);
    assert!(!machine.is_veto_pending());
    assert_eq!(machine.resolve(&close, false), None);
    assert!(!machine.abandon(close.generation()));
}

#[test]
fn force_close_when_closed_is_noop() {
    let mut machine = ToggleStateMachine::new(10.0);
    assert!(!machine.force_close());
    assert_eq!(machine.state(), ToggleState::Closed);
}

#[test]
fn abandon_releases_matching_transition_only() {
    let mut machine = ToggleStateMachine::new(10.0);
    let pending = machine.begin_transition(None).unwrap();
    assert!(!machine.abandon(pending.generation() + 1));
    assert!(machine.is_veto_pending());
    assert!(machine.abandon(pending.generation()));
    assert!(!machine.is_veto_pending());
    assert_eq!(machine.state(), ToggleState::Closed);
}

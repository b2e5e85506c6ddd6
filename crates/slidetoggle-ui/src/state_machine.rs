//! Logical open/closed state and the veto-able transitions between them.
//!
//! The machine never moves the block itself. It decides where a release
//! should settle, tracks the single transition that may be waiting on a veto
//! listener, and flips the logical state only when that transition commits.

/// Logical state of the toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleState {
    #[default]
    Closed,
    Open,
}

impl ToggleState {
    pub fn toggled(self) -> Self {
        match self {
            ToggleState::Closed => ToggleState::Open,
            ToggleState::Open => ToggleState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, ToggleState::Open)
    }

    /// Resting side of the block: 0 for left (closed), 1 for right (open).
    pub fn side(self) -> u8 {
        match self {
            ToggleState::Closed => 0,
            ToggleState::Open => 1,
        }
    }
}

/// What a finished drag asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseDecision {
    /// Travel was sufficient: try to switch to the given state.
    Commit(ToggleState),
    /// Travel was too short: settle back to the edge of the given (current) state.
    Revert(ToggleState),
}

impl ReleaseDecision {
    pub fn target(self) -> ToggleState {
        match self {
            ReleaseDecision::Commit(state) | ReleaseDecision::Revert(state) => state,
        }
    }
}

/// Decides a release from the block's displacement off the closed edge.
pub fn decide_release(
    current: ToggleState,
    displacement: f32,
    slide_total: f32,
    remain_distance: f32,
) -> ReleaseDecision {
    match current {
        ToggleState::Closed if displacement >= remain_distance => {
            ReleaseDecision::Commit(ToggleState::Open)
        }
        ToggleState::Open if slide_total - displacement >= remain_distance => {
            ReleaseDecision::Commit(ToggleState::Closed)
        }
        _ => ReleaseDecision::Revert(current),
    }
}

/// A transition waiting for its veto listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingTransition {
    pub from: ToggleState,
    pub requested: ToggleState,
    /// Displacement at release; `None` for programmatic toggles.
    pub release_displacement: Option<f32>,
    generation: u64,
}

impl PendingTransition {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// How a pending transition ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    Committed(ToggleState),
    /// The listener blocked the change; the state stays as given.
    Vetoed(ToggleState),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionError {
    /// Another transition is still waiting on its veto listener.
    VetoPending,
    /// A pointer is pressing or dragging the block.
    GestureActive,
}

impl std::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransitionError::VetoPending => write!(f, "a transition is awaiting its veto listener"),
            TransitionError::GestureActive => write!(f, "a gesture is driving the block"),
        }
    }
}

impl std::error::Error for TransitionError {}

#[derive(Debug)]
pub struct ToggleStateMachine {
    state: ToggleState,
    remain_distance: f32,
    pending: Option<PendingTransition>,
    generation: u64,
}

impl ToggleStateMachine {
    pub fn new(remain_distance: f32) -> Self {
        Self {
            state: ToggleState::Closed,
            remain_distance,
            pending: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn remain_distance(&self) -> f32 {
        self.remain_distance
    }

    pub fn set_remain_distance(&mut self, remain_distance: f32) {
        self.remain_distance = remain_distance;
    }

    pub fn pending(&self) -> Option<PendingTransition> {
        self.pending
    }

    pub fn is_veto_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn on_released(&self, displacement: f32, slide_total: f32) -> ReleaseDecision {
        let decision = decide_release(self.state, displacement, slide_total, self.remain_distance);
        log::debug!(
            "release at {displacement} of {slide_total} while {:?}: {decision:?}",
            self.state
        );
        decision
    }

    /// Opens a transition to the opposite state. Only one may be in flight.
    pub fn begin_transition(
        &mut self,
        release_displacement: Option<f32>,
    ) -> Result<PendingTransition, TransitionError> {
        if self.pending.is_some() {
            return Err(TransitionError::VetoPending);
        }
        self.generation = self.generation.wrapping_add(1);
        let pending = PendingTransition {
            from: self.state,
            requested: self.state.toggled(),
            release_displacement,
            generation: self.generation,
        };
        self.pending = Some(pending);
        Ok(pending)
    }

    /// Applies the listener's verdict. Returns `None` for a transition that
    /// was superseded or abandoned in the meantime.
    pub fn resolve(
        &mut self,
        transition: &PendingTransition,
        vetoed: bool,
    ) -> Option<TransitionOutcome> {
        match self.pending {
            Some(pending) if pending.generation == transition.generation => {}
            _ => {
                log::debug!("ignoring stale transition {:?}", transition);
                return None;
            }
        }
        self.pending = None;
        if vetoed {
            log::debug!("transition to {:?} vetoed", transition.requested);
            Some(TransitionOutcome::Vetoed(self.state))
        } else {
            self.state = transition.requested;
            log::debug!("committed {:?}", self.state);
            Some(TransitionOutcome::Committed(self.state))
        }
    }

    /// Drops the pending transition with `generation` without touching state.
    pub fn abandon(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(pending) if pending.generation == generation => {
                log::debug!("abandoned transition to {:?}", pending.requested);
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    /// Closes without consulting any listener, superseding a pending
    /// transition. Returns `false` when already closed.
    pub fn force_close(&mut self) -> bool {
        if self.state == ToggleState::Closed {
            return false;
        }
        if let Some(pending) = self.pending.take() {
            log::debug!("reset supersedes transition to {:?}", pending.requested);
        }
        self.generation = self.generation.wrapping_add(1);
        self.state = ToggleState::Closed;
        log::debug!("reset to {:?}", self.state);
        true
    }
}

#[cfg(test)]
#[path = "tests/state_machine_tests.rs"]
mod tests;

//! Lifecycle of the "hold your hand up" call-to-action.
//!
//! The machine itself is pure: [`transition`] plus two predicates. Timers
//! and the buffered start live in [`CtaController`].

mod controller;

pub use controller::{CtaController, CtaTask, CtaTimings, CtaView};

use crate::constants::{CTA_COMPLETE_TEXT, CTA_HOLD_TEXT, CTA_PROMPT_TEXT};
use crate::gesture::HoldEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CtaState {
    Entering,
    Idle,
    Holding,
    Completing,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CtaEvent {
    EnterDone,
    Start,
    Cancel,
    Complete,
    ExitDone,
}

impl CtaState {
    pub const ALL: [CtaState; 5] = [
        CtaState::Entering,
        CtaState::Idle,
        CtaState::Holding,
        CtaState::Completing,
        CtaState::Hidden,
    ];

    pub fn next(self, event: CtaEvent) -> CtaState {
        transition(self, event)
    }

    pub fn can_start(self) -> bool {
        can_start_cta(self)
    }

    pub fn should_queue_start(self) -> bool {
        should_queue_start_cta(self)
    }

    pub fn phase(self) -> CtaPhase {
        match self {
            CtaState::Holding => CtaPhase::Hold,
            CtaState::Completing => CtaPhase::Complete,
            CtaState::Entering | CtaState::Idle | CtaState::Hidden => CtaPhase::Prompt,
        }
    }
}

impl CtaEvent {
    pub const ALL: [CtaEvent; 5] = [
        CtaEvent::EnterDone,
        CtaEvent::Start,
        CtaEvent::Cancel,
        CtaEvent::Complete,
        CtaEvent::ExitDone,
    ];
}

impl From<HoldEvent> for CtaEvent {
    fn from(ev: HoldEvent) -> Self {
        match ev {
            HoldEvent::Start => CtaEvent::Start,
            HoldEvent::Cancel => CtaEvent::Cancel,
            HoldEvent::Complete => CtaEvent::Complete,
        }
    }
}

/// Unlisted (state, event) pairs leave the state unchanged.
pub fn transition(state: CtaState, event: CtaEvent) -> CtaState {
    use CtaEvent as E;
    use CtaState as S;
    match (state, event) {
        (S::Entering, E::EnterDone) => S::Idle,
        (S::Idle | S::Holding, E::Start) => S::Holding,
        (S::Idle | S::Holding, E::Cancel) => S::Idle,
        (S::Idle | S::Holding, E::Complete) => S::Completing,
        (S::Completing, E::ExitDone) => S::Hidden,
        (s, _) => s,
    }
}

pub fn can_start_cta(state: CtaState) -> bool {
    matches!(state, CtaState::Entering | CtaState::Idle | CtaState::Holding)
}

/// A START seen while entering must be replayed after ENTER_DONE.
pub fn should_queue_start_cta(state: CtaState) -> bool {
    state == CtaState::Entering
}

/// What the widget says; a coarser projection of [`CtaState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaPhase {
    Prompt,
    Hold,
    Complete,
}

impl CtaPhase {
    pub fn text(self) -> &'static str {
        match self {
            CtaPhase::Prompt => CTA_PROMPT_TEXT,
            CtaPhase::Hold => CTA_HOLD_TEXT,
            CtaPhase::Complete => CTA_COMPLETE_TEXT,
        }
    }
}

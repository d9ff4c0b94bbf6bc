use handfield_core::cta::{can_start_cta, should_queue_start_cta, transition};
use handfield_core::*;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Phase(CtaPhase),
    Fade(f32, f64),
    Progress(f32, f64),
    Check(bool),
    Displayed(bool),
}

#[derive(Default)]
struct RecordingView {
    calls: Vec<Call>,
}

impl RecordingView {
    fn last_phase(&self) -> Option<CtaPhase> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Phase(p) => Some(*p),
            _ => None,
        })
    }

    fn displayed(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Displayed(d) => Some(*d),
            _ => None,
        })
    }

    fn check_visible(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::Check(v) => Some(*v),
            _ => None,
        })
    }
}

impl CtaView for RecordingView {
    fn show_phase(&mut self, phase: CtaPhase) {
        self.calls.push(Call::Phase(phase));
    }
    fn fade_to(&mut self, opacity: f32, secs: f64) {
        self.calls.push(Call::Fade(opacity, secs));
    }
    fn progress_to(&mut self, fraction: f32, secs: f64) {
        self.calls.push(Call::Progress(fraction, secs));
    }
    fn set_check_visible(&mut self, visible: bool) {
        self.calls.push(Call::Check(visible));
    }
    fn set_displayed(&mut self, displayed: bool) {
        self.calls.push(Call::Displayed(displayed));
    }
}

fn expected(state: CtaState, event: CtaEvent) -> Option<CtaState> {
    use CtaEvent as E;
    use CtaState as S;
    match (state, event) {
        (S::Entering, E::EnterDone) => Some(S::Idle),
        (S::Idle, E::Start) | (S::Holding, E::Start) => Some(S::Holding),
        (S::Idle, E::Cancel) | (S::Holding, E::Cancel) => Some(S::Idle),
        (S::Idle, E::Complete) | (S::Holding, E::Complete) => Some(S::Completing),
        (S::Completing, E::ExitDone) => Some(S::Hidden),
        _ => None,
    }
}

#[test]
fn transition_table_is_total() {
    for state in CtaState::ALL {
        for event in CtaEvent::ALL {
            let next = transition(state, event);
            match expected(state, event) {
                Some(to) => assert_eq!(next, to, "{state:?} + {event:?}"),
                None => assert_eq!(next, state, "{state:?} + {event:?} should be ignored"),
            }
        }
    }
}

#[test]
fn full_lifecycle_reaches_hidden() {
    let mut s = CtaState::Entering;
    for (event, to) in [
        (CtaEvent::EnterDone, CtaState::Idle),
        (CtaEvent::Start, CtaState::Holding),
        (CtaEvent::Complete, CtaState::Completing),
        (CtaEvent::ExitDone, CtaState::Hidden),
    ] {
        s = s.next(event);
        assert_eq!(s, to);
    }
}

#[test]
fn hidden_is_terminal() {
    for event in CtaEvent::ALL {
        assert_eq!(transition(CtaState::Hidden, event), CtaState::Hidden);
    }
}

#[test]
fn start_predicates() {
    for state in CtaState::ALL {
        let can = matches!(
            state,
            CtaState::Entering | CtaState::Idle | CtaState::Holding
        );
        assert_eq!(can_start_cta(state), can, "{state:?}");
        assert_eq!(
            should_queue_start_cta(state),
            state == CtaState::Entering,
            "{state:?}"
        );
    }
}

#[test]
fn phases_carry_fixed_copy() {
    assert_eq!(CtaState::Idle.phase().text(), "Please raise a finger to the camera");
    assert_eq!(CtaState::Holding.phase().text(), "Hold");
    assert_eq!(CtaState::Completing.phase().text(), "Complete");
}

#[test]
fn mount_fades_in_then_goes_idle() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    assert_eq!(ctl.state(), CtaState::Entering);
    assert_eq!(view.displayed(), Some(true));
    assert_eq!(view.last_phase(), Some(CtaPhase::Prompt));
    assert!(view.calls.contains(&Call::Fade(1.0, 0.35)));
    assert_eq!(ctl.pending_timers(), 1);

    ctl.tick(0.2, &mut view);
    assert_eq!(ctl.state(), CtaState::Entering);
    ctl.tick(0.35, &mut view);
    assert_eq!(ctl.state(), CtaState::Idle);
    assert_eq!(ctl.pending_timers(), 0);
}

#[test]
fn start_during_entry_is_replayed_after_enter_done() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.handle(HoldEvent::Start, 0.1, &mut view);
    assert_eq!(ctl.state(), CtaState::Entering);
    assert_eq!(ctl.buffered(), Some(CtaEvent::Start));

    ctl.tick(0.4, &mut view);
    assert_eq!(ctl.state(), CtaState::Holding);
    assert_eq!(ctl.buffered(), None);
    assert_eq!(view.last_phase(), Some(CtaPhase::Hold));
    assert!(view.calls.contains(&Call::Progress(1.0, 1.0)));
}

#[test]
fn cancel_during_entry_drops_buffered_start() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.handle(HoldEvent::Start, 0.1, &mut view);
    ctl.handle(HoldEvent::Cancel, 0.2, &mut view);
    assert_eq!(ctl.buffered(), None);
    ctl.tick(0.4, &mut view);
    assert_eq!(ctl.state(), CtaState::Idle);
}

#[test]
fn complete_during_entry_replaces_buffered_start() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.handle(HoldEvent::Start, 0.1, &mut view);
    ctl.handle(HoldEvent::Complete, 0.3, &mut view);
    assert_eq!(ctl.buffered(), Some(CtaEvent::Complete));
    ctl.tick(0.4, &mut view);
    assert_eq!(ctl.state(), CtaState::Completing);
    assert_eq!(view.check_visible(), Some(true));
}

#[test]
fn complete_hides_after_delay_and_exit_fade() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.tick(0.5, &mut view);
    ctl.handle(HoldEvent::Start, 1.0, &mut view);
    ctl.handle(HoldEvent::Complete, 2.0, &mut view);
    assert_eq!(ctl.state(), CtaState::Completing);
    assert_eq!(view.last_phase(), Some(CtaPhase::Complete));
    assert_eq!(view.check_visible(), Some(true));
    assert_eq!(ctl.pending_timers(), 1);

    ctl.tick(2.5, &mut view);
    assert_eq!(ctl.state(), CtaState::Completing);
    ctl.tick(2.75, &mut view);
    assert!(view.calls.contains(&Call::Fade(0.0, 0.25)));
    assert_eq!(ctl.state(), CtaState::Completing);

    ctl.tick(2.9, &mut view);
    assert_eq!(ctl.state(), CtaState::Completing);
    ctl.tick(3.1, &mut view);
    assert_eq!(ctl.state(), CtaState::Hidden);
    assert_eq!(view.displayed(), Some(false));
    assert_eq!(ctl.pending_timers(), 0);
    assert!(!ctl.accepts_hold_input());
}

#[test]
fn hold_events_after_complete_are_ignored() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.tick(0.5, &mut view);
    ctl.handle(HoldEvent::Complete, 1.0, &mut view);
    let calls = view.calls.len();
    ctl.handle(HoldEvent::Start, 1.1, &mut view);
    ctl.handle(HoldEvent::Cancel, 1.2, &mut view);
    assert_eq!(ctl.state(), CtaState::Completing);
    assert_eq!(view.calls.len(), calls);
    // The auto-hide is still pending.
    assert_eq!(ctl.pending_timers(), 1);
}

#[test]
fn cancel_returns_to_prompt() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.tick(0.5, &mut view);
    ctl.handle(HoldEvent::Start, 1.0, &mut view);
    ctl.handle(HoldEvent::Cancel, 1.5, &mut view);
    assert_eq!(ctl.state(), CtaState::Idle);
    assert_eq!(view.last_phase(), Some(CtaPhase::Prompt));
    assert!(view.calls.contains(&Call::Progress(0.0, 0.12)));
    assert!(view.calls.contains(&Call::Fade(1.0, 0.08)));
}

#[test]
fn teardown_cancels_every_timer() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.handle(HoldEvent::Start, 0.1, &mut view);
    ctl.teardown();
    assert_eq!(ctl.pending_timers(), 0);
    assert_eq!(ctl.buffered(), None);

    let calls = view.calls.len();
    ctl.tick(10.0, &mut view);
    ctl.handle(HoldEvent::Complete, 10.0, &mut view);
    assert_eq!(ctl.state(), CtaState::Entering);
    assert_eq!(view.calls.len(), calls);
}

#[test]
fn teardown_while_completing_stops_auto_hide() {
    let mut view = RecordingView::default();
    let mut ctl = CtaController::mount(0.0, CtaTimings::default(), &mut view);
    ctl.tick(0.5, &mut view);
    ctl.handle(HoldEvent::Complete, 1.0, &mut view);
    ctl.teardown();
    ctl.tick(5.0, &mut view);
    assert_eq!(ctl.state(), CtaState::Completing);
    assert_eq!(view.displayed(), Some(true));
}

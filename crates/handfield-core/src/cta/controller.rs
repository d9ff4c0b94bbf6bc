use super::{transition, CtaEvent, CtaPhase, CtaState};
use crate::constants::{
    CTA_CANCEL_REVEAL_SEC, CTA_ENTER_FADE_SEC, CTA_EXIT_FADE_SEC, CTA_HIDE_DELAY_SEC,
    CTA_HOLD_BAR_SEC, CTA_QUICK_FADE_SEC,
};
use crate::gesture::HoldEvent;
use crate::schedule::{Scheduler, TimerSlot};

/// Presentation side of the CTA widget. Implementations animate; the
/// controller only says what to animate and for how long.
pub trait CtaView {
    fn show_phase(&mut self, phase: CtaPhase);
    /// Animate overall opacity to `opacity` over `secs` (0 = immediately).
    fn fade_to(&mut self, opacity: f32, secs: f64);
    /// Animate the hold bar to `fraction` of its width over `secs`.
    fn progress_to(&mut self, fraction: f32, secs: f64);
    fn set_check_visible(&mut self, visible: bool);
    /// Whether the widget takes part in layout at all.
    fn set_displayed(&mut self, displayed: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaTask {
    EnterFaded,
    HideDelayElapsed,
    ExitFaded,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CtaTimings {
    pub enter_fade: f64,
    pub hold_bar: f64,
    pub quick_fade: f64,
    pub cancel_reveal: f64,
    pub hide_delay: f64,
    pub exit_fade: f64,
}

impl Default for CtaTimings {
    fn default() -> Self {
        Self {
            enter_fade: CTA_ENTER_FADE_SEC,
            hold_bar: CTA_HOLD_BAR_SEC,
            quick_fade: CTA_QUICK_FADE_SEC,
            cancel_reveal: CTA_CANCEL_REVEAL_SEC,
            hide_delay: CTA_HIDE_DELAY_SEC,
            exit_fade: CTA_EXIT_FADE_SEC,
        }
    }
}

/// Owns the CTA state, the input buffered during the entry animation and
/// every timer the widget needs.
///
/// The entry fade and the hold bar share the widget's animation, so a hold
/// event that arrives while entering is kept in a one-slot buffer and
/// replayed once the entry fade completes. CANCEL empties the slot; START or
/// COMPLETE overwrite it.
///
/// The transition table alone would drop a COMPLETE seen while entering.
/// The detector latches after COMPLETE and never repeats it, so dropping it
/// would leave a replayed START holding forever. Buffering it instead lets a
/// hold shorter than the entry fade still finish the prompt.
#[derive(Debug)]
pub struct CtaController {
    state: CtaState,
    buffered: Option<CtaEvent>,
    timings: CtaTimings,
    scheduler: Scheduler<CtaTask>,
    enter_timer: TimerSlot,
    hide_timer: TimerSlot,
    exit_timer: TimerSlot,
    torn_down: bool,
}

impl CtaController {
    /// Put the widget on screen and start the entry fade.
    pub fn mount<V: CtaView + ?Sized>(now: f64, timings: CtaTimings, view: &mut V) -> Self {
        view.set_displayed(true);
        view.fade_to(0.0, 0.0);
        view.show_phase(CtaPhase::Prompt);
        view.set_check_visible(false);
        view.progress_to(0.0, 0.0);
        view.fade_to(1.0, timings.enter_fade);

        let mut ctl = Self {
            state: CtaState::Entering,
            buffered: None,
            timings,
            scheduler: Scheduler::new(),
            enter_timer: TimerSlot::default(),
            hide_timer: TimerSlot::default(),
            exit_timer: TimerSlot::default(),
            torn_down: false,
        };
        ctl.enter_timer
            .arm(&mut ctl.scheduler, now + timings.enter_fade, CtaTask::EnterFaded);
        log::debug!("cta mounted, entering until {:.3}", now + timings.enter_fade);
        ctl
    }

    pub fn state(&self) -> CtaState {
        self.state
    }

    pub fn timings(&self) -> &CtaTimings {
        &self.timings
    }

    pub fn buffered(&self) -> Option<CtaEvent> {
        self.buffered
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    pub fn is_hidden(&self) -> bool {
        self.state == CtaState::Hidden
    }

    /// Whether hold events can still change anything.
    pub fn accepts_hold_input(&self) -> bool {
        !self.torn_down && self.state.can_start()
    }

    pub fn handle<V: CtaView + ?Sized>(&mut self, event: HoldEvent, now: f64, view: &mut V) {
        if self.torn_down {
            return;
        }
        if self.state.should_queue_start() {
            self.buffered = match event {
                HoldEvent::Cancel => None,
                HoldEvent::Start | HoldEvent::Complete => Some(event.into()),
            };
            log::debug!("cta entering, buffered {:?}", self.buffered);
            return;
        }
        self.apply(event.into(), now, view);
    }

    /// Fire every timer due at `now`.
    pub fn tick<V: CtaView + ?Sized>(&mut self, now: f64, view: &mut V) {
        if self.torn_down {
            return;
        }
        for (handle, task) in self.scheduler.drain_due(now) {
            log::debug!("cta timer {task:?} fired in {:?}", self.state);
            match task {
                CtaTask::EnterFaded => {
                    self.enter_timer.release(handle);
                    self.state = transition(self.state, CtaEvent::EnterDone);
                    if let Some(ev) = self.buffered.take() {
                        self.apply(ev, now, view);
                    }
                }
                CtaTask::HideDelayElapsed => {
                    self.hide_timer.release(handle);
                    view.fade_to(0.0, self.timings.exit_fade);
                    self.exit_timer.arm(
                        &mut self.scheduler,
                        now + self.timings.exit_fade,
                        CtaTask::ExitFaded,
                    );
                }
                CtaTask::ExitFaded => {
                    self.exit_timer.release(handle);
                    view.set_displayed(false);
                    self.state = transition(self.state, CtaEvent::ExitDone);
                }
            }
        }
    }

    /// Cancel every outstanding timer. The controller is inert afterwards.
    pub fn teardown(&mut self) {
        self.enter_timer.disarm(&mut self.scheduler);
        self.hide_timer.disarm(&mut self.scheduler);
        self.exit_timer.disarm(&mut self.scheduler);
        self.scheduler.cancel_all();
        self.buffered = None;
        self.torn_down = true;
    }

    fn apply<V: CtaView + ?Sized>(&mut self, event: CtaEvent, now: f64, view: &mut V) {
        let next = transition(self.state, event);
        if !matches!(self.state, CtaState::Idle | CtaState::Holding) {
            log::debug!("cta ignored {event:?} in {:?}", self.state);
            return;
        }
        // Any hold event supersedes a pending auto-hide.
        self.hide_timer.disarm(&mut self.scheduler);
        log::debug!("cta {:?} --{event:?}--> {next:?}", self.state);
        self.state = next;

        let t = self.timings;
        match event {
            CtaEvent::Start => {
                view.show_phase(CtaPhase::Hold);
                view.set_displayed(true);
                view.set_check_visible(false);
                view.fade_to(1.0, t.quick_fade);
                view.progress_to(0.0, 0.0);
                view.progress_to(1.0, t.hold_bar);
            }
            CtaEvent::Cancel => {
                view.show_phase(CtaPhase::Prompt);
                view.progress_to(0.0, t.quick_fade);
                view.set_displayed(true);
                view.fade_to(1.0, t.cancel_reveal);
                view.set_check_visible(false);
            }
            CtaEvent::Complete => {
                view.progress_to(1.0, 0.0);
                view.show_phase(CtaPhase::Complete);
                view.set_check_visible(true);
                view.set_displayed(true);
                view.fade_to(1.0, 0.0);
                self.hide_timer.arm(
                    &mut self.scheduler,
                    now + t.hide_delay,
                    CtaTask::HideDelayElapsed,
                );
            }
            CtaEvent::EnterDone | CtaEvent::ExitDone => {}
        }
    }
}

//! Hold-to-continue gesture detection.
//!
//! [`GestureHoldDetector`] turns a per-frame, possibly flickering "hand
//! visible" signal into discrete [`HoldEvent`]s. It owns no timers: every
//! decision is a function of the `now` value handed to [`GestureHoldDetector::tick`]
//! and the current inputs, so tearing it down needs no cleanup.

use crate::constants::{FLICKER_GRACE_SEC, START_DELAY_SEC};

/// Discrete events produced by the detector. A frame yields at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldEvent {
    Start,
    Cancel,
    Complete,
}

/// Per-event subscriber. Every hook defaults to a no-op so callers only
/// implement what they care about.
pub trait HoldListener {
    fn on_start(&mut self) {}
    fn on_cancel(&mut self) {}
    fn on_complete(&mut self) {}
}

impl HoldEvent {
    pub fn dispatch<L: HoldListener + ?Sized>(self, listener: &mut L) {
        match self {
            HoldEvent::Start => listener.on_start(),
            HoldEvent::Cancel => listener.on_cancel(),
            HoldEvent::Complete => listener.on_complete(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoldConfig {
    /// Continuous visibility (seconds) required before COMPLETE.
    pub start_delay: f64,
    /// Longest detection gap (seconds) treated as still visible.
    pub flicker_grace: f64,
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            start_delay: START_DELAY_SEC,
            flicker_grace: FLICKER_GRACE_SEC,
        }
    }
}

/// Mutable hold state. Only [`GestureHoldDetector::tick`] writes to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureSession {
    pub counting_enabled: bool,
    pub is_counting: bool,
    pub tracking_start_time: Option<f64>,
    pub last_seen_time: Option<f64>,
    pub completed_for_this_visibility: bool,
    /// Elapsed hold as reported to observers; clamped to the start delay.
    pub tracked_time: f64,
}

impl GestureSession {
    fn reset(&mut self) {
        self.is_counting = false;
        self.tracking_start_time = None;
        self.last_seen_time = None;
        self.completed_for_this_visibility = false;
        self.tracked_time = 0.0;
    }
}

#[derive(Clone, Debug, Default)]
pub struct GestureHoldDetector {
    pub config: HoldConfig,
    session: GestureSession,
}

impl GestureHoldDetector {
    pub fn new(config: HoldConfig) -> Self {
        Self {
            config,
            session: GestureSession::default(),
        }
    }

    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    pub fn is_counting(&self) -> bool {
        self.session.is_counting
    }

    pub fn tracked_time(&self) -> f64 {
        self.session.tracked_time
    }

    /// Hold progress in whole percent, 0..=100.
    pub fn progress_percent(&self) -> u8 {
        if self.config.start_delay <= 0.0 {
            return if self.session.completed_for_this_visibility { 100 } else { 0 };
        }
        let pct = (self.session.tracked_time / self.config.start_delay * 100.0).round();
        pct.clamp(0.0, 100.0) as u8
    }

    /// Advance one frame.
    ///
    /// A START and a COMPLETE never share a tick: the frame that starts a
    /// hold only starts it, completion is checked from the next frame on.
    pub fn tick(&mut self, now: f64, visible: bool, counting_enabled: bool) -> Option<HoldEvent> {
        let s = &mut self.session;
        s.counting_enabled = counting_enabled;

        if !counting_enabled {
            let was_counting = s.is_counting;
            s.reset();
            if was_counting {
                log::debug!("hold cancelled: counting disabled");
                return Some(HoldEvent::Cancel);
            }
            return None;
        }

        if visible {
            s.last_seen_time = Some(now);

            if !s.is_counting && !s.completed_for_this_visibility {
                s.is_counting = true;
                s.tracking_start_time = Some(now);
                s.tracked_time = 0.0;
                log::debug!("hold started at {now:.3}");
                return Some(HoldEvent::Start);
            }

            if let Some(start) = s.tracking_start_time.filter(|_| s.is_counting) {
                let elapsed = now - start;
                s.tracked_time = elapsed.max(0.0);
                if elapsed >= self.config.start_delay {
                    s.is_counting = false;
                    s.tracking_start_time = None;
                    s.completed_for_this_visibility = true;
                    s.tracked_time = self.config.start_delay;
                    log::debug!("hold completed after {elapsed:.3}s");
                    return Some(HoldEvent::Complete);
                }
            }
            return None;
        }

        if let Some(seen) = s.last_seen_time {
            if now - seen <= self.config.flicker_grace {
                return None;
            }
        }

        let was_counting = s.is_counting;
        s.reset();
        if was_counting {
            log::debug!("hold cancelled: hand lost");
            Some(HoldEvent::Cancel)
        } else {
            None
        }
    }

    /// [`tick`](Self::tick), then forward any event to `listener`.
    pub fn tick_with<L: HoldListener + ?Sized>(
        &mut self,
        now: f64,
        visible: bool,
        counting_enabled: bool,
        listener: &mut L,
    ) -> Option<HoldEvent> {
        let event = self.tick(now, visible, counting_enabled);
        if let Some(ev) = event {
            ev.dispatch(listener);
        }
        event
    }
}

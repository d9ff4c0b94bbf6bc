//! Wires hold detection into the CTA for the one-time onboarding hint.
//!
//! Per frame the detector runs first and its event, if any, reaches the
//! CTA in the same call. Once the CTA has exited after a completed hold,
//! the shown flag is written and neither part runs again this session.

use crate::constants::{HAND_CTA_SHOWN_VALUE, HAND_CTA_STORAGE_KEY};
use crate::cta::{CtaController, CtaState, CtaTimings, CtaView};
use crate::gesture::{GestureHoldDetector, HoldConfig, HoldEvent};
use crate::persistence::{initial_has_shown, FlagStore};

#[derive(Debug)]
pub struct OnboardingGate<S> {
    persist: bool,
    store: Option<S>,
    key: String,
    has_shown: bool,
    scene_ready: bool,
}

impl<S: FlagStore> OnboardingGate<S> {
    pub fn new(persist: bool, store: Option<S>) -> Self {
        Self::with_key(persist, store, HAND_CTA_STORAGE_KEY)
    }

    pub fn with_key(persist: bool, store: Option<S>, key: &str) -> Self {
        let has_shown = initial_has_shown(persist, store.as_ref(), key);
        if store.is_none() && persist {
            log::info!("no flag store available, hand cta will be shown");
        }
        Self {
            persist,
            store,
            key: key.to_owned(),
            has_shown,
            scene_ready: false,
        }
    }

    pub fn persist(&self) -> bool {
        self.persist
    }

    pub fn has_shown(&self) -> bool {
        self.has_shown
    }

    pub fn scene_ready(&self) -> bool {
        self.scene_ready
    }

    pub fn store(&self) -> Option<&S> {
        self.store.as_ref()
    }

    pub fn set_scene_ready(&mut self) {
        self.scene_ready = true;
    }

    /// The detector and the CTA only run once the scene is up and the hint
    /// has not been shown yet.
    pub fn should_run(&self) -> bool {
        self.scene_ready && !self.has_shown
    }

    /// Record that the hint ran to completion. Store failures are logged
    /// and otherwise ignored.
    pub fn mark_shown(&mut self) {
        if self.has_shown {
            return;
        }
        self.has_shown = true;
        if !self.persist {
            return;
        }
        if let Some(store) = self.store.as_mut() {
            if let Err(e) = store.set_item(&self.key, HAND_CTA_SHOWN_VALUE) {
                log::warn!("could not persist hand cta flag: {e}");
            }
        }
    }
}

#[derive(Debug)]
pub struct Onboarding<S> {
    gate: OnboardingGate<S>,
    detector: GestureHoldDetector,
    timings: CtaTimings,
    cta: Option<CtaController>,
}

impl<S: FlagStore> Onboarding<S> {
    pub fn new(gate: OnboardingGate<S>, hold: HoldConfig, timings: CtaTimings) -> Self {
        Self {
            gate,
            detector: GestureHoldDetector::new(hold),
            timings,
            cta: None,
        }
    }

    pub fn gate(&self) -> &OnboardingGate<S> {
        &self.gate
    }

    pub fn detector(&self) -> &GestureHoldDetector {
        &self.detector
    }

    pub fn cta(&self) -> Option<&CtaController> {
        self.cta.as_ref()
    }

    pub fn cta_state(&self) -> Option<CtaState> {
        self.cta.as_ref().map(CtaController::state)
    }

    /// The detection loop is running. Mounts the CTA unless it was already
    /// shown in an earlier session. Later calls do nothing.
    pub fn scene_ready<V: CtaView + ?Sized>(&mut self, now: f64, view: &mut V) {
        if self.gate.scene_ready() {
            return;
        }
        self.gate.set_scene_ready();
        if self.gate.should_run() {
            log::info!("scene ready, showing hand cta");
            self.cta = Some(CtaController::mount(now, self.timings, view));
        } else {
            log::info!("scene ready, hand cta already shown");
        }
    }

    /// Run one frame of the onboarding pipeline.
    pub fn frame<V: CtaView + ?Sized>(
        &mut self,
        now: f64,
        visible: bool,
        view: &mut V,
    ) -> Option<HoldEvent> {
        let cta = self.cta.as_mut()?;
        cta.tick(now, view);

        let enabled = self.gate.should_run() && cta.accepts_hold_input();
        let event = self.detector.tick(now, visible, enabled);
        if let Some(ev) = event {
            cta.handle(ev, now, view);
        }

        if cta.is_hidden() {
            cta.teardown();
            self.cta = None;
            self.gate.mark_shown();
            log::info!("hand cta finished");
        }
        event
    }

    /// Cancel any CTA timers and drop the widget.
    pub fn teardown(&mut self) {
        if let Some(mut cta) = self.cta.take() {
            cta.teardown();
        }
    }
}

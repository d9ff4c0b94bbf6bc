use handfield_core::constants::HAND_CTA_STORAGE_KEY;
use handfield_core::*;

#[derive(Default)]
struct DisplayView {
    displayed: bool,
    phase: Option<CtaPhase>,
}

impl CtaView for DisplayView {
    fn show_phase(&mut self, phase: CtaPhase) {
        self.phase = Some(phase);
    }
    fn fade_to(&mut self, _opacity: f32, _secs: f64) {}
    fn progress_to(&mut self, _fraction: f32, _secs: f64) {}
    fn set_check_visible(&mut self, _visible: bool) {}
    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }
}

struct FailingStore;

impl FlagStore for FailingStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }
    fn set_item(&mut self, key: &str, _value: &str) -> CoreResult<()> {
        Err(CoreError::StoreWrite {
            key: key.to_owned(),
            reason: "quota exceeded".into(),
        })
    }
}

fn onboarding<S: FlagStore>(persist: bool, store: Option<S>) -> Onboarding<S> {
    Onboarding::new(
        OnboardingGate::new(persist, store),
        HoldConfig::default(),
        CtaTimings::default(),
    )
}

/// Hand raised just after mount and held until the widget is gone.
fn run_to_completion<S: FlagStore>(ob: &mut Onboarding<S>, view: &mut DisplayView) {
    ob.scene_ready(0.0, view);
    assert_eq!(ob.frame(0.1, true, view), Some(HoldEvent::Start));
    assert_eq!(ob.cta_state(), Some(CtaState::Entering));
    assert_eq!(ob.frame(0.4, true, view), None);
    assert_eq!(ob.cta_state(), Some(CtaState::Holding));
    assert_eq!(ob.frame(1.2, true, view), Some(HoldEvent::Complete));
    assert_eq!(ob.cta_state(), Some(CtaState::Completing));
    ob.frame(2.0, true, view);
    assert_eq!(ob.cta_state(), Some(CtaState::Completing));
    ob.frame(2.3, true, view);
    assert!(ob.cta().is_none());
}

#[test]
fn nothing_runs_before_scene_is_ready() {
    let mut ob = onboarding(true, Some(MemoryStore::new()));
    let mut view = DisplayView::default();
    assert_eq!(ob.frame(0.0, true, &mut view), None);
    assert_eq!(ob.frame(2.0, true, &mut view), None);
    assert!(ob.cta().is_none());
    assert!(!view.displayed);
}

#[test]
fn completed_hold_persists_shown_flag() {
    let mut ob = onboarding(true, Some(MemoryStore::new()));
    let mut view = DisplayView::default();
    run_to_completion(&mut ob, &mut view);

    assert!(!view.displayed);
    assert!(ob.gate().has_shown());
    let store = ob.gate().store().unwrap();
    assert_eq!(store.get_item(HAND_CTA_STORAGE_KEY).as_deref(), Some("1"));
    assert_eq!(ob.frame(3.0, true, &mut view), None);
}

#[test]
fn already_shown_skips_the_cta() {
    let store = MemoryStore::new().with_item(HAND_CTA_STORAGE_KEY, "1");
    let mut ob = onboarding(true, Some(store));
    let mut view = DisplayView::default();
    assert!(ob.gate().has_shown());
    ob.scene_ready(0.0, &mut view);
    assert!(ob.cta().is_none());
    assert!(!view.displayed);
    assert_eq!(ob.frame(0.5, true, &mut view), None);
}

#[test]
fn persistence_disabled_ignores_and_never_writes_store() {
    let store = MemoryStore::new().with_item("other", "x");
    let mut ob = onboarding(false, Some(store));
    let mut view = DisplayView::default();
    run_to_completion(&mut ob, &mut view);
    assert!(ob.gate().has_shown());
    let store = ob.gate().store().unwrap();
    assert_eq!(store.get_item(HAND_CTA_STORAGE_KEY), None);
}

#[test]
fn missing_store_still_runs() {
    let mut ob = onboarding::<MemoryStore>(true, None);
    let mut view = DisplayView::default();
    run_to_completion(&mut ob, &mut view);
    assert!(ob.gate().has_shown());
}

#[test]
fn store_write_failure_is_absorbed() {
    let mut ob = onboarding(true, Some(FailingStore));
    let mut view = DisplayView::default();
    run_to_completion(&mut ob, &mut view);
    assert!(ob.gate().has_shown());
}

#[test]
fn losing_the_hand_returns_to_prompt() {
    let mut ob = onboarding(true, Some(MemoryStore::new()));
    let mut view = DisplayView::default();
    ob.scene_ready(0.0, &mut view);
    ob.frame(0.5, false, &mut view);
    assert_eq!(ob.cta_state(), Some(CtaState::Idle));
    assert_eq!(ob.frame(0.6, true, &mut view), Some(HoldEvent::Start));
    assert_eq!(ob.cta_state(), Some(CtaState::Holding));
    assert_eq!(view.phase, Some(CtaPhase::Hold));
    assert_eq!(ob.frame(0.9, false, &mut view), Some(HoldEvent::Cancel));
    assert_eq!(ob.cta_state(), Some(CtaState::Idle));
    assert_eq!(view.phase, Some(CtaPhase::Prompt));
    assert!(!ob.gate().has_shown());
}

#[test]
fn teardown_mid_hold_leaves_flag_unset() {
    let mut ob = onboarding(true, Some(MemoryStore::new()));
    let mut view = DisplayView::default();
    ob.scene_ready(0.0, &mut view);
    ob.frame(0.5, true, &mut view);
    ob.teardown();
    assert!(ob.cta().is_none());
    assert_eq!(ob.frame(2.0, true, &mut view), None);
    assert!(!ob.gate().has_shown());
}

#[test]
fn scene_ready_mounts_once() {
    let mut ob = onboarding(true, Some(MemoryStore::new()));
    let mut view = DisplayView::default();
    ob.scene_ready(0.0, &mut view);
    ob.frame(0.5, false, &mut view);
    ob.scene_ready(0.6, &mut view);
    assert_eq!(ob.cta_state(), Some(CtaState::Idle));
}

#[test]
fn hold_shorter_than_entry_fade_still_finishes() {
    let mut ob = Onboarding::new(
        OnboardingGate::new(true, Some(MemoryStore::new())),
        HoldConfig {
            start_delay: 0.2,
            ..HoldConfig::default()
        },
        CtaTimings::default(),
    );
    let mut view = DisplayView::default();
    ob.scene_ready(0.0, &mut view);

    let events: Vec<_> = (0..7)
        .filter_map(|i| ob.frame(0.1 + 0.04 * i as f64, true, &mut view))
        .collect();
    assert_eq!(events, vec![HoldEvent::Start, HoldEvent::Complete]);
    assert_eq!(ob.cta_state(), Some(CtaState::Entering));
    assert_eq!(ob.cta().and_then(|c| c.buffered()), Some(CtaEvent::Complete));

    ob.frame(0.4, true, &mut view);
    assert_eq!(ob.cta_state(), Some(CtaState::Completing));
    assert_eq!(view.phase, Some(CtaPhase::Complete));
    ob.frame(1.2, true, &mut view);
    ob.frame(1.5, true, &mut view);
    assert!(ob.cta().is_none());
    assert_eq!(
        ob.gate().store().unwrap().get_item(HAND_CTA_STORAGE_KEY).as_deref(),
        Some("1")
    );
}

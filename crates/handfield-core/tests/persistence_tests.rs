use handfield_core::constants::HAND_CTA_STORAGE_KEY;
use handfield_core::*;

#[test]
fn override_wins_over_environment_default() {
    for env in [None, Some("true"), Some("false"), Some("garbage")] {
        assert!(!resolve_persist_hand_cta(Some("0"), env), "{env:?}");
        assert!(resolve_persist_hand_cta(Some("1"), env), "{env:?}");
    }
}

#[test]
fn environment_default_applies_without_override() {
    assert!(resolve_persist_hand_cta(None, None));
    assert!(resolve_persist_hand_cta(None, Some("true")));
    assert!(!resolve_persist_hand_cta(None, Some("false")));
    // Unrecognised override values fall through to the default.
    assert!(resolve_persist_hand_cta(Some("yes"), None));
    assert!(!resolve_persist_hand_cta(Some(""), Some("false")));
}

#[test]
fn initial_shown_requires_persistence_and_stored_one() {
    let shown = MemoryStore::new().with_item(HAND_CTA_STORAGE_KEY, "1");
    let other = MemoryStore::new().with_item(HAND_CTA_STORAGE_KEY, "true");
    let empty = MemoryStore::new();

    assert!(initial_has_shown(true, Some(&shown), HAND_CTA_STORAGE_KEY));
    assert!(!initial_has_shown(false, Some(&shown), HAND_CTA_STORAGE_KEY));
    assert!(!initial_has_shown(true, Some(&other), HAND_CTA_STORAGE_KEY));
    assert!(!initial_has_shown(true, Some(&empty), HAND_CTA_STORAGE_KEY));
    assert!(!initial_has_shown::<MemoryStore>(true, None, HAND_CTA_STORAGE_KEY));
}

#[test]
fn boxed_store_forwards() {
    let mut store: Box<dyn FlagStore> = Box::new(MemoryStore::new());
    store.set_item("k", "v").unwrap();
    assert_eq!(store.get_item("k").as_deref(), Some("v"));

    let gate = OnboardingGate::new(true, Some(store));
    assert!(!gate.has_shown());
}

// Host-side tests for the headless driver's helpers.
// The driver is a binary crate, so we include its pure modules directly.

#![allow(dead_code)]
mod timeline {
    include!("../src/timeline.rs");
}
mod store {
    include!("../src/store.rs");
}

use handfield_core::constants::HAND_CTA_STORAGE_KEY;
use handfield_core::{CoreError, FlagStore, OnboardingGate};
use store::*;
use timeline::*;

fn scratch_file(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("handfield-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    let _ = std::fs::remove_file(&path);
    path
}

#[test]
fn script_parses_and_answers_visibility() {
    let s = HandScript::parse("1.0-3.5, 0.6-0.8").unwrap();
    assert_eq!(s.spans(), &[(0.6, 0.8), (1.0, 3.5)]);
    assert!(!s.visible_at(0.5));
    assert!(s.visible_at(0.6));
    assert!(!s.visible_at(0.8));
    assert!(s.visible_at(2.0));
    assert_eq!(s.end(), 3.5);
}

#[test]
fn empty_script_never_shows_a_hand() {
    let s = HandScript::parse("").unwrap();
    assert!(s.spans().is_empty());
    assert!(!s.visible_at(0.0));
    assert_eq!(s.end(), 0.0);
}

#[test]
fn bad_intervals_are_rejected() {
    for bad in ["1.0", "a-b", "3-1", "1-inf"] {
        let err = HandScript::parse(bad).unwrap_err();
        assert_eq!(err.span, bad);
    }
}

#[test]
fn script_error_reads_as_an_error() {
    let err = HandScript::parse("0.5-0.2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad hand script interval \"0.5-0.2\" (want start-end)"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert!(boxed.source().is_none());
}

#[test]
fn wrist_path_stays_in_frame() {
    for i in 0..200 {
        let [x, y, _] = wrist_path(i as f64 * 0.05);
        assert!((0.0..=1.0).contains(&x));
        assert!((0.0..=1.0).contains(&y));
    }
}

#[test]
fn file_store_round_trips_and_keeps_other_keys() {
    let path = scratch_file("flags");
    let mut s = FileFlagStore::open(&path).unwrap();
    assert_eq!(s.get_item(HAND_CTA_STORAGE_KEY), None);
    s.set_item("other", "x").unwrap();
    s.set_item(HAND_CTA_STORAGE_KEY, "1").unwrap();
    s.set_item(HAND_CTA_STORAGE_KEY, "1").unwrap();

    let reopened = FileFlagStore::open(&path).unwrap();
    assert_eq!(reopened.get_item(HAND_CTA_STORAGE_KEY).as_deref(), Some("1"));
    assert_eq!(reopened.get_item("other").as_deref(), Some("x"));
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn file_store_marks_gate_shown_for_next_run() {
    let path = scratch_file("gate");
    let mut gate = OnboardingGate::new(true, Some(FileFlagStore::open(&path).unwrap()));
    assert!(!gate.has_shown());
    gate.mark_shown();

    let next = OnboardingGate::new(true, Some(FileFlagStore::open(&path).unwrap()));
    assert!(next.has_shown());
}

#[test]
fn missing_directory_is_unavailable() {
    let path = std::env::temp_dir()
        .join("handfield-no-such-dir")
        .join("deeper")
        .join("flags");
    assert!(matches!(
        FileFlagStore::open(path),
        Err(CoreError::StoreUnavailable(_))
    ));
}

#[test]
fn pair_parsing_skips_junk() {
    let pairs = parse_pairs("a=1\njunk\n=2\n b = 3 \n");
    assert_eq!(
        pairs,
        vec![("a".to_owned(), "1".to_owned()), ("b".to_owned(), "3".to_owned())]
    );
}

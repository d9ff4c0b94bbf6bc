//! Page query parameters. The browser's `URLSearchParams` does the decoding
//! at the wasm edge; what is left here is plain lookup so it can be tested
//! on the host.

use crate::constants::*;
use handfield_core::{KEY_FORCE_DAMPING, KEY_FORCE_ORBIT_SPEED, KEY_FORCE_STRENGTH, KEY_SPHERE_COUNT};

/// Every query parameter the page understands.
pub const PAGE_KEYS: [&str; 10] = [
    KEY_SPHERE_COUNT,
    KEY_FORCE_STRENGTH,
    KEY_FORCE_DAMPING,
    KEY_FORCE_ORBIT_SPEED,
    QUERY_PERSIST_HAND_CTA,
    QUERY_BACKGROUND_COLOR,
    QUERY_SPHERE_COLOR,
    QUERY_SPHERE_SIZE,
    QUERY_TRACKED_SPHERE_COLOR,
    QUERY_TRACKED_SPHERE_SIZE,
];

/// Collect the known keys through `lookup`, which returns the first decoded
/// value for a key. Absent keys are skipped.
pub fn collect_known<F>(mut lookup: F) -> Vec<(String, String)>
where
    F: FnMut(&str) -> Option<String>,
{
    PAGE_KEYS
        .iter()
        .filter_map(|&k| lookup(k).map(|v| (k.to_owned(), v)))
        .collect()
}

/// First value for `key`.
pub fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

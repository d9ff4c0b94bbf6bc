//! Conversion of hand landmarker results (plain JS objects) into
//! [`HandFrame`]s, plus the latest-result slot shared with the frame loop.

use glam::Vec3;
use handfield_core::{HandFrame, Handedness, LatestDetection, SceneTunables, TrackedHand};
use js_sys::{Array, Reflect};
use std::cell::RefCell;
use wasm_bindgen::{JsCast, JsValue};

/// State written from JS callbacks and read by the frame loop.
#[derive(Default)]
pub struct Inputs {
    pub detection: LatestDetection,
    pub tracking_ready: bool,
    pub pending_tunables: Option<SceneTunables>,
    pub simulated_hand: bool,
}

thread_local! {
    static INPUTS: RefCell<Inputs> = RefCell::new(Inputs::default());
}

pub fn with_inputs<R>(f: impl FnOnce(&mut Inputs) -> R) -> R {
    INPUTS.with(|cell| f(&mut cell.borrow_mut()))
}

fn field(obj: &JsValue, name: &str) -> Option<JsValue> {
    Reflect::get(obj, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn point(obj: &JsValue) -> Option<Vec3> {
    let coord = |n: &str| field(obj, n).and_then(|v| v.as_f64());
    Some(Vec3::new(
        coord("x")? as f32,
        coord("y")? as f32,
        coord("z").unwrap_or(0.0) as f32,
    ))
}

/// Label for hand `index`. Accepts a bare string, an array of strings, or
/// the landmarker's array of category lists.
fn label_at(value: &JsValue, index: u32) -> Option<Handedness> {
    if let Some(s) = value.as_string() {
        return Handedness::parse(&s);
    }
    let entry = value.dyn_ref::<Array>()?.get(index);
    if let Some(s) = entry.as_string() {
        return Handedness::parse(&s);
    }
    let category = match entry.dyn_ref::<Array>() {
        Some(list) => list.get(0),
        None => entry,
    };
    ["categoryName", "displayName", "label"]
        .iter()
        .find_map(|k| field(&category, k).and_then(|v| v.as_string()))
        .and_then(|s| Handedness::parse(&s))
}

/// Build a frame from a landmarker result. The label may sit under
/// `handedness` or `handednesses`; missing or malformed parts read as no
/// hand.
pub fn hand_frame_from_js(result: &JsValue) -> HandFrame {
    let mut frame = HandFrame::empty();
    let Some(hands) = field(result, "landmarks").and_then(|v| v.dyn_into::<Array>().ok()) else {
        return frame;
    };
    let labels = field(result, "handedness").or_else(|| field(result, "handednesses"));
    for (i, hand) in hands.iter().enumerate() {
        let Ok(points) = hand.dyn_into::<Array>() else {
            continue;
        };
        let handedness = labels.as_ref().and_then(|l| label_at(l, i as u32));
        frame.hands.push(TrackedHand::new(
            points.iter().filter_map(|p| point(&p)),
            handedness,
        ));
    }
    frame
}

//! Inline styles and the canvas colour scheme.

use crate::constants::*;
use crate::query::get;

/// Colours and sizes for the canvas renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneStyle {
    pub background: String,
    pub sphere_color: String,
    pub sphere_size: f32,
    pub tracked_color: String,
    pub tracked_size: f32,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            background: DEFAULT_BACKGROUND_COLOR.to_owned(),
            sphere_color: DEFAULT_SPHERE_COLOR.to_owned(),
            sphere_size: DEFAULT_SPHERE_SIZE,
            tracked_color: DEFAULT_TRACKED_SPHERE_COLOR.to_owned(),
            tracked_size: DEFAULT_TRACKED_SPHERE_SIZE,
        }
    }
}

/// Accept `#rgb`/`#rrggbb` and bare hex digits; anything else is rejected so
/// it never reaches a style attribute.
pub fn parse_color(value: &str) -> Option<String> {
    let digits = value.trim().trim_start_matches('#');
    let ok = matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit());
    ok.then(|| format!("#{}", digits.to_ascii_lowercase()))
}

fn parse_size(value: &str, range: (f32, f32)) -> Option<f32> {
    let v: f32 = value.trim().parse().ok()?;
    v.is_finite().then(|| v.clamp(range.0, range.1))
}

impl SceneStyle {
    pub fn from_query(pairs: &[(String, String)]) -> Self {
        let mut s = Self::default();
        if let Some(c) = get(pairs, QUERY_BACKGROUND_COLOR).and_then(parse_color) {
            s.background = c;
        }
        if let Some(c) = get(pairs, QUERY_SPHERE_COLOR).and_then(parse_color) {
            s.sphere_color = c;
        }
        if let Some(c) = get(pairs, QUERY_TRACKED_SPHERE_COLOR).and_then(parse_color) {
            s.tracked_color = c;
        }
        if let Some(v) = get(pairs, QUERY_SPHERE_SIZE).and_then(|v| parse_size(v, SPHERE_SIZE_RANGE)) {
            s.sphere_size = v;
        }
        if let Some(v) = get(pairs, QUERY_TRACKED_SPHERE_SIZE)
            .and_then(|v| parse_size(v, TRACKED_SPHERE_SIZE_RANGE))
        {
            s.tracked_size = v;
        }
        s
    }
}

/// Inline style for an opacity transition.
pub fn fade_style(opacity: f32, secs: f64) -> String {
    format!(
        "opacity:{:.3};transition:opacity {:.3}s ease",
        opacity.clamp(0.0, 1.0),
        secs.max(0.0)
    )
}

/// Inline style for the hold bar at `fraction` of its track.
pub fn bar_style(fraction: f32, secs: f64) -> String {
    let secs = secs.max(0.0);
    let transition = if secs > 0.0 {
        format!("width {secs:.3}s linear")
    } else {
        "none".to_owned()
    };
    format!(
        "width:{:.1}%;height:100%;background:{CTA_ACCENT_COLOR};transition:{transition}",
        fraction.clamp(0.0, 1.0) * 100.0
    )
}

// Scripted hand visibility for headless runs.
//
// A script is a comma-separated list of `start-end` intervals in seconds,
// e.g. `0.6-0.8,1.0-3.5`. The hand is visible inside any interval
// (start inclusive, end exclusive).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub struct HandScript {
    spans: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq, Error)]
#[error("bad hand script interval {span:?} (want start-end)")]
pub struct ScriptError {
    pub span: String,
}

impl HandScript {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut spans = Vec::new();
        for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let bad = || ScriptError {
                span: part.to_owned(),
            };
            let (a, b) = part.split_once('-').ok_or_else(bad)?;
            let start: f64 = a.trim().parse().map_err(|_| bad())?;
            let end: f64 = b.trim().parse().map_err(|_| bad())?;
            if !(start.is_finite() && end.is_finite()) || end < start {
                return Err(bad());
            }
            spans.push((start, end));
        }
        spans.sort_by(|x, y| x.0.total_cmp(&y.0));
        Ok(Self { spans })
    }

    pub fn spans(&self) -> &[(f64, f64)] {
        &self.spans
    }

    pub fn visible_at(&self, t: f64) -> bool {
        self.spans.iter().any(|&(s, e)| t >= s && t < e)
    }

    /// End of the last interval, or zero for an empty script.
    pub fn end(&self) -> f64 {
        self.spans.iter().map(|s| s.1).fold(0.0, f64::max)
    }
}

/// Normalized wrist position for a hand drifting slowly in a small circle.
pub fn wrist_path(t: f64) -> [f32; 3] {
    let a = t * 0.8;
    [
        (0.5 + 0.15 * a.cos()) as f32,
        (0.5 + 0.1 * a.sin()) as f32,
        (-0.05 * (a * 0.5).sin()) as f32,
    ]
}

use instant::Instant;

/// Seconds since the clock was created, plus the delta between frames.
#[derive(Clone, Debug)]
pub struct FrameClock {
    origin: Instant,
    last: Option<f64>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            last: None,
        }
    }

    pub fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }

    /// Advance one frame. Returns `(now, dt)`; the first frame has `dt = 0`.
    pub fn tick(&mut self) -> (f64, f64) {
        let now = self.now();
        (now, self.advance_to(now))
    }

    /// Advance to an externally supplied timestamp (in seconds) and return
    /// the delta. Timestamps going backwards yield zero.
    pub fn advance_to(&mut self, now: f64) -> f64 {
        let dt = self.last.map_or(0.0, |last| (now - last).max(0.0));
        self.last = Some(now);
        dt
    }
}

use glam::DVec3;

// Shared tuning constants used by both web and native frontends.

// Hold detection
pub const START_DELAY_SEC: f64 = 1.0; // continuous hold required before completion
pub const FLICKER_GRACE_SEC: f64 = 0.25; // max detection gap tolerated without cancelling

// Body pool
pub const MAX_COUNT: usize = 500;
pub const SPAWN_HALF_EXTENT: f64 = 20.0; // activated bodies spawn in [-20, 20) on each axis
pub const PARKED_POSITION: [f64; 3] = [1.0e4, 1.0e4, 1.0e4]; // far outside the camera frustum
pub const MIN_FORCE_DAMPING: f64 = 1.0e-3; // keeps the velocity blend finite

// Body integration (stand-in physics step)
pub const BODY_LINEAR_DAMPING: f64 = 0.8;

// Scene tunable defaults and ranges
pub const DEFAULT_SPHERE_COUNT: usize = 30;
pub const DEFAULT_FORCE_STRENGTH: f64 = 3.0;
pub const DEFAULT_FORCE_DAMPING: f64 = 0.25;
pub const DEFAULT_FORCE_ORBIT_SPEED: f64 = 1.0;

pub const SPHERE_COUNT_RANGE: (usize, usize) = (1, MAX_COUNT);
pub const FORCE_STRENGTH_RANGE: (f64, f64) = (0.0, 20.0);
pub const FORCE_DAMPING_RANGE: (f64, f64) = (0.0, 2.0);
pub const FORCE_ORBIT_SPEED_RANGE: (f64, f64) = (0.0, 5.0);

// Camera rig
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 20.0];
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 40.0;

// Hand anchor mapping
pub const HAND_DEPTH_SCALE: f32 = 0.15;

// CTA presentation timings (seconds)
pub const CTA_ENTER_FADE_SEC: f64 = 0.35;
pub const CTA_HOLD_BAR_SEC: f64 = 1.0;
pub const CTA_QUICK_FADE_SEC: f64 = 0.12;
pub const CTA_CANCEL_REVEAL_SEC: f64 = 0.08;
pub const CTA_HIDE_DELAY_SEC: f64 = 0.7;
pub const CTA_EXIT_FADE_SEC: f64 = 0.25;

// CTA copy
pub const CTA_PROMPT_TEXT: &str = "Please raise a finger to the camera";
pub const CTA_HOLD_TEXT: &str = "Hold";
pub const CTA_COMPLETE_TEXT: &str = "Complete";

// Shown until the detection loop reports that it is running
pub const LOADING_TEXT: &str = "Initialising hand tracking…";

// Persistence
pub const HAND_CTA_STORAGE_KEY: &str = "hand_cta_shown";
pub const HAND_CTA_SHOWN_VALUE: &str = "1";

#[inline]
pub fn parked_position() -> DVec3 {
    DVec3::from_array(PARKED_POSITION)
}

/// Page wiring and look of the web front-end.
///
/// Element ids match the markup in `index.html`; elements that are missing
/// are created on demand where that makes sense.
// Canvas the sphere field is drawn into
pub const CANVAS_ID: &str = "app-canvas";

// Loading overlay shown until hand tracking is up
pub const LOADING_OVERLAY_ID: &str = "loading-overlay";

// CTA widget parts
pub const CTA_ROOT_ID: &str = "hand-cta";
pub const CTA_TEXT_ID: &str = "hand-cta-text";
pub const CTA_BAR_ID: &str = "hand-cta-bar";
pub const CTA_CHECK_ID: &str = "hand-cta-check";

// Query string keys handled by the page itself (scene tunables are parsed
// by the core)
pub const QUERY_PERSIST_HAND_CTA: &str = "persistHandCTA";
pub const QUERY_BACKGROUND_COLOR: &str = "backgroundColor";
pub const QUERY_SPHERE_COLOR: &str = "sphereColor";
pub const QUERY_SPHERE_SIZE: &str = "sphereSize";
pub const QUERY_TRACKED_SPHERE_COLOR: &str = "trackedSphereColor";
pub const QUERY_TRACKED_SPHERE_SIZE: &str = "trackedSphereSize";

// Scene look defaults
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ff0000";
pub const DEFAULT_SPHERE_COLOR: &str = "#ff0000";
pub const DEFAULT_TRACKED_SPHERE_COLOR: &str = "#000000";
pub const DEFAULT_SPHERE_SIZE: f32 = 1.0;
pub const DEFAULT_TRACKED_SPHERE_SIZE: f32 = 1.0;
pub const SPHERE_SIZE_RANGE: (f32, f32) = (0.1, 5.0);
pub const TRACKED_SPHERE_SIZE_RANGE: (f32, f32) = (0.05, 5.0);
pub const SPHERE_OUTLINE_COLOR: &str = "rgba(0, 0, 0, 0.55)";

// CTA colours
pub const CTA_ACCENT_COLOR: &str = "#ff0000";

// Environment default for persisting the shown flag, fixed at build time
pub const PERSIST_HAND_CTA_DEFAULT: Option<&str> = option_env!("HANDFIELD_PERSIST_HAND_CTA");

// Largest frame delta fed to the simulation (tab switches, stalls)
pub const MAX_FRAME_DT_SEC: f64 = 0.1;

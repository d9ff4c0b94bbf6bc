mod store;
mod timeline;

use anyhow::{ensure, Context, Result};
use glam::Vec3;
use handfield_core::constants::{LOADING_TEXT, MAX_COUNT};
use handfield_core::*;
use std::path::PathBuf;
use std::time::Duration;
use store::FileFlagStore;
use timeline::{wrist_path, HandScript};

// A short flicker first, then a hold long enough to complete.
const DEFAULT_SCRIPT: &str = "0.6-0.8,1.0-3.5";
const DEFAULT_STATE_FILE: &str = ".handfield-state";

const ENV_TUNABLES: [(&str, &str); 4] = [
    ("HANDFIELD_SPHERE_COUNT", KEY_SPHERE_COUNT),
    ("HANDFIELD_FORCE_STRENGTH", KEY_FORCE_STRENGTH),
    ("HANDFIELD_FORCE_DAMPING", KEY_FORCE_DAMPING),
    ("HANDFIELD_FORCE_ORBIT_SPEED", KEY_FORCE_ORBIT_SPEED),
];

fn env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env(name) {
        Some(v) => v
            .trim()
            .parse()
            .ok()
            .with_context(|| format!("{name}={v:?} is not valid")),
        None => Ok(default),
    }
}

#[derive(Debug)]
struct NativeConfig {
    tunables: SceneTunables,
    persist: bool,
    state_file: PathBuf,
    script: HandScript,
    duration: f64,
    fps: f64,
    tracking_ready_at: f64,
    realtime: bool,
    seed: Option<u64>,
}

impl NativeConfig {
    fn from_env() -> Result<Self> {
        let pairs: Vec<(&str, String)> = ENV_TUNABLES
            .iter()
            .filter_map(|(var, key)| env(var).map(|v| (*key, v)))
            .collect();
        let tunables = SceneTunables::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))?;

        let persist = resolve_persist_hand_cta(
            env("HANDFIELD_PERSIST_HAND_CTA_OVERRIDE").as_deref(),
            env("HANDFIELD_PERSIST_HAND_CTA").as_deref(),
        );

        let script_text = env("HANDFIELD_HAND_SCRIPT").unwrap_or_else(|| DEFAULT_SCRIPT.into());
        let script = HandScript::parse(&script_text).context("HANDFIELD_HAND_SCRIPT")?;

        let fps: f64 = env_parse("HANDFIELD_FPS", 60.0)?;
        ensure!(fps.is_finite() && fps > 0.0, "HANDFIELD_FPS must be positive");
        let duration = env_parse("HANDFIELD_DURATION_SEC", (script.end() + 1.5).max(4.0))?;
        let tracking_ready_at = env_parse("HANDFIELD_TRACKING_READY_SEC", 0.5)?;
        let seed = match env("HANDFIELD_SEED") {
            Some(_) => Some(env_parse("HANDFIELD_SEED", 0u64)?),
            None => None,
        };

        Ok(Self {
            tunables,
            persist,
            state_file: env("HANDFIELD_STATE_FILE")
                .unwrap_or_else(|| DEFAULT_STATE_FILE.into())
                .into(),
            script,
            duration,
            fps,
            tracking_ready_at,
            realtime: env("HANDFIELD_REALTIME").as_deref() == Some("1"),
            seed,
        })
    }
}

/// Writes the CTA's visual changes to the log instead of a screen.
#[derive(Debug, Default)]
struct LogView {
    phase: Option<CtaPhase>,
    opacity: f32,
    progress: f32,
    check: bool,
    displayed: bool,
}

impl CtaView for LogView {
    fn show_phase(&mut self, phase: CtaPhase) {
        if self.phase != Some(phase) {
            log::info!("cta: \"{}\"", phase.text());
        }
        self.phase = Some(phase);
    }

    fn fade_to(&mut self, opacity: f32, secs: f64) {
        log::debug!("cta opacity {:.2} -> {opacity:.2} over {secs:.2}s", self.opacity);
        self.opacity = opacity;
    }

    fn progress_to(&mut self, fraction: f32, secs: f64) {
        log::debug!("cta bar {:.2} -> {fraction:.2} over {secs:.2}s", self.progress);
        self.progress = fraction;
    }

    fn set_check_visible(&mut self, visible: bool) {
        if visible && !self.check {
            log::info!("cta: check mark");
        }
        self.check = visible;
    }

    fn set_displayed(&mut self, displayed: bool) {
        if displayed != self.displayed {
            log::info!("cta {}", if displayed { "mounted" } else { "removed" });
        }
        self.displayed = displayed;
    }
}

struct Scene {
    bodies: PointBodies,
    pool: ForcePool<BodyId>,
    sim: CentralForceSimulator,
}

impl Scene {
    fn new(tunables: &SceneTunables, seed: Option<u64>) -> Self {
        let mut bodies = PointBodies::with_count(MAX_COUNT);
        let mut pool = match seed {
            Some(s) => ForcePool::with_seed(s),
            None => ForcePool::new(),
        };
        for id in bodies.ids() {
            pool.register(id);
        }
        tunables.apply(&mut pool, &mut bodies);
        Self {
            bodies,
            pool,
            sim: CentralForceSimulator,
        }
    }

    fn step(&mut self, dt: f64) {
        self.bodies.step(dt);
        self.sim.step(&self.pool, &mut self.bodies, dt);
    }

    fn mean_radius(&self) -> f64 {
        let (sum, n) = self
            .pool
            .active_handles()
            .filter_map(|h| self.bodies.position(h))
            .fold((0.0, 0usize), |(s, n), p| (s + p.length(), n + 1));
        if n == 0 {
            0.0
        } else {
            sum / n as f64
        }
    }
}

fn synth_frame(script: &HandScript, t: f64) -> HandFrame {
    if !script.visible_at(t) {
        return HandFrame::empty();
    }
    let wrist = Vec3::from_array(wrist_path(t));
    let points = (0..21).map(|i| wrist + Vec3::new(0.0, -0.012 * i as f32, 0.0));
    HandFrame::single(TrackedHand::new(points, Some(Handedness::Left)))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = NativeConfig::from_env()?;
    log::info!(
        "spheres={} strength={} damping={} orbit={} persist={} script={:?}",
        cfg.tunables.sphere_count,
        cfg.tunables.force_strength,
        cfg.tunables.force_damping,
        cfg.tunables.force_orbit_speed,
        cfg.persist,
        cfg.script.spans(),
    );

    let store = match FileFlagStore::open(&cfg.state_file) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("{e}; onboarding flag will not be kept");
            None
        }
    };
    let mut onboarding = Onboarding::new(
        OnboardingGate::new(cfg.persist, store),
        HoldConfig::default(),
        CtaTimings::default(),
    );
    let mut scene = Scene::new(&cfg.tunables, cfg.seed);
    let camera = Camera::rig(16.0 / 9.0);
    let mut detection = LatestDetection::new();
    let mut view = LogView::default();
    let mut clock = FrameClock::new();

    log::info!("{LOADING_TEXT}");
    let frame_dt = 1.0 / cfg.fps;
    let frames = (cfg.duration * cfg.fps).ceil() as u64;
    let mut tracking_ready = false;
    let mut next_report = 0.0;

    for frame in 0..=frames {
        let (now, dt) = if cfg.realtime {
            std::thread::sleep(Duration::from_secs_f64(frame_dt));
            clock.tick()
        } else {
            let now = frame as f64 * frame_dt;
            (now, clock.advance_to(now))
        };

        detection.publish(synth_frame(&cfg.script, now));
        if !tracking_ready && now >= cfg.tracking_ready_at {
            tracking_ready = true;
            log::info!("hand tracking ready at {now:.2}s");
            onboarding.scene_ready(now, &mut view);
        }

        if let Some(ev) = onboarding.frame(now, detection.visible(), &mut view) {
            log::info!("{now:.2}s hold {ev:?}");
        }
        scene.step(dt);

        if now >= next_report {
            next_report += 1.0;
            let anchor = detection
                .wrist_anchor(camera.viewport())
                .map(|a| format!("({:.2}, {:.2}, {:.2})", a.x, a.y, a.z))
                .unwrap_or_else(|| "-".into());
            log::info!(
                "{now:.2}s mean radius {:.3} hand {anchor} hold {}% cta {:?}",
                scene.mean_radius(),
                onboarding.detector().progress_percent(),
                onboarding.cta_state(),
            );
        }
        if now >= cfg.duration {
            break;
        }
    }

    onboarding.teardown();
    log::info!(
        "finished: hand cta shown={} active spheres={}",
        onboarding.gate().has_shown(),
        scene.pool.active_handles().count(),
    );
    Ok(())
}

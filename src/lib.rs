#![cfg(target_arch = "wasm32")]
use handfield_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod cta_view;
mod detection;
mod dom;
mod events;
mod frame;
mod overlay;
mod query;
mod render;
mod storage;
mod style;

use constants::*;
use detection::with_inputs;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("handfield-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn page_query(window: &web::Window) -> Vec<(String, String)> {
    let search = window.location().search().unwrap_or_default();
    match web::UrlSearchParams::new_with_str(&search) {
        Ok(params) => query::collect_known(|k| params.get(k)),
        Err(e) => {
            log::warn!("unreadable query string: {e:?}");
            Vec::new()
        }
    }
}

fn tunables_from_query(pairs: &[(String, String)]) -> SceneTunables {
    let borrowed = || pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    SceneTunables::from_pairs(borrowed()).unwrap_or_else(|e| {
        log::warn!("{e}; ignoring bad values");
        SceneTunables::from_pairs_lenient(borrowed())
    })
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::wire_canvas_resize(&canvas);

    let pairs = page_query(&window);
    let tunables = tunables_from_query(&pairs);
    let style = style::SceneStyle::from_query(&pairs);
    let persist = resolve_persist_hand_cta(
        query::get(&pairs, QUERY_PERSIST_HAND_CTA),
        PERSIST_HAND_CTA_DEFAULT,
    );
    log::info!(
        "spheres={} strength={} damping={} orbit={} persist={persist}",
        tunables.sphere_count,
        tunables.force_strength,
        tunables.force_damping,
        tunables.force_orbit_speed,
    );

    let store = match storage::LocalStorageStore::open() {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    };

    let mut bodies = PointBodies::with_count(handfield_core::constants::MAX_COUNT);
    let mut pool = ForcePool::new();
    for id in bodies.ids() {
        pool.register(id);
    }
    tunables.apply(&mut pool, &mut bodies);

    overlay::show_loading(&document);
    let cta_view = cta_view::DomCtaView::new(&document)?;
    let renderer = render::Renderer::new(&canvas)?;
    events::wire_hand_toggle_h();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        renderer,
        style,
        camera: Camera::rig(1.0),
        onboarding: Onboarding::new(
            OnboardingGate::new(persist, store),
            HoldConfig::default(),
            CtaTimings::default(),
        ),
        cta_view,
        bodies,
        pool,
        sim: CentralForceSimulator,
        clock: FrameClock::new(),
        loading: true,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}

/// Feed one hand landmarker result. Call once per processed video frame.
#[wasm_bindgen]
pub fn push_hand_result(result: JsValue) {
    let frame = detection::hand_frame_from_js(&result);
    with_inputs(|i| i.detection.publish(frame));
}

/// The detection loop is running; dismisses the loading overlay and lets
/// the onboarding prompt appear.
#[wasm_bindgen]
pub fn mark_tracking_ready() {
    with_inputs(|i| {
        if !i.tracking_ready {
            log::info!("hand tracking ready");
        }
        i.tracking_ready = true;
    });
}

/// Replace the scene tunables. Values are clamped to their slider ranges.
#[wasm_bindgen]
pub fn set_scene_tunables(
    sphere_count: u32,
    force_strength: f64,
    force_damping: f64,
    force_orbit_speed: f64,
) {
    let t = SceneTunables {
        sphere_count: sphere_count as usize,
        force_strength,
        force_damping,
        force_orbit_speed,
    }
    .clamped();
    with_inputs(|i| i.pending_tunables = Some(t));
}

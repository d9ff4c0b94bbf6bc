use crate::constants::MAX_FRAME_DT_SEC;
use crate::cta_view::DomCtaView;
use crate::detection::with_inputs;
use crate::overlay;
use crate::render::Renderer;
use crate::storage::LocalStorageStore;
use crate::style::SceneStyle;
use glam::{Vec2, Vec3};
use handfield_core::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: Renderer,
    pub style: SceneStyle,
    pub camera: Camera,

    pub onboarding: Onboarding<LocalStorageStore>,
    pub cta_view: DomCtaView,

    pub bodies: PointBodies,
    pub pool: ForcePool<BodyId>,
    pub sim: CentralForceSimulator,

    pub clock: FrameClock,
    pub loading: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let (now, dt) = self.clock.tick();
        let dt = dt.min(MAX_FRAME_DT_SEC);

        let size = Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32);
        self.camera.aspect = (size.x / size.y.max(1.0)).max(f32::EPSILON);
        let viewport = self.camera.viewport();

        let (ready, visible, tunables, anchor) = with_inputs(|i| {
            let simulated = i.simulated_hand;
            let anchor = i
                .detection
                .wrist_anchor(viewport)
                .or_else(|| simulated.then_some(Vec3::ZERO));
            (
                i.tracking_ready,
                simulated || i.detection.visible(),
                i.pending_tunables.take(),
                anchor,
            )
        });

        if let Some(t) = tunables {
            t.apply(&mut self.pool, &mut self.bodies);
        }

        if ready && self.loading {
            self.loading = false;
            overlay::hide_loading(&self.document);
            self.onboarding.scene_ready(now, &mut self.cta_view);
        }

        // Hold detection feeds the CTA within the same frame.
        if let Some(ev) = self.onboarding.frame(now, visible, &mut self.cta_view) {
            log::debug!(
                "hold {ev:?} at {now:.2}s ({}%)",
                self.onboarding.detector().progress_percent()
            );
        }

        self.bodies.step(dt);
        self.sim.step(&self.pool, &mut self.bodies, dt);

        let bodies = &self.bodies;
        let spheres = self
            .pool
            .active_handles()
            .filter_map(|h| bodies.position(h))
            .map(|p| p.as_vec3());
        self.renderer
            .draw(&self.camera, &self.style, size, spheres, anchor);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

//! Canvas 2D drawing of the sphere field and the tracked hand marker.

use crate::constants::SPHERE_OUTLINE_COLOR;
use crate::style::SceneStyle;
use glam::{Vec2, Vec3};
use handfield_core::Camera;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct Disc {
    depth: f32,
    centre: Vec2,
    radius: f32,
}

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
    discs: Vec<Disc>,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {e:?}"))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
        Ok(Self {
            ctx,
            discs: Vec::new(),
        })
    }

    fn disc(&self, camera: &Camera, world: Vec3, radius: f32, size: Vec2) -> Option<Disc> {
        let centre = camera.project(world, size)?;
        let radius = camera.projected_radius(world, radius, size.y)?;
        Some(Disc {
            depth: (world - camera.eye).length(),
            centre,
            radius,
        })
    }

    fn fill_disc(&self, d: &Disc, fill: &str) {
        let ctx = &self.ctx;
        ctx.begin_path();
        _ = ctx.arc(d.centre.x as f64, d.centre.y as f64, d.radius as f64, 0.0, TAU);
        ctx.set_fill_style(&JsValue::from_str(fill));
        ctx.fill();
        ctx.set_stroke_style(&JsValue::from_str(SPHERE_OUTLINE_COLOR));
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    /// Draw one frame. Spheres are painted far to near; the hand marker
    /// goes on top.
    pub fn draw(
        &mut self,
        camera: &Camera,
        style: &SceneStyle,
        size: Vec2,
        spheres: impl Iterator<Item = Vec3>,
        hand: Option<Vec3>,
    ) {
        self.ctx
            .set_fill_style(&JsValue::from_str(&style.background));
        self.ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);

        let mut discs = std::mem::take(&mut self.discs);
        discs.clear();
        discs.extend(spheres.filter_map(|p| self.disc(camera, p, style.sphere_size, size)));
        discs.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        for d in &discs {
            self.fill_disc(d, &style.sphere_color);
        }
        self.discs = discs;

        if let Some(d) = hand.and_then(|h| self.disc(camera, h, style.tracked_size, size)) {
            self.fill_disc(&d, &style.tracked_color);
        }
    }
}

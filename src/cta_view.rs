//! DOM rendition of the hold-to-continue prompt.
//!
//! Animation is left to CSS transitions: the controller asks for a target
//! opacity or bar width plus a duration, and this view writes the matching
//! inline style.

use crate::constants::{CTA_ACCENT_COLOR, CTA_BAR_ID, CTA_CHECK_ID, CTA_ROOT_ID, CTA_TEXT_ID};
use crate::dom::ensure_div;
use crate::style::{bar_style, fade_style};
use handfield_core::{CtaPhase, CtaView};
use web_sys as web;

const ROOT_LAYOUT: &str = "position:fixed;left:50%;bottom:12%;transform:translateX(-50%);\
min-width:260px;padding:14px 18px;border-radius:10px;background:rgba(255,255,255,0.92);\
font:15px system-ui;text-align:center;z-index:10";

pub struct DomCtaView {
    root: web::Element,
    text: web::Element,
    bar: web::Element,
    check: web::Element,
    opacity: f32,
    fade_secs: f64,
    displayed: bool,
}

impl DomCtaView {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = ensure_div(document, CTA_ROOT_ID, None)?;
        let text = ensure_div(document, CTA_TEXT_ID, Some(&root))?;
        let track = ensure_div(document, "hand-cta-track", Some(&root))?;
        _ = track.set_attribute(
            "style",
            "margin-top:10px;height:4px;background:rgba(0,0,0,0.12);border-radius:2px;overflow:hidden",
        );
        let bar = ensure_div(document, CTA_BAR_ID, Some(&track))?;
        let check = ensure_div(document, CTA_CHECK_ID, Some(&root))?;
        check.set_text_content(Some("\u{2713}"));

        let mut view = Self {
            root,
            text,
            bar,
            check,
            opacity: 0.0,
            fade_secs: 0.0,
            displayed: false,
        };
        view.write_root();
        view.set_check_visible(false);
        Ok(view)
    }

    fn write_root(&mut self) {
        let display = if self.displayed { "block" } else { "none" };
        let style = format!(
            "{ROOT_LAYOUT};{};display:{display}",
            fade_style(self.opacity, self.fade_secs)
        );
        _ = self.root.set_attribute("style", &style);
    }
}

impl CtaView for DomCtaView {
    fn show_phase(&mut self, phase: CtaPhase) {
        self.text.set_text_content(Some(phase.text()));
    }

    fn fade_to(&mut self, opacity: f32, secs: f64) {
        self.opacity = opacity;
        self.fade_secs = secs;
        self.write_root();
    }

    fn progress_to(&mut self, fraction: f32, secs: f64) {
        _ = self.bar.set_attribute("style", &bar_style(fraction, secs));
    }

    fn set_check_visible(&mut self, visible: bool) {
        let style = if visible {
            format!("margin-top:6px;color:{CTA_ACCENT_COLOR};font-size:20px")
        } else {
            "display:none".to_owned()
        };
        _ = self.check.set_attribute("style", &style);
    }

    fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
        self.write_root();
    }
}

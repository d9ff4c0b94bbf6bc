use crate::constants::LOADING_OVERLAY_ID;
use handfield_core::constants::LOADING_TEXT;
use web_sys as web;

const LOADING_STYLE: &str = "position:fixed;inset:0;display:flex;align-items:center;\
justify-content:center;color:white;font:16px system-ui;background:rgba(0,0,0,0.6);z-index:20";

/// Put up the "initialising" overlay, creating it if the page has none.
pub fn show_loading(document: &web::Document) {
    match crate::dom::ensure_div(document, LOADING_OVERLAY_ID, None) {
        Ok(el) => {
            el.set_text_content(Some(LOADING_TEXT));
            _ = el.class_list().remove_1("hidden");
            _ = el.set_attribute("style", LOADING_STYLE);
        }
        Err(e) => log::warn!("loading overlay unavailable: {e}"),
    }
}

#[inline]
pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Listen for `keydown` on the window for the lifetime of the page.
pub fn add_keydown_listener(mut handler: impl FnMut(&web::KeyboardEvent) + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| handler(&ev))
            as Box<dyn FnMut(web::KeyboardEvent)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Keep the canvas backing store in step with its CSS size.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Find `id`, or create it as a `div` under `parent` (the body when `None`).
pub fn ensure_div(
    document: &web::Document,
    id: &str,
    parent: Option<&web::Element>,
) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(id) {
        return Ok(el);
    }
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create #{id}: {e:?}"))?;
    el.set_id(id);
    let appended = match parent {
        Some(p) => p.append_child(&el),
        None => document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?
            .append_child(&el),
    };
    appended.map_err(|e| anyhow::anyhow!("append #{id}: {e:?}"))?;
    Ok(el)
}

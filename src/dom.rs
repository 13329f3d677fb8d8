use crate::constants::{FALLBACK_CLASS, HERO_SELECTOR};
use cell_core::Viewport;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Current viewport in CSS pixels with the capped device pixel ratio.
pub fn read_viewport(window: &web::Window, pixel_ratio_cap: f64) -> Viewport {
    let css = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(
        css(window.inner_width()) as u32,
        css(window.inner_height()) as u32,
        window.device_pixel_ratio(),
        pixel_ratio_cap,
    )
}

/// Create the render canvas as the first child of `host`.
pub fn create_surface_canvas(
    document: &web::Document,
    host: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    host.prepend_with_node_1(&canvas).map_err(js_err)?;
    Ok(canvas)
}

/// CSS size follows the viewport; the backing store is scaled by the
/// capped pixel ratio.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}

pub fn query_all(root: &web::Element, selector: &str) -> anyhow::Result<Vec<web::Element>> {
    collect_elements(root.query_selector_all(selector).map_err(js_err)?)
}

pub fn query_all_in_document(
    document: &web::Document,
    selector: &str,
) -> anyhow::Result<Vec<web::Element>> {
    collect_elements(document.query_selector_all(selector).map_err(js_err)?)
}

fn collect_elements(list: web::NodeList) -> anyhow::Result<Vec<web::Element>> {
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect())
}

/// Let page CSS show a static hero when the 3D scene cannot start.
pub fn mark_fallback() {
    if let Some(document) = window_document() {
        if let Ok(Some(hero)) = document.query_selector(HERO_SELECTOR) {
            _ = hero.class_list().add_1(FALLBACK_CLASS);
        }
    }
}

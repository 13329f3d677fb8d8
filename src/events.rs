use crate::dom;
use crate::state::HeroState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<HeroState>>,
}

/// Window-level handlers. Each one writes shared scalars and returns; the
/// frame loop picks the values up on its next tick.
pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_scroll(&w);
    wire_resize(&w);
}

fn wire_mousemove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(window) = web::window() else {
            return;
        };
        let fallback = w.state.borrow().view.viewport;
        w.state.borrow_mut().interaction.pointer_moved(
            ev.client_x() as f64,
            ev.client_y() as f64,
            window_extent(window.inner_width(), fallback.width),
            window_extent(window.inner_height(), fallback.height),
        );
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_scroll(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        apply_scroll(&w.state);
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

/// Recompute the morph target from the current scroll offset.
pub fn apply_scroll(state: &Rc<RefCell<HeroState>>) {
    let scroll_y = web::window()
        .and_then(|wnd| wnd.scroll_y().ok())
        .unwrap_or(0.0);
    let mut s = state.borrow_mut();
    let hero_height = s.hero_height;
    s.interaction.scrolled(scroll_y, hero_height);
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        let mut s = w.state.borrow_mut();
        let viewport = dom::read_viewport(&window, s.interaction.params.pixel_ratio_cap);
        s.view.resize(viewport);
        dom::size_canvas(&w.canvas, &viewport);
        log::debug!(
            "[resize] {}x{} css, backing {:?}",
            viewport.width,
            viewport.height,
            viewport.backing_size()
        );
    }) as Box<dyn FnMut()>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

#[inline]
fn window_extent(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: u32) -> f64 {
    v.ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(fallback as f64)
}

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Call `step` with the frame timestamp (ms) on every animation frame for as
/// long as it returns `true`. Once it returns `false` the callback is
/// dropped along with everything it captured.
pub fn run_every_frame(mut step: impl FnMut(f64) -> bool + 'static) {
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        if step(now) {
            request_frame(&tick_clone);
        } else {
            _ = tick_clone.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &FrameCallback) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

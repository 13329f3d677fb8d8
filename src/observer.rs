use crate::dom::js_err;
use cell_core::TriggerOnce;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Call `on_visible` once per target, the first time at least `threshold`
/// of it intersects the viewport. Each target is unobserved after it fires;
/// the observer disconnects once every target has.
pub fn observe_once(
    targets: Vec<web::Element>,
    threshold: f64,
    mut on_visible: impl FnMut(&web::Element) + 'static,
) -> anyhow::Result<()> {
    if targets.is_empty() {
        return Ok(());
    }
    let mut latch = TriggerOnce::new(targets.len());
    let watched = targets.clone();

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = watched.iter().position(|el| *el == target) else {
                    continue;
                };
                if latch.report(key, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    on_visible(&target);
                }
            }
            if latch.all_fired() {
                observer.disconnect();
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    for target in &targets {
        observer.observe(target);
    }
    // The observer holds the callback for the page lifetime.
    callback.forget();
    Ok(())
}

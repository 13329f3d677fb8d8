//! Scroll-triggered page behaviour outside the hero: section reveals and
//! the stats counters.

use crate::animation;
use crate::constants::*;
use crate::dom;
use crate::observer::observe_once;
use cell_core::{Counter, HeroError};
use web_sys as web;

pub fn wire_page_sections() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or(HeroError::MissingDocument)?;

    let reveals = dom::query_all_in_document(&document, REVEAL_SELECTOR)?;
    log::info!("[init] {} reveal sections", reveals.len());
    observe_once(reveals, REVEAL_THRESHOLD, |el| {
        _ = el.class_list().add_1(VISIBLE_CLASS);
    })?;

    let Some(strip) = stats_host(&document)? else {
        log::info!("[init] no stats strip");
        return Ok(());
    };
    observe_once(vec![strip], STATS_THRESHOLD, |strip| {
        match dom::query_all(strip, COUNTER_SELECTOR) {
            Ok(counters) => counters.into_iter().for_each(animate_counter),
            Err(e) => log::warn!("[counter] {:?}", e),
        }
    })?;
    Ok(())
}

/// The one stats strip whose counters animate: the first in document order.
pub fn stats_host(document: &web::Document) -> anyhow::Result<Option<web::Element>> {
    document.query_selector(STATS_SELECTOR).map_err(dom::js_err)
}

/// Count `el` up from 0 to its `data-target`, rewriting its text each frame.
fn animate_counter(el: web::Element) {
    let counter = Counter::from_attributes(
        el.get_attribute(COUNTER_TARGET_ATTR).as_deref(),
        el.get_attribute(COUNTER_DECIMAL_ATTR).as_deref(),
    );
    log::debug!("[counter] {:?}", counter);
    let start = dom::now_ms();
    animation::run_every_frame(move |now| {
        let elapsed = now - start;
        el.set_text_content(Some(&counter.text_at(elapsed)));
        !counter.is_finished(elapsed)
    });
}

//! Smooth scrolling for in-page links.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use super::{Page, current_element, listen, listen_once};
use crate::error::EnhanceError;
use crate::nav::{NavTarget, Navigator, anchor_fragment, is_natively_focusable};

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub(super) fn init(page: &Rc<Page>) -> Result<(), EnhanceError> {
    let anchors = page.query_all(ANCHOR_SELECTOR)?;
    if anchors.is_empty() {
        return Err(EnhanceError::MissingElement(ANCHOR_SELECTOR.to_owned()));
    }
    let navigator = Navigator::new(&page.config);
    for anchor in &anchors {
        let page = Rc::clone(page);
        listen(anchor.as_ref(), "click", move |event: Event| {
            let Some(href) = current_element(&event).and_then(|link| link.get_attribute("href")) else {
                return;
            };
            let Some(fragment) = anchor_fragment(&href) else {
                return;
            };
            event.prevent_default();
            let Some(target) = page.document.get_element_by_id(fragment) else {
                log::debug!("no element for #{fragment}");
                return;
            };
            let offset_top = target.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()));
            let focusable = is_natively_focusable(&target.tag_name()) || target.has_attribute("tabindex");
            let nav_target = NavTarget { id: fragment.to_owned(), offset_top, focusable };
            let navigation = navigator.navigate(&nav_target);
            page.apply_logged(&navigation.mutations);
            if navigation.on_blur.is_empty() {
                return;
            }
            let restore = {
                let page = Rc::clone(&page);
                move |_event: Event| page.apply_logged(&navigation.on_blur)
            };
            if let Err(err) = listen_once(target.as_ref(), "blur", restore) {
                log::warn!("smooth scroll: cannot watch #{fragment} for blur: {err}");
            }
        })?;
    }
    Ok(())
}

//! Viewport-triggered work: article reveal and lazy images.
//!
//! Both fall back to doing the work immediately when `IntersectionObserver`
//! is unavailable.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::consts::{REVEAL_CLASS, REVEALED_CLASS};
use crate::error::EnhanceError;

const LAZY_SOURCE_ATTRIBUTE: &str = "data-src";

pub(super) fn init_reveal(page: &Page) -> Result<(), EnhanceError> {
    let articles = page.query_all("article")?;
    if articles.is_empty() {
        return Err(EnhanceError::MissingElement("article".to_owned()));
    }
    for article in &articles {
        article.class_list().add_1(REVEAL_CLASS)?;
    }
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
    options.set_root_margin(&page.config.reveal_root_margin);
    if let Err(err) = observe_once(&articles, &options, reveal) {
        log::debug!("reveal: observer unavailable, showing everything: {err}");
        for article in &articles {
            reveal(article)?;
        }
    }
    Ok(())
}

pub(super) fn init_lazy_images(page: &Page) -> Result<(), EnhanceError> {
    let selector = format!("img[{LAZY_SOURCE_ATTRIBUTE}]");
    let images = page.query_all(&selector)?;
    if images.is_empty() {
        return Err(EnhanceError::MissingElement(selector));
    }
    if let Err(err) = observe_once(&images, &IntersectionObserverInit::new(), load_image) {
        log::debug!("lazy images: observer unavailable, loading now: {err}");
        for image in &images {
            load_image(image)?;
        }
    }
    log::debug!("lazy images: {} deferred", images.len());
    Ok(())
}

fn reveal(article: &Element) -> Result<(), EnhanceError> {
    article.class_list().add_1(REVEALED_CLASS)?;
    Ok(())
}

fn load_image(image: &Element) -> Result<(), EnhanceError> {
    if let Some(source) = image.get_attribute(LAZY_SOURCE_ATTRIBUTE) {
        image.set_attribute("src", &source)?;
        image.remove_attribute(LAZY_SOURCE_ATTRIBUTE)?;
    }
    Ok(())
}

/// Run `on_visible` the first time each element intersects, then stop watching it.
fn observe_once(
    elements: &[Element],
    options: &IntersectionObserverInit,
    on_visible: impl Fn(&Element) -> Result<(), EnhanceError> + 'static,
) -> Result<(), EnhanceError> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Err(err) = on_visible(&target) {
                    log::warn!("intersection handler failed: {err}");
                }
                observer.unobserve(&target);
            }
        },
    );
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;
    callback.forget();
    for element in elements {
        observer.observe(element);
    }
    Ok(())
}

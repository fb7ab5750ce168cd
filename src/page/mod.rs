//! Browser entry point: wires every component to the live document.
//!
//! ARCHITECTURE
//! ============
//! Each submodule reads layout, forwards DOM events to its pure core, and
//! applies the returned mutations. Shared slots (notifier, tab group,
//! debouncers) sit in `Rc<RefCell<_>>` captured by the listener closures;
//! everything runs on the wasm main thread.
//!
//! Listener closures live for the page lifetime and are leaked with
//! `Closure::forget`.

mod chrome;
mod nav;
mod observe;
mod scroll;
mod tabs;
mod theme;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, Window};

use crate::config::Config;
use crate::consts::{CONFIG_ELEMENT_ID, NOTIFICATION_ENTER_MS};
use crate::dom::{self, Mutation};
use crate::error::{ConfigError, EnhanceError};
use crate::notify::Notifier;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Shared handles for every feature.
pub(crate) struct Page {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: Config,
    notifier: RefCell<Notifier>,
}

impl Page {
    pub(crate) fn apply(&self, mutations: &[Mutation]) -> Result<(), EnhanceError> {
        dom::apply(&self.window, mutations)
    }

    /// Apply from inside an event handler, where there is no caller to report to.
    pub(crate) fn apply_logged(&self, mutations: &[Mutation]) {
        if let Err(err) = self.apply(mutations) {
            log::warn!("DOM update failed: {err}");
        }
    }

    pub(crate) fn query_all(&self, selector: &str) -> Result<Vec<Element>, EnhanceError> {
        dom::query_all(&self.document, selector)
    }

    pub(crate) fn require_id(&self, id: &str) -> Result<Element, EnhanceError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| EnhanceError::MissingElement(format!("#{id}")))
    }
}

/// Module entry point; runs the startup routine once the DOM is parsed.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if document.ready_state() != "loading" {
        boot(window, document);
        return;
    }
    let deferred = {
        let window = window.clone();
        let document = document.clone();
        move |_event: Event| boot(window.clone(), document.clone())
    };
    if listen(document.as_ref(), "DOMContentLoaded", deferred).is_err() {
        boot(window, document);
    }
}

fn boot(window: Window, document: Document) {
    if STARTED.with(|started| started.replace(true)) {
        return;
    }
    let (config, config_error) = load_config(&document);
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::debug!("console logger not installed: {err}");
    }
    if let Some(err) = config_error {
        log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
    }

    let page = Rc::new(Page {
        window,
        document,
        notifier: RefCell::new(Notifier::new(&config)),
        config,
    });

    report("scroll progress", scroll::init_progress(&page));
    report("tabs", tabs::init(&page));
    report("theme switcher", theme::init(&page));
    report("reveal animation", observe::init_reveal(&page));
    report("smooth scroll", nav::init(&page));
    report("active navigation", scroll::init_active_section(&page));
    report("keyboard handling", chrome::init_keyboard(&page));
    report("lazy images", observe::init_lazy_images(&page));
    report("download tracking", chrome::init_downloads(&page));
    report("banner", chrome::init_banner(&page));
    report("performance timing", chrome::init_timing(&page));
    log::debug!("page enhancements started");
}

fn load_config(document: &Document) -> (Config, Option<ConfigError>) {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return (Config::default(), None);
    };
    match Config::from_json(&raw) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

fn report(feature: &str, result: Result<(), EnhanceError>) {
    match result {
        Ok(()) => log::debug!("{feature}: enabled"),
        Err(err) if err.is_missing_element() => log::debug!("{feature}: skipped, {err}"),
        Err(err) => log::warn!("{feature}: failed to start: {err}"),
    }
}

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Show `message`, replacing any notification on screen.
pub(crate) fn notify(page: &Rc<Page>, message: &str) {
    let shown = page.notifier.borrow_mut().show(message);
    page.apply_logged(&shown.mutations);
    let id = shown.id;
    after(page, NOTIFICATION_ENTER_MS, move |page| page.notifier.borrow().reveal(id));
    after(page, shown.ttl_ms, move |page| page.notifier.borrow().begin_fade(id));
    after(page, shown.ttl_ms.saturating_add(shown.fade_ms), move |page| {
        page.notifier.borrow_mut().finish(id)
    });
}

pub(crate) fn dismiss_notification(page: &Page) {
    let mutations = page.notifier.borrow_mut().dismiss();
    page.apply_logged(&mutations);
}

fn after(page: &Rc<Page>, delay_ms: u32, step: impl FnOnce(&Page) -> Vec<Mutation> + 'static) {
    let page = Rc::clone(page);
    Timeout::new(delay_ms, move || {
        let mutations = step(&page);
        page.apply_logged(&mutations);
    })
    .forget();
}

// =============================================================================
// EVENT HELPERS
// =============================================================================

/// Attach `handler` for the page lifetime.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), EnhanceError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach `handler` for a single dispatch; the browser drops it afterwards.
pub(crate) fn listen_once(
    target: &EventTarget,
    event: &str,
    handler: impl FnOnce(Event) + 'static,
) -> Result<(), EnhanceError> {
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Element the event was dispatched to.
pub(crate) fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

/// Element whose listener is handling the event.
pub(crate) fn current_element(event: &Event) -> Option<Element> {
    event.current_target().and_then(|target| target.dyn_ref::<Element>().cloned())
}

/// Nearest ancestor-or-self matching `selector`.
pub(crate) fn closest(el: &Element, selector: &str) -> Option<Element> {
    match el.closest(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("invalid selector {selector}: {err:?}");
            None
        }
    }
}

pub(crate) fn now_ms() -> f64 {
    js_sys::Date::now()
}

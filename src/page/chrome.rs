//! Page chrome: keyboard mode, download logging, template banner, load timing.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Performance};

use super::{Page, current_element, dismiss_notification, listen};
use crate::banner::Banner;
use crate::consts::{BANNER_CLOSE_ID, BANNER_ID};
use crate::error::EnhanceError;
use crate::keyboard::{KeyAction, classify_key, keyboard_mode};
use crate::storage::{BrowserStore, KeyValueStore, MemoryStore};
use crate::telemetry::{LoadTiming, download_label};

pub(super) fn init_keyboard(page: &Rc<Page>) -> Result<(), EnhanceError> {
    let on_key = {
        let page = Rc::clone(page);
        move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            match classify_key(&key) {
                KeyAction::EnterKeyboardMode => page.apply_logged(&keyboard_mode(true)),
                KeyAction::DismissNotification => dismiss_notification(&page),
                KeyAction::Ignore => {}
            }
        }
    };
    listen(page.document.as_ref(), "keydown", on_key)?;

    let on_mouse = {
        let page = Rc::clone(page);
        move |_event: Event| page.apply_logged(&keyboard_mode(false))
    };
    listen(page.document.as_ref(), "mousedown", on_mouse)
}

pub(super) fn init_downloads(page: &Page) -> Result<(), EnhanceError> {
    let links = page.query_all("a[download]")?;
    if links.is_empty() {
        return Err(EnhanceError::MissingElement("a[download]".to_owned()));
    }
    for link in &links {
        listen(link.as_ref(), "click", |event: Event| {
            let Some(link) = current_element(&event) else {
                return;
            };
            let label =
                download_label(link.get_attribute("download").as_deref(), link.get_attribute("href").as_deref());
            log::info!("download: {label}");
        })?;
    }
    Ok(())
}

pub(super) fn init_banner(page: &Rc<Page>) -> Result<(), EnhanceError> {
    page.require_id(BANNER_ID)?;
    let close = page.require_id(BANNER_CLOSE_ID)?;
    let storage: Box<dyn KeyValueStore> = match BrowserStore::session(&page.window) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::debug!("banner state will not persist: {err}");
            Box::new(MemoryStore::new())
        }
    };
    let banner = Banner::new(storage, &page.config.banner_key);
    page.apply(&banner.startup())?;

    let banner = RefCell::new(banner);
    let page = Rc::clone(page);
    listen(close.as_ref(), "click", move |_event: Event| {
        let (mutations, saved) = banner.borrow_mut().close();
        page.apply_logged(&mutations);
        if let Err(err) = saved {
            log::debug!("banner flag not saved: {err}");
        }
    })
}

pub(super) fn init_timing(page: &Page) -> Result<(), EnhanceError> {
    let performance =
        page.window.performance().ok_or_else(|| EnhanceError::MissingElement("window.performance".to_owned()))?;
    if page.document.ready_state() == "complete" {
        Timeout::new(0, move || log_load_timing(&performance)).forget();
        return Ok(());
    }
    listen(page.window.as_ref(), "load", move |_event: Event| {
        // loadEventEnd is only recorded once load handlers have returned.
        let performance = performance.clone();
        Timeout::new(0, move || log_load_timing(&performance)).forget();
    })
}

fn log_load_timing(performance: &Performance) {
    let timing = performance.timing();
    let marks = LoadTiming {
        navigation_start: timing.navigation_start(),
        dom_content_loaded_end: timing.dom_content_loaded_event_end(),
        load_event_end: timing.load_event_end(),
    };
    match marks.summary() {
        Some(summary) => log::info!(
            "page ready in {:.0} ms, fully loaded in {:.0} ms",
            summary.dom_ready_ms,
            summary.full_load_ms
        ),
        None => log::debug!("load timing not recorded yet"),
    }
}

//! Theme switcher wiring: restore saved choices, build the control, handle clicks.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Event;

use super::{Page, closest, event_element, listen, notify};
use crate::consts::{MODE_TOGGLE_ID, SWITCHER_ID, THEME_OPTION_ATTRIBUTE};
use crate::error::EnhanceError;
use crate::prefs::{PreferenceStore, Theme};
use crate::storage::{BrowserStore, KeyValueStore, MemoryStore};
use crate::theme::ThemeSwitcher;

pub(super) fn init(page: &Rc<Page>) -> Result<(), EnhanceError> {
    let storage: Box<dyn KeyValueStore> = match BrowserStore::local(&page.window) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("theme preferences will not persist: {err}");
            Box::new(MemoryStore::new())
        }
    };
    let switcher = ThemeSwitcher::new(PreferenceStore::new(storage, &page.config));
    page.apply(&switcher.saved_mutations())?;
    log::debug!("restored {} theme in {} mode", switcher.theme(), switcher.mode());

    if page.document.query_selector("nav")?.is_none() {
        return Err(EnhanceError::MissingElement("nav".to_owned()));
    }
    page.apply(&switcher.controls())?;
    let container = page.require_id(SWITCHER_ID)?;

    let switcher = RefCell::new(switcher);
    let toggle_selector = format!("#{MODE_TOGGLE_ID}");
    let option_selector = format!("[{THEME_OPTION_ATTRIBUTE}]");
    let page = Rc::clone(page);
    listen(container.as_ref(), "click", move |event: Event| {
        let Some(clicked) = event_element(&event) else {
            return;
        };
        let selection = if closest(&clicked, &toggle_selector).is_some() {
            switcher.borrow_mut().toggle_mode()
        } else if let Some(theme) = closest(&clicked, &option_selector)
            .and_then(|option| option.get_attribute(THEME_OPTION_ATTRIBUTE))
            .and_then(|raw| parse_theme(&raw))
        {
            switcher.borrow_mut().select_theme(theme)
        } else {
            return;
        };
        page.apply_logged(&selection.mutations);
        notify(&page, &selection.notice);
    })
}

fn parse_theme(raw: &str) -> Option<Theme> {
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(err) => {
            log::debug!("theme switcher: {err}");
            None
        }
    }
}

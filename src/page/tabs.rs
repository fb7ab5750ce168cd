//! Tab buttons: click and arrow-key handling.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

use super::{Page, listen};
use crate::consts::{ACTIVE_CLASS, TAB_ATTRIBUTE};
use crate::error::EnhanceError;
use crate::tabs::{TabGroup, TabKey};

pub(super) fn init(page: &Rc<Page>) -> Result<(), EnhanceError> {
    let selector = format!("[{TAB_ATTRIBUTE}]");
    let buttons = page.query_all(&selector)?;
    let names = buttons
        .iter()
        .map(|button| button.get_attribute(TAB_ATTRIBUTE).unwrap_or_default())
        .collect::<Vec<_>>();
    let marked = buttons.iter().position(|button| button.class_list().contains(ACTIVE_CLASS));
    let group = TabGroup::new(names, marked).ok_or(EnhanceError::MissingElement(selector))?;
    log::debug!("tabs: {} buttons, #{} ({}) active", buttons.len(), group.active(), group.active_name());
    let group = Rc::new(RefCell::new(group));

    for (index, button) in buttons.iter().enumerate() {
        let on_click = {
            let page = Rc::clone(page);
            let group = Rc::clone(&group);
            move |_event: Event| {
                let mutations = group.borrow_mut().activate(index);
                page.apply_logged(&mutations);
            }
        };
        listen(button.as_ref(), "click", on_click)?;

        let on_key = {
            let page = Rc::clone(page);
            let group = Rc::clone(&group);
            move |event: Event| {
                let Some(key) = event.dyn_ref::<KeyboardEvent>().and_then(|key| TabKey::from_key(&key.key())) else {
                    return;
                };
                event.prevent_default();
                let mutations = group.borrow_mut().handle_key(key, index);
                page.apply_logged(&mutations);
            }
        };
        listen(button.as_ref(), "keydown", on_key)?;
    }
    Ok(())
}

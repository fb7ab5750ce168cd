//! Scroll progress bar and active-navigation highlighting.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement};

use super::{Page, listen, now_ms};
use crate::consts::PROGRESS_ELEMENT_ID;
use crate::debounce::{Debouncer, Wake};
use crate::error::EnhanceError;
use crate::nav::anchor_fragment;
use crate::scroll::{ScrollMetrics, SectionBounds, SectionTracker, progress_mutations};

const NAV_LINK_SELECTOR: &str = "nav a[href^=\"#\"]";

pub(super) fn init_progress(page: &Rc<Page>) -> Result<(), EnhanceError> {
    page.require_id(PROGRESS_ELEMENT_ID)?;
    let update: Rc<dyn Fn()> = {
        let page = Rc::clone(page);
        Rc::new(move || match read_metrics(&page) {
            Ok(metrics) => page.apply_logged(&progress_mutations(metrics)),
            Err(err) => log::warn!("scroll progress: {err}"),
        })
    };
    update();
    on_scroll_debounced(page, page.config.progress_debounce_ms, update)
}

pub(super) fn init_active_section(page: &Rc<Page>) -> Result<(), EnhanceError> {
    let links = page
        .query_all(NAV_LINK_SELECTOR)?
        .iter()
        .filter_map(|link| link.get_attribute("href"))
        .filter_map(|href| anchor_fragment(&href).map(str::to_owned))
        .collect::<Vec<_>>();
    if links.is_empty() {
        return Err(EnhanceError::MissingElement(NAV_LINK_SELECTOR.to_owned()));
    }
    let tracker = RefCell::new(SectionTracker::new(&page.config, links));
    let update: Rc<dyn Fn()> = {
        let page = Rc::clone(page);
        Rc::new(move || {
            let layout = read_sections(&page).and_then(|sections| Ok((sections, read_metrics(&page)?)));
            match layout {
                Ok((sections, metrics)) => {
                    let mutations = tracker.borrow_mut().update(&sections, metrics);
                    page.apply_logged(&mutations);
                }
                Err(err) => log::warn!("active navigation: {err}"),
            }
        })
    };
    update();
    on_scroll_debounced(page, page.config.section_debounce_ms, update)
}

/// Run `run` once scrolling has paused for `wait_ms`.
fn on_scroll_debounced(page: &Page, wait_ms: u32, run: Rc<dyn Fn()>) -> Result<(), EnhanceError> {
    let debouncer = Rc::new(RefCell::new(Debouncer::new(wait_ms)));
    listen(page.window.as_ref(), "scroll", move |_event: Event| {
        let delay_ms = debouncer.borrow_mut().call(now_ms());
        if let Some(delay_ms) = delay_ms {
            arm(Rc::clone(&debouncer), Rc::clone(&run), delay_ms);
        }
    })
}

/// One timer per debouncer; it re-arms itself while scrolling continues.
fn arm(debouncer: Rc<RefCell<Debouncer>>, run: Rc<dyn Fn()>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        let wake = debouncer.borrow_mut().wake(now_ms());
        match wake {
            Wake::Run => run(),
            Wake::Sleep(delay_ms) => arm(debouncer, run, delay_ms),
            Wake::Idle => {}
        }
    })
    .forget();
}

fn read_metrics(page: &Page) -> Result<ScrollMetrics, EnhanceError> {
    let root = page
        .document
        .document_element()
        .ok_or_else(|| EnhanceError::MissingElement("document element".to_owned()))?;
    let scroll_top = page.window.scroll_y()?;
    let viewport_height = page
        .window
        .inner_height()?
        .as_f64()
        .unwrap_or_else(|| f64::from(root.client_height()));
    Ok(ScrollMetrics { scroll_top, scroll_height: f64::from(root.scroll_height()), viewport_height })
}

fn read_sections(page: &Page) -> Result<Vec<SectionBounds>, EnhanceError> {
    Ok(page
        .query_all("section[id]")?
        .iter()
        .filter_map(|el| el.dyn_ref::<HtmlElement>())
        .map(|el| SectionBounds {
            id: el.id(),
            offset_top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        })
        .collect())
}

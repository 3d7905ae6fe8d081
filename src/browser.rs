//! Thin adapter between the pure UI/inquiry logic and `web_sys`.
//!
//! Nothing in here decides anything; it reads browser globals and applies
//! state that was computed elsewhere. Failures to reach the DOM are logged
//! and otherwise ignored, except for link opening which reports back.

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, Element, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::inquiry::dispatch::{LinkOpener, TabOpen};
use crate::ui::scroll_spy::{self, ScrollAxis, SectionBounds};

/// Scroll container of the horizontal layout.
pub const MAIN_CONTAINER_ID: &str = "mainContainer";

fn js_message(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

pub fn user_agent() -> String {
    window()
        .and_then(|w| w.navigator().user_agent().ok())
        .unwrap_or_default()
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub struct BrowserOpener;

impl LinkOpener for BrowserOpener {
    fn open_new_tab(&self, url: &str) -> Result<TabOpen, String> {
        let window = window().ok_or_else(|| "no window".to_string())?;
        match window.open_with_url_and_target(url, "_blank").map_err(js_message)? {
            Some(tab) if !tab.closed().unwrap_or(false) => Ok(TabOpen::Opened),
            _ => Ok(TabOpen::Blocked),
        }
    }

    fn navigate(&self, url: &str) -> Result<(), String> {
        let window = window().ok_or_else(|| "no window".to_string())?;
        window.location().set_href(url).map_err(js_message)
    }
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        warn!("Failed to update body overflow: {}", js_message(e));
    }
}

pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Records `#id` in the address bar without jumping.
pub fn push_hash(id: &str) {
    if let Some(history) = window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
    }
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn element_by_id(id: &str) -> Option<HtmlElement> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn container_scroll_left() -> f64 {
    element_by_id(MAIN_CONTAINER_ID)
        .map(|el| f64::from(el.scroll_left()))
        .unwrap_or(0.0)
}

/// Where scroll events come from for the given layout.
pub fn scroll_source(axis: ScrollAxis) -> Option<EventTarget> {
    match axis {
        ScrollAxis::Vertical => window().map(|w| w.unchecked_into::<EventTarget>()),
        ScrollAxis::Horizontal => element_by_id(MAIN_CONTAINER_ID).map(|el| el.unchecked_into::<EventTarget>()),
    }
}

/// Arrow keys belong to the field while the visitor is typing.
pub fn focus_in_form_control() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.active_element())
        .map_or(false, |el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

/// Current document geometry of each known section.
pub fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            element_by_id(id).map(|el| SectionBounds {
                id: id.clone(),
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

/// Smooth-scrolls the page (or the horizontal container) to a section.
pub fn scroll_to_section(axis: ScrollAxis, ids: &[String], id: &str, header_offset: f64) {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    match axis {
        ScrollAxis::Vertical => {
            let Some(target) = element_by_id(id) else {
                warn!("No element for section {}", id);
                return;
            };
            options.set_top(f64::from(target.offset_top()) - header_offset);
            if let Some(window) = window() {
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
        ScrollAxis::Horizontal => {
            let Some(left) = scroll_spy::horizontal_offset(ids, id, viewport_width()) else {
                return;
            };
            options.set_left(left);
            if let Some(container) = element_by_id(MAIN_CONTAINER_ID) {
                container.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
    debug!("Scrolling to section {}", id);
}

/// Watches every element matching `selector` until the observer is
/// disconnected. Returns `None` when the page has no such elements.
pub fn observe_all(
    selector: &str,
    callback: &js_sys::Function,
    threshold: f64,
    root_margin: &str,
) -> Option<IntersectionObserver> {
    let nodes = window()?.document()?.query_selector_all(selector).ok()?;
    if nodes.length() == 0 {
        return None;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer = match IntersectionObserver::new_with_options(callback, &options) {
        Ok(observer) => observer,
        Err(e) => {
            warn!("IntersectionObserver unavailable: {}", js_message(e));
            return None;
        }
    };

    for i in 0..nodes.length() {
        if let Some(el) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            observer.observe(&el);
        }
    }
    debug!("Observing {} elements matching {}", nodes.length(), selector);
    Some(observer)
}

/// One pending timer. Scheduling again, cancelling, or dropping the task
/// clears whatever was pending.
#[derive(Default)]
pub struct DeferredTask {
    pending: Option<Timeout>,
}

impl DeferredTask {
    pub fn schedule<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(Timeout::new(millis, callback));
    }

    pub fn cancel(&mut self) {
        // Dropping a gloo `Timeout` clears it.
        self.pending = None;
    }
}

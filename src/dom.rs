use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::scroll_spy::{PageHost, SectionBounds, SectionId};

/// [`PageHost`] backed by the browser window. Every lookup is done fresh so
/// sections mounted after the navigator was created are still found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DomHost;

fn section_element(id: SectionId) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id.as_str())?
        .dyn_into::<HtmlElement>()
        .ok()
}

impl PageHost for DomHost {
    fn scroll_y(&self) -> f64 {
        window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }

    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let element = section_element(id)?;
        Some(SectionBounds::new(
            id,
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn scroll_to_section(&self, id: SectionId) -> bool {
        let Some(element) = section_element(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

pub fn scroll_metrics() -> ScrollMetrics {
    let Some(window) = window() else {
        return ScrollMetrics::default();
    };
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_y: window.scroll_y().unwrap_or(0.0),
        document_height,
        viewport_height,
    }
}

/// The `#fragment` of the current URL, if there is one.
pub fn location_fragment() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    (!hash.is_empty()).then_some(hash)
}

pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn random() -> f64 {
    web_sys::js_sys::Math::random()
}

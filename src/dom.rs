//! Adapters for server-rendered markup
//!
//! Pages rendered by the backend carry `data-due-date` elements and plain
//! textareas that live outside the Leptos tree. These are wired directly.

use std::time::Duration;

use portal_core::{CountdownRenderer, CountdownState, DueTarget, PortalError, PortalResult};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlTextAreaElement};

use crate::components::resize_textarea;
use crate::ticker::run_periodically;

const DUE_DATE_SELECTOR: &str = "[data-due-date]";
/// Leptos-managed textareas carry `auto-resize` and wire themselves
const STATIC_TEXTAREA_SELECTOR: &str = "textarea:not(.auto-resize)";

fn render_err(e: JsValue) -> PortalError {
    PortalError::Render(format!("{:?}", e))
}

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Element carrying a `data-due-date` attribute
struct DueElement(HtmlElement);

impl DueTarget for DueElement {
    fn due_date(&self) -> Option<String> {
        self.0.get_attribute("data-due-date")
    }

    fn apply(&mut self, state: &CountdownState) -> PortalResult<()> {
        let doc = self
            .0
            .owner_document()
            .ok_or_else(|| PortalError::Render("element has no document".to_string()))?;
        // Build the new content off-document; the element changes in one step
        let content = doc.create_document_fragment();
        let icon = doc.create_element("i").map_err(render_err)?;
        icon.set_class_name(state.icon_class());
        let text = doc.create_element("span").map_err(render_err)?;
        text.set_text_content(Some(&state.label));
        content.append_child(&icon).map_err(render_err)?;
        content.append_child(&text).map_err(render_err)?;

        self.0.replace_children_with_node_1(&content);
        self.0.set_class_name(&state.class_name());
        Ok(())
    }
}

fn query_all<T: JsCast>(doc: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Render every `data-due-date` element now and once per `period`.
/// Does nothing when the page has none.
pub fn start_marked_countdowns(renderer: CountdownRenderer, period: Duration) {
    let Some(doc) = document() else { return };
    if !matches!(doc.query_selector(DUE_DATE_SELECTOR), Ok(Some(_))) {
        return;
    }

    run_periodically(period, move |now| {
        let mut targets: Vec<DueElement> = query_all::<HtmlElement>(&doc, DUE_DATE_SELECTOR)
            .into_iter()
            .map(DueElement)
            .collect();
        let report = renderer.render_cycle(&mut targets, now);
        log::debug!("[COUNTDOWN] rendered {}, skipped {}", report.rendered, report.skipped);
    });
}

/// Auto-resize server-rendered textareas on input and once up front
pub fn wire_static_textareas() {
    let Some(doc) = document() else { return };

    for textarea in query_all::<HtmlTextAreaElement>(&doc, STATIC_TEXTAREA_SELECTOR) {
        let target = textarea.clone();
        let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            resize_textarea(&target);
        });
        let _ = textarea.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref());
        on_input.forget();
        resize_textarea(&textarea);
    }
}

//! Textarea that grows with its content.

use leptos::html::Textarea;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlTextAreaElement;

/// Collapse to `auto`, then grow to the scroll height
pub fn resize_textarea(textarea: &HtmlTextAreaElement) {
    let style = web_sys::HtmlElement::style(textarea);
    let _ = style.set_property("height", "auto");
    let _ = style.set_property("height", &format!("{}px", textarea.scroll_height()));
}

#[component]
pub fn AutoResizeTextarea(
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let node_ref = NodeRef::<Textarea>::new();

    // Initial resize once mounted
    Effect::new(move |_| {
        if let Some(textarea) = node_ref.get() {
            resize_textarea(&textarea);
        }
    });

    view! {
        <textarea
            class="form-control auto-resize"
            name=name
            placeholder=placeholder
            rows="3"
            node_ref=node_ref
            on:input=move |ev| {
                if let Some(textarea) = ev.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                    resize_textarea(&textarea);
                }
            }
        ></textarea>
    }
}

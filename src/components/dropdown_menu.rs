//! Dropdown Menu Component
//!
//! Toggle plus menu body. All menus on a page share one `DropdownGroup`,
//! so opening one closes the rest.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::store::{store_close_dropdowns, store_toggle_dropdown, use_portal_store, PortalStore, PortalStateStoreFields};

const DROPDOWN_SELECTOR: &str = ".dropdown";

#[component]
pub fn DropdownMenu(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(optional, into)] icon: Option<String>,
    children: Children,
) -> impl IntoView {
    let store = use_portal_store();
    let key = id.clone();
    let data_id = id.clone();
    let is_open = Memo::new(move |_| store.dropdowns().read().is_open(&key));

    view! {
        <div class=move || if is_open.get() { "dropdown show" } else { "dropdown" } data-dropdown=data_id>
            <a
                href="#"
                class="dropdown-toggle"
                on:click=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    store_toggle_dropdown(&store, &id);
                }
            >
                {icon.map(|class| view! { <i class=class></i> " " })}
                {label}
            </a>
            <div class="dropdown-menu" style:display=move || if is_open.get() { "block" } else { "none" }>
                {children()}
            </div>
        </div>
    }
}

/// Close every dropdown when a click lands outside all of them
pub fn bind_outside_click(store: PortalStore) {
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(DROPDOWN_SELECTOR).ok().flatten())
            .is_some();
        if !inside {
            store_close_dropdowns(&store);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        }
    }
    on_click.forget();
}

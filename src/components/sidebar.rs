//! Collapsible Sidebar
//!
//! Collapsed state lives in the store, mirrors onto `<body>` and is
//! persisted to local storage on every toggle.

use leptos::prelude::*;
use portal_core::{SidebarPreference, BODY_TOGGLED_CLASS, SIDEBAR_TOGGLED_CLASS};

use super::{NavTabs, Section};
use crate::context::use_portal;
use crate::storage::LocalStore;
use crate::store::{use_portal_store, PortalStateStoreFields};

fn set_body_toggled(toggled: bool) {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(BODY_TOGGLED_CLASS, toggled);
    }
}

#[component]
pub fn Sidebar(#[prop(into)] title: String, sections: &'static [Section]) -> impl IntoView {
    let store = use_portal_store();
    let toggled = move || store.sidebar_toggled().get();

    // Body class follows the sidebar class
    Effect::new(move |_| set_body_toggled(toggled()));

    view! {
        <nav class=move || if toggled() { format!("sidebar {}", SIDEBAR_TOGGLED_CLASS) } else { "sidebar".to_string() }>
            <div class="sidebar-brand">{title}</div>
            <NavTabs sections=sections />
        </nav>
    }
}

#[component]
pub fn SidebarToggle() -> impl IntoView {
    let ctx = use_portal();
    let store = use_portal_store();
    // One instance per toggle so the pre-collapse value is remembered
    let pref = SidebarPreference::new(LocalStore, ctx.config.sidebar_storage_key.clone());

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        let current = store.sidebar_toggled().get_untracked();
        let next = pref.toggle(current).unwrap_or_else(|e| {
            log::error!("Failed to save sidebar state: {}", e);
            !current
        });
        store.sidebar_toggled().set(next);
    };

    view! {
        <button id="sidebarToggle" class="btn btn-link sidebar-toggle" on:click=on_click>
            <i class="fas fa-bars"></i>
        </button>
    }
}

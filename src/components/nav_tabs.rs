//! Navigation Tabs
//!
//! Nav links and the page sections they switch between.

use leptos::prelude::*;

use crate::store::{store_select_section, use_portal_store, PortalStateStoreFields};

/// A navigable page section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    /// Font Awesome icon class
    pub icon: &'static str,
}

#[component]
pub fn NavTabs(sections: &'static [Section]) -> impl IntoView {
    let store = use_portal_store();

    view! {
        <ul class="nav">
            {sections.iter().map(|section| {
                let id = section.id;
                let is_active = move || store.nav().read().active() == id;
                view! {
                    <li class="nav-item">
                        <a
                            href="#"
                            data-section=id
                            class=move || if is_active() { "nav-link active" } else { "nav-link" }
                            on:click=move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                store_select_section(&store, id);
                            }
                        >
                            <i class=section.icon></i>
                            " "
                            {section.label}
                        </a>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
}

/// Section shown only while its nav item is active
#[component]
pub fn PageSection(id: &'static str, children: Children) -> impl IntoView {
    let store = use_portal_store();

    view! {
        <section
            id=id
            class="main-content page-section"
            style:display=move || if store.nav().read().is_visible(id) { "block" } else { "none" }
        >
            {children()}
        </section>
    }
}

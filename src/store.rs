//! Portal State Store
//!
//! Per-page presentation state with field-level reactivity.

use leptos::prelude::*;
use portal_core::{DropdownGroup, Level, NavState};
use reactive_stores::Store;

use crate::components::Section;

#[derive(Clone, Debug, Store)]
pub struct PortalState {
    /// Visible section / active nav item
    pub nav: NavState,
    /// Which dropdown, if any, is open
    pub dropdowns: DropdownGroup<String>,
    /// Level chosen in the catalog picker
    pub selected_level: Option<Level>,
    /// Sidebar collapsed
    pub sidebar_toggled: bool,
}

impl PortalState {
    pub fn new(nav: NavState, sidebar_toggled: bool) -> Self {
        Self {
            nav,
            dropdowns: DropdownGroup::new(),
            selected_level: None,
            sidebar_toggled,
        }
    }
}

pub type PortalStore = Store<PortalState>;

pub fn use_portal_store() -> PortalStore {
    expect_context::<PortalStore>()
}

/// Navigation over a page's sections
pub fn nav_for(sections: &[Section], initial: &str) -> NavState {
    NavState::starting_at(sections.iter().map(|s| s.id), initial)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_select_section(store: &PortalStore, section: &str) {
    if let Err(e) = store.nav().write().select(section) {
        log::warn!("{}", e);
    }
}

pub fn store_toggle_dropdown(store: &PortalStore, id: &str) {
    store.dropdowns().write().toggle(id.to_string());
}

pub fn store_close_dropdowns(store: &PortalStore) {
    store.dropdowns().write().close_all();
}

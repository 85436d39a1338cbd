//! Student Dashboard
//!
//! Tabbed home page with the course catalog and a profile dropdown.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{bind_outside_click, CourseCatalog, LevelPicker, NavTabs, PageSection, ProfileDropdown, Section};
use crate::context::use_portal;
use crate::store::{nav_for, PortalState};

const SECTIONS: &[Section] = &[
    Section { id: "Home", label: "Home", icon: "fas fa-home" },
    Section { id: "Courses", label: "Courses", icon: "fas fa-book" },
    Section { id: "Progress", label: "My Progress", icon: "fas fa-chart-line" },
];

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let ctx = use_portal();
    let store = Store::new(PortalState::new(nav_for(SECTIONS, &ctx.config.initial_section), false));
    provide_context(store);
    bind_outside_click(store);

    view! {
        <div class="dashboard">
            <header class="dashboard-header">
                <NavTabs sections=SECTIONS />
                <ProfileDropdown />
            </header>

            <PageSection id="Home">
                <h2>"Welcome back"</h2>
                <p>"Pick a level under Courses to browse the catalog."</p>
            </PageSection>

            <PageSection id="Courses">
                <h2>"Courses"</h2>
                <LevelPicker />
                <CourseCatalog />
            </PageSection>

            <PageSection id="Progress">
                <h2>"My Progress"</h2>
                <p>"Courses you start appear here."</p>
            </PageSection>
        </div>
    }
}

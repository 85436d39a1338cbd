//! Portal Frontend App
//!
//! Picks the student dashboard or the teacher portal from the host page.

use leptos::prelude::*;
use portal_core::PortalConfig;

use crate::context::PortalContext;
use crate::pages::{StudentDashboard, TeacherPortal};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Portal {
    Student,
    Teacher,
}

/// `<body data-portal="teacher">` selects the teacher portal
fn detect_portal() -> Portal {
    let attr = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|body| body.get_attribute("data-portal"));
    match attr.as_deref() {
        Some("teacher") => Portal::Teacher,
        _ => Portal::Student,
    }
}

#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    provide_context(PortalContext::new(config));

    let portal = detect_portal();
    log::info!("[APP] Mounting {:?} portal", portal);

    match portal {
        Portal::Student => view! { <StudentDashboard /> }.into_any(),
        Portal::Teacher => view! { <TeacherPortal /> }.into_any(),
    }
}

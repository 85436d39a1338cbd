//! Portal Context
//!
//! Configuration, countdown renderer and the ticking clock, provided once
//! via the Leptos Context API.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use portal_core::{CountdownRenderer, PortalConfig};

use crate::ticker::use_wall_clock;

/// Id of the optional inline JSON config block
const CONFIG_ELEMENT_ID: &str = "portal-config";

#[derive(Clone)]
pub struct PortalContext {
    pub config: Arc<PortalConfig>,
    pub renderer: CountdownRenderer,
    /// Current time, refreshed every countdown period
    pub now: ReadSignal<DateTime<Utc>>,
}

impl PortalContext {
    pub fn new(config: PortalConfig) -> Self {
        let renderer = CountdownRenderer::from_config(&config);
        let now = use_wall_clock(config.refresh_interval());
        Self {
            config: Arc::new(config),
            renderer,
            now,
        }
    }
}

pub fn use_portal() -> PortalContext {
    expect_context::<PortalContext>()
}

/// Read `<script type="application/json" id="portal-config">`.
/// Missing block means defaults; a broken one is logged and ignored.
pub fn load_page_config() -> PortalConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        None => PortalConfig::default(),
        Some(raw) => PortalConfig::from_json(&raw).unwrap_or_else(|e| {
            log::error!("Ignoring page config: {}", e);
            PortalConfig::default()
        }),
    }
}

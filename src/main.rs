//! Portal Frontend Entry Point

mod logger;
mod ticker;
mod storage;
mod context;
mod store;
mod dom;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use portal_core::CountdownRenderer;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let config = context::load_page_config();

    // Server-rendered markup outside the app tree
    dom::start_marked_countdowns(CountdownRenderer::from_config(&config), config.refresh_interval());
    dom::wire_static_textareas();

    mount_to_body(move || view! { <App config=config /> });
}

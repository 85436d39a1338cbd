//! Due Countdown Component
//!
//! Live "N days remaining / overdue" badge driven by the context clock.

use leptos::prelude::*;
use portal_core::COUNTDOWN_CLASS;

use crate::context::use_portal;

/// Countdown for one due date. When the date cannot be parsed the badge
/// keeps showing `fallback` and the failure is logged every refresh.
#[component]
pub fn DueCountdown(
    #[prop(into)] due_date: String,
    #[prop(optional, into)] fallback: String,
) -> impl IntoView {
    let ctx = use_portal();
    let renderer = ctx.renderer;
    let now = ctx.now;

    let state = Memo::new(move |_| match renderer.evaluate(&due_date, now.get()) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("Error processing due date: {}", e);
            None
        }
    });

    view! {
        {move || match state.get() {
            Some(state) => {
                let class = state.class_name();
                let icon = state.icon_class();
                let label = state.label;
                view! {
                    <span class=class>
                        <i class=icon></i>
                        <span>{label}</span>
                    </span>
                }.into_any()
            }
            None => view! { <span class=COUNTDOWN_CLASS>{fallback.clone()}</span> }.into_any(),
        }}
    }
}

//! Course Catalog Components
//!
//! Level picker, filtered course cards and star ratings.

use leptos::prelude::*;
use portal_core::{filter_by_level, rating_stars, start_course_message, CatalogView, Course, Level, EMPTY_CATALOG_MESSAGE};
use wasm_bindgen::prelude::*;

use crate::context::use_portal;
use crate::store::{use_portal_store, PortalStateStoreFields};

/// Acknowledge a course start. Exported as `startCourse` for server-rendered
/// buttons.
#[wasm_bindgen(js_name = startCourse)]
pub fn start_course(course_name: &str) {
    let message = start_course_message(course_name);
    log::info!("[COURSE] {}", message);
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(&message);
    }
}

#[component]
pub fn RatingStars(rating: f32) -> impl IntoView {
    view! {
        <div class="rating">
            {rating_stars(rating).into_iter().map(|star| view! { <i class=star.icon_class()></i> }).collect_view()}
        </div>
    }
}

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let Course { title, description, image, rating, .. } = course;
    let start_title = title.clone();

    view! {
        <div class="course-card">
            <div class="card-photo">
                <img src=image alt=title.clone() class="course-image" />
            </div>
            <div class="card-content">
                <h3>{title}</h3>
                <p>{description}</p>
                <button on:click=move |_| start_course(&start_title)>"Start"</button>
                <RatingStars rating=rating />
            </div>
        </div>
    }
}

/// Level options; the clicked one becomes the only selected option
#[component]
pub fn LevelPicker() -> impl IntoView {
    let store = use_portal_store();

    view! {
        <div class="level-options">
            {Level::ALL.into_iter().map(|level| {
                let is_selected = move || store.selected_level().get() == Some(level);
                view! {
                    <div
                        class=move || if is_selected() { "level-option selected" } else { "level-option" }
                        data-level=level.as_str()
                        on:click=move |_| store.selected_level().set(Some(level))
                    >
                        {level.label()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Cards for the selected level, or the empty-state message
#[component]
pub fn CourseCatalog() -> impl IntoView {
    let ctx = use_portal();
    let store = use_portal_store();
    let courses = ctx.config.catalog();

    let filtered = Memo::new(move |_| {
        store
            .selected_level()
            .get()
            .map(|level| filter_by_level(&courses, level.as_str()))
    });

    view! {
        <div id="filtered-courses">
            {move || match filtered.get() {
                None => view! { <p class="catalog-hint">"Choose a level to see matching courses."</p> }.into_any(),
                Some(CatalogView::Empty) => view! { <p>{EMPTY_CATALOG_MESSAGE}</p> }.into_any(),
                Some(CatalogView::Cards(list)) => view! {
                    <div class="card-container">
                        {list.into_iter().map(|course| view! { <CourseCard course=course /> }).collect_view()}
                    </div>
                }.into_any(),
            }}
        </div>
    }
}

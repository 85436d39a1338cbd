//! Teacher Portal
//!
//! Collapsible sidebar, assignment countdowns, header dropdowns and an
//! announcement editor.

use leptos::prelude::*;
use portal_core::{Assignment, SidebarPreference};
use reactive_stores::Store;

use crate::components::{
    bind_outside_click, AutoResizeTextarea, DropdownMenu, DueCountdown, PageSection, Section, Sidebar, SidebarToggle,
};
use crate::context::use_portal;
use crate::storage::LocalStore;
use crate::store::{nav_for, PortalState};

const SECTIONS: &[Section] = &[
    Section { id: "Dashboard", label: "Dashboard", icon: "fas fa-tachometer-alt" },
    Section { id: "Assignments", label: "Assignments", icon: "fas fa-tasks" },
    Section { id: "Announcements", label: "Announcements", icon: "fas fa-bullhorn" },
];

#[component]
fn AssignmentRow(assignment: Assignment) -> impl IntoView {
    let Assignment { title, course_code, due_date, total_points } = assignment;

    view! {
        <tr class="assignment-row">
            <td>{title}</td>
            <td>{course_code}</td>
            <td>{format!("{} pts", total_points)}</td>
            <td><DueCountdown due_date=due_date fallback="No due date" /></td>
        </tr>
    }
}

#[component]
pub fn TeacherPortal() -> impl IntoView {
    let ctx = use_portal();
    let restored = SidebarPreference::new(LocalStore, ctx.config.sidebar_storage_key.clone()).load();
    let store = Store::new(PortalState::new(nav_for(SECTIONS, &ctx.config.initial_section), restored));
    provide_context(store);
    bind_outside_click(store);

    let assignments = ctx.config.assignments.clone();
    let assignment_count = assignments.len();

    view! {
        <div class="teacher-portal">
            <Sidebar title="Teacher Portal" sections=SECTIONS />

            <div class="content-wrapper">
                <header class="topbar">
                    <SidebarToggle />
                    <div class="topbar-menus">
                        <DropdownMenu id="notifications" label="Alerts" icon="fas fa-bell">
                            <span class="dropdown-item">"No new alerts"</span>
                        </DropdownMenu>
                        <DropdownMenu id="account" label="Account" icon="fas fa-user">
                            <a class="dropdown-item" href="/teacher/profile/">"Profile"</a>
                            <a class="dropdown-item" href="/accounts/logout/">"Logout"</a>
                        </DropdownMenu>
                    </div>
                </header>

                <PageSection id="Dashboard">
                    <h2>"Dashboard"</h2>
                    <p>{format!("{} assignments tracked", assignment_count)}</p>
                </PageSection>

                <PageSection id="Assignments">
                    <h2>"Assignments"</h2>
                    {if assignments.is_empty() {
                        view! { <p class="empty-state">"No assignments yet."</p> }.into_any()
                    } else {
                        view! {
                            <table class="table assignments">
                                <thead>
                                    <tr>
                                        <th>"Title"</th>
                                        <th>"Course"</th>
                                        <th>"Points"</th>
                                        <th>"Due"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {assignments.into_iter().map(|assignment| view! { <AssignmentRow assignment=assignment /> }).collect_view()}
                                </tbody>
                            </table>
                        }.into_any()
                    }}
                </PageSection>

                <PageSection id="Announcements">
                    <h2>"Announcements"</h2>
                    <AutoResizeTextarea name="announcement" placeholder="Write an announcement..." />
                </PageSection>
            </div>
        </div>
    }
}

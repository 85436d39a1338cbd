//! UI Components
//!
//! Reusable Leptos components shared by both portals.

mod nav_tabs;
mod dropdown_menu;
mod profile_dropdown;
mod course_catalog;
mod due_countdown;
mod auto_resize_textarea;
mod sidebar;

pub use nav_tabs::{NavTabs, PageSection, Section};
pub use dropdown_menu::{bind_outside_click, DropdownMenu};
pub use profile_dropdown::ProfileDropdown;
pub use course_catalog::{CourseCatalog, LevelPicker};
pub use due_countdown::DueCountdown;
pub use auto_resize_textarea::{resize_textarea, AutoResizeTextarea};
pub use sidebar::{Sidebar, SidebarToggle};

//! Portal Core
//!
//! Presentation state for the student dashboard and the teacher portal,
//! kept free of any browser API so it can be tested natively.
//! The WASM frontend is a thin rendering shell over these types.

mod error;
mod config;
mod clock;
mod countdown;
mod periodic;
mod catalog;
mod rating;
mod nav;
mod dropdown;
mod sidebar;

pub use error::{PortalError, PortalResult};
pub use config::{Assignment, PortalConfig};
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::{
    compute_countdown, parse_due_date, CountdownRenderer, CountdownState, CycleReport, DueItem,
    DueStatus, DueTarget, COUNTDOWN_CLASS,
};
pub use periodic::PeriodicTask;
pub use catalog::{default_catalog, filter_by_level, start_course_message, CatalogView, Course, Level, EMPTY_CATALOG_MESSAGE};
pub use rating::{rating_stars, StarKind};
pub use nav::NavState;
pub use dropdown::DropdownGroup;
pub use sidebar::{KeyValueStore, MemoryStore, SidebarPreference, BODY_TOGGLED_CLASS, SIDEBAR_TOGGLED_CLASS, TOGGLED_VALUE};

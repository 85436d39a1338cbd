//! Profile dropdown in the dashboard header.

use leptos::prelude::*;

use super::DropdownMenu;

#[component]
pub fn ProfileDropdown() -> impl IntoView {
    view! {
        <div id="profileDropdown" class="profile">
            <DropdownMenu id="profile" label="Profile" icon="fas fa-user-circle">
                <a class="dropdown-item" href="/accounts/profile/">"My Profile"</a>
                <a class="dropdown-item" href="/accounts/settings/">"Settings"</a>
                <a class="dropdown-item" href="/accounts/logout/">"Logout"</a>
            </DropdownMenu>
        </div>
    }
}

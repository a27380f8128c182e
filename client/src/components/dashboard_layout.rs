//! Dashboard shell: sidebar plus routed content region.
//!
//! ARCHITECTURE
//! ============
//! Owns the sidebar-open signal. The content region's left margin tracks the
//! sidebar width so the fixed sidebar never overlaps page content.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::footer::Footer;
use crate::components::sidebar::{Sidebar, sidebar_width};
use crate::net::types::User;

/// Layout wrapping every authenticated route.
#[component]
pub fn DashboardLayout(#[prop(into)] user: Signal<Option<User>>, on_logout: Callback<()>) -> impl IntoView {
    let (is_open, set_open) = signal(false);
    let pathname = use_location().pathname;

    view! {
        <div class="dashboard">
            <Sidebar user=user pathname=pathname on_logout=on_logout is_open=is_open set_open=set_open/>
            <div class="dashboard__content" style:margin-left=move || sidebar_width(is_open.get())>
                <main class="dashboard__main">
                    <Outlet/>
                </main>
                <Footer/>
            </div>
        </div>
    }
}

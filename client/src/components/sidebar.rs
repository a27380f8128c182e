//! Collapsible navigation sidebar for the dashboard shell.
//!
//! ARCHITECTURE
//! ============
//! Open/closed state is owned by `DashboardLayout` and passed in as a
//! read/write signal pair so the content margin and the sidebar width always
//! agree. The sidebar expands on pointer enter and collapses on pointer leave.
//! The current pathname is passed in rather than read from the router so the
//! rail renders the same way inside and outside a `<Router>`.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Sidebar width when expanded; also the content region's left margin.
pub const OPEN_WIDTH: &str = "16rem";
/// Sidebar width when collapsed to the icon rail.
pub const CLOSED_WIDTH: &str = "5rem";

/// One link in the sidebar navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    /// Active only on the exact path, not on descendants.
    pub exact: bool,
    pub admin_only: bool,
}

pub static NAV_ENTRIES: [NavEntry; 5] = [
    NavEntry { label: "Dashboard", path: "/", icon: "🏠", exact: true, admin_only: false },
    NavEntry { label: "My Library", path: "/my-library", icon: "📚", exact: false, admin_only: false },
    NavEntry { label: "Submit Book", path: "/submit", icon: "➕", exact: false, admin_only: false },
    NavEntry { label: "Admin", path: "/admin", icon: "⚙️", exact: false, admin_only: true },
    NavEntry { label: "About Us", path: "/about", icon: "ℹ️", exact: false, admin_only: false },
];

/// Entries visible to `user`, in display order.
pub fn nav_entries(user: Option<&User>) -> Vec<&'static NavEntry> {
    let admin = user.is_some_and(User::is_admin);
    NAV_ENTRIES.iter().filter(|entry| admin || !entry.admin_only).collect()
}

/// Whether `entry` should be highlighted for the current `pathname`.
pub fn is_active(pathname: &str, entry: &NavEntry) -> bool {
    let current = pathname.trim_end_matches('/');
    let target = entry.path.trim_end_matches('/');
    if current == target {
        return true;
    }
    !entry.exact && current.strip_prefix(target).is_some_and(|rest| rest.starts_with('/'))
}

/// Pointer transitions that drive the open/closed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
}

/// Open state after `pointer`. No debounce: the last event wins.
pub fn open_after(pointer: Pointer) -> bool {
    matches!(pointer, Pointer::Enter)
}

pub fn sidebar_width(open: bool) -> &'static str {
    if open { OPEN_WIDTH } else { CLOSED_WIDTH }
}

pub fn avatar_initial(user: Option<&User>) -> char {
    user.map_or('L', User::avatar_initial)
}

fn label_class(open: bool) -> &'static str {
    if open { "sidebar__label sidebar__label--visible" } else { "sidebar__label" }
}

fn link_class(active: bool) -> &'static str {
    if active { "sidebar__link sidebar__link--active" } else { "sidebar__link" }
}

/// Navigation rail with role-gated links and the user badge.
#[component]
pub fn Sidebar(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] pathname: Signal<String>,
    on_logout: Callback<()>,
    is_open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <aside
            class=move || if is_open.get() { "sidebar sidebar--open" } else { "sidebar" }
            style:width=move || sidebar_width(is_open.get())
            on:mouseenter=move |_| set_open.set(open_after(Pointer::Enter))
            on:mouseleave=move |_| set_open.set(open_after(Pointer::Leave))
        >
            <div class="sidebar__brand">
                <img src="/logo.svg" alt="LibroVault Logo" class="sidebar__logo"/>
                <span class=move || label_class(is_open.get())>"LibroVault"</span>
            </div>

            <nav class="sidebar__nav">
                {move || {
                    user.with(|u| nav_entries(u.as_ref()))
                        .into_iter()
                        .map(|entry| {
                            let active = move || pathname.with(|p| is_active(p, entry));
                            view! {
                                <a
                                    href=entry.path
                                    class=move || link_class(active())
                                    aria-current=move || active().then_some("page")
                                >
                                    <span class="sidebar__icon" aria-hidden="true">{entry.icon}</span>
                                    <span class=move || label_class(is_open.get())>{entry.label}</span>
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <div class="sidebar__footer">
                <div class=move || if is_open.get() { "sidebar__user sidebar__user--open" } else { "sidebar__user" }>
                    <div class="sidebar__avatar">
                        {move || user.with(|u| avatar_initial(u.as_ref())).to_string()}
                    </div>
                    <Show when=move || is_open.get()>
                        <div class="sidebar__user-info">
                            <p class="sidebar__user-name">
                                {move || user.with(|u| u.as_ref().map_or("User", User::display_name).to_owned())}
                            </p>
                            <p class="sidebar__user-email">
                                {move || user.with(|u| u.as_ref().and_then(|u| u.email.clone()).unwrap_or_default())}
                            </p>
                        </div>
                        <button class="sidebar__logout" title="Logout" on:click=move |_| on_logout.run(())>
                            <LogoutIcon/>
                        </button>
                    </Show>
                </div>
            </div>
        </aside>
    }
}

#[component]
fn LogoutIcon() -> impl IntoView {
    view! {
        <svg class="sidebar__logout-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d="M17 16l4-4m0 0l-4-4m4 4H7m6 4v1a3 3 0 01-3 3H6a3 3 0 01-3-3V7a3 3 0 013-3h4a3 3 0 013 3v1"
            />
        </svg>
    }
}

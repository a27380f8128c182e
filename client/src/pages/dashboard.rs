//! Authenticated dashboard routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardPage` is the parent route for every signed-in screen. It guards
//! against signed-out visitors, owns the logout flow, and hands the user down
//! to `DashboardLayout`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard_layout::DashboardLayout;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Parent route: redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let user = Signal::derive(move || auth.with(|a| a.user.clone()));

    // The unauth redirect takes over once the state is cleared.
    let on_logout = Callback::new(move |()| {
        let token = auth.with_untracked(|a| a.access_token().map(str::to_owned));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(token) = token {
                if let Err(e) = crate::net::auth::sign_out(&token).await {
                    log::warn!("sign out failed: {e}");
                }
            }
            crate::net::session::clear();
            auth.set(AuthState::signed_out());
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            auth.set(AuthState::signed_out());
        }
    });

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.user.is_some())
            fallback=move || {
                view! {
                    <div class="dashboard-placeholder">
                        <p>{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <DashboardLayout user=user on_logout=on_logout/>
        </Show>
    }
}

/// Landing page at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map_or_else(|| "Welcome back".to_owned(), |u| format!("Welcome back, {}", u.display_name()))
        })
    };

    view! {
        <section class="page">
            <h1 class="page__title">{greeting}</h1>
            <p class="page__lead">"Browse your library or submit a new book from the sidebar."</p>
        </section>
    }
}

//! Dashboard section pages reachable from the sidebar.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn MyLibraryPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"My Library"</h1>
            <p class="page__lead">"Books you have saved will appear here."</p>
        </section>
    }
}

#[component]
pub fn SubmitBookPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"Submit Book"</h1>
            <p class="page__lead">"Share a title with the LibroVault community."</p>
        </section>
    }
}

/// Admin tools. The sidebar hides the link from non-admins; this page also
/// refuses them when the URL is typed directly.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let is_admin = move || auth.with(|a| a.user.as_ref().is_some_and(|u| u.is_admin()));

    view! {
        <section class="page">
            <h1 class="page__title">"Admin"</h1>
            <Show
                when=is_admin
                fallback=|| view! { <p class="page__error">"You are not authorized to view this page."</p> }
            >
                <p class="page__lead">"Review submissions and manage members."</p>
            </Show>
        </section>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">"About Us"</h1>
            <p class="page__lead">"LibroVault is a shared home for the books you read and recommend."</p>
        </section>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::pages::dashboard::{DashboardPage, HomePage};
use crate::pages::login::LoginPage;
use crate::pages::sections::{AboutPage, AdminPage, MyLibraryPage, SubmitBookPage};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/logo.svg"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, restores the session in the browser, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            let session = crate::net::session::restore().await;
            log::info!("session restored: signed_in={}", session.is_some());
            auth.set(AuthState::resolved(session));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/librovault.css"/>
        <Title text="LibroVault"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=DashboardPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("my-library") view=MyLibraryPage/>
                    <Route path=StaticSegment("submit") view=SubmitBookPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

//! Login page supporting email + password, signup, password reset, and Google OAuth.
//!
//! SYSTEM CONTEXT
//! ==============
//! Form state lives in a `LoginForm` signal. Handlers ask it for the next
//! `AuthRequest`, run that request against the auth API, then apply the
//! `Outcome` it returns (alert and/or navigation).

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::OAuthProvider;
use crate::state::auth::AuthState;
use crate::state::login::{AuthRequest, LoginForm, LoginView};
use crate::util::auth::should_redirect_home;
use crate::util::browser;

type Redirect = RwSignal<Option<&'static str>>;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form = RwSignal::new(LoginForm::default());
    let redirect: Redirect = RwSignal::new(None);
    let navigate = use_navigate();

    // One effect for both the post-login redirect and "already signed in".
    Effect::new(move || {
        let target = redirect.get().or_else(|| auth.with(should_redirect_home).then_some("/"));
        if let Some(path) = target {
            navigate(path, NavigateOptions::default());
        }
    });

    let view_mode = Memo::new(move |_| form.with(|f| f.view));
    let loading = Memo::new(move |_| form.with(|f| f.loading));

    view! {
        <div class="login-page">
            <div class="login-page__sparkle" aria-hidden="true">
                <svg width="40" height="40" viewBox="0 0 24 24" fill="currentColor">
                    <path d="M12 0L14.59 9.41L24 12L14.59 14.59L12 24L9.41 14.59L0 12L9.41 9.41L12 0Z"/>
                </svg>
            </div>
            <div class="login-card">
                <div class="login-card__form-column">
                    <div class="login-card__header">
                        <h1 class="login-card__title">{move || form.with(LoginForm::heading)}</h1>
                        <Show when=move || view_mode.get() == LoginView::ForgotPassword>
                            <p class="login-card__subtitle">"Enter your email and we'll send you a reset link"</p>
                        </Show>
                    </div>
                    {move || match view_mode.get() {
                        LoginView::ForgotPassword => reset_form(form, loading, auth, redirect).into_any(),
                        LoginView::Login | LoginView::Signup => {
                            credentials_form(form, loading, auth, redirect).into_any()
                        }
                    }}
                </div>
                <div class="login-card__art" aria-hidden="true">
                    <img class="login-card__illustration" src="/logo.svg" alt=""/>
                    <p class="login-card__tagline">"Every book, one vault."</p>
                </div>
            </div>
        </div>
    }
}

fn credentials_form(form: RwSignal<LoginForm>, loading: Memo<bool>, auth: RwSignal<AuthState>, redirect: Redirect) -> impl IntoView {
    let is_signup = move || form.with(|f| f.view == LoginView::Signup);

    let on_google = move |_| {
        if let Some(request) = form.try_update(|f| f.begin_oauth(OAuthProvider::Google)).flatten() {
            dispatch(request, form, auth, redirect);
        }
    };

    view! {
        <form class="login-form" on:submit=move |ev: SubmitEvent| submit(ev, form, auth, redirect)>
            <Show when=is_signup>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    required
                    prop:value=move || form.with(|f| f.username.clone())
                    on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                />
            </Show>
            <input
                class="login-input"
                type="email"
                placeholder=move || if is_signup() { "Email" } else { "Please enter your email" }
                required
                prop:value=move || form.with(|f| f.email.clone())
                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
            />
            <input
                class="login-input"
                type="password"
                placeholder="Password"
                required
                prop:value=move || form.with(|f| f.password.clone())
                on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
            />
            <Show when=move || !is_signup()>
                <div class="login-form__aside">
                    <button
                        type="button"
                        class="login-link"
                        disabled=move || loading.get()
                        on:click=move |_| form.update(LoginForm::open_forgot_password)
                    >
                        "Forgot Password?"
                    </button>
                </div>
            </Show>
            <button class="login-button" type="submit" disabled=move || loading.get()>
                {move || form.with(LoginForm::submit_label)}
            </button>
        </form>

        <div class="login-social">
            <button type="button" class="login-social__button" disabled=move || loading.get() on:click=on_google>
                <GoogleIcon/>
                <span>"Continue with Google"</span>
            </button>
        </div>

        <p class="login-toggle">
            <button type="button" class="login-link login-link--strong" on:click=move |_| form.update(LoginForm::toggle_mode)>
                {move || form.with(LoginForm::toggle_label)}
            </button>
        </p>
    }
}

fn reset_form(form: RwSignal<LoginForm>, loading: Memo<bool>, auth: RwSignal<AuthState>, redirect: Redirect) -> impl IntoView {
    view! {
        <form class="login-form" on:submit=move |ev: SubmitEvent| submit(ev, form, auth, redirect)>
            <input
                class="login-input"
                type="email"
                placeholder="Enter your email"
                required
                prop:value=move || form.with(|f| f.reset_email.clone())
                on:input=move |ev| form.update(|f| f.reset_email = event_target_value(&ev))
            />
            <button class="login-button" type="submit" disabled=move || loading.get()>
                {move || form.with(LoginForm::submit_label)}
            </button>
            <button type="button" class="login-button login-button--secondary" on:click=move |_| form.update(LoginForm::back_to_login)>
                "Back to Login"
            </button>
        </form>
    }
}

fn submit(ev: SubmitEvent, form: RwSignal<LoginForm>, auth: RwSignal<AuthState>, redirect: Redirect) {
    ev.prevent_default();
    match form.try_update(LoginForm::begin_submit) {
        Some(Ok(request)) => dispatch(request, form, auth, redirect),
        Some(Err(blocked)) => {
            if let Some(message) = blocked.alert_message() {
                browser::alert(message);
            }
        }
        None => {}
    }
}

/// Run `request` in the background and apply its outcome.
fn dispatch(request: AuthRequest, form: RwSignal<LoginForm>, auth: RwSignal<AuthState>, redirect: Redirect) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = perform(&request, auth).await;
        if let Err(e) = &result {
            log::warn!("auth request failed: {e}");
        }
        let outcome = form.try_update(|f| f.settle(&request, result)).unwrap_or_default();
        if let Some(message) = outcome.alert {
            browser::alert(&message);
        }
        if let Some(path) = outcome.navigate_to {
            redirect.set(Some(path));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, form, auth, redirect);
    }
}

#[cfg(feature = "hydrate")]
async fn perform(request: &AuthRequest, auth: RwSignal<AuthState>) -> Result<(), crate::net::auth::AuthError> {
    use crate::net::{auth as api, session};

    match request {
        AuthRequest::SignIn { email, password } => {
            let signed_in = api::sign_in_with_password(email, password).await?;
            session::store(&signed_in);
            auth.set(AuthState::resolved(Some(signed_in)));
            Ok(())
        }
        AuthRequest::SignUp { email, password, username } => api::sign_up(email, password, username).await,
        AuthRequest::ResetPassword { email } => api::reset_password_for_email(email, &browser::origin()).await,
        AuthRequest::OAuth(provider) => api::sign_in_with_oauth(*provider, &browser::origin()),
    }
}

#[component]
fn GoogleIcon() -> impl IntoView {
    view! {
        <svg class="login-social__icon" viewBox="0 0 48 48">
            <path fill="#EA4335" d="M24 9.5c3.54 0 6.71 1.22 9.21 3.6l6.85-6.85C35.9 2.38 30.47 0 24 0 14.62 0 6.51 5.38 2.56 13.22l7.98 6.19C12.43 13.72 17.74 9.5 24 9.5z"></path>
            <path fill="#4285F4" d="M46.98 24.55c0-1.57-.15-3.09-.38-4.55H24v8.51h12.8c-.57 2.73-2.18 4.96-4.52 6.51l7.87 6.09c4.63-4.27 7.23-10.43 7.23-17.65z"></path>
            <path fill="#FBBC05" d="M10.53 28.59c-.48-1.45-.76-2.99-.76-4.59s.27-3.14.76-4.59l-7.98-6.19C.92 16.46 0 20.12 0 24c0 3.88.92 7.54 2.56 10.78l7.97-6.19z"></path>
            <path fill="#34A853" d="M24 48c6.48 0 11.93-2.13 15.89-5.81l-7.87-6.09c-2.16 1.45-4.92 2.3-8.02 2.3-6.26 0-11.57-4.22-13.47-9.91l-7.98 6.19C6.51 42.62 14.62 48 24 48z"></path>
        </svg>
    }
}

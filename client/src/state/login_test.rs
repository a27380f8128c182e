use super::*;

fn filled(view: LoginView) -> LoginForm {
    LoginForm {
        view,
        email: "a@b.com".to_owned(),
        password: "hunter2".to_owned(),
        username: "alice".to_owned(),
        reset_email: String::new(),
        loading: false,
    }
}

fn provider_err(message: &str) -> AuthError {
    AuthError::Provider { status: 400, message: message.to_owned() }
}

// =============================================================
// Labels
// =============================================================

#[test]
fn headings_follow_view() {
    assert_eq!(filled(LoginView::Login).heading(), "Welcome to LibroVault");
    assert_eq!(filled(LoginView::Signup).heading(), "Create Account");
    assert_eq!(filled(LoginView::ForgotPassword).heading(), "Reset Password");
}

#[test]
fn submit_labels_follow_view_and_loading() {
    let mut form = filled(LoginView::Login);
    assert_eq!(form.submit_label(), "Login");
    form.loading = true;
    assert_eq!(form.submit_label(), "Processing...");

    let mut form = filled(LoginView::Signup);
    assert_eq!(form.submit_label(), "Sign Up");
    form.loading = true;
    assert_eq!(form.submit_label(), "Processing...");

    let mut form = filled(LoginView::ForgotPassword);
    assert_eq!(form.submit_label(), "Send Reset Link");
    form.loading = true;
    assert_eq!(form.submit_label(), "Sending...");
}

#[test]
fn toggle_label_names_other_mode() {
    assert_eq!(filled(LoginView::Login).toggle_label(), "Sign up");
    assert_eq!(filled(LoginView::Signup).toggle_label(), "Login");
}

// =============================================================
// View transitions
// =============================================================

#[test]
fn toggle_mode_clears_credentials_both_ways() {
    let mut form = filled(LoginView::Login);
    form.toggle_mode();
    assert_eq!(form.view, LoginView::Signup);
    assert!(form.email.is_empty() && form.password.is_empty() && form.username.is_empty());

    form.email = "x@y.com".to_owned();
    form.password = "pw".to_owned();
    form.username = "bob".to_owned();
    form.toggle_mode();
    assert_eq!(form.view, LoginView::Login);
    assert!(form.email.is_empty() && form.password.is_empty() && form.username.is_empty());
}

#[test]
fn toggle_mode_is_ignored_on_reset_form() {
    let mut form = filled(LoginView::ForgotPassword);
    form.toggle_mode();
    assert_eq!(form.view, LoginView::ForgotPassword);
    assert_eq!(form.email, "a@b.com");
}

#[test]
fn forgot_password_round_trip_clears_reset_email() {
    let mut form = filled(LoginView::Login);
    form.open_forgot_password();
    assert_eq!(form.view, LoginView::ForgotPassword);
    form.reset_email = "a@b.com".to_owned();
    form.back_to_login();
    assert_eq!(form.view, LoginView::Login);
    assert!(form.reset_email.is_empty());
}

#[test]
fn forgot_password_link_ignored_while_loading() {
    let mut form = filled(LoginView::Login);
    form.loading = true;
    form.open_forgot_password();
    assert_eq!(form.view, LoginView::Login);
}

#[test]
fn forgot_password_link_only_from_login() {
    let mut form = filled(LoginView::Signup);
    form.open_forgot_password();
    assert_eq!(form.view, LoginView::Signup);
}

// =============================================================
// Submit
// =============================================================

#[test]
fn submit_login_requests_sign_in() {
    let mut form = filled(LoginView::Login);
    let request = form.begin_submit().unwrap();
    assert_eq!(request, AuthRequest::SignIn { email: "a@b.com".to_owned(), password: "hunter2".to_owned() });
    assert!(form.loading);
}

#[test]
fn submit_signup_requests_sign_up_with_username() {
    let mut form = filled(LoginView::Signup);
    let request = form.begin_submit().unwrap();
    assert_eq!(
        request,
        AuthRequest::SignUp {
            email: "a@b.com".to_owned(),
            password: "hunter2".to_owned(),
            username: "alice".to_owned(),
        }
    );
}

#[test]
fn submit_reset_with_empty_email_is_blocked_before_loading() {
    let mut form = filled(LoginView::ForgotPassword);
    let blocked = form.begin_submit().unwrap_err();
    assert_eq!(blocked, SubmitBlocked::MissingResetEmail);
    assert_eq!(blocked.alert_message(), Some(RESET_EMAIL_REQUIRED_MESSAGE));
    assert!(!form.loading);
}

#[test]
fn submit_reset_with_email_requests_reset() {
    let mut form = filled(LoginView::ForgotPassword);
    form.reset_email = "r@b.com".to_owned();
    assert_eq!(form.begin_submit(), Ok(AuthRequest::ResetPassword { email: "r@b.com".to_owned() }));
    assert!(form.loading);
}

#[test]
fn submit_while_loading_is_busy_without_alert() {
    let mut form = filled(LoginView::Login);
    form.loading = true;
    let blocked = form.begin_submit().unwrap_err();
    assert_eq!(blocked, SubmitBlocked::Busy);
    assert_eq!(blocked.alert_message(), None);
}

#[test]
fn oauth_blocked_while_loading() {
    let mut form = filled(LoginView::Login);
    assert_eq!(form.begin_oauth(OAuthProvider::Google), Some(AuthRequest::OAuth(OAuthProvider::Google)));
    assert!(form.loading);
    assert_eq!(form.begin_oauth(OAuthProvider::Google), None);
}

// =============================================================
// Settle
// =============================================================

#[test]
fn sign_in_success_navigates_home() {
    let mut form = filled(LoginView::Login);
    let request = form.begin_submit().unwrap();
    let outcome = form.settle(&request, Ok(()));
    assert_eq!(outcome, Outcome { alert: None, navigate_to: Some("/") });
    assert!(!form.loading);
}

#[test]
fn sign_in_failure_alerts_provider_message() {
    let mut form = filled(LoginView::Login);
    let request = form.begin_submit().unwrap();
    let outcome = form.settle(&request, Err(provider_err("Invalid login credentials")));
    assert_eq!(outcome.alert.as_deref(), Some("Invalid login credentials"));
    assert_eq!(outcome.navigate_to, None);
    assert!(!form.loading);
    assert_eq!(form.email, "a@b.com");
}

#[test]
fn sign_up_success_returns_to_login_and_clears_fields() {
    let mut form = filled(LoginView::Signup);
    let request = form.begin_submit().unwrap();
    let outcome = form.settle(&request, Ok(()));
    assert_eq!(outcome.alert.as_deref(), Some(SIGNUP_SUCCESS_MESSAGE));
    assert_eq!(form.view, LoginView::Login);
    assert!(form.email.is_empty() && form.password.is_empty() && form.username.is_empty());
    assert!(!form.loading);
}

#[test]
fn sign_up_failure_stays_on_signup() {
    let mut form = filled(LoginView::Signup);
    let request = form.begin_submit().unwrap();
    let outcome = form.settle(&request, Err(provider_err("User already registered")));
    assert_eq!(outcome.alert.as_deref(), Some("User already registered"));
    assert_eq!(form.view, LoginView::Signup);
    assert!(!form.loading);
}

#[test]
fn reset_success_returns_to_login() {
    let mut form = filled(LoginView::ForgotPassword);
    form.reset_email = "r@b.com".to_owned();
    let request = form.begin_submit().unwrap();
    let outcome = form.settle(&request, Ok(()));
    assert_eq!(outcome.alert.as_deref(), Some(RESET_SENT_MESSAGE));
    assert_eq!(form.view, LoginView::Login);
    assert!(form.reset_email.is_empty());
    assert!(!form.loading);
}

#[test]
fn reset_failure_prefixes_message() {
    let mut form = filled(LoginView::ForgotPassword);
    form.reset_email = "r@b.com".to_owned();
    let request = form.begin_submit().unwrap();
    let outcome = form.settle(&request, Err(provider_err("rate limited")));
    assert_eq!(outcome.alert.as_deref(), Some("Error sending reset email: rate limited"));
    assert_eq!(form.view, LoginView::ForgotPassword);
    assert_eq!(form.reset_email, "r@b.com");
    assert!(!form.loading);
}

#[test]
fn oauth_failure_alerts_and_clears_loading() {
    let mut form = filled(LoginView::Login);
    let request = form.begin_oauth(OAuthProvider::Google).unwrap();
    let outcome = form.settle(&request, Err(AuthError::Unavailable("no window".to_owned())));
    assert_eq!(outcome.alert.as_deref(), Some("Google login failed: auth unavailable: no window"));
    assert!(!form.loading);
}

#[test]
fn oauth_success_leaves_state_untouched() {
    let mut form = filled(LoginView::Login);
    let request = form.begin_oauth(OAuthProvider::Google).unwrap();
    let before = form.clone();
    let outcome = form.settle(&request, Ok(()));
    assert_eq!(outcome, Outcome::default());
    assert_eq!(form, before);
}

#[test]
fn every_settled_password_flow_clears_loading() {
    let results = [Ok(()), Err(provider_err("boom")), Err(AuthError::Network("offline".to_owned()))];
    for view in [LoginView::Login, LoginView::Signup, LoginView::ForgotPassword] {
        for result in &results {
            let mut form = filled(view);
            form.reset_email = "r@b.com".to_owned();
            let request = form.begin_submit().unwrap();
            form.settle(&request, result.clone());
            assert!(!form.loading, "loading stuck for {view:?} / {result:?}");
        }
    }
}

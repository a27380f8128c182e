//! Login page form model.
//!
//! DESIGN
//! ======
//! A single `LoginView` enum replaces independent "login vs signup" and
//! "forgot password" flags, so only one form is ever active. Transitions are
//! plain methods; side effects (network calls, alerts, navigation) are returned
//! to the page as [`AuthRequest`] and [`Outcome`] values for it to perform.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::AuthError;
use crate::net::types::OAuthProvider;

pub const SIGNUP_SUCCESS_MESSAGE: &str = "Signup successful! Please check your email to verify your account.";
pub const RESET_SENT_MESSAGE: &str = "Password reset email sent! Please check your inbox.";
pub const RESET_EMAIL_REQUIRED_MESSAGE: &str = "Please enter your email address";

/// Which form the login page shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginView {
    #[default]
    Login,
    Signup,
    ForgotPassword,
}

/// Network action requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthRequest {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, username: String },
    ResetPassword { email: String },
    OAuth(OAuthProvider),
}

/// Why a submit did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A request is already in flight; controls are disabled.
    Busy,
    /// Reset form submitted with an empty email.
    MissingResetEmail,
}

impl SubmitBlocked {
    /// Alert to show the user, if any.
    pub fn alert_message(self) -> Option<&'static str> {
        match self {
            Self::Busy => None,
            Self::MissingResetEmail => Some(RESET_EMAIL_REQUIRED_MESSAGE),
        }
    }
}

/// Side effects to perform once a request settles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub alert: Option<String>,
    pub navigate_to: Option<&'static str>,
}

impl Outcome {
    fn alert(message: impl Into<String>) -> Self {
        Self { alert: Some(message.into()), navigate_to: None }
    }
}

/// Form fields plus view and loading state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub view: LoginView,
    pub email: String,
    pub password: String,
    pub username: String,
    pub reset_email: String,
    pub loading: bool,
}

impl LoginForm {
    pub fn heading(&self) -> &'static str {
        match self.view {
            LoginView::Login => "Welcome to LibroVault",
            LoginView::Signup => "Create Account",
            LoginView::ForgotPassword => "Reset Password",
        }
    }

    /// Caption of the primary submit button.
    pub fn submit_label(&self) -> &'static str {
        match (self.view, self.loading) {
            (LoginView::ForgotPassword, true) => "Sending...",
            (LoginView::ForgotPassword, false) => "Send Reset Link",
            (_, true) => "Processing...",
            (LoginView::Login, false) => "Login",
            (LoginView::Signup, false) => "Sign Up",
        }
    }

    /// Caption of the Login/Signup toggle, naming the other mode.
    pub fn toggle_label(&self) -> &'static str {
        if self.view == LoginView::Signup { "Login" } else { "Sign up" }
    }

    /// Switch between Login and Signup, clearing the credential fields.
    pub fn toggle_mode(&mut self) {
        self.view = match self.view {
            LoginView::Login => LoginView::Signup,
            LoginView::Signup => LoginView::Login,
            LoginView::ForgotPassword => return,
        };
        self.clear_credentials();
    }

    /// Show the reset form. Ignored while a request is in flight.
    pub fn open_forgot_password(&mut self) {
        if self.loading || self.view != LoginView::Login {
            return;
        }
        self.view = LoginView::ForgotPassword;
    }

    /// Leave the reset form, discarding the typed address.
    pub fn back_to_login(&mut self) {
        if self.view != LoginView::ForgotPassword {
            return;
        }
        self.view = LoginView::Login;
        self.reset_email.clear();
    }

    /// Validate the active form and enter the loading state.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked`] without touching `loading` when a request is
    /// already running or the reset email is empty.
    pub fn begin_submit(&mut self) -> Result<AuthRequest, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Busy);
        }
        let request = match self.view {
            LoginView::Login => AuthRequest::SignIn { email: self.email.clone(), password: self.password.clone() },
            LoginView::Signup => AuthRequest::SignUp {
                email: self.email.clone(),
                password: self.password.clone(),
                username: self.username.clone(),
            },
            LoginView::ForgotPassword => {
                if self.reset_email.is_empty() {
                    return Err(SubmitBlocked::MissingResetEmail);
                }
                AuthRequest::ResetPassword { email: self.reset_email.clone() }
            }
        };
        self.loading = true;
        Ok(request)
    }

    /// Start an OAuth sign-in. `None` while another request is running.
    pub fn begin_oauth(&mut self, provider: OAuthProvider) -> Option<AuthRequest> {
        if self.loading || self.view == LoginView::ForgotPassword {
            return None;
        }
        self.loading = true;
        Some(AuthRequest::OAuth(provider))
    }

    /// Apply the result of `request` and report what the page should do.
    ///
    /// `loading` is cleared for every result except a successful OAuth start,
    /// where the browser is already leaving the page.
    pub fn settle(&mut self, request: &AuthRequest, result: Result<(), AuthError>) -> Outcome {
        if let AuthRequest::OAuth(_) = request {
            return match result {
                Ok(()) => Outcome::default(),
                Err(e) => {
                    self.loading = false;
                    Outcome::alert(format!("Google login failed: {e}"))
                }
            };
        }
        self.loading = false;
        match (request, result) {
            (AuthRequest::SignIn { .. }, Ok(())) => Outcome { alert: None, navigate_to: Some("/") },
            (AuthRequest::SignUp { .. }, Ok(())) => {
                self.view = LoginView::Login;
                self.clear_credentials();
                Outcome::alert(SIGNUP_SUCCESS_MESSAGE)
            }
            (AuthRequest::ResetPassword { .. }, Ok(())) => {
                self.view = LoginView::Login;
                self.reset_email.clear();
                Outcome::alert(RESET_SENT_MESSAGE)
            }
            (AuthRequest::ResetPassword { .. }, Err(e)) => Outcome::alert(format!("Error sending reset email: {e}")),
            (_, Err(e)) => Outcome::alert(e.to_string()),
            (AuthRequest::OAuth(_), Ok(())) => Outcome::default(),
        }
    }

    fn clear_credentials(&mut self) {
        self.email.clear();
        self.password.clear();
        self.username.clear();
    }
}

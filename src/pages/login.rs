//! Login page with a mock email + password check.
//!
//! SYSTEM CONTEXT
//! ==============
//! The credential check is local: after a fixed artificial delay the
//! submitted pair is compared against the configured demo account. A match
//! signs the user in through the auth controller and the route redirect
//! takes over; anything else shows one generic error.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::future::Future;
use std::time::Duration;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::config::{AppConfig, DemoAccount};
use crate::state::auth::{AuthController, AuthSignal, use_auth};
use crate::state::navigation::LOGO_URL;
use crate::util::auth::install_route_redirect;
use crate::util::routing::AppRoute;

/// The only failure the login form reports. It never reveals whether the
/// email or the password was wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Local field state for the login form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl LoginForm {
    /// Clear the error and mark the form busy. Returns the credentials to
    /// check, or `None` while a previous submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.is_loading {
            return None;
        }
        self.error = None;
        self.is_loading = true;
        Some(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Record the outcome. Always clears the busy flag.
    pub fn finish_submit(&mut self, outcome: &Result<(), LoginError>) {
        self.error = outcome.as_ref().err().map(ToString::to_string);
        self.is_loading = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading { "Signing in..." } else { "Sign in" }
    }
}

/// Exact-match comparison against the demo account.
///
/// # Errors
///
/// Returns [`LoginError::InvalidCredentials`] for any other pair.
pub fn check_credentials(credentials: &Credentials, account: &DemoAccount) -> Result<(), LoginError> {
    if credentials.email == account.email && credentials.password == account.password {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

/// Wait for `latency`, then check the credentials.
///
/// # Errors
///
/// Returns [`LoginError::InvalidCredentials`] if the pair does not match.
pub async fn verify_credentials<L>(credentials: Credentials, account: DemoAccount, latency: L) -> Result<(), LoginError>
where
    L: Future<Output = ()>,
{
    latency.await;
    check_credentials(&credentials, &account)
}

/// Simulated network round trip. Resolves immediately outside the browser.
pub async fn simulated_latency(duration: Duration) {
    #[cfg(feature = "csr")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "csr"))]
    log::trace!("skipping {duration:?} simulated latency outside the browser");
}

/// Run one form submission: mark the form busy, wait for `latency`, then
/// sign in on a match or record the error. A submit while another is in
/// flight returns without doing anything.
pub async fn submit_login<L>(form: RwSignal<LoginForm>, auth: AuthSignal, account: DemoAccount, latency: L)
where
    L: Future<Output = ()>,
{
    let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
        log::debug!("login already in flight");
        return;
    };
    let outcome = verify_credentials(credentials, account, latency).await;
    match &outcome {
        Ok(()) => auth.update(AuthController::login),
        Err(e) => log::info!("login rejected: {e}"),
    }
    form.update(|f| f.finish_submit(&outcome));
}

/// Login page. Redirects to `/dashboard` once signed in.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let config = expect_context::<AppConfig>();
    install_route_redirect(AppRoute::Login, auth, use_navigate());

    let form = RwSignal::new(LoginForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let account = config.demo_account.clone();
        let latency = simulated_latency(config.login_delay());
        leptos::task::spawn_local(submit_login(form, auth, account, latency));
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <img class="login-card__logo" alt="Scangrid Logo" src=LOGO_URL/>
                <h2 class="login-card__title">"Sign in to your account"</h2>
                <form class="login-form" on:submit=on_submit>
                    <TextField
                        id="email"
                        label="Email address"
                        input_type="email"
                        autocomplete="email"
                        value=Signal::derive(move || form.with(|f| f.email.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    />
                    <TextField
                        id="password"
                        label="Password"
                        input_type="password"
                        required=true
                        autocomplete="current-password"
                        value=Signal::derive(move || form.with(|f| f.password.clone()))
                        on_input=Callback::new(move |v: String| form.update(|f| f.password = v))
                    >
                        <a href="#" class="login-form__link">"Forgot password?"</a>
                    </TextField>
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="login-message login-message--error">
                            {move || form.with(|f| f.error.clone().unwrap_or_default())}
                        </p>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || form.with(|f| f.is_loading)
                    >
                        {move || form.with(LoginForm::submit_label)}
                    </button>
                </form>
            </div>
        </div>
    }
}

//! Route guard and shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page applies the same redirect behavior. The decision is a
//! pure function of the auth flag; the effect installed here re-runs it each
//! time the auth signal changes instead of checking once at mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthSignal, is_authenticated};
use crate::util::routing::{AppRoute, RouteOutcome, resolve};

/// Guard decision for protected content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guarded<T> {
    Allow(T),
    Redirect(AppRoute),
}

/// Permit `content` when signed in, otherwise redirect to `/login`.
pub fn guard<T>(authenticated: bool, content: T) -> Guarded<T> {
    if authenticated {
        Guarded::Allow(content)
    } else {
        Guarded::Redirect(AppRoute::Login)
    }
}

/// History-replacing navigation, so guarded routes never stay in the back stack.
pub fn replace_options() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..NavigateOptions::default()
    }
}

/// Navigate away whenever `route` resolves to a redirect for the current auth flag.
pub fn install_route_redirect<F>(route: AppRoute, auth: AuthSignal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let RouteOutcome::Redirect(to) = resolve(route, is_authenticated(auth)) {
            log::debug!("redirect {route:?} -> {}", to.path());
            navigate(to.path(), replace_options());
        }
    });
}

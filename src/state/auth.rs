//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the login page to coordinate redirects. The
//! controller seeds itself from the session store exactly once and then owns
//! the authoritative in-memory flag until the page reloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::util::session_store::{SessionStore, SharedSessionStore};

/// Auth controller provided through context.
pub type AuthSignal = RwSignal<AuthController<SharedSessionStore>>;

/// Authentication flag plus the store that persists it.
///
/// In-memory state is updated before the store write so dependent views
/// observe the new value on the same tick.
#[derive(Debug)]
pub struct AuthController<S> {
    store: S,
    authenticated: bool,
}

impl<S: SessionStore> AuthController<S> {
    /// Seed from one `read()` of `store`.
    pub fn new(store: S) -> Self {
        let authenticated = store.read();
        Self { store, authenticated }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn login(&mut self) {
        self.authenticated = true;
        self.store.set_true();
        log::info!("signed in");
    }

    pub fn logout(&mut self) {
        self.authenticated = false;
        self.store.clear();
        log::info!("signed out");
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Create the auth controller and provide it to child components.
pub fn provide_auth(store: SharedSessionStore) -> AuthSignal {
    let auth = RwSignal::new(AuthController::new(store));
    provide_context(auth);
    auth
}

/// Fetch the auth controller provided by [`provide_auth`].
pub fn use_auth() -> AuthSignal {
    expect_context::<AuthSignal>()
}

/// Tracked read of the current auth flag.
pub fn is_authenticated(auth: AuthSignal) -> bool {
    auth.with(AuthController::is_authenticated)
}

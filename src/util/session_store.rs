//! Persisted auth flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only durable state in the shell is one localStorage entry: the
//! configured key holding the literal string `"true"` while signed in, and no
//! entry otherwise. Everything else reads it through [`SessionStore`], so a
//! real session backend can replace this module without touching the route
//! guard or login page.
//!
//! ERROR HANDLING
//! ==============
//! Backends report failures as [`StorageError`] internally. The trait surface
//! never does: a failed read is "signed out", a failed write is a no-op, and
//! both are logged at `warn`.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::sync::{Arc, Mutex};

/// Value stored under the session key while authenticated.
pub const AUTHENTICATED_VALUE: &str = "true";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage unavailable")]
    Unavailable,
    #[error("read failed for {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("write failed for {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("remove failed for {key}: {reason}")]
    Remove { key: String, reason: String },
}

/// Read/write access to the persisted auth flag.
pub trait SessionStore {
    /// True only if the stored value is exactly `"true"`.
    fn read(&self) -> bool;
    fn set_true(&self);
    /// Remove the key entirely.
    fn clear(&self);
}

/// Store shared through Leptos context.
pub type SharedSessionStore = Arc<dyn SessionStore + Send + Sync>;

impl<S: SessionStore + ?Sized> SessionStore for Arc<S> {
    fn read(&self) -> bool {
        (**self).read()
    }

    fn set_true(&self) {
        (**self).set_true();
    }

    fn clear(&self) {
        (**self).clear();
    }
}

fn is_authenticated_value(raw: Option<&str>) -> bool {
    raw == Some(AUTHENTICATED_VALUE)
}

fn swallow(result: Result<(), StorageError>) {
    if let Err(e) = result {
        log::warn!("session store: {e}");
    }
}

// =============================================================================
// LOCAL STORAGE
// =============================================================================

/// `window.localStorage` backend. Outside the browser build it behaves as an
/// empty store that ignores writes.
#[derive(Clone, Debug)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    #[cfg(feature = "csr")]
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().unwrap_or(None))
            .ok_or(StorageError::Unavailable)
    }

    fn try_read(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.get_item(&self.key).map_err(|e| StorageError::Read {
                key: self.key.clone(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn try_write(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?
                .set_item(&self.key, AUTHENTICATED_VALUE)
                .map_err(|e| StorageError::Write {
                    key: self.key.clone(),
                    reason: format!("{e:?}"),
                })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn try_remove(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            Self::storage()?.remove_item(&self.key).map_err(|e| StorageError::Remove {
                key: self.key.clone(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

impl SessionStore for LocalStorageSession {
    fn read(&self) -> bool {
        match self.try_read() {
            Ok(raw) => is_authenticated_value(raw.as_deref()),
            Err(e) => {
                log::warn!("session store: {e}");
                false
            }
        }
    }

    fn set_true(&self) {
        swallow(self.try_write());
    }

    fn clear(&self) {
        swallow(self.try_remove());
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local backend for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemorySession {
    value: Mutex<Option<String>>,
}

impl MemorySession {
    /// Start with an arbitrary raw stored value (`None` = key absent).
    pub fn with_raw(raw: Option<&str>) -> Self {
        Self {
            value: Mutex::new(raw.map(str::to_owned)),
        }
    }

    /// Current raw stored value, `None` if the key is absent or unreadable.
    pub fn raw(&self) -> Option<String> {
        match self.try_raw() {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("session store: {e}");
                None
            }
        }
    }

    fn try_raw(&self) -> Result<Option<String>, StorageError> {
        let guard = self.value.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(guard.clone())
    }

    fn put(&self, next: Option<String>) -> Result<(), StorageError> {
        let mut guard = self.value.lock().map_err(|_| StorageError::Unavailable)?;
        *guard = next;
        Ok(())
    }
}

impl SessionStore for MemorySession {
    fn read(&self) -> bool {
        is_authenticated_value(self.raw().as_deref())
    }

    fn set_true(&self) {
        swallow(self.put(Some(AUTHENTICATED_VALUE.to_owned())));
    }

    fn clear(&self) {
        swallow(self.put(None));
    }
}

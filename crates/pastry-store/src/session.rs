//! # Session Store
//!
//! Tracks who is signed in and remembers it across restarts.
//!
//! ## Sign-in Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login page: "Entrar"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sign_in(email, secret).await                                          │
//! │       │                                                                 │
//! │       ├── sleep(sign_in_delay)      ← no lock held                     │
//! │       ├── AccountRegistry::find_by_credentials                         │
//! │       │        │                                                        │
//! │       │        ├── None  → Err(InvalidCredentials)                     │
//! │       │        └── Some  → current = identity                          │
//! │       │                    persist "user" (identity only)              │
//! │       ▼                                                                 │
//! │  Ok(SessionUser)                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::{debug, info, warn};

use pastry_core::{Role, SessionUser};

use crate::accounts::AccountRegistry;
use crate::error::{AuthError, AuthResult};
use crate::storage::{keys, load_json, persist, Storage};

/// Default artificial sign-in latency.
pub const DEFAULT_SIGN_IN_DELAY: Duration = Duration::from_millis(800);

/// Session behaviour knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthConfig {
    /// How long `sign_in` waits before answering. Zero is allowed.
    pub sign_in_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        AuthConfig {
            sign_in_delay: DEFAULT_SIGN_IN_DELAY,
        }
    }
}

/// Current-session state.
#[derive(Debug)]
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    accounts: AccountRegistry,
    config: AuthConfig,
    current: RwLock<Option<SessionUser>>,
}

impl SessionStore {
    /// Creates the store, rehydrating the identity saved under `user`.
    ///
    /// A missing entry means signed out. An unreadable one is logged and
    /// also treated as signed out, so a damaged file never locks anyone out.
    pub fn open(storage: Arc<dyn Storage>, accounts: AccountRegistry, config: AuthConfig) -> Self {
        let current = match load_json::<SessionUser>(storage.as_ref(), keys::USER) {
            Ok(Some(user)) => {
                info!(id = %user.id, role = %user.role, "Session restored");
                Some(user)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable saved session");
                None
            }
        };

        SessionStore {
            storage,
            accounts,
            config,
            current: RwLock::new(current),
        }
    }

    /// Verifies credentials after the configured delay.
    ///
    /// The delay elapses before success and failure alike. Dropping the
    /// future before it resolves leaves the session untouched.
    pub async fn sign_in(&self, email: &str, secret: &str) -> AuthResult<SessionUser> {
        debug!(email, delay = ?self.config.sign_in_delay, "Sign-in started");
        tokio::time::sleep(self.config.sign_in_delay).await;

        let Some(user) = self.accounts.find_by_credentials(email, secret)? else {
            info!(email, "Sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        };

        *self.current.write().unwrap_or_else(|e| e.into_inner()) = Some(user.clone());
        persist(self.storage.as_ref(), keys::USER, &user);

        info!(id = %user.id, role = %user.role, "Signed in");
        Ok(user)
    }

    /// Clears the session. Signing out twice is harmless.
    pub fn sign_out(&self) {
        let previous = self
            .current
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take();

        if let Err(e) = self.storage.remove(keys::USER) {
            warn!(error = %e, "Failed to remove saved session");
        }

        if let Some(user) = previous {
            info!(id = %user.id, "Signed out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// The signed-in identity, if any.
    pub fn current_user(&self) -> Option<SessionUser> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Does the signed-in user hold `role`? False when signed out.
    pub fn has_role(&self, role: Role) -> bool {
        self.current_user().is_some_and(|u| u.role == role)
    }

    /// The registry this session authenticates against.
    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }
}

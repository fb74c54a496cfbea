//! # Account Registry
//!
//! Demo identities plus the self-registered `users` collection.
//!
//! ## Credential Lookup Order
//! ```text
//! sign_in(email, secret)
//!      │
//!      ├── 1. demo admin   admin@pastry.com / password → Administrador
//!      ├── 2. demo staff   staff@pastry.com / password → Funcionário
//!      └── 3. "users" collection (exact email + secret match)
//! ```
//!
//! The registry reads the collection from storage on every call, so two
//! contexts over one data directory see each other's registrations.

use std::sync::Arc;
use tracing::{debug, info};

use pastry_core::validation::validate_registration;
use pastry_core::{new_record_id, Account, Role, SessionUser};

use crate::error::{AuthError, AuthResult, StoreResult};
use crate::storage::{keys, load_json, save_json, Storage};

/// Secret shared by both demo identities.
pub const DEMO_SECRET: &str = "password";

/// Built-in identities that exist without registration and are never stored.
pub fn demo_accounts() -> [Account; 2] {
    [
        Account {
            id: "1".to_string(),
            name: "Administrador".to_string(),
            email: "admin@pastry.com".to_string(),
            secret: DEMO_SECRET.to_string(),
            role: Role::Admin,
        },
        Account {
            id: "2".to_string(),
            name: "Funcionário".to_string(),
            email: "staff@pastry.com".to_string(),
            secret: DEMO_SECRET.to_string(),
            role: Role::Staff,
        },
    ]
}

/// Self-registered accounts backed by the `users` storage key.
#[derive(Debug, Clone)]
pub struct AccountRegistry {
    storage: Arc<dyn Storage>,
}

impl AccountRegistry {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        AccountRegistry { storage }
    }

    /// Every self-registered account. Demo identities are not included.
    pub fn list(&self) -> StoreResult<Vec<Account>> {
        Ok(load_json::<Vec<Account>>(self.storage.as_ref(), keys::USERS)?.unwrap_or_default())
    }

    /// Resolves credentials against the demo identities, then the collection.
    pub fn find_by_credentials(&self, email: &str, secret: &str) -> StoreResult<Option<SessionUser>> {
        if let Some(demo) = demo_accounts().iter().find(|a| a.matches(email, secret)) {
            return Ok(Some(demo.identity()));
        }

        Ok(self
            .list()?
            .iter()
            .find(|a| a.matches(email, secret))
            .map(Account::identity))
    }

    /// Registers a new staff account.
    ///
    /// ## User Workflow
    /// ```text
    /// Register form: name, email, password
    ///      │
    ///      ▼
    /// validate_registration ──► Err(Validation)
    ///      │
    ///      ▼
    /// email already in "users"? ──► Err(DuplicateEmail)
    ///      │
    ///      ▼
    /// append { role: staff }, persist, return identity
    /// ```
    ///
    /// Only the collection is checked for duplicates; the demo addresses are
    /// not reserved.
    pub fn register(&self, name: &str, email: &str, secret: &str) -> AuthResult<SessionUser> {
        validate_registration(name, email, secret)?;

        let mut accounts = self.list()?;
        if accounts.iter().any(|a| a.email == email) {
            debug!(email, "Registration rejected, email taken");
            return Err(AuthError::DuplicateEmail(email.to_string()));
        }

        let account = Account {
            id: new_record_id(),
            name: name.to_string(),
            email: email.to_string(),
            secret: secret.to_string(),
            role: Role::Staff,
        };
        let identity = account.identity();
        accounts.push(account);
        save_json(self.storage.as_ref(), keys::USERS, &accounts)?;

        info!(id = %identity.id, email, "Account registered");
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn registry() -> AccountRegistry {
        AccountRegistry::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_demo_credentials() {
        let registry = registry();
        let admin = registry
            .find_by_credentials("admin@pastry.com", DEMO_SECRET)
            .unwrap()
            .unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(admin.name, "Administrador");

        assert!(registry
            .find_by_credentials("admin@pastry.com", "wrong")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_register_then_find() {
        let registry = registry();
        let identity = registry.register("Ana", "ana@x.com", "segredo").unwrap();
        assert_eq!(identity.role, Role::Staff);

        let found = registry.find_by_credentials("ana@x.com", "segredo").unwrap();
        assert_eq!(found, Some(identity));
        assert_eq!(registry.list().unwrap().len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let registry = registry();
        registry.register("Ana", "ana@x.com", "a").unwrap();

        let err = registry.register("Ana B", "ana@x.com", "b").unwrap_err();
        assert!(matches!(err, AuthError::DuplicateEmail(ref e) if e == "ana@x.com"));
        assert_eq!(registry.list().unwrap().len(), 1);
    }

    #[test]
    fn test_demo_email_not_reserved() {
        let registry = registry();
        assert!(registry.register("Outro", "admin@pastry.com", "x").is_ok());
    }

    #[test]
    fn test_register_validates() {
        let registry = registry();
        assert!(matches!(
            registry.register("Ana", "not-an-email", "x"),
            Err(AuthError::Validation(_))
        ));
    }

    #[test]
    fn test_stored_secret_uses_password_key() {
        let storage = Arc::new(MemoryStorage::new());
        let registry = AccountRegistry::new(storage.clone());
        registry.register("Ana", "ana@x.com", "segredo").unwrap();

        let raw = storage.get(keys::USERS).unwrap().unwrap();
        assert!(raw.contains("\"password\":\"segredo\""));
        assert!(raw.contains("\"role\":\"staff\""));
    }
}

//! Secret-key lookup.
//!
//! Verification never sees where secrets live: it asks a [`SecretStore`] for
//! the key belonging to an access key ID and signs with whatever comes back.

use std::collections::HashMap;

use crate::error::AuthError;

/// Resolves the secret access key for an access key ID.
pub trait SecretStore: Send + Sync {
    /// Look up the secret for `access_key_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::AccessKeyNotFound`] for an unknown ID.
    fn secret_key(&self, access_key_id: &str) -> Result<String, AuthError>;
}

/// Fixed in-memory [`SecretStore`], for tests and local tooling.
///
/// # Examples
///
/// ```
/// use s3iface_auth::{SecretStore, StaticSecretStore};
///
/// let store = StaticSecretStore::new([("AKID".to_owned(), "secret".to_owned())]);
/// assert_eq!(store.secret_key("AKID").unwrap(), "secret");
/// assert!(store.secret_key("OTHER").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, String>,
}

impl StaticSecretStore {
    /// Build a store from `(access_key_id, secret_key)` pairs.
    pub fn new(secrets: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            secrets: secrets.into_iter().collect(),
        }
    }

    /// Add or replace the secret for `access_key_id`.
    pub fn insert(&mut self, access_key_id: impl Into<String>, secret_key: impl Into<String>) {
        self.secrets.insert(access_key_id.into(), secret_key.into());
    }

    /// Number of registered access keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl SecretStore for StaticSecretStore {
    fn secret_key(&self, access_key_id: &str) -> Result<String, AuthError> {
        self.secrets
            .get(access_key_id)
            .cloned()
            .ok_or_else(|| AuthError::AccessKeyNotFound(access_key_id.to_owned()))
    }
}

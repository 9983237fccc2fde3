//! Mock authentication use case.
//!
//! Login and registration run against an explicitly supplied in-memory
//! directory; the resulting snapshot is persisted wholesale. The injected
//! delay stands in for the network round-trip a real backend would cost.

use std::sync::Arc;
use tokio::sync::RwLock;

use osctip_core::auth::{
    AuthState, AuthStateRepository, DirectoryEntry, UserAccount, UserDirectory,
};
use osctip_core::clock::ResponseDelay;
use osctip_core::error::{OsctipError, Result};
use uuid::Uuid;

/// Use case for the mock authentication flows.
pub struct AuthService {
    /// Persistence for the auth snapshot
    repository: Arc<dyn AuthStateRepository>,
    /// Account directory; registration writes into it
    directory: RwLock<UserDirectory>,
    /// Simulated network delay for login/register
    delay: Arc<dyn ResponseDelay>,
}

impl AuthService {
    /// Creates a new `AuthService` over the given directory.
    pub fn new(
        repository: Arc<dyn AuthStateRepository>,
        directory: UserDirectory,
        delay: Arc<dyn ResponseDelay>,
    ) -> Self {
        Self {
            repository,
            directory: RwLock::new(directory),
            delay,
        }
    }

    /// Restores the persisted auth snapshot, or the signed-out default.
    pub async fn initialize(&self) -> Result<AuthState> {
        Ok(self.repository.load().await?.unwrap_or_default())
    }

    /// Attempts a login against the directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` on an unknown email or wrong password;
    /// the persisted snapshot is left untouched in that case.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthState> {
        self.delay.wait().await;

        let directory = self.directory.read().await;
        let Some(entry) = directory.find_by_email(email) else {
            return Err(OsctipError::InvalidCredentials);
        };
        if entry.password != password {
            return Err(OsctipError::InvalidCredentials);
        }

        let state = AuthState::authenticated(entry.account.clone());
        drop(directory);

        self.repository.save(&state).await?;
        tracing::info!(email, "Login succeeded");
        Ok(state)
    }

    /// Registers a new account and signs it in.
    ///
    /// # Errors
    ///
    /// Returns `EmailTaken` when the email is already in use.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthState> {
        self.delay.wait().await;

        let mut directory = self.directory.write().await;
        if directory.email_taken(email) {
            return Err(OsctipError::EmailTaken);
        }

        let account = UserAccount {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar: Some(avatar_url(name)),
            role: None,
            clearance_level: None,
        };
        directory.insert(DirectoryEntry {
            account: account.clone(),
            password: password.to_string(),
        });
        drop(directory);

        let state = AuthState::authenticated(account);
        self.repository.save(&state).await?;
        tracing::info!(email, "Registered new account");
        Ok(state)
    }

    /// Signs out by clearing the persisted snapshot.
    pub async fn logout(&self) -> Result<()> {
        self.repository.clear().await
    }
}

/// Generated avatar URL for a display name. Spaces become `+` so the name
/// survives as a query parameter.
fn avatar_url(name: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background=5E35B1&color=fff",
        name.replace(' ', "+")
    )
}

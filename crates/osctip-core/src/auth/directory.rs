//! In-memory user directory for the mock auth backend.

use std::collections::HashMap;

use super::model::{AnalystRole, ClearanceLevel, UserAccount};

/// One directory entry: the public account plus its password.
#[derive(Debug, Clone)]
pub struct DirectoryEntry {
    pub account: UserAccount,
    pub password: String,
}

/// Explicitly constructed in-memory table of demo accounts.
///
/// The directory is passed into the auth service rather than living as a
/// module-level global, so tests can build their own population and
/// registration stays observable.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    entries: HashMap<String, DirectoryEntry>,
}

impl UserDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory seeded with the demo analyst account
    /// (`john@example.com` / `password123`).
    pub fn with_demo_accounts() -> Self {
        let mut directory = Self::new();
        directory.insert(DirectoryEntry {
            account: UserAccount {
                id: "user1".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                avatar: Some(
                    "https://ui-avatars.com/api/?name=John+Doe&background=5E35B1&color=fff"
                        .to_string(),
                ),
                role: Some(AnalystRole::Analyst),
                clearance_level: Some(ClearanceLevel::Basic),
            },
            password: "password123".to_string(),
        });
        directory
    }

    /// Inserts or replaces an entry, keyed by account id.
    pub fn insert(&mut self, entry: DirectoryEntry) {
        self.entries.insert(entry.account.id.clone(), entry);
    }

    /// Looks up an entry by email.
    pub fn find_by_email(&self, email: &str) -> Option<&DirectoryEntry> {
        self.entries.values().find(|e| e.account.email == email)
    }

    /// Returns whether any account uses the given email.
    pub fn email_taken(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }
}

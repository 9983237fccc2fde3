//! Authentication domain models.
//!
//! The auth subsystem is a mock: accounts live in an in-memory directory
//! and the persisted state is one whole-blob JSON snapshot.

use serde::{Deserialize, Serialize};

/// Analyst role assigned to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalystRole {
    Analyst,
    Admin,
    Supervisor,
}

/// Clearance level assigned to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearanceLevel {
    Basic,
    Advanced,
    Expert,
}

/// A user account as exposed to the rest of the application.
///
/// Passwords never appear here; they live only in the in-memory
/// [`UserDirectory`](super::UserDirectory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<AnalystRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearance_level: Option<ClearanceLevel>,
}

/// The persisted authentication snapshot.
///
/// Persisted wholesale as a single blob; `is_loading` only matters to a UI
/// layer but is kept in the snapshot so the stored shape stays complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub user: Option<UserAccount>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }
}

impl AuthState {
    /// Builds the authenticated snapshot for an account.
    pub fn authenticated(user: UserAccount) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_round_trip() {
        let state = AuthState::authenticated(UserAccount {
            id: "user1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            avatar: None,
            role: Some(AnalystRole::Analyst),
            clearance_level: Some(ClearanceLevel::Advanced),
        });

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"isAuthenticated\":true"));
        assert!(json.contains("\"clearanceLevel\":\"advanced\""));

        let back: AuthState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}

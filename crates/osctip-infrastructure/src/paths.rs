//! Unified path management for OSCTIP storage files.
//!
//! All persisted blobs live under a single base directory, by default the
//! platform config directory plus `osctip` (e.g. `~/.config/osctip/` on
//! Linux). The per-user blob file names mirror the documented storage keys.

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolved storage paths for one OSCTIP installation.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/osctip/                        # Base directory (or override)
/// ├── config.toml                          # Application configuration
/// ├── copilot_auth.json                    # Auth state blob
/// ├── osctip_conversations_<userId>.json   # Per-user conversation list
/// └── osctip_active_conversation_<userId>  # Per-user active conversation id
/// ```
#[derive(Debug, Clone)]
pub struct OsctipPaths {
    base_dir: PathBuf,
}

impl OsctipPaths {
    /// Resolves the storage paths, preferring `override_dir` when given.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::ConfigDirNotFound`] when no override is given
    /// and the platform config directory cannot be determined.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, PathError> {
        let base_dir = match override_dir {
            Some(dir) => dir,
            None => dirs::config_dir()
                .ok_or(PathError::ConfigDirNotFound)?
                .join("osctip"),
        };
        Ok(Self { base_dir })
    }

    /// Returns the base directory all blobs live under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.toml")
    }

    /// Returns the path to the auth state blob.
    pub fn auth_file(&self) -> PathBuf {
        self.base_dir.join("copilot_auth.json")
    }

    /// Returns the path to a user's conversation list blob.
    pub fn conversations_file(&self, user_id: &str) -> PathBuf {
        self.base_dir
            .join(format!("osctip_conversations_{}.json", sanitize(user_id)))
    }

    /// Returns the path to a user's active-conversation id file.
    pub fn active_conversation_file(&self, user_id: &str) -> PathBuf {
        self.base_dir
            .join(format!("osctip_active_conversation_{}", sanitize(user_id)))
    }
}

/// Maps a user id into a safe file name fragment.
///
/// Alphanumerics, `-`, `_` and `.` pass through; everything else becomes `_`.
fn sanitize(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_dir_wins() {
        let paths = OsctipPaths::resolve(Some(PathBuf::from("/tmp/osctip-test"))).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/tmp/osctip-test"));
    }

    #[test]
    fn test_default_base_ends_with_osctip() {
        let paths = OsctipPaths::resolve(None).unwrap();
        assert!(paths.base_dir().ends_with("osctip"));
    }

    #[test]
    fn test_conversation_file_name_matches_storage_key() {
        let paths = OsctipPaths::resolve(Some(PathBuf::from("/data"))).unwrap();
        assert_eq!(
            paths.conversations_file("user1"),
            PathBuf::from("/data/osctip_conversations_user1.json")
        );
        assert_eq!(
            paths.active_conversation_file("user1"),
            PathBuf::from("/data/osctip_active_conversation_user1")
        );
    }

    #[test]
    fn test_user_id_is_sanitized() {
        let paths = OsctipPaths::resolve(Some(PathBuf::from("/data"))).unwrap();
        let file = paths.conversations_file("../evil/user");
        assert_eq!(
            file,
            PathBuf::from("/data/osctip_conversations_.._evil_user.json")
        );
    }
}

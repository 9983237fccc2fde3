//! File-backed persistence for the OSCTIP assistant core.
//!
//! Everything here follows one discipline: each persisted unit is a single
//! blob, read and rewritten wholesale, with atomic writes underneath.

pub mod atomic_json;
pub mod auth_state_repository;
pub mod config_loader;
pub mod json_conversation_repository;
pub mod paths;

pub use auth_state_repository::JsonAuthStateRepository;
pub use config_loader::load_config;
pub use json_conversation_repository::JsonConversationRepository;
pub use paths::OsctipPaths;

//! Conversation domain module.
//!
//! This module contains all conversation-related domain models, the
//! repository interface, and the content-derived helpers used by the
//! message pipeline.
//!
//! # Module Structure
//!
//! - `model`: Core conversation entity and seed greetings
//! - `message`: Message types (`MessageRole`, `ThreatLevel`, `ResponseMetadata`)
//! - `category`: Conversation categories and content-based detection
//! - `title`: Title derivation from the first user message
//! - `repository`: Repository trait for conversation persistence

mod category;
mod message;
mod model;
mod repository;
mod title;

pub use category::{ConversationCategory, detect_category};
pub use message::{Message, MessageRole, ResponseMetadata, ThreatLevel};
pub use model::{Conversation, DEFAULT_TITLE, RESET_GREETING, SEED_GREETING};
pub use repository::ConversationRepository;
pub use title::derive_title;

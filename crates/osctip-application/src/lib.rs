//! Use-case layer for the OSCTIP assistant core.
//!
//! Wires the domain models and repository traits from `osctip-core` into
//! the two workflows the surface layer drives: conversation management with
//! the simulated message exchange, and the mock authentication flows.

pub mod auth_service;
pub mod conversation_service;
pub mod delay;
pub mod responder;

pub use auth_service::AuthService;
pub use conversation_service::ConversationService;
pub use delay::{NoDelay, TokioDelay};
pub use responder::{Responder, SimulatedResponder};

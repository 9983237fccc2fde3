//! Conversation message types.
//!
//! This module contains types for representing messages in a conversation,
//! including roles, threat annotations, and per-category response metadata.

use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

/// Represents the role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the AI assistant.
    Assistant,
    /// System-generated message.
    System,
}

/// Severity annotation attached to assistant messages that discuss
/// threats, vulnerabilities, threat actors, or incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThreatLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl ThreatLevel {
    /// All levels, in ascending severity order. Used for uniform random
    /// selection on generic threat responses.
    pub const ALL: [ThreatLevel; 4] = [
        ThreatLevel::Low,
        ThreatLevel::Medium,
        ThreatLevel::High,
        ThreatLevel::Critical,
    ];
}

/// Structured metadata attached to an assistant message, discriminated by
/// the response category that produced it.
///
/// Field names serialize in camelCase so persisted blobs expose
/// `mitreTactics`, `cveReferences`, etc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ResponseMetadata {
    /// Generic threat analysis annotations.
    #[serde(rename_all = "camelCase")]
    Threat {
        mitre_tactics: Vec<String>,
        tags: Vec<String>,
    },
    /// Vulnerability advisory annotations. `cve_references` is empty when
    /// the user's message did not mention a CVE.
    #[serde(rename_all = "camelCase")]
    Vulnerability {
        cve_references: Vec<String>,
        tags: Vec<String>,
    },
    /// Threat actor profile annotations.
    #[serde(rename_all = "camelCase")]
    ThreatActor {
        mitre_tactics: Vec<String>,
        tags: Vec<String>,
    },
    /// Incident response annotations.
    #[serde(rename_all = "camelCase")]
    Incident { tags: Vec<String> },
    /// Intelligence search report annotations.
    #[serde(rename_all = "camelCase")]
    Search {
        source: Vec<String>,
        tags: Vec<String>,
    },
    /// System command acknowledgement annotations.
    #[serde(rename_all = "camelCase")]
    Command { tags: Vec<String> },
}

impl ResponseMetadata {
    /// Returns the tag list carried by any variant.
    pub fn tags(&self) -> &[String] {
        match self {
            ResponseMetadata::Threat { tags, .. }
            | ResponseMetadata::Vulnerability { tags, .. }
            | ResponseMetadata::ThreatActor { tags, .. }
            | ResponseMetadata::Incident { tags }
            | ResponseMetadata::Search { tags, .. }
            | ResponseMetadata::Command { tags } => tags,
        }
    }
}

/// A single message in a conversation history.
///
/// Each message has a role (user, assistant, or system), content, and an
/// epoch-millisecond timestamp. Assistant messages may additionally carry a
/// threat level and structured metadata from the response classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Unique message identifier (UUID format)
    pub id: String,
    /// The content of the message. May carry a `[SEARCH:<scope>]` or
    /// `[COMMAND]` prefix set by the input layer.
    pub content: String,
    /// The role of the message sender.
    pub role: MessageRole,
    /// Timestamp in epoch milliseconds, non-decreasing within a conversation.
    pub timestamp: i64,
    /// Severity annotation, set only by the classifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<ThreatLevel>,
    /// Structured classifier metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResponseMetadata>,
}

impl Message {
    /// Creates a plain user message with the given content and timestamp.
    pub fn user(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            role: MessageRole::User,
            timestamp,
            threat_level: None,
            metadata: None,
        }
    }

    /// Creates an assistant message with optional classifier annotations.
    pub fn assistant(
        content: impl Into<String>,
        timestamp: i64,
        threat_level: Option<ThreatLevel>,
        metadata: Option<ResponseMetadata>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            role: MessageRole::Assistant,
            timestamp,
            threat_level,
            metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = ResponseMetadata::Vulnerability {
            cve_references: vec!["CVE-2023-12345".to_string()],
            tags: vec!["vulnerability".to_string()],
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("cveReferences").is_some());
        assert_eq!(json["type"], "vulnerability");
    }

    #[test]
    fn test_message_round_trip() {
        let message = Message::assistant(
            "THREAT ANALYSIS COMPLETE",
            1_700_000_000_000,
            Some(ThreatLevel::High),
            Some(ResponseMetadata::Threat {
                mitre_tactics: vec!["Execution".to_string()],
                tags: vec!["threat".to_string()],
            }),
        );

        let json = serde_json::to_string(&message).unwrap();
        let back: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(back, message);
        assert!(json.contains("\"threatLevel\":\"high\""));
    }

    #[test]
    fn test_threat_level_display() {
        assert_eq!(ThreatLevel::Critical.to_string(), "critical");
    }
}

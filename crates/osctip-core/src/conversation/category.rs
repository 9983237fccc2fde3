//! Conversation categorization.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::message::{Message, MessageRole};

/// High-level category of a conversation, derived from its content.
///
/// A conversation starts as `General` and is auto-classified once it has
/// content; the UI layer may override the value manually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ConversationCategory {
    ThreatAnalysis,
    IncidentResponse,
    VulnerabilityAssessment,
    #[default]
    General,
}

/// Detects the category of a conversation from its message contents.
///
/// Only user messages are scanned: the seeded assistant greeting names
/// every category by itself and would otherwise dominate the result. The
/// lowercased contents are matched against three keyword groups in fixed
/// precedence order; the first group with a match wins.
pub fn detect_category(messages: &[Message]) -> ConversationCategory {
    let content = messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .map(|m| m.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if ["threat", "malware", "attack"].iter().any(|k| content.contains(k)) {
        return ConversationCategory::ThreatAnalysis;
    }

    if ["incident", "breach", "response"].iter().any(|k| content.contains(k)) {
        return ConversationCategory::IncidentResponse;
    }

    if ["vulnerability", "cve", "exploit"].iter().any(|k| content.contains(k)) {
        return ConversationCategory::VulnerabilityAssessment;
    }

    ConversationCategory::General
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str) -> Message {
        Message::user(content, 0)
    }

    #[test]
    fn test_detects_threat_analysis() {
        let messages = vec![message("we found malware on the build server")];
        assert_eq!(detect_category(&messages), ConversationCategory::ThreatAnalysis);
    }

    #[test]
    fn test_threat_takes_precedence_over_incident() {
        // "attack" and "breach" both appear; the threat group is checked first.
        let messages = vec![message("attack led to a data breach")];
        assert_eq!(detect_category(&messages), ConversationCategory::ThreatAnalysis);
    }

    #[test]
    fn test_detects_vulnerability_assessment() {
        let messages = vec![message("is cve-2024-1234 exploitable here?")];
        assert_eq!(
            detect_category(&messages),
            ConversationCategory::VulnerabilityAssessment
        );
    }

    #[test]
    fn test_defaults_to_general() {
        let messages = vec![message("hello there")];
        assert_eq!(detect_category(&messages), ConversationCategory::General);
    }

    #[test]
    fn test_assistant_messages_are_ignored() {
        let messages = vec![
            Message::assistant(crate::conversation::SEED_GREETING, 0, None, None),
            message("hello there"),
        ];
        assert_eq!(detect_category(&messages), ConversationCategory::General);
    }

    #[test]
    fn test_wire_form_is_kebab_case() {
        let json = serde_json::to_string(&ConversationCategory::IncidentResponse).unwrap();
        assert_eq!(json, "\"incident-response\"");
    }
}

//! Title derivation for conversations.
//!
//! A conversation keeps its default title until the first user message
//! arrives, at which point a short title is derived from that message.

use super::model::DEFAULT_TITLE;

/// Maximum derived title length before the ellipsis is appended.
const MAX_TITLE_LEN: usize = 30;

/// Derives a conversation title from the first user message.
///
/// Structural input prefixes select a title prefix: `[SEARCH:<scope>]`
/// becomes `"Search: "`, `[COMMAND]` becomes `"Command: "`, and messages
/// that mention none of threat/security/vuln get a `"Security: "` prefix.
/// The body is stripped of punctuation (alphanumerics, whitespace and
/// underscores survive), and the whole title is truncated to 30 characters
/// with a trailing `"..."` when truncation occurred.
///
/// An empty body falls back to [`DEFAULT_TITLE`].
pub fn derive_title(content: &str) -> String {
    let trimmed = content.trim();

    let (prefix, body) = if trimmed.starts_with("[SEARCH:") {
        let rest = trimmed
            .find(']')
            .map(|i| &trimmed[i + 1..])
            .unwrap_or("");
        ("Search: ", rest)
    } else if let Some(rest) = trimmed.strip_prefix("[COMMAND]") {
        ("Command: ", rest)
    } else {
        let lower = trimmed.to_lowercase();
        if !lower.contains("threat") && !lower.contains("security") && !lower.contains("vuln") {
            ("Security: ", trimmed)
        } else {
            ("", trimmed)
        }
    };

    let body: String = body
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_')
        .collect();
    let body = body.split_whitespace().collect::<Vec<_>>().join(" ");

    if body.is_empty() {
        return DEFAULT_TITLE.to_string();
    }

    let title = format!("{prefix}{body}");
    if title.chars().count() > MAX_TITLE_LEN {
        let truncated: String = title.chars().take(MAX_TITLE_LEN).collect();
        format!("{truncated}...")
    } else {
        title
    }
}

//! Builtin slash commands documented by the assistant.
//!
//! These commands are always available and cannot be modified by users.
//! They are loaded once at startup and cached for the lifetime of the
//! application. The classifier's `/help` reply and the CLI's completion
//! both draw from this catalog.

use serde::Serialize;
use std::sync::OnceLock;

/// A builtin slash command documented by the assistant.
#[derive(Debug, Clone, Serialize)]
pub struct SlashCommand {
    /// Command name (without the leading /)
    pub name: &'static str,
    /// Usage format (e.g., "/scan <target>")
    pub usage: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

impl SlashCommand {
    /// Creates a new builtin slash command.
    pub const fn new(name: &'static str, usage: &'static str, description: &'static str) -> Self {
        Self {
            name,
            usage,
            description,
        }
    }
}

/// Static storage for builtin commands (initialized once).
static BUILTIN_COMMANDS: OnceLock<Vec<SlashCommand>> = OnceLock::new();

/// Returns a reference to all builtin slash commands.
///
/// The commands are initialized on first access and cached for subsequent
/// calls.
pub fn builtin_commands() -> &'static [SlashCommand] {
    BUILTIN_COMMANDS.get_or_init(|| {
        vec![
            SlashCommand::new("scan", "/scan <target>", "Scan a target for vulnerabilities"),
            SlashCommand::new(
                "analyze",
                "/analyze <indicators>",
                "Perform forensic analysis",
            ),
            SlashCommand::new("report", "/report", "Generate security report"),
            SlashCommand::new(
                "mitigate",
                "/mitigate <threat>",
                "Get mitigation recommendations",
            ),
            SlashCommand::new("escalate", "/escalate", "Escalate to security team"),
            SlashCommand::new("help", "/help", "Show this help message"),
        ]
    })
}

/// Find a builtin command by name.
pub fn find_command(name: &str) -> Option<&'static SlashCommand> {
    builtin_commands().iter().find(|cmd| cmd.name == name)
}

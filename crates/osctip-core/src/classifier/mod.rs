//! Simulated response classifier.
//!
//! A pure mapping from the latest user message to a canned assistant reply
//! with optional threat-level and metadata annotations. All randomness
//! (threat-level variety, pool selection) goes through the caller-supplied
//! RNG, so replies are deterministic under a seeded source.

mod responses;

use rand::Rng;

use crate::conversation::{ResponseMetadata, ThreatLevel};
use crate::slash_command::builtin_commands;

const THREAT_KEYWORDS: &[&str] = &[
    "threat",
    "attack",
    "malware",
    "ransomware",
    "breach",
    "compromise",
];
const VULNERABILITY_KEYWORDS: &[&str] =
    &["vulnerability", "cve", "exploit", "patch", "security flaw"];
const THREAT_ACTOR_KEYWORDS: &[&str] = &[
    "apt",
    "threat actor",
    "threat group",
    "hacker",
    "advanced persistent",
];
const INCIDENT_KEYWORDS: &[&str] = &[
    "incident",
    "response",
    "forensic",
    "investigation",
    "containment",
];

/// A classified assistant reply: canned content plus optional annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedResponse {
    pub content: String,
    pub threat_level: Option<ThreatLevel>,
    pub metadata: Option<ResponseMetadata>,
}

/// Classifies the latest user message and produces the simulated reply.
///
/// Structural prefixes (`[SEARCH:<scope>]`, `[COMMAND]`) are handled first;
/// otherwise four disjoint keyword sets are scanned in fixed precedence
/// order (threat, vulnerability, threat actor, incident) and the first set
/// with a match selects the reply pool. No keyword match falls through to
/// the general pool with no annotations.
pub fn classify<R: Rng>(text: &str, rng: &mut R) -> ClassifiedResponse {
    let lower = text.to_lowercase();

    if let Some(rest) = lower.strip_prefix("[search:") {
        return classify_search(rest);
    }

    if let Some(rest) = lower.strip_prefix("[command]") {
        return classify_command(rest.trim());
    }

    if contains_any(&lower, THREAT_KEYWORDS) {
        let level = ThreatLevel::ALL[rng.gen_range(0..ThreatLevel::ALL.len())];
        return ClassifiedResponse {
            content: pick(responses::THREAT_RESPONSES, rng),
            threat_level: Some(level),
            metadata: Some(ResponseMetadata::Threat {
                mitre_tactics: strings(&["Initial Access", "Execution", "Persistence"]),
                tags: strings(&["threat", "malware"]),
            }),
        };
    }

    if contains_any(&lower, VULNERABILITY_KEYWORDS) {
        let metadata = if lower.contains("cve") {
            ResponseMetadata::Vulnerability {
                cve_references: strings(&["CVE-2023-12345", "CVE-2024-23456"]),
                tags: strings(&["vulnerability", "patch-available"]),
            }
        } else {
            ResponseMetadata::Vulnerability {
                cve_references: Vec::new(),
                tags: strings(&["vulnerability", "security-advisory"]),
            }
        };
        return ClassifiedResponse {
            content: pick(responses::VULNERABILITY_RESPONSES, rng),
            threat_level: Some(ThreatLevel::Medium),
            metadata: Some(metadata),
        };
    }

    if contains_any(&lower, THREAT_ACTOR_KEYWORDS) {
        return ClassifiedResponse {
            content: pick(responses::THREAT_ACTOR_RESPONSES, rng),
            threat_level: Some(ThreatLevel::High),
            metadata: Some(ResponseMetadata::ThreatActor {
                mitre_tactics: strings(&["Command and Control", "Exfiltration", "Impact"]),
                tags: strings(&["threat-actor", "apt"]),
            }),
        };
    }

    if contains_any(&lower, INCIDENT_KEYWORDS) {
        return ClassifiedResponse {
            content: pick(responses::INCIDENT_RESPONSES, rng),
            threat_level: Some(ThreatLevel::High),
            metadata: Some(ResponseMetadata::Incident {
                tags: strings(&["incident-response", "forensics"]),
            }),
        };
    }

    ClassifiedResponse {
        content: pick(responses::GENERAL_RESPONSES, rng),
        threat_level: None,
        metadata: None,
    }
}

/// Builds the intelligence-search report for `[SEARCH:<scope>] <query>`.
///
/// `rest` is the lowercased input after the `[search:` prefix. The scope
/// runs to the first `]`; the query is the trimmed remainder. Unlike the
/// keyword paths, the report is fully deterministic.
fn classify_search(rest: &str) -> ClassifiedResponse {
    let (scope, query) = match rest.find(']') {
        Some(i) => (&rest[..i], rest[i + 1..].trim()),
        None => (rest.trim(), ""),
    };

    let content = format!(
        "SEARCH RESULTS FOR: \"{query}\"\nSCOPE: {}\n\n\
         Found 3 relevant entries in the threat intelligence database:\n\n\
         1. [HIGH CONFIDENCE] Indicators associated with {query} suggest links to APT group \"BlackMamba\"\n\
         2. [MEDIUM CONFIDENCE] Similar patterns observed in financial sector attacks in Q1 2024\n\
         3. [HISTORICAL DATA] Related tactics documented in MITRE ATT&CK framework under T1566, T1027\n\n\
         Recommended action: Continue investigation with the \"analyze\" command for deeper forensic assessment.",
        scope.to_uppercase()
    );

    ClassifiedResponse {
        content,
        threat_level: Some(ThreatLevel::Low),
        metadata: Some(ResponseMetadata::Search {
            source: strings(&["OSINT", "Internal Database"]),
            tags: vec![
                "search".to_string(),
                scope.to_string(),
                "intelligence".to_string(),
            ],
        }),
    }
}

/// Builds the reply for a `[COMMAND] <line>` input.
///
/// Dispatch is prefix-based: `/scan`, `/analyze`, and `/help` are
/// implemented; everything else (including the documented `/report`,
/// `/mitigate`, and `/escalate`) echoes a NOT RECOGNIZED notice.
fn classify_command(command: &str) -> ClassifiedResponse {
    let content = if let Some(rest) = command.strip_prefix("/scan") {
        let target = rest.trim();
        let target = if target.is_empty() { "Not specified" } else { target };
        format!(
            "SCAN INITIATED\nTARGET: {target}\n\n\
             Scanning for vulnerabilities and exposed services...\n\n\
             Preliminary results:\n\
             - Open ports detected: 22 (SSH), 80 (HTTP), 443 (HTTPS)\n\
             - Service fingerprinting in progress\n\
             - Vulnerability assessment initiated\n\n\
             Complete results will be available in the Security Dashboard when finished."
        )
    } else if let Some(rest) = command.strip_prefix("/analyze") {
        let target = rest.trim();
        let target = if target.is_empty() {
            "Current threat indicators"
        } else {
            target
        };
        format!(
            "FORENSIC ANALYSIS\nTARGET: {target}\n\n\
             Initiating deep analysis of artifacts and indicators...\n\n\
             Preliminary findings:\n\
             - Suspicious PowerShell execution patterns detected\n\
             - Evidence of persistence mechanism in registry\n\
             - C2 communication attempts identified\n\n\
             Recommendation: Escalate to incident response team for containment procedures."
        )
    } else if command.starts_with("/help") {
        let listing = builtin_commands()
            .iter()
            .map(|cmd| format!("{} - {}", cmd.usage, cmd.description))
            .collect::<Vec<_>>()
            .join("\n");
        format!("AVAILABLE COMMANDS:\n\n{listing}")
    } else {
        format!("COMMAND NOT RECOGNIZED: \"{command}\"\n\nType /help for a list of available commands.")
    };

    ClassifiedResponse {
        content,
        threat_level: None,
        metadata: Some(ResponseMetadata::Command {
            tags: strings(&["command", "system"]),
        }),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

fn pick<R: Rng>(pool: &[&str], rng: &mut R) -> String {
    pool[rng.gen_range(0..pool.len())].to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use osctip_application::{
    AuthService, ConversationService, NoDelay, SimulatedResponder, TokioDelay,
};
use osctip_core::auth::UserDirectory;
use osctip_core::clock::{ResponseDelay, SystemClock};
use osctip_core::conversation::{Conversation, Message, MessageRole, ThreatLevel};
use osctip_core::slash_command::builtin_commands;
use osctip_infrastructure::{
    JsonAuthStateRepository, JsonConversationRepository, OsctipPaths, load_config,
};

#[derive(Parser)]
#[command(name = "osctip")]
#[command(
    about = "OSCTIP - Open Source Cyber Threat Intelligence Platform assistant",
    long_about = None
)]
struct Cli {
    /// User id owning the conversation store (ignored when logging in)
    #[arg(long, default_value = "user1")]
    user: String,

    /// Storage directory override
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Seed for the response-selection RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the simulated thinking delays
    #[arg(long)]
    no_delay: bool,

    /// Login email (demo account: john@example.com / password123)
    #[arg(long, requires = "password")]
    email: Option<String>,

    /// Login password
    #[arg(long, requires = "email")]
    password: Option<String>,
}

/// CLI helper for rustyline that provides completion, highlighting, and
/// hints for slash commands and the local `:`-commands.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        let mut commands: Vec<String> = builtin_commands()
            .iter()
            .map(|cmd| format!("/{}", cmd.name))
            .collect();
        commands.extend(
            [":new", ":list", ":switch", ":clear", ":delete", ":search", ":quit"]
                .iter()
                .map(|s| s.to_string()),
        );
        Self { commands }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') || line.starts_with(':') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') || line.starts_with(':') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if (line.starts_with('/') || line.starts_with(':')) && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// Maps a typed line to the pipeline's structured input conventions.
///
/// `/…` lines become `[COMMAND] …`; `:search <scope> <query>` becomes
/// `[SEARCH:<scope>] <query>`; everything else goes through verbatim.
fn map_input(line: &str) -> Option<String> {
    if let Some(rest) = line.strip_prefix(":search") {
        let rest = rest.trim();
        let (scope, query) = rest.split_once(' ').unwrap_or((rest, ""));
        if scope.is_empty() {
            return None;
        }
        return Some(format!("[SEARCH:{}] {}", scope.to_uppercase(), query.trim()));
    }
    if line.starts_with('/') {
        return Some(format!("[COMMAND] {line}"));
    }
    Some(line.to_string())
}

fn threat_badge(level: ThreatLevel) -> String {
    let label = level.to_string().to_uppercase();
    match level {
        ThreatLevel::Low => label.green().to_string(),
        ThreatLevel::Medium => label.yellow().to_string(),
        ThreatLevel::High => label.red().to_string(),
        ThreatLevel::Critical => label.bright_red().bold().to_string(),
    }
}

fn print_message(message: &Message) {
    let speaker = match message.role {
        MessageRole::User => "you".bright_blue().bold(),
        MessageRole::Assistant => "osctip".bright_green().bold(),
        MessageRole::System => "system".yellow().bold(),
    };

    match message.threat_level {
        Some(level) => println!("{} [{}]", speaker, threat_badge(level)),
        None => println!("{speaker}"),
    }
    println!("{}\n", message.content);
}

fn print_conversation_list(conversations: &[Conversation], active_id: Option<&str>) {
    for conversation in conversations {
        let marker = if Some(conversation.id.as_str()) == active_id {
            "*".bright_green().to_string()
        } else {
            " ".to_string()
        };
        println!(
            "{} {}  {}  [{}]",
            marker,
            conversation.id.dimmed(),
            conversation.title,
            conversation.category
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // ===== Backend Initialization =====
    let paths = OsctipPaths::resolve(cli.data_dir.clone())
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to resolve storage paths")?;
    let config = load_config(&paths).context("Failed to load config.toml")?;

    let response_delay: Arc<dyn ResponseDelay> = if cli.no_delay {
        Arc::new(NoDelay)
    } else {
        Arc::new(TokioDelay::from_millis(config.response_delay_ms))
    };
    let auth_delay: Arc<dyn ResponseDelay> = if cli.no_delay {
        Arc::new(NoDelay)
    } else {
        Arc::new(TokioDelay::from_millis(config.auth_delay_ms))
    };

    let seed = cli.seed.or(config.rng_seed);
    let responder = Arc::new(SimulatedResponder::new(response_delay, seed));
    let conversation_repository = Arc::new(JsonConversationRepository::new(paths.clone()));
    let conversations_service = ConversationService::new(
        conversation_repository,
        responder,
        Arc::new(SystemClock),
    );

    let auth_repository = Arc::new(JsonAuthStateRepository::new(paths));
    let auth_service = AuthService::new(
        auth_repository,
        UserDirectory::with_demo_accounts(),
        auth_delay,
    );

    // ===== Session Restore / Login =====
    let user_id = match (&cli.email, &cli.password) {
        (Some(email), Some(password)) => {
            let state = auth_service.login(email, password).await?;
            let user = state
                .user
                .ok_or_else(|| anyhow::anyhow!("Authenticated state carries no user"))?;
            println!("{} {}\n", "Signed in as".dimmed(), user.name.bold());
            user.id
        }
        _ => {
            let state = auth_service.initialize().await?;
            match state.user {
                Some(user) => {
                    println!("{} {}\n", "Welcome back,".dimmed(), user.name.bold());
                    user.id
                }
                None => cli.user.clone(),
            }
        }
    };

    let mut conversations = conversations_service
        .initialize_conversations(&user_id)
        .await?;

    let stored_active = conversations_service
        .get_active_conversation_id(&user_id)
        .await?;
    let mut active_id = stored_active
        .filter(|id| conversations.iter().any(|c| &c.id == id))
        .or_else(|| conversations.first().map(|c| c.id.clone()));

    if let Some(id) = &active_id {
        if let Some(conversation) = conversations.iter().find(|c| &c.id == id) {
            for message in &conversation.messages {
                print_message(message);
            }
        }
    }

    // ===== REPL =====
    let mut editor: Editor<CliHelper, DefaultHistory> =
        Editor::new().context("Failed to initialize readline")?;
    editor.set_helper(Some(CliHelper::new()));

    loop {
        let line = match editor.readline("osctip> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("Readline failure"),
        };

        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(&line);

        match line.as_str() {
            ":quit" | ":q" => break,
            ":list" => {
                print_conversation_list(&conversations, active_id.as_deref());
                continue;
            }
            ":new" => {
                let (created, list) = conversations_service
                    .create_new_conversation(&user_id, &conversations)
                    .await?;
                conversations = list;
                active_id = Some(created.id.clone());
                print_message(&created.messages[0]);
                continue;
            }
            ":clear" => {
                let Some(id) = active_id.clone() else {
                    println!("{}", "No active conversation".yellow());
                    continue;
                };
                conversations = conversations_service
                    .clear_conversation(&user_id, &id, conversations)
                    .await?;
                if let Some(conversation) = conversations.iter().find(|c| c.id == id) {
                    print_message(&conversation.messages[0]);
                }
                continue;
            }
            _ => {}
        }

        if let Some(id) = line.strip_prefix(":switch ") {
            let id = id.trim();
            if conversations.iter().any(|c| c.id == id) {
                conversations_service
                    .set_active_conversation_id(&user_id, id)
                    .await?;
                active_id = Some(id.to_string());
                println!("{}", "Switched".dimmed());
            } else {
                println!("{}", format!("No conversation with id {id}").yellow());
            }
            continue;
        }

        if let Some(id) = line.strip_prefix(":delete ") {
            let id = id.trim().to_string();
            conversations = conversations_service
                .delete_conversation(&user_id, &id, conversations)
                .await?;
            active_id = conversations_service
                .get_active_conversation_id(&user_id)
                .await?
                .filter(|active| conversations.iter().any(|c| c.id == *active));
            println!("{}", "Deleted".dimmed());
            continue;
        }

        // Everything else is a message into the active conversation.
        let Some(conversation_id) = active_id.clone() else {
            println!(
                "{}",
                "No active conversation; create one with :new".yellow()
            );
            continue;
        };

        let Some(content) = map_input(&line) else {
            println!("{}", "Usage: :search <scope> <query>".yellow());
            continue;
        };

        match conversations_service
            .send_message(&user_id, &conversation_id, &content, conversations.clone())
            .await
        {
            Ok(list) => {
                conversations = list;
                if let Some(conversation) =
                    conversations.iter().find(|c| c.id == conversation_id)
                {
                    if let Some(reply) = conversation
                        .messages
                        .last()
                        .filter(|m| m.role == MessageRole::Assistant)
                    {
                        print_message(reply);
                    } else {
                        println!("{}", "No reply received".yellow());
                    }
                }
            }
            Err(e) => {
                eprintln!("{}", format!("Send failed: {e}").red());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_lines_become_commands() {
        assert_eq!(map_input("/scan 10.0.0.1").unwrap(), "[COMMAND] /scan 10.0.0.1");
    }

    #[test]
    fn test_search_lines_become_scoped_searches() {
        assert_eq!(
            map_input(":search mitre apt29").unwrap(),
            "[SEARCH:MITRE] apt29"
        );
    }

    #[test]
    fn test_search_without_scope_is_rejected() {
        assert!(map_input(":search").is_none());
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(map_input("hello").unwrap(), "hello");
    }
}

//! Terminal command dispatcher
//!
//! Stateless: one step per submitted line, no multi-line continuation.
//! Tokenization splits on whitespace runs with no quoting support; the
//! first token, lower-cased, selects a handler from a fixed registry.
//! `clear`/`cls` short-circuit the registry entirely. Handlers never fail
//! the dispatcher; user-facing problems come back as rendered text.

pub mod commands;

use std::collections::HashMap;
use std::path::Path;

use commands::{Command, Context};

/// One line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermLine {
    Text(String),
    Error(String),
}

impl TermLine {
    /// The rendered text, regardless of styling.
    pub fn value(&self) -> &str {
        match self {
            TermLine::Text(s) | TermLine::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, TermLine::Error(_))
    }
}

/// Result of dispatching one submitted line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermOutput {
    pub lines: Vec<TermLine>,
    /// Wipe the screen instead of appending output.
    pub clear: bool,
}

impl TermOutput {
    /// No output (empty line, successful `cd`).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            lines: vec![TermLine::Text(value.into())],
            clear: false,
        }
    }

    pub fn error(value: impl Into<String>) -> Self {
        Self {
            lines: vec![TermLine::Error(value.into())],
            clear: false,
        }
    }

    pub fn cleared() -> Self {
        Self {
            lines: Vec::new(),
            clear: true,
        }
    }

    pub fn from_lines(lines: Vec<TermLine>) -> Self {
        Self {
            lines,
            clear: false,
        }
    }
}

/// The fixed command registry.
pub struct Terminal {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        let mut commands: HashMap<&'static str, Box<dyn Command>> = HashMap::new();

        commands.insert("help", Box::new(commands::Help));
        commands.insert("time", Box::new(commands::Time));
        commands.insert("whoami", Box::new(commands::Whoami));
        commands.insert("hint", Box::new(commands::Hint));
        commands.insert("pwd", Box::new(commands::Pwd));
        commands.insert("cd", Box::new(commands::Cd));
        commands.insert("ls", Box::new(commands::Ls));
        commands.insert("cat", Box::new(commands::Cat));
        commands.insert("unlock", Box::new(commands::Unlock));
        commands.insert("open", Box::new(commands::Open));
        commands.insert("close", Box::new(commands::Close));

        Self { commands }
    }

    /// Names of every registered command, sorted. `clear`/`cls` are not
    /// listed; they short-circuit before the registry.
    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Tokenize and run one submitted line.
    pub async fn run(&self, line: &str, ctx: Context<'_>) -> TermOutput {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return TermOutput::none();
        }

        let mut tokens = trimmed.split_whitespace();
        let name = tokens
            .next()
            .expect("non-empty trimmed line has a first token")
            .to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        if name == "clear" || name == "cls" {
            return TermOutput::cleared();
        }

        tracing::debug!(command = %name, argc = args.len(), "dispatch");

        match self.commands.get(name.as_str()) {
            Some(command) => {
                command
                    .run(Context {
                        args: &args,
                        cwd: ctx.cwd,
                        vfs: ctx.vfs,
                        windows: ctx.windows,
                        clock: ctx.clock,
                        owner: ctx.owner,
                    })
                    .await
            }
            None => TermOutput::error(format!("Command not found: {name}. Type 'help'.")),
        }
    }
}

/// Render a cwd for the prompt: `/home` is the user's home and shows as `~`.
pub fn prompt_path(cwd: &Path) -> String {
    let raw = cwd.display().to_string();
    if raw == "/home" {
        "~".to_string()
    } else if let Some(rest) = raw.strip_prefix("/home/") {
        format!("~/{rest}")
    } else {
        raw
    }
}

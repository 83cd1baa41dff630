//! Window commands (open, close)

use async_trait::async_trait;

use super::{Command, Context};
use crate::desktop::WindowId;
use crate::terminal::TermOutput;

/// Resolve a window argument, rejecting the terminal itself.
///
/// The terminal cannot open or close itself through its own commands;
/// `terminal` is treated like an unrecognized name.
fn window_arg(args: &[String]) -> Option<WindowId> {
    let id = WindowId::from_name(args.first()?)?;
    if id == WindowId::Terminal {
        return None;
    }
    Some(id)
}

fn usage(verb: &str) -> TermOutput {
    let names: Vec<&str> = WindowId::ALL
        .iter()
        .filter(|id| **id != WindowId::Terminal)
        .map(|id| id.name())
        .collect();
    TermOutput::error(format!("Usage: {verb} <{}>", names.join("|")))
}

/// The open command - open a window by name.
pub struct Open;

#[async_trait]
impl Command for Open {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        let Some(id) = window_arg(ctx.args) else {
            return usage("open");
        };
        ctx.windows.open(id);
        TermOutput::text(format!("Opened {id}."))
    }
}

/// The close command - close a window by name.
pub struct Close;

#[async_trait]
impl Command for Close {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        let Some(id) = window_arg(ctx.args) else {
            return usage("close");
        };
        ctx.windows.close(id);
        TermOutput::text(format!("Closed {id}."))
    }
}

//! System commands (help, time, whoami, hint)

use async_trait::async_trait;

use super::{Command, Context};
use crate::terminal::TermOutput;

const HELP_TEXT: &str = "Commands:\n\
help\n\
clear | cls\n\
time\n\
whoami\n\
pwd\n\
ls [path]\n\
cd [path]\n\
cat <file>\n\
unlock <file> <password>\n\
open <window>\n\
close <window>\n\
hint";

/// The help command.
pub struct Help;

#[async_trait]
impl Command for Help {
    async fn run(&self, _ctx: Context<'_>) -> TermOutput {
        TermOutput::text(HELP_TEXT)
    }
}

/// The time command - current clock string.
pub struct Time;

#[async_trait]
impl Command for Time {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        TermOutput::text(ctx.clock.now_string())
    }
}

/// The whoami command.
pub struct Whoami;

#[async_trait]
impl Command for Whoami {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        TermOutput::text(ctx.owner.to_string())
    }
}

/// The hint command - a phishing-awareness tip.
pub struct Hint;

#[async_trait]
impl Command for Hint {
    async fn run(&self, _ctx: Context<'_>) -> TermOutput {
        TermOutput::text(
            "Phish tip: verify the domain, hover links before clicking, \
             beware urgency, and distrust unexpected attachments.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::FixedClock;
    use super::*;
    use crate::desktop::WindowManager;
    use crate::vfs::Vfs;
    use std::path::PathBuf;

    #[tokio::test]
    async fn time_uses_the_context_clock() {
        let vfs = Vfs::default();
        let mut cwd = PathBuf::from("/home");
        let mut windows = WindowManager::new();

        let out = Time
            .run(Context {
                args: &[],
                cwd: &mut cwd,
                vfs: &vfs,
                windows: &mut windows,
                clock: &FixedClock,
                owner: "visitor",
            })
            .await;

        assert_eq!(out, TermOutput::text("Sat 04:12 PM"));
    }

    #[tokio::test]
    async fn help_names_every_registered_command() {
        let vfs = Vfs::default();
        let mut cwd = PathBuf::from("/home");
        let mut windows = WindowManager::new();

        let out = Help
            .run(Context {
                args: &[],
                cwd: &mut cwd,
                vfs: &vfs,
                windows: &mut windows,
                clock: &FixedClock,
                owner: "visitor",
            })
            .await;

        // a command registered without a help line is a drift bug
        let text = out.lines[0].value();
        for name in crate::terminal::Terminal::new().command_names() {
            assert!(text.contains(name), "help is missing {name}");
        }
        // clear/cls bypass the registry but still belong in the help text
        assert!(text.contains("clear | cls"));
    }
}

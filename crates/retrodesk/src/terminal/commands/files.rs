//! File commands (ls, cat, unlock)

use async_trait::async_trait;

use super::{Command, Context};
use crate::desktop::WindowId;
use crate::terminal::{TermLine, TermOutput};
use crate::vfs::OpenAction;

/// The ls command - list directory contents.
///
/// Hidden entries are never shown here; only the trash browser may walk
/// hidden nodes.
pub struct Ls;

#[async_trait]
impl Command for Ls {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        let target = ctx.args.first().map(String::as_str);
        match ctx.vfs.list(ctx.cwd, target, false).await {
            Ok(names) => {
                TermOutput::from_lines(names.into_iter().map(TermLine::Text).collect())
            }
            Err(err) => TermOutput::error(err.to_string()),
        }
    }
}

/// The cat command - print a file, or trigger its open action.
///
/// A file tagged [`OpenAction::Resume`] opens the resume window instead of
/// printing its placeholder content.
pub struct Cat;

#[async_trait]
impl Command for Cat {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        let Some(target) = ctx.args.first() else {
            return TermOutput::error("Usage: cat <file>");
        };

        match ctx.vfs.read_file(ctx.cwd, target).await {
            Ok(view) => {
                if view.action == Some(OpenAction::Resume) {
                    ctx.windows.open(WindowId::Resume);
                    return TermOutput::text(format!("Opening {target}..."));
                }
                TermOutput::text(view.content)
            }
            Err(err) => TermOutput::error(err.to_string()),
        }
    }
}

/// The unlock command - remove a file's password lock.
pub struct Unlock;

#[async_trait]
impl Command for Unlock {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        let (Some(target), Some(password)) = (ctx.args.first(), ctx.args.get(1)) else {
            return TermOutput::error("Usage: unlock <file> <password>");
        };

        match ctx.vfs.unlock(ctx.cwd, target, password).await {
            Ok(msg) => TermOutput::text(msg),
            Err(err) => TermOutput::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::FixedClock;
    use super::*;
    use crate::desktop::WindowManager;
    use crate::vfs::Vfs;
    use std::path::PathBuf;

    async fn run(cmd: &dyn Command, args: &[&str], windows: &mut WindowManager) -> TermOutput {
        let vfs = Vfs::default();
        let mut cwd = PathBuf::from("/home");
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        cmd.run(Context {
            args: &args,
            cwd: &mut cwd,
            vfs: &vfs,
            windows,
            clock: &FixedClock,
            owner: "visitor",
        })
        .await
    }

    #[tokio::test]
    async fn ls_lists_visible_entries_one_per_line() {
        let mut windows = WindowManager::new();
        let out = run(&Ls, &[], &mut windows).await;
        let names: Vec<&str> = out.lines.iter().map(|l| l.value()).collect();
        assert_eq!(names, vec!["documents", "games", "secret.txt"]);
    }

    #[tokio::test]
    async fn cat_without_args_is_a_usage_error() {
        let mut windows = WindowManager::new();
        let out = run(&Cat, &[], &mut windows).await;
        assert_eq!(out, TermOutput::error("Usage: cat <file>"));
    }

    #[tokio::test]
    async fn cat_resume_opens_the_resume_window() {
        let mut windows = WindowManager::new();
        let out = run(&Cat, &["documents/resume.txt"], &mut windows).await;
        assert!(windows.is_open(WindowId::Resume));
        assert_eq!(out.lines[0].value(), "Opening documents/resume.txt...");
    }

    #[tokio::test]
    async fn unlock_requires_both_arguments() {
        let mut windows = WindowManager::new();
        let out = run(&Unlock, &["secret.txt"], &mut windows).await;
        assert_eq!(out, TermOutput::error("Usage: unlock <file> <password>"));
    }
}

//! Navigation commands (cd, pwd)

use async_trait::async_trait;

use super::{Command, Context};
use crate::terminal::TermOutput;

/// The cd command - change the terminal's working directory.
pub struct Cd;

#[async_trait]
impl Command for Cd {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        // bare `cd` is a no-op success
        let Some(target) = ctx.args.first() else {
            return TermOutput::none();
        };

        match ctx.vfs.change_dir(ctx.cwd, target).await {
            Ok(path) => {
                *ctx.cwd = path;
                TermOutput::none()
            }
            Err(err) => TermOutput::error(err.to_string()),
        }
    }
}

/// The pwd command - print the working directory.
pub struct Pwd;

#[async_trait]
impl Command for Pwd {
    async fn run(&self, ctx: Context<'_>) -> TermOutput {
        TermOutput::text(ctx.cwd.display().to_string())
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
    async fn cd_updates_cwd_silently() {
        let vfs = Vfs::default();
        let mut cwd = PathBuf::from("/home");
        let mut windows = WindowManager::new();
        let args = vec!["documents".to_string()];

        let out = Cd
            .run(Context {
                args: &args,
                cwd: &mut cwd,
                vfs: &vfs,
                windows: &mut windows,
                clock: &FixedClock,
                owner: "visitor",
            })
            .await;

        assert_eq!(out, TermOutput::none());
        assert_eq!(cwd, PathBuf::from("/home/documents"));
    }

    #[tokio::test]
    async fn cd_failure_leaves_cwd_alone() {
        let vfs = Vfs::default();
        let mut cwd = PathBuf::from("/home");
        let mut windows = WindowManager::new();
        let args = vec!["missing".to_string()];

        let out = Cd
            .run(Context {
                args: &args,
                cwd: &mut cwd,
                vfs: &vfs,
                windows: &mut windows,
                clock: &FixedClock,
                owner: "visitor",
            })
            .await;

        assert!(out.lines[0].is_error());
        assert_eq!(cwd, PathBuf::from("/home"));
    }
}

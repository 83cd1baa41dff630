//! Retrodesk CLI - the simulated desktop's terminal as a REPL
//!
//! Usage:
//!   retrodesk -c 'ls'              # Run one command and exit
//!   retrodesk                      # Interactive session
//!
//! Set RUST_LOG (e.g. RUST_LOG=retrodesk=debug) for engine traces.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::Parser;
use retrodesk::{Desktop, TermLine, TermOutput, WindowId};
use tracing_subscriber::EnvFilter;

/// Retrodesk - simulated retro desktop terminal
#[derive(Parser, Debug)]
#[command(name = "retrodesk")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run the given command line and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Line printed by `whoami`
    #[arg(long, default_value = retrodesk::USER)]
    owner: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut desk = Desktop::builder().owner(args.owner).build();
    desk.open_window(WindowId::Terminal);

    if let Some(line) = args.command {
        let out = desk.run_command(&line).await;
        render(&out);
        return Ok(());
    }

    repl(&mut desk).await
}

async fn repl(desk: &mut Desktop) -> Result<()> {
    println!("Welcome to Retrodesk.");
    println!("Type 'help' for commands, Ctrl-D to leave.");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{} ", desk.prompt());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let out = desk.run_command(&line).await;
        if out.clear {
            // ANSI clear screen plus cursor home
            print!("\x1b[2J\x1b[H");
            stdout.flush()?;
            continue;
        }
        render(&out);
    }
}

fn render(out: &TermOutput) {
    for line in &out.lines {
        match line {
            TermLine::Text(text) => println!("{text}"),
            TermLine::Error(text) => eprintln!("{text}"),
        }
    }
}

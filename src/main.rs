//! # Worldsmith Main Entry Point
//!
//! Interactive console host: reads command lines from stdin, feeds them to
//! the sandbox, and ticks the command-file watcher once per line.

use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use worldsmith::{config, Command, Sandbox, WorldsmithResult};

/// Command line arguments for the Worldsmith sandbox console.
#[derive(Parser, Debug)]
#[command(name = "worldsmith")]
#[command(about = "A command-driven sandbox scene console")]
#[command(version)]
struct Args {
    /// Random seed for background colors, spawn positions, and damage rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Command file to poll once per tick
    #[arg(long)]
    command_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> WorldsmithResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    info!("Starting Worldsmith v{}", worldsmith::VERSION);

    let seed = args.seed.unwrap_or(config::DEFAULT_SEED);
    let mut sandbox = Sandbox::new(seed);
    if let Some(path) = &args.command_file {
        sandbox = sandbox.with_command_file(path);
    }

    run_console(&mut sandbox)
}

/// Initializes env_logger at the requested default level; RUST_LOG still
/// overrides.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// The read-eval loop. Console commands (and `;` batches of them) go to the
/// command console; anything else is tried as a "verb target" action.
fn run_console(sandbox: &mut Sandbox) -> WorldsmithResult<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Worldsmith sandbox console. Type commands, 'quit' to exit.");
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let trimmed = line.trim();

        sandbox.tick();

        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }
        if trimmed.is_empty() {
            continue;
        }

        let first = trimmed.split(';').next().unwrap_or("").trim();
        if Command::parse(first).is_some() {
            sandbox.submit_line(trimmed);
        } else {
            // Failures are logged inside the dispatcher; keep the loop alive
            let _ = sandbox.run_action(trimmed);
        }
    }

    info!("Session over after {} ticks.", sandbox.tick_count());
    Ok(())
}

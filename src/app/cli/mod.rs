//! CLI Adapter.

mod prompt;
mod render;

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::{config::load_config, form};
use crate::domain::{AppError, FormEvent, FormSession};
use crate::services::{ArboardClipboard, HttpCompletionClientFactory};

#[derive(Parser)]
#[command(name = "prompt-enhancer")]
#[command(version)]
#[command(
    about = "Enhance a role, context, and task into a more effective AI prompt",
    long_about = None
)]
struct Cli {
    /// TOML file with an [api] section (endpoint URL, timeout)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run_form(cli.config.as_deref()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_form(config_path: Option<&Path>) -> Result<(), AppError> {
    let config = load_config(config_path)?;
    let factory = HttpCompletionClientFactory::new(config.api);
    let mut clipboard = ArboardClipboard::new();
    let mut session = FormSession::new();

    println!("{}\n", render::intro());
    loop {
        println!("{}", render::form(&session));
        let Some(event) = prompt::next_event(&session)? else {
            break;
        };

        if event == FormEvent::Submit && session.validate().is_ok() {
            println!("Enhancing your prompt...");
        }

        let page = form::handle(session, event, &factory, &mut clipboard);
        if let Some(panel) = &page.panel {
            println!("\n{}\n", render::panel(panel));
        }
        session = page.session;
    }

    println!("\n{}", render::usage());
    Ok(())
}

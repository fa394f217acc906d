//! revmark CLI
//!
//! Adds, removes and lists review tags in source files.

mod cli;
mod commands;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::Context;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        if let Some(hint) = e.hint() {
            eprintln!("{}: {}", "hint".cyan().bold(), hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: logging disabled: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("verbose mode enabled");

    let ctx = Context::new(std::env::current_dir()?, cli.config);

    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            println!("{} review tags for source files", "revmark".green().bold());
            println!();
            println!("Run {} for available commands.", "revmark --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &Context, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Add {
            file,
            identifier,
            start,
            end,
            language,
            dry_run,
        } => commands::run_add(
            ctx,
            &file,
            &identifier,
            start,
            end,
            language.as_deref(),
            dry_run,
        ),
        Commands::Remove {
            file,
            identifier,
            regex,
            language,
            dry_run,
        } => commands::run_remove(ctx, &file, &identifier, regex, language.as_deref(), dry_run),
        Commands::Clear {
            file,
            language,
            dry_run,
        } => commands::run_clear(ctx, &file, language.as_deref(), dry_run),
        Commands::List {
            file,
            language,
            json,
        } => commands::run_list(ctx, &file, language.as_deref(), json),
        Commands::Languages { json } => commands::run_languages(ctx, json),
        Commands::Init { force } => commands::run_init(ctx, force),
    }
}

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use rundist::cli::args::{Cli, Commands};
use rundist::cli::{commands, Context};
use rundist::error::RunDistError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        let code = e
            .downcast_ref::<RunDistError>()
            .map_or(1, RunDistError::exit_code);
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    rundist::logging::init(cli.verbose);

    let ctx = Context::from_cli(&cli)?;
    ctx.config.general.color.apply();
    log::debug!(
        "Using storage key '{}' in {}",
        ctx.storage_key,
        ctx.database.display()
    );

    let output = match cli.command {
        Commands::Calc { segments, save } => commands::calc(&ctx, &segments, save)?,
        Commands::History(args) => commands::history(&ctx, args.command)?,
        Commands::Parse { input } => commands::parse(&ctx, &input)?,
        Commands::Config(args) => commands::config(&ctx, &args.command)?,
        Commands::Completions { shell, install } => commands::completions(&shell, install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

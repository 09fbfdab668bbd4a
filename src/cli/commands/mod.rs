//! Command implementations for rundist.

mod calc;
mod history;

pub use calc::{calc, calculator_from_args, save_calculation};
pub use history::history;

use serde_json::json;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::cli::Context;
use crate::core::parse_time;
use crate::error::RunDistError;
use crate::features::completions::{
    completion_install_instructions, generate_completions, shell_from_str,
};
use crate::output::{format_parse, to_json};

/// Execute the parse command
///
/// # Errors
///
/// Returns an error if output formatting fails. An invalid time is reported
/// in the output, not as an error.
pub fn parse(ctx: &Context, input: &str) -> Result<String, RunDistError> {
    format_parse(input, parse_time(input), ctx.format)
}

/// Execute config subcommands
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn config(ctx: &Context, cmd: &ConfigCommands) -> Result<String, RunDistError> {
    match cmd {
        ConfigCommands::Show => match ctx.format {
            OutputFormat::Json => to_json(&json!({
                "config": ctx.config,
                "effective": {
                    "storage_key": ctx.storage_key,
                    "database": ctx.database,
                },
            })),
            OutputFormat::Pretty => {
                let mut output = ctx.config.to_yaml()?;
                output.push_str(&format!(
                    "# effective storage key: {}\n# database: {}",
                    ctx.storage_key,
                    ctx.database.display()
                ));
                Ok(output)
            }
        },
        ConfigCommands::Path => match ctx.format {
            OutputFormat::Json => to_json(&json!({
                "config_file": ctx.config_file,
                "database": ctx.database,
                "exists": ctx.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(format!(
                "config:   {}{}\ndatabase: {}",
                ctx.config_file.display(),
                if ctx.config_file.exists() { "" } else { " (not created)" },
                ctx.database.display()
            )),
        },
    }
}

/// Execute the completions command
///
/// # Errors
///
/// Returns an error if the shell is unknown.
pub fn completions(shell: &str, install: bool) -> Result<String, RunDistError> {
    let shell_type = shell_from_str(shell).ok_or_else(|| {
        RunDistError::InvalidArgument(format!(
            "Unknown shell: {shell}. Supported: bash, zsh, fish, powershell, elvish"
        ))
    })?;

    if install {
        Ok(completion_install_instructions(shell_type))
    } else {
        generate_completions(shell_type)
    }
}

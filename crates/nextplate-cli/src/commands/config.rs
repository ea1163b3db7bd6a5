//! Implementation of the `nextplate config` command.

use crate::{
    cli::{ConfigArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Show the resolved application configuration (or just its file path).
pub fn execute(args: ConfigArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.path {
        output.print(&AppConfig::config_path().display().to_string())?;
        return Ok(());
    }

    let json = serde_json::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
        message: format!("cannot serialize configuration: {e}"),
        source: Some(Box::new(e)),
    })?;

    if output.format() == OutputFormat::Json {
        // Bypass the output manager: the JSON document must stay parseable
        // in non-TTY pipes.
        println!("{json}");
        return Ok(());
    }

    output.header("Resolved configuration")?;
    output.print(&json)?;
    output.print("")?;
    output.print(&format!(
        "Config file: {}",
        AppConfig::config_path().display()
    ))?;
    Ok(())
}

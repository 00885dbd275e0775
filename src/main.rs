//! wte-tools CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wte_tools::cli::{Cli, CommandDispatcher};
use wte_tools::config::{resolve_root, ToolsConfig};
use wte_tools::shell::is_ci;
use wte_tools::ui::{create_ui, OutputMode};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("wte_tools=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wte_tools=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the configuration for the resolved tools root.
fn load_config(cli: &Cli) -> wte_tools::Result<ToolsConfig> {
    let root = resolve_root(cli.root.as_deref())?;
    let config = ToolsConfig::load(&root)?;
    Ok(match &cli.settings {
        Some(path) => config.with_settings_path(path.clone()),
        None => config,
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("wte-tools starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let is_interactive = !is_ci() && !cli.assume_yes();
    let mut ui = create_ui(is_interactive, output_mode);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            ui.error(&e.fatal_message());
            return ExitCode::from(1);
        }
    };
    tracing::debug!("Using settings at {}", config.settings_path.display());

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&e.fatal_message());
            ExitCode::from(1)
        }
    }
}

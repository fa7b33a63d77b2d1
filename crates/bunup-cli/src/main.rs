mod cli;
mod prompt;
mod ui;

use std::path::{Path, PathBuf};

use bunup_core::commands::create::{execute_create, CreateOutcome};
use bunup_core::fetch::fetcher_for;
use bunup_core::outro::Outro;
use bunup_core::runner::SystemCommandRunner;
use bunup_core::scaffold::{ScaffoldSettings, Scaffolder};
use bunup_core::{load_config, CliConfig, ConfigCollector};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use prompt::DialoguerPrompt;
use ui::ProgressReporter;

fn main() {
    init_tracing();
    ctrlc_handler();

    let cli = Cli::parse();
    let code = match cli.command.unwrap_or(Commands::Create) {
        Commands::Create => run_create(cli.config.as_deref()),
    };
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("BUNUP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prompts handle Ctrl+C themselves; this covers the scaffold steps, where a
/// spinner may have hidden the cursor.
fn ctrlc_handler() {
    let _ = ctrlc::set_handler(|| {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    });
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => dirs::config_dir().map(|dir| dir.join("bunup").join("create.yaml")),
    }
}

fn load_cli_config(explicit: Option<&Path>) -> CliConfig {
    let Some(path) = config_path(explicit) else {
        return CliConfig::default();
    };
    match load_config(&path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            eprintln!("Using default settings.");
            CliConfig::default()
        }
    }
}

fn run_create(config_path: Option<&Path>) -> i32 {
    let cli_config = load_cli_config(config_path);
    tracing::debug!(?cli_config, "loaded settings");

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            ui::render_error(&anyhow::Error::new(e).context("failed to read the current directory"));
            return 1;
        }
    };

    ui::render_intro();

    let collector = ConfigCollector::new(DialoguerPrompt::new());
    let scaffolder = Scaffolder::new(
        fetcher_for(&cli_config.template_source),
        SystemCommandRunner,
        ScaffoldSettings::from(&cli_config),
    );
    let reporter = ProgressReporter::new();

    match execute_create(&collector, &scaffolder, &cwd, |event| reporter.handle(event)) {
        Ok(outcome) => {
            match &outcome {
                CreateOutcome::Cancelled => ui::render_cancelled(),
                CreateOutcome::Created { config, .. } => {
                    ui::render_outro(&Outro::for_project(config));
                }
            }
            outcome.exit_code()
        }
        Err(e) => {
            ui::render_error(&e);
            1
        }
    }
}

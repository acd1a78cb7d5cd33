//! Wordhoard - Main entrypoint.
//!
//! Loads configuration, initializes logging and runs the interactive
//! dictionary menu on stdin/stdout.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use wordhoard_lib::config::{ConfigLoader, WordhoardConfig, ENV_PREFIX};
use wordhoard_lib::error::{
    get_error_reporting, set_error_reporter, ErrorContext, TracingErrorReporter, WordhoardError,
    WordhoardResult,
};
use wordhoard_lib::logging::init_logging;
use wordhoard_lib::session::{seed_dictionary, Session};

/// Command line arguments for Wordhoard.
#[derive(Parser, Debug)]
#[clap(name = "wordhoard", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Start the interactive dictionary
    Start,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Loads configuration, reporting and exiting on failure.
fn load_config(loader: &ConfigLoader) -> WordhoardConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            get_error_reporting().report(ErrorContext::new(WordhoardError::Config(e), "config"));
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
fn main() -> WordhoardResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    match args.command.unwrap_or(Command::Start) {
        Command::Start => {
            let config = load_config(&loader);
            init_logging(&config.log)?;
            set_error_reporter(Arc::new(TracingErrorReporter));

            info!(version = wordhoard_lib::VERSION, "Starting Wordhoard");
            let dictionary = seed_dictionary(&config.dictionary);

            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let mut session = Session::new(dictionary, stdin.lock(), stdout.lock(), config.session);

            if let Err(e) = session.run() {
                get_error_reporting().report(ErrorContext::new(e, "session"));
                process::exit(1);
            }
            Ok(())
        }
        Command::Validate => {
            let config = load_config(&loader);
            init_logging(&config.log)?;
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Command::GenConfig { output } => {
            let default_config = WordhoardConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)?;
            std::fs::write(&output, toml)?;

            println!("Default configuration written to {}", output.display());
            Ok(())
        }
    }
}

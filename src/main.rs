mod api;
mod cli_messages;
mod config;
mod consts;
mod credentials;
mod dashboard;
mod environment;
mod error_classifier;
mod events;
mod logging;
mod session;
mod ui;

use crate::config::{ClientState, get_config_path};
use crate::environment::ApiBase;
use crate::logging::init_logging;
use crate::session::{OutputFormat, run_add, run_health, run_prompt, run_show, run_tui_mode};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the uptime API. Overrides UPTIME_API_BASE.
    #[arg(long, global = true, value_name = "URL")]
    api_base: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load targets with their latest results and print the table
    Show {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Register a new target URL
    Add {
        /// URL to monitor
        #[arg(value_name = "URL")]
        url: String,

        /// API token to send instead of the stored one
        #[arg(long, value_name = "TOKEN")]
        token: Option<String>,
    },
    /// Read target URLs from stdin, one per line, until `exit`
    Prompt,
    /// Open the interactive terminal dashboard
    Watch {
        /// Enable background colors
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Check that the API is reachable
    Health,
    /// Store the API token sent with write requests
    Login {
        /// Bearer token
        #[arg(long, value_name = "TOKEN")]
        token: String,
    },
    /// Clear the stored API token.
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let api_base = ApiBase::resolve(args.api_base.as_deref());

    // The terminal dashboard owns the screen; everything else logs to stderr
    if !matches!(args.command, Command::Watch { .. }) {
        init_logging();
    }

    match args.command {
        Command::Show { format } => run_show(api_base, format).await,
        Command::Add { url, token } => run_add(api_base, &url, token).await,
        Command::Prompt => run_prompt(api_base).await,
        Command::Watch { with_background } => run_tui_mode(api_base, with_background).await,
        Command::Health => run_health(api_base).await,
        Command::Login { token } => {
            let token = token.trim();
            if token.is_empty() {
                return Err(Box::from("The API token must not be blank."));
            }
            let config_path = get_config_path()?;
            ClientState::with_token(token)
                .save(&config_path)
                .map_err(|e| format!("Failed to save client state: {}", e))?;
            print_cmd_success!("Logged in", "token stored in {}", config_path.display());
            Ok(())
        }
        Command::Logout => {
            println!("Logging out and clearing client state file...");
            let config_path = get_config_path()?;
            ClientState::clear(&config_path).map_err(Into::into)
        }
    }
}

mod api;
mod config;
mod consts;
mod dashboard;
mod events;
mod logging;
mod models;
mod pretty;
mod session;
mod ui;

use crate::config::{Config, get_config_path, resolve_base_url};
use crate::dashboard::Action;
use crate::pretty::{handle_cmd_error, print_cmd_error, print_cmd_info};
use crate::session::{run_headless_mode, run_oneshot, run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Base URL of the bot backend. Overrides BOT_DASHBOARD_URL and the saved config.
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Print activity to the console instead of opening the dashboard.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    headless: bool,

    /// Disable background colors in the dashboard.
    #[arg(long = "no-background-color", global = true, action = ArgAction::SetTrue)]
    no_background_color: bool,

    /// Command to execute; opens the dashboard when omitted
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Dashboard,
    /// Show the bot status once
    Status,
    /// List accounts
    Accounts,
    /// List target URLs
    Urls,
    /// Add an account
    AddAccount {
        #[arg(long, value_name = "EMAIL")]
        email: String,

        /// Proxy URL for this account's browser session
        #[arg(long, value_name = "PROXY", default_value = "")]
        proxy: String,
    },
    /// Remove an account
    RemoveAccount { email: String },
    /// Open a login browser for an account
    Login { email: String },
    /// Confirm a manual login and save the session
    ConfirmLogin { email: String },
    /// Add target URLs
    AddUrls {
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },
    /// Remove a target URL
    RemoveUrl { url: String },
    /// Start the bot
    Start,
    /// Stop the bot
    Stop,
    /// Save the backend URL to the config file
    SetUrl { url: String },
    /// Delete the config file
    ClearConfig,
}

impl Command {
    /// The single action a one-shot command performs, `None` for the dashboard.
    fn action(self) -> Option<Action> {
        match self {
            Command::Dashboard | Command::SetUrl { .. } | Command::ClearConfig => None,
            Command::Status => Some(Action::LoadStatus),
            Command::Accounts => Some(Action::LoadAccounts),
            Command::Urls => Some(Action::LoadUrls),
            Command::AddAccount { email, proxy } => Some(Action::AddAccount { email, proxy }),
            Command::RemoveAccount { email } => Some(Action::RemoveAccount(email)),
            Command::Login { email } => Some(Action::LoginAccount(email)),
            Command::ConfirmLogin { email } => Some(Action::ConfirmLogin(email)),
            Command::AddUrls { urls } => Some(Action::AddUrls(urls.join("\n"))),
            Command::RemoveUrl { url } => Some(Action::RemoveUrl(url)),
            Command::Start => Some(Action::StartBot),
            Command::Stop => Some(Action::StopBot),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = get_config_path()?;

    // Without a subcommand the dashboard only draws on a real terminal
    let headless = args.headless || (args.command.is_none() && !std::io::stdout().is_terminal());
    let command = args.command.unwrap_or(Command::Dashboard);
    match &command {
        Command::SetUrl { url } => {
            let url = url.trim();
            if url.is_empty() {
                return Err(Box::from("Backend URL must not be empty"));
            }
            let config = Config::new(url.to_string());
            config
                .save(&config_path)
                .map_err(|e| handle_cmd_error!(e, "Failed to save config"))?;
            print_cmd_info!(
                "Config saved",
                "Backend URL {} written to {}",
                config.base_url,
                config_path.display()
            );
            return Ok(());
        }
        Command::ClearConfig => {
            Config::clear(&config_path)
                .map_err(|e| handle_cmd_error!(e, "Failed to clear config"))?;
            print_cmd_info!("Config cleared", "Removed {}", config_path.display());
            return Ok(());
        }
        _ => {}
    }

    let base_url = resolve_base_url(args.url, &config_path);
    let session = setup_session(&base_url)
        .map_err(|e| handle_cmd_error!(e, "Failed to create HTTP client"))?;

    match command.action() {
        Some(action) => run_oneshot(session, action).await.map_err(Into::into),
        None if headless => run_headless_mode(session).await,
        None => run_tui_mode(session, !args.no_background_color).await,
    }
}

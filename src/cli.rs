use crate::notification::Urgency;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "notifroute", version, about = "Route notifications to a channel by urgency")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log routing decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Send a notification
    Send(SendArgs),
    /// Inspect configured handlers
    Handlers {
        #[command(subcommand)]
        command: HandlersCmd,
    },
    /// Manage config
    Config {
        #[command(subcommand)]
        command: ConfigCmd,
    },
}

#[derive(Debug, Args)]
pub struct SendArgs {
    /// Notification message/body
    #[arg(value_name = "MESSAGE")]
    pub message: String,

    /// Notification urgency: low, medium (or normal), high
    #[arg(long, default_value = "medium")]
    pub urgency: Urgency,

    /// Output a JSON report to stdout
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum HandlersCmd {
    /// List handlers in routing order
    List,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCmd {
    /// Create a default config file
    Init(ConfigInitArgs),
    /// Show the resolved config path
    Path,
}

#[derive(Debug, Args)]
pub struct ConfigInitArgs {
    /// Override path for config file
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Overwrite if the config file already exists
    #[arg(long)]
    pub force: bool,
}

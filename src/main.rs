use clap::Parser;
use notifroute::cli::{Cli, Commands, ConfigCmd, ConfigInitArgs, HandlersCmd, SendArgs};
use notifroute::config::{default_config_path, Config};
use notifroute::error::AppError;
use notifroute::{DeliveryStatus, Notification};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "notifroute=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.unwrap_or_else(default_config_path);

    match cli.command {
        Commands::Send(args) => handle_send(&config_path, args),
        Commands::Handlers {
            command: HandlersCmd::List,
        } => handle_handlers_list(&config_path),
        Commands::Config {
            command: ConfigCmd::Init(args),
        } => handle_config_init(config_path, args),
        Commands::Config {
            command: ConfigCmd::Path,
        } => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn handle_send(config_path: &Path, args: SendArgs) -> Result<(), AppError> {
    let config = Config::load(config_path)?;
    let dispatcher = config.build_dispatcher()?;
    let notification = Notification::new(args.message, args.urgency);
    let status = dispatcher.send(notification)?;
    print_send_output(&status, args.json)
}

fn print_send_output(status: &DeliveryStatus, json: bool) -> Result<(), AppError> {
    if !json {
        println!("delivered via {}", status.deliverer);
        return Ok(());
    }
    println!("{}", serde_json::to_string(status)?);
    Ok(())
}

fn handle_handlers_list(config_path: &Path) -> Result<(), AppError> {
    let config = Config::load(config_path)?;
    for kind in config.order()? {
        println!("{kind}\t{}", config.urgency_for(kind));
    }
    if let Some(timeout) = config.timeout() {
        println!("timeout\t{}ms", timeout.as_millis());
    }
    Ok(())
}

fn handle_config_init(config_path: PathBuf, args: ConfigInitArgs) -> Result<(), AppError> {
    let path = args.path.unwrap_or(config_path);
    if path.exists() && !args.force {
        return Err(AppError::ConfigExists(path));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, Config::template())?;
    println!("wrote {}", path.display());
    Ok(())
}

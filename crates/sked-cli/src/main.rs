use clap::Parser;
use owo_colors::{OwoColorize, Style};
use sked_core::error::CoreError;
use store::JsonFileStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod config;
mod export;
mod parser;
mod store;
mod util;
mod views;

fn main() {
    let config = config::Config::new().unwrap_or_else(|e| {
        eprintln!("{} {}", "Warning: ignoring invalid configuration:".yellow(), e);
        config::Config::default()
    });

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = JsonFileStore::new(&config.state_path);
    tracing::debug!(state = %store.path().display(), "using state file");

    let cli = cli::Cli::parse();
    let schedule = cli
        .schedule
        .as_deref()
        .or(config.default_schedule.as_deref());

    let result = match cli.command {
        cli::Commands::Add(command) => {
            commands::add::add_event(&store, schedule, command, &config.validation)
        }
        cli::Commands::Recur(command) => {
            commands::recur::add_recurring(&store, schedule, command, &config.validation)
                .map(|_| ())
        }
        cli::Commands::List(command) => commands::list::list_events(&store, schedule, command),
        cli::Commands::Remove(command) => {
            commands::remove::remove_event(&store, schedule, command).map(|_| ())
        }
        cli::Commands::Week(command) => commands::week::show_week(&store, schedule, command),
        cli::Commands::Show => commands::list::show_schedule(&store, schedule).map(|_| ()),
        cli::Commands::Export(command) => {
            let dir = command.dir.unwrap_or_else(|| config.export_dir.clone());
            commands::export::export_schedule(&store, schedule, &dir).map(|_| ())
        }
        cli::Commands::Schedule(command) => {
            commands::schedule::schedule_command(&store, command)
        }
    };

    if let Err(e) = result {
        handle_error(e);
        std::process::exit(1);
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.chain().find_map(|e| e.downcast_ref::<CoreError>()) {
        match core_error {
            CoreError::NotFound(s) => {
                eprintln!("{} {}", "Error:".style(error_style), s);
            }
            CoreError::Overlap { title, conflicting } => {
                eprintln!(
                    "{} '{}' overlaps with '{}'",
                    "Error:".style(error_style),
                    title.yellow(),
                    conflicting.yellow()
                );
                eprintln!("Pick a time that does not intersect an existing event.");
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {:#}", "Error:".style(error_style), err);
    }
}

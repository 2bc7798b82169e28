//! `registrar` - CLI for the student registration desk
//!
//! This binary registers students and displays the stored registrations.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use registrar::cli::{Cli, Command, ConfigCommand, ListCommand, RenderCommand};
use registrar::config::ListFormat;
use registrar::controller::{ConsoleNotifier, Registrar};
use registrar::ids::{MonotonicIds, SystemClock};
use registrar::repository::{export_json, RecordRepository, StoreRepository, STORAGE_KEY};
use registrar::storage::{KeyValueStore, SqliteStore};
use registrar::view::{html, text, TableView};
use registrar::{init_logging, Config, Error};

type AppResult = Result<(), Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Rejected registrations were already reported by the notifier.
            if !matches!(err.downcast_ref::<Error>(), Some(e) if e.is_validation_error()) {
                eprintln!("Error: {err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> AppResult {
    let config = Config::load_from(cli.config.clone())?;

    match cli.command {
        Command::Register(cmd) => handle_register(&config, &cmd, cli.quiet),
        Command::List(cmd) => handle_list(&config, &cmd),
        Command::Render(cmd) => handle_render(&config, &cmd, cli.quiet),
        Command::Export => handle_export(&config),
        Command::Status(cmd) => handle_status(&config, cmd.json),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn open_repository(config: &Config) -> Result<StoreRepository<SqliteStore>, Error> {
    let store = SqliteStore::open(config.database_path())?;
    Ok(StoreRepository::new(store))
}

fn handle_register(
    config: &Config,
    cmd: &registrar::cli::RegisterCommand,
    quiet: bool,
) -> AppResult {
    let mut registrar = Registrar::new(
        open_repository(config)?,
        MonotonicIds::new(),
        SystemClock,
        ConsoleNotifier::new(quiet),
    );
    registrar.initialize()?;

    let mut form = cmd.to_form();
    let record = registrar.handle_submission(&mut form)?;
    debug!(id = record.id, "Stored registration");
    Ok(())
}

fn handle_list(config: &Config, cmd: &ListCommand) -> AppResult {
    let records = open_repository(config)?.load_all()?;
    let format = cmd
        .format
        .map_or(config.output.default_format, ListFormat::from);

    match format {
        ListFormat::Json => println!("{}", export_json(&records)?),
        ListFormat::Table => print!(
            "{}",
            text::render_table(&TableView::from_records(&records), &config.page.empty_message)
        ),
        ListFormat::Plain => print!(
            "{}",
            text::render_plain(&TableView::from_records(&records), &config.page.empty_message)
        ),
    }
    Ok(())
}

fn handle_render(config: &Config, cmd: &RenderCommand, quiet: bool) -> AppResult {
    let records = open_repository(config)?.load_all()?;
    let page = html::render_page(&TableView::from_records(&records), &config.page);

    match &cmd.output {
        Some(path) => {
            std::fs::write(path, page).map_err(Error::from)?;
            if !quiet {
                println!("Wrote {} records to {}", records.len(), path.display());
            }
        }
        None => print!("{page}"),
    }
    Ok(())
}

fn handle_export(config: &Config) -> AppResult {
    let records = open_repository(config)?.load_all()?;
    println!("{}", export_json(&records)?);
    Ok(())
}

fn handle_status(config: &Config, json: bool) -> AppResult {
    let repository = open_repository(config)?;
    let records = repository.load_all()?;
    let stats = repository.store().stats()?;
    let keys = repository.store().keys()?;
    let entry_bytes = repository.raw_entry()?.map_or(0, |e| e.len());

    if json {
        let status = serde_json::json!({
            "database_path": config.database_path(),
            "storage_key": STORAGE_KEY,
            "records": records.len(),
            "entry_bytes": entry_bytes,
            "keys": keys,
            "total_keys": stats.total_keys,
            "total_value_bytes": stats.total_value_bytes,
            "database_bytes": stats.db_size_bytes,
            "oldest": records.first().map(|r| r.created_at),
            "newest": records.last().map(|r| r.created_at),
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("registrar status");
        println!("----------------");
        println!("Database:      {}", config.database_path().display());
        println!("Storage key:   {STORAGE_KEY}");
        println!("Records:       {}", records.len());
        println!("Entry size:    {entry_bytes} bytes");
        println!("Keys:          {} ({})", stats.total_keys, keys.join(", "));
        println!("Values size:   {} bytes", stats.total_value_bytes);
        println!("Database size: {} bytes", stats.db_size_bytes);
        if let (Some(first), Some(last)) = (records.first(), records.last()) {
            println!("Oldest:        {}", first.created_at.to_rfc3339());
            println!("Newest:        {}", last.created_at.to_rfc3339());
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> AppResult {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Database path:   {}", config.database_path().display());
                println!();
                println!("[Page]");
                println!("  Title:           {}", config.page.title);
                println!("  Empty message:   {}", config.page.empty_message);
                println!();
                println!("[Output]");
                println!("  Default format:  {:?}", config.output.default_format);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}

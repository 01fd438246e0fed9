//! # CLI Layer
//!
//! This module is **one possible UI client** for the ledger. It is the only
//! place that parses arguments, prints, or decides exit codes.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_logging()`: `tracing` subscriber on stderr
//! - `resolve_inventory_path()`: `--file` > `STOCKLEDGER_FILE` > config > default
//! - `handle_*()`: Per-command handlers that call the API and print the result

use super::print::{print_config, print_messages, print_records, print_values};
use super::setup::{CaptureArgs, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use stockledger::api::{self, ConfigAction, ItemInput, LedgerApi};
use stockledger::commands::config as config_cmd;
use stockledger::config::LedgerConfig;
use stockledger::error::{LedgerError, Result};
use stockledger::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

const PROJECT_CONFIG_DIR: &str = ".stockledger";
const FILE_ENV: &str = "STOCKLEDGER_FILE";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let project_dir = cwd.join(PROJECT_CONFIG_DIR);

    // Config does not need the inventory file, so it runs before anything loads it.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&project_dir, key.clone(), value.clone());
    }

    let path = resolve_inventory_path(&cli, &cwd, &project_dir)?;
    tracing::debug!(path = %path.display(), "using inventory file");
    let store = FileStore::new(&path);

    if let Some(Commands::Validate) = &cli.command {
        return handle_validate(&store);
    }

    let mut api = match LedgerApi::open(store) {
        Ok(api) => api,
        Err(e) => return Err(explain_load_error(e, &path)),
    };

    match cli.command {
        Some(Commands::Capture(args)) => handle_capture(&mut api, args),
        Some(Commands::List) | None => handle_list(&api),
        Some(Commands::Restock { row, add }) => handle_restock(&mut api, row, add),
        Some(Commands::Search { code }) => handle_search(&api, &code),
        Some(Commands::Value) => handle_value(&api),
        Some(Commands::Discount { row, price }) => handle_discount(&mut api, row, price),
        Some(Commands::Validate) | Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "stockledger=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn resolve_inventory_path(cli: &Cli, cwd: &Path, project_dir: &Path) -> Result<PathBuf> {
    if let Some(path) = &cli.file {
        return Ok(cwd.join(path));
    }
    if let Ok(path) = std::env::var(FILE_ENV) {
        if !path.trim().is_empty() {
            return Ok(cwd.join(path));
        }
    }

    let mut dirs = vec![project_dir.to_path_buf()];
    if let Some(proj_dirs) = ProjectDirs::from("com", "stockledger", "stockledger") {
        dirs.push(proj_dirs.config_dir().to_path_buf());
    }
    let config = LedgerConfig::load_first(&dirs)?;
    Ok(config.inventory_path(cwd))
}

/// Adds the "what to do now" hint: place the file, or fix it in place.
fn explain_load_error(err: LedgerError, path: &Path) -> LedgerError {
    match &err {
        LedgerError::MissingFile(_) => {
            let dir = path
                .parent()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ".".to_string());
            eprintln!(
                "Please save the inventory file in {}, using the correct format, then try again.",
                dir
            );
        }
        LedgerError::MalformedFile(report) if report.header_mismatch() => {
            eprintln!(
                "Fix the header line in place; do not move product data off line 1 by renaming the file."
            );
        }
        _ => {}
    }
    err
}

fn handle_capture(api: &mut LedgerApi<FileStore>, args: CaptureArgs) -> Result<()> {
    let input = ItemInput {
        country: args.country,
        code: args.code,
        product: args.product,
        cost: args.cost,
        quantity: args.quantity,
    };
    let result = api.capture(&input)?;
    print_records("New item:", &result.affected_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &LedgerApi<FileStore>) -> Result<()> {
    let result = api.list()?;
    print_records("Inventory:", &result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_restock(
    api: &mut LedgerApi<FileStore>,
    row: Option<usize>,
    add: Option<String>,
) -> Result<()> {
    let (row, amount) = match (row, add) {
        (Some(row), Some(amount)) => (row, amount),
        (row, _) => {
            let result = api.restock_candidates()?;
            print_records("Items with lowest quantities:", &result.listed_records);
            if row.is_some() {
                println!("Use --add <N> to choose how much stock to add.");
            }
            return Ok(());
        }
    };

    let result = api.restock(row, &amount)?;
    print_records("New quantities:", &result.affected_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(api: &LedgerApi<FileStore>, code: &str) -> Result<()> {
    let result = api.search(code)?;
    if result.listed_records.is_empty() {
        print_messages(&result.messages);
        println!(
            "Use `stock capture --code {}` to add it to the inventory.",
            code.trim().to_uppercase()
        );
        return Ok(());
    }
    print_records("Search results:", &result.listed_records);
    Ok(())
}

fn handle_value(api: &LedgerApi<FileStore>) -> Result<()> {
    let result = api.values()?;
    print_values(&result.values);
    Ok(())
}

fn handle_discount(
    api: &mut LedgerApi<FileStore>,
    row: Option<usize>,
    price: Option<String>,
) -> Result<()> {
    let (row, price) = match (row, price) {
        (Some(row), Some(price)) => (row, price),
        (row, _) => {
            let result = api.discount_candidates()?;
            print_records("Items with highest quantities:", &result.listed_records);
            if row.is_some() {
                println!("Use --price <P> to set the sale price.");
            }
            return Ok(());
        }
    };

    let result = api.discount(row, &price)?;
    print_records("New prices:", &result.affected_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_validate(store: &FileStore) -> Result<()> {
    let result = api::validate(store)?;
    if let Some(report) = result.report {
        if !report.is_valid() {
            return Err(LedgerError::MalformedFile(report));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(project_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = config_cmd::run(project_dir, action)?;
    if let Some(config) = &result.config {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

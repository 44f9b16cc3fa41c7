use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use clap::Parser;
use color_eyre::config::{HookBuilder, Theme};
use color_eyre::eyre::WrapErr;
use tracing::{info, instrument};
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;
use address_lookup::batch::{lookup_all, Lookup};
use address_lookup::record::{read_filters, write_records};
use address_lookup::{AddressClient, AddressFilter, ClientConfig};
use crate::cli::{Cli, Commands};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = install_hooks() {
        eprintln!("Error: {:?}", e);
        return ExitCode::FAILURE;
    }

    match run(Cli::parse()).await {
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
        _ => ExitCode::SUCCESS,
    }
}

/// logs go to stderr so stdout stays clean for JSON/CSV output
fn install_hooks() -> color_eyre::Result<()> {
    let theme = if io::stderr().is_terminal() {
        Theme::dark()
    } else {
        Theme::new()
    };
    HookBuilder::default().theme(theme).install()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

async fn run(cli: Cli) -> color_eyre::Result<()> {
    let mut config = ClientConfig::new(&cli.base_url)?;
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    let client = AddressClient::with_config(config)?;

    match cli.command {
        Commands::Lookup { filter, raw } => lookup(&client, filter.into(), raw).await,
        Commands::Batch { input, output, concurrency } => batch(&client, &input, output, concurrency).await,
    }
}

#[instrument(skip(client))]
async fn lookup(client: &AddressClient, filter: AddressFilter, raw: bool) -> color_eyre::Result<()> {
    if raw {
        println!("{}", client.get_addresses_raw(&filter).await?);
        return Ok(());
    }
    let result = client.get_addresses(&filter).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

#[instrument(skip(client))]
async fn batch(client: &AddressClient, input: &Path, output: Option<PathBuf>, concurrency: usize) -> color_eyre::Result<()> {
    let file = File::open(input).wrap_err_with(|| format!("cannot open [{}]", input.display()))?;
    let filters = read_filters(file).wrap_err_with(|| format!("cannot read filters from [{}]", input.display()))?;
    info!("read [{}] filters from [{}]", filters.len(), input.display());

    let lookups = lookup_all(client, filters, concurrency).await;
    let failed = lookups.iter().filter(|lookup| !lookup.is_ok()).count();
    info!("finished looking up, [{}] succeeded, [{}] failed", lookups.len() - failed, failed);

    match output {
        Some(path) => {
            info!("saving records to [{}]", path.display());
            save_records(&lookups, &path)
        }
        None => Ok(write_records(&lookups, io::stdout().lock())?),
    }
}

/// write result to CSV file
fn save_records(lookups: &[Lookup], save_path: &Path) -> color_eyre::Result<()> {
    if let Some(parent) = save_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(save_path).wrap_err_with(|| format!("cannot create [{}]", save_path.display()))?;
    write_records(lookups, file)?;
    Ok(())
}

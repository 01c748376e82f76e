use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use jlg_code::config::{Cli, Command, JlgConfig};
use jlg_code::utils::logger;
use jlg_code::{
    AddressParser, AddressResolver, HttpDataSource, InMemoryStore, MunicipalityCode,
    MunicipalityImporter, MunicipalityStore, MunicipalityUpdater, Prefecture,
};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    let config = match &cli.config {
        Some(path) => JlgConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => JlgConfig::default(),
    };
    if cli.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    match cli.command {
        Command::Parse { address } => {
            let parsed = AddressParser::parse(&address);
            println!(
                "prefecture:   {}",
                parsed
                    .prefecture
                    .map(|p| format!("{} ({})", p.label(), p.code()))
                    .unwrap_or_else(|| "-".to_string())
            );
            println!(
                "municipality: {}",
                parsed.municipality.as_deref().unwrap_or("-")
            );
            println!("rest:         {}", parsed.rest);
        }

        Command::Resolve { address, data } => {
            let csv_path = data.unwrap_or_else(|| PathBuf::from(&config.data.csv_path));
            let store = load_store(&csv_path)?;
            let resolver = AddressResolver::new(store);

            let resolution = resolver.resolve(&address)?;
            match (&resolution.prefecture, &resolution.code) {
                (Some(pref), Some(code)) => {
                    println!("{} ({})", code, pref.label());
                }
                (Some(pref), None) => {
                    eprintln!("no municipality matched (prefecture: {})", pref.label());
                    return Ok(ExitCode::FAILURE);
                }
                _ => {
                    eprintln!("no prefecture found in address");
                    return Ok(ExitCode::FAILURE);
                }
            }
        }

        Command::Validate { code } => match MunicipalityCode::new(&code) {
            Ok(code) => {
                println!("valid: {}", code);
                println!("  prefecture: {} ({})", code.prefecture().label(), code.prefecture_code());
                println!("  local code: {}", code.local_code());
                println!("  check digit: {}", code.check_digit());
            }
            Err(e) => {
                eprintln!("invalid: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },

        Command::Import { path, deprecate } => {
            let csv_path = path.unwrap_or_else(|| PathBuf::from(&config.data.csv_path));
            tracing::info!("Importing municipalities from {}", csv_path.display());

            let mut store = InMemoryStore::new();
            let summary = MunicipalityImporter::import(&mut store, &csv_path, deprecate)?;

            println!("imported:   {}", summary.imported);
            println!("skipped:    {}", summary.skipped);
            println!("deprecated: {}", summary.deprecated);
        }

        Command::Update { output } => {
            let output = output.unwrap_or_else(|| PathBuf::from(&config.data.csv_path));
            tracing::info!("Fetching reference data from {}", config.source.endpoint);

            let source = HttpDataSource::new(&config.source.endpoint, config.source.timeout())?;
            let count = MunicipalityUpdater::update(&source, &output).await?;

            println!("updated {} municipalities -> {}", count, output.display());
        }

        Command::List {
            prefecture_code,
            data,
        } => {
            let prefecture = Prefecture::from_code(&prefecture_code)
                .with_context(|| format!("unknown prefecture code: {}", prefecture_code))?;

            let csv_path = data.unwrap_or_else(|| PathBuf::from(&config.data.csv_path));
            let store = load_store(&csv_path)?;

            for record in store.list_by_prefecture(prefecture)? {
                println!("{}  {}  {}", record.code, record.name, record.name_kana);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_store(csv_path: &Path) -> anyhow::Result<InMemoryStore> {
    let mut store = InMemoryStore::new();
    let summary = MunicipalityImporter::import(&mut store, csv_path, false)
        .with_context(|| format!("failed to load municipalities from {}", csv_path.display()))?;

    tracing::debug!(
        "Loaded {} municipalities ({} rows skipped)",
        summary.imported,
        summary.skipped
    );

    Ok(store)
}

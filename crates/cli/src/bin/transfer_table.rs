use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use hohmann_calculator::export::table::{self, Row};
use hohmann_calculator::export::writer_for_path;
use hohmann_calculator::transfer::catalog as transfer_catalog;
use hohmann_calculator::{CalculatorOptions, OrbitTarget, TransferRequest, plan_transfer};

#[path = "shared/logging.rs"]
mod logging;

/// Tabulate Hohmann transfers from one body to every other catalog body (CSV).
#[derive(Parser, Debug)]
#[command(author, version, about = "Hohmann transfer table generator (CSV)")]
struct Cli {
    /// Departure body name (case-insensitive)
    #[arg(long)]
    from: String,

    /// Body catalog: YAML file, TOML file, or directory of TOML files (defaults to built-in)
    #[arg(long)]
    bodies: Option<PathBuf>,

    /// Central-body record (YAML or TOML); defaults to the Sun
    #[arg(long)]
    central: Option<PathBuf>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let catalog = transfer_catalog::select(cli.bodies.as_deref(), cli.central.as_deref())
        .context("loading body catalog")?;
    let origin = catalog.find(&cli.from).ok_or_else(|| {
        anyhow!(
            "Body '{}' not found in catalog (known: {})",
            cli.from,
            catalog.names().join(", ")
        )
    })?;

    let options = CalculatorOptions {
        include_phase_timing: true,
        include_escape_addon: false,
        custom_radius_allowed: false,
    };

    let mut rows = Vec::new();
    for body in catalog.bodies().iter().filter(|b| b.name != origin.name) {
        let request = TransferRequest::new(
            OrbitTarget::body(origin.name.as_str()),
            OrbitTarget::body(body.name.as_str()),
        )
        .with_options(options);
        let report = plan_transfer(&request, &catalog)
            .with_context(|| format!("{} -> {}", origin.name, body.name))?;
        rows.push(Row::from(&report));
    }
    tracing::info!(origin = %origin.name, rows = rows.len(), "transfer table computed");

    let writer = writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    table::write_rows(writer, &rows)?;

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use county_data_extractor::config::{Config, REGION9_COUNTIES};
use county_data_extractor::emit;
use county_data_extractor::pipeline::historical;
use county_data_extractor::workbook::CountyWorkbook;

#[derive(Parser)]
#[command(name = "extract-historical")]
#[command(about = "Extract SDO historical time-series from County Data Tables workbooks", long_about = None)]
struct Cli {
    /// Directory containing the county workbooks
    #[arg(long, env = "REGION_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Directory the dashboard data modules are written to
    #[arg(long, env = "DASHBOARD_DATA_DIR", default_value = "lib/data")]
    output_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if it exists (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new(cli.data_dir, cli.output_dir);

    info!("Region 9 historical data extraction");
    info!("Reading workbooks from {}", config.data_dir.display());

    let pb = ProgressBar::new(REGION9_COUNTIES.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut records = Vec::with_capacity(REGION9_COUNTIES.len());
    let mut failures = Vec::new();

    for county in REGION9_COUNTIES {
        pb.set_message(county);
        let workbook = CountyWorkbook::new(config.workbook_path(county), county);
        records.push(historical::county_record(&workbook, &mut failures));
        info!("✓ {} data extracted", county);
        pb.inc(1);
    }
    pb.finish_with_message(format!("✓ {} counties extracted", records.len()));

    info!("Generating TypeScript output file...");
    let path = emit::write_historical_module(&config.output_dir, &records)?;
    info!("Generated TypeScript file: {}", path.display());

    if failures.is_empty() {
        info!("Extraction complete for {} counties", records.len());
    } else {
        warn!(
            "Extraction finished with {} domain failures:",
            failures.len()
        );
        for failure in &failures {
            warn!(
                "  {} / {}: {}",
                failure.county, failure.domain, failure.error
            );
        }
    }

    Ok(())
}

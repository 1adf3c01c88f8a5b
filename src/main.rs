use analytics::{AnalysisStrategies, SalesAnalyzer, SellerReport};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::{load_config, OutputFormat};
use core_types::SalesData;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// The main entry point for the sales report application.
fn main() {
    // A missing .env file is fine; it only supplies optional overrides.
    dotenvy::dotenv().ok();

    // Logs go to stderr so that stdout carries nothing but the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => {
            if let Err(e) = handle_report(args) {
                eprintln!("Error building sales report: {e:#}");
                std::process::exit(1);
            }
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks sellers by profit and works out their bonuses.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the seller performance report from a JSON dataset.
    Report(ReportArgs),
}

#[derive(Parser)]
struct ReportArgs {
    /// JSON file holding `sellers`, `products` and `purchase_records`.
    #[arg(long)]
    data: PathBuf,

    /// Configuration file. Built-in defaults apply when it does not exist.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Overrides the output format set in the configuration.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

// ==============================================================================
// Report Command Logic
// ==============================================================================

/// Handles loading, analysis and presentation of a single report.
fn handle_report(args: ReportArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load configuration from {}", args.config.display()))?;
    let data = load_dataset(&args.data)?;

    let strategies = AnalysisStrategies::from_config(&config)?;
    let analyzer = SalesAnalyzer::from_config(&config);
    let reports = analyzer.analyze(&data, &strategies)?;

    let output = match args.format.unwrap_or(config.output.format) {
        OutputFormat::Table => render_table(&reports).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(&reports)?,
    };
    println!("{output}");

    tracing::info!(sellers = reports.len(), "Sales report complete");
    Ok(())
}

/// Reads and parses a dataset file.
fn load_dataset(path: &Path) -> anyhow::Result<SalesData> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;
    let data = SalesData::from_json_str(&raw)
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;
    tracing::debug!(path = %path.display(), "Dataset loaded");
    Ok(data)
}

/// Lays the ranked report out as a terminal table.
fn render_table(reports: &[SellerReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Rank",
        "Seller",
        "Name",
        "Revenue",
        "Profit",
        "Sales",
        "Bonus",
        "Top products",
    ]);

    for (rank, report) in reports.iter().enumerate() {
        let top_products = report
            .top_products
            .iter()
            .map(|p| format!("{} x{}", p.sku, p.quantity))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            (rank + 1).to_string(),
            report.seller_id.clone(),
            report.name.clone(),
            report.revenue.to_string(),
            report.profit.to_string(),
            report.sales_count.to_string(),
            report.bonus.to_string(),
            top_products,
        ]);
    }

    table
}

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Config;
use core_types::{Dataset, GroupKey, PointKind};
use dashboard::{DashboardEngine, DashboardSnapshot};
use dataset::{DatasetStore, FilterSpec};
use std::collections::HashSet;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the Meridian sales analytics CLI.
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = configuration::load_config().context("Failed to load config.toml")?;

    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Breakdown(args) => handle_breakdown(args, &config),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Sales intelligence for invoice data: KPIs, breakdowns and a baseline forecast.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the full dashboard: KPIs, breakdowns, trend and forecast.
    Report(ReportArgs),
    /// Render a single grouped-sum breakdown.
    Breakdown(BreakdownArgs),
}

/// Dataset and filter selection shared by every command.
#[derive(Parser)]
struct SelectionArgs {
    /// Path to the invoice CSV (default: the configured data.path).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Client type to include; repeat for several (default: all present).
    #[arg(long = "client-type")]
    client_types: Vec<String>,

    /// Start of the invoice date range, YYYY-MM-DD (default: dataset min).
    #[arg(long)]
    from: Option<NaiveDate>,

    /// End of the invoice date range, YYYY-MM-DD (default: dataset max).
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Parser)]
struct ReportArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// How many future months to project.
    #[arg(long, value_parser = clap::value_parser!(u32).range(3..=12))]
    horizon: Option<u32>,

    /// How many products the ranking keeps.
    #[arg(long)]
    top: Option<usize>,

    /// Emit the snapshot as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct BreakdownArgs {
    #[command(flatten)]
    selection: SelectionArgs,

    /// Dimension to group by: distributor, client-type, product or month.
    #[arg(long, value_parser = GroupKey::from_str)]
    by: GroupKey,
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Handles the `report` command: one full dashboard recomputation.
fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let (dataset, filter) = load_selection(&args.selection, config)?;
    let Some(filter) = filter else {
        println!("Dataset is empty; nothing to report.");
        return Ok(());
    };

    let horizon = args.horizon.unwrap_or(config.forecast.horizon_months) as usize;
    let top = args.top.unwrap_or(config.report.top_products);

    let engine = DashboardEngine::new(config.forecast.ema_span, top);
    let snapshot = engine.snapshot(&dataset, &filter, horizon)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    render_report(&snapshot);
    Ok(())
}

/// Handles the `breakdown` command: a single grouped-sum view.
fn handle_breakdown(args: BreakdownArgs, config: &Config) -> Result<()> {
    let (dataset, filter) = load_selection(&args.selection, config)?;
    let Some(filter) = filter else {
        println!("Dataset is empty; nothing to report.");
        return Ok(());
    };

    let filtered = filter.apply(&dataset);
    let groups = analytics::aggregator::sum_by(filtered.records(), args.by);

    println!("--- Sales by {} ---", args.by);
    println!("{}", category_table(&groups));
    Ok(())
}

/// Loads the dataset and builds the filter: CLI flags override the
/// all-inclusive defaults. `None` filter means the dataset itself is empty.
fn load_selection(
    args: &SelectionArgs,
    config: &Config,
) -> Result<(Arc<Dataset>, Option<FilterSpec>)> {
    let path = args
        .data
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.path));

    let mut store = DatasetStore::new();
    let dataset = store
        .load(&path)
        .with_context(|| format!("Failed to load dataset from {}", path.display()))?;

    let Some(mut filter) = FilterSpec::all_of(&dataset) else {
        return Ok((dataset, None));
    };

    if !args.client_types.is_empty() {
        filter.client_types = args.client_types.iter().cloned().collect::<HashSet<_>>();
    }
    if let Some(from) = args.from {
        filter.from = from;
    }
    if let Some(to) = args.to {
        filter.to = to;
    }

    Ok((dataset, Some(filter)))
}

// ==============================================================================
// Rendering
// ==============================================================================

/// Prints the full dashboard as terminal tables.
fn render_report(snapshot: &DashboardSnapshot) {
    let mut kpis = Table::new();
    kpis.set_header(vec![
        "Total Sales",
        "Total Invoices",
        "Avg Invoice Value",
        "Monthly Growth",
    ]);
    kpis.add_row(vec![
        format!("{:.2}", snapshot.kpis.total_sales),
        snapshot.kpis.total_invoices.to_string(),
        format!("{:.2}", snapshot.kpis.avg_invoice_value),
        format!("{:.1}%", snapshot.kpis.monthly_growth_pct),
    ]);
    println!("--- KPIs ---");
    println!("{kpis}");

    println!("--- Sales by Distributor ---");
    println!("{}", category_table(&snapshot.sales_by_distributor));
    println!("--- Sales by Client Type ---");
    println!("{}", category_table(&snapshot.sales_by_client_type));
    println!("--- Top Products ---");
    println!("{}", category_table(&snapshot.top_products));

    let mut trend = Table::new();
    trend.set_header(vec!["Month", "Sales", "Kind"]);
    if let Some(forecast) = &snapshot.forecast {
        for point in &forecast.points {
            let kind = match point.kind {
                PointKind::Actual => "actual",
                PointKind::Forecast => "forecast",
            };
            trend.add_row(vec![
                point.month.format("%Y-%m").to_string(),
                format!("{:.2}", point.value),
                kind.to_string(),
            ]);
        }
    }
    println!("--- Monthly Trend & Forecast ---");
    println!("{trend}");
}

/// A two-column (group, sales) table.
fn category_table(groups: &[(String, f64)]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Group", "Sales"]);
    for (name, total) in groups {
        table.add_row(vec![name.clone(), format!("{total:.2}")]);
    }
    table
}

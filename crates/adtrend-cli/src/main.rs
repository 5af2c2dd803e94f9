mod report;

use adtrend_core::Category;
use adtrend_scraper::{collect_trends, CategoryQuery, RenderClient};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adtrend-cli")]
#[command(about = "Collect trending fashion ads from the Facebook Ad Library")]
struct Cli {
    /// Restrict the run to these categories (men, women); repeatable
    #[arg(long = "category", value_name = "CATEGORY")]
    categories: Vec<Category>,

    /// Print the report as JSON instead of the console layout
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A missing credential is the only failure allowed to stop the run.
    let config = adtrend_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = RenderClient::from_config(&config)?;
    let queries = build_queries(&cli.categories);
    let started_at = chrono::Local::now();

    let report = collect_trends(&client, &queries).await;
    tracing::info!(total_records = report.total_records(), "run complete");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut out = String::new();
        report::write_report(&mut out, &report, started_at)?;
        print!("{out}");
    }

    Ok(())
}

/// Queries for the requested categories in first-seen order, or every
/// category when none were requested.
fn build_queries(requested: &[Category]) -> Vec<CategoryQuery> {
    if requested.is_empty() {
        return CategoryQuery::defaults();
    }
    let mut seen = Vec::with_capacity(requested.len());
    for category in requested {
        if !seen.contains(category) {
            seen.push(*category);
        }
    }
    seen.into_iter().map(CategoryQuery::for_category).collect()
}

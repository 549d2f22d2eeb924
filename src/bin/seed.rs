use std::sync::Arc;

use campanile::config::Settings;
use campanile::seed;
use campanile::store::SqliteDocumentStore;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Populates the content store with the bundled department profiles and
/// sample records for every collection.
#[derive(Parser)]
#[command(name = "seed", about = "Populate the content store with sample data")]
struct Args {
    /// Store to populate. Falls back to DATABASE_URL, then a local file.
    #[arg(long)]
    database_url: Option<String>,

    /// Seed even if the store already holds documents. Safe either way:
    /// seed writes are keyed upserts, so re-running converges rather than
    /// duplicating.
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("campanile=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    let args = Args::parse();
    let database_url = args
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or(settings.database.url);

    println!("🌱 Seeding content store at {}...", database_url);

    let store =
        SqliteDocumentStore::connect(&database_url, settings.database.max_connections).await?;

    if !args.force && !store.is_empty().await? {
        anyhow::bail!("store already contains documents; pass --force to seed anyway");
    }

    let report = seed::run(Arc::new(store)).await?;

    println!("  ✅ {} departments", report.departments);
    println!("  ✅ {} news items", report.news);
    println!("  ✅ {} academic resources", report.academics);
    println!(
        "  ✅ {} placement stats, {} recruiters, {} placements, {} testimonials",
        report.placement_stats, report.recruiters, report.placements, report.testimonials
    );
    println!("\n✨ Seeding complete: {} documents total", report.total());

    Ok(())
}

use stayfinder::config::Config;
use stayfinder::db::{self, FilterOptions, ListingStore, seed};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        loglevel = %cfg.loglevel,
        seed_path = %cfg.seed_path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "<none>".to_string())
    );

    let pool = db::connect(&cfg.database_url).await?;
    let store = ListingStore::new(pool);
    store.init_schema().await?;

    if let Some(seed_path) = cfg.seed_path.as_ref() {
        let data = seed::load_from_dir(seed_path)?;
        seed::apply(&store, &data).await?;
    }

    // Smoke query so a fresh deployment fails loudly on a broken database.
    let listings = store.search_properties(&FilterOptions::default(), None).await?;
    info!(count = listings.len(), "sample property search completed");

    Ok(())
}

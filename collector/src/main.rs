use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use collector::{tasks, CollectorContext, Scheduler};
use migration::{Migrator, MigratorTrait};
use shared::{get_db_connection, Config};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("Starting price collector...");

    let config = Config::from_env()?;
    let db = get_db_connection(&config.database_url).await?;
    Migrator::up(&db, None).await?;
    info!("Connected to database, schema up to date");

    let start_delay = Duration::from_secs(config.start_delay_secs);
    let price_period = Duration::from_secs(config.price_interval_secs);
    let candle_period = Duration::from_secs(config.candle_interval_secs);
    let backfill_period = Duration::from_secs(config.backfill_interval_secs);

    let ctx = Arc::new(CollectorContext::new(config, db)?);

    let mut scheduler = Scheduler::new();
    {
        let ctx = ctx.clone();
        scheduler.spawn_periodic("spot_price", start_delay, price_period, move || {
            tasks::spot_price::tick(ctx.clone())
        });
    }
    {
        let ctx = ctx.clone();
        scheduler.spawn_periodic("candles", start_delay, candle_period, move || {
            tasks::candles::tick(ctx.clone())
        });
    }
    {
        let ctx = ctx.clone();
        scheduler.spawn_periodic("backfill", start_delay, backfill_period, move || {
            tasks::backfill::tick(ctx.clone())
        });
    }

    info!("Collector running with {} tasks", scheduler.task_count());

    tokio::signal::ctrl_c().await?;
    info!("Shutting down collector...");
    scheduler.shutdown();

    Ok(())
}

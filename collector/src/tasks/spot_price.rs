use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use shared::sources::COINDESK_SOURCE;
use tracing::info;

use crate::context::CollectorContext;

/// One spot-price tick: fetch, decode, append a price row and a snapshot row.
/// Any failure bubbles up to the scheduler, which logs it and skips the tick.
pub async fn tick(ctx: Arc<CollectorContext>) -> Result<()> {
    let quote = ctx.coindesk.current_price().await?;
    let observed_at = Utc::now();
    ctx.prices
        .insert(observed_at, quote.price, COINDESK_SOURCE)
        .await?;
    ctx.snapshots.insert(observed_at, &quote).await?;
    info!("Stored spot price {:.2} USD from coindesk", quote.price);
    Ok(())
}

use std::sync::Arc;

use anyhow::Result;

use crate::context::CollectorContext;

/// Backfill check: runs at startup and then on a long interval. The guard
/// lives in `shared::backfill`; repeated runs with seed data present no-op.
pub async fn tick(ctx: Arc<CollectorContext>) -> Result<()> {
    shared::backfill::run(&ctx.prices, &ctx.candles, &ctx.config).await?;
    Ok(())
}

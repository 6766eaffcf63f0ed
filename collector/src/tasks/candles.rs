use std::sync::Arc;

use anyhow::Result;
use tracing::{error, info};

use crate::context::CollectorContext;

/// One candle-refresh tick: fetch klines for every configured timeframe and
/// upsert each bar. Timeframes run sequentially; a fetch failure on one is
/// logged and the rest still run, a storage failure abandons the tick.
pub async fn tick(ctx: Arc<CollectorContext>) -> Result<()> {
    let symbol = &ctx.config.symbol;
    for timeframe in &ctx.config.candle_timeframes {
        match ctx
            .binance
            .klines(symbol, *timeframe, ctx.config.candle_fetch_limit)
            .await
        {
            Ok(bars) => {
                let count = ctx.candles.upsert_bars(symbol, *timeframe, &bars).await?;
                info!("Upserted {} {} candles for {}", count, timeframe, symbol);
            }
            Err(err) => {
                error!("Candle fetch {} {} failed: {}", symbol, timeframe, err);
            }
        }
    }
    Ok(())
}

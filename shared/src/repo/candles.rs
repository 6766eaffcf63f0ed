use std::sync::Arc;

use anyhow::Result;
use sea_orm::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::{NotSet, QueryOrder, QuerySelect, Set};

use crate::entity::candles;
use crate::models::Timeframe;
use crate::sources::KlineBar;

#[derive(Clone)]
pub struct CandleRepository {
    db: Arc<DatabaseConnection>,
}

impl CandleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn bucket_conflict() -> OnConflict {
        OnConflict::columns([
            candles::Column::Timestamp,
            candles::Column::Timeframe,
            candles::Column::Symbol,
        ])
        .update_columns([
            candles::Column::Open,
            candles::Column::High,
            candles::Column::Low,
            candles::Column::Close,
            candles::Column::Volume,
        ])
        .to_owned()
    }

    /// Insert-or-replace one bar, keyed on (timestamp, timeframe, symbol).
    /// Exchanges revise the in-progress bar, so a refetch must replace the
    /// stored OHLCV rather than add a second row.
    pub async fn upsert(&self, bar: candles::ActiveModel) -> Result<()> {
        candles::Entity::insert(bar)
            .on_conflict(Self::bucket_conflict())
            .exec_without_returning(self.db.as_ref())
            .await?;
        Ok(())
    }

    /// Upsert one fetched batch for a symbol/timeframe; returns bar count.
    pub async fn upsert_bars(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        bars: &[KlineBar],
    ) -> Result<u64> {
        for bar in bars {
            self.upsert(candles::ActiveModel {
                id: NotSet,
                timestamp: Set(bar.open_time),
                timeframe: Set(timeframe.as_str().to_string()),
                symbol: Set(symbol.to_string()),
                open: Set(bar.open),
                high: Set(bar.high),
                low: Set(bar.low),
                close: Set(bar.close),
                volume: Set(bar.volume),
            })
            .await?;
        }
        Ok(bars.len() as u64)
    }

    /// Most recent `limit` bars for a symbol/timeframe, returned ascending.
    pub async fn window(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        limit: u64,
    ) -> Result<Vec<candles::Model>> {
        let mut rows = candles::Entity::find()
            .filter(candles::Column::Symbol.eq(symbol))
            .filter(candles::Column::Timeframe.eq(timeframe.as_str()))
            .order_by_desc(candles::Column::Timestamp)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;
        rows.reverse();
        Ok(rows)
    }

    pub async fn count(&self) -> Result<u64> {
        let count = candles::Entity::find().count(self.db.as_ref()).await?;
        Ok(count)
    }
}

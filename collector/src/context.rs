use std::sync::Arc;

use anyhow::Result;
use sea_orm::DatabaseConnection;
use shared::repo::{CandleRepository, PriceRepository, SnapshotRepository};
use shared::sources::{build_http_client, BinanceClient, CoindeskClient};
use shared::Config;

/// Everything a collector tick needs: one database handle opened at process
/// start and one HTTP client, shared by all tasks.
pub struct CollectorContext {
    pub config: Config,
    pub coindesk: CoindeskClient,
    pub binance: BinanceClient,
    pub prices: PriceRepository,
    pub candles: CandleRepository,
    pub snapshots: SnapshotRepository,
}

impl CollectorContext {
    pub fn new(config: Config, db: DatabaseConnection) -> Result<Self> {
        let db = Arc::new(db);
        let http = build_http_client(config.http_timeout_secs)?;
        Ok(Self {
            coindesk: CoindeskClient::new(http.clone(), config.coindesk_base_url.clone()),
            binance: BinanceClient::new(http, config.binance_base_url.clone()),
            prices: PriceRepository::new(db.clone()),
            candles: CandleRepository::new(db.clone()),
            snapshots: SnapshotRepository::new(db),
            config,
        })
    }
}

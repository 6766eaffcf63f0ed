use std::sync::Arc;

use anyhow::Result;
use sea_orm::DatabaseConnection;
use shared::repo::{CandleRepository, PriceRepository};
use shared::sources::{build_http_client, CoindeskClient};
use shared::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub prices: PriceRepository,
    pub candles: CandleRepository,
    pub coindesk: CoindeskClient,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> Result<Self> {
        let db = Arc::new(db);
        let http = build_http_client(config.http_timeout_secs)?;
        Ok(Self {
            coindesk: CoindeskClient::new(http, config.coindesk_base_url.clone()),
            prices: PriceRepository::new(db.clone()),
            candles: CandleRepository::new(db),
            config: Arc::new(config),
        })
    }
}

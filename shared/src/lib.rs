pub mod backfill;
pub mod config;
pub mod database;
pub mod entity;
pub mod models;
pub mod repo;
pub mod sources;
pub mod synthetic;

pub use config::Config;
pub use database::get_db_connection;
pub use models::{Period, Timeframe};
pub use repo::{CandleRepository, PriceRepository, SnapshotRepository};
pub use sources::{BinanceClient, CoindeskClient, SourceError};

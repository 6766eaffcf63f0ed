pub mod candles;
pub mod prices;
pub mod snapshots;

pub use candles::CandleRepository;
pub use prices::PriceRepository;
pub use snapshots::SnapshotRepository;

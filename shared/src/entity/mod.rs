pub mod candles;
pub mod coindesk_snapshots;
pub mod prices;

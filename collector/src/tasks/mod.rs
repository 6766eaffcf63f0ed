pub mod backfill;
pub mod candles;
pub mod spot_price;

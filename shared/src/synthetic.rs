//! Deterministic synthetic market data.
//!
//! Kept fully separate from the live collector path: everything produced here
//! carries the `seed` or `synthetic` source tag, and neither tag is ever used
//! for a real provider, so stored records stay distinguishable.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source tag for the backfilled seed dataset.
pub const SEED_SOURCE: &str = "seed";
/// Source tag for fallback values served when the live source is down.
pub const SYNTHETIC_SOURCE: &str = "synthetic";

const PLACEHOLDER_MIN: f64 = 40_000.0;
const PLACEHOLDER_MAX: f64 = 50_000.0;

/// OHLCV bar produced by the generator, before it becomes an entity row.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticCandle {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// Bounded random walk around a base price. Same seed, same series.
pub struct Generator {
    rng: StdRng,
    price: f64,
}

impl Generator {
    pub fn new(seed: u64, base_price: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            price: base_price,
        }
    }

    fn step(&mut self) -> f64 {
        let trend = if self.rng.gen_bool(0.6) { 1.0 } else { -1.0 };
        let variation = self.price * 0.01 * self.rng.gen::<f64>();
        self.price = (self.price + trend * variation).max(1.0);
        self.price
    }

    /// Walk `count` points starting at `start`, one per `step` of time.
    pub fn price_points(
        &mut self,
        start: DateTime<Utc>,
        step: Duration,
        count: usize,
    ) -> Vec<(DateTime<Utc>, f64)> {
        (0..count)
            .map(|i| (start + step * i as i32, self.step()))
            .collect()
    }

    /// One daily bar per day starting at `start`, built from four walk steps.
    pub fn daily_candles(&mut self, start: DateTime<Utc>, days: usize) -> Vec<SyntheticCandle> {
        (0..days)
            .map(|day| {
                let open = self.price;
                let samples = [self.step(), self.step(), self.step()];
                let close = samples[2];
                let high = samples
                    .iter()
                    .copied()
                    .fold(open, f64::max);
                let low = samples
                    .iter()
                    .copied()
                    .fold(open, f64::min);
                SyntheticCandle {
                    timestamp: start + Duration::days(day as i64),
                    open,
                    high,
                    low,
                    close,
                    volume: self.rng.gen_range(100.0..1_000_000.0),
                }
            })
            .collect()
    }
}

/// Bounded placeholder served at the read boundary when the live source is
/// unreachable. Callers must tag the value with [`SYNTHETIC_SOURCE`].
pub fn placeholder_price() -> f64 {
    rand::thread_rng().gen_range(PLACEHOLDER_MIN..PLACEHOLDER_MAX)
}

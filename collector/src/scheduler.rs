//! Periodic task runner.
//!
//! One tokio task per collector: an initial start delay, then a fixed-period
//! `tokio::time::interval`. Ticks within a collector are serialized (the loop
//! awaits the tick body) so two ticks never write concurrently; different
//! collectors stay independent. A failed tick is logged and the timer keeps
//! firing — nothing here is process-fatal.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info};

pub struct Scheduler {
    handles: Vec<JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn spawn_periodic<F, Fut>(
        &mut self,
        name: &'static str,
        start_delay: Duration,
        period: Duration,
        tick: F,
    ) where
        F: Fn() -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send,
    {
        let handle = tokio::spawn(async move {
            // Stagger the first tick past container start-up races.
            tokio::time::sleep(start_delay).await;
            let mut timer = interval(period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!("Task {} scheduled every {:?}", name, period);
            let mut count: u64 = 0;
            loop {
                timer.tick().await;
                count += 1;
                match tick().await {
                    Ok(()) => info!("Task {} tick #{} completed", name, count),
                    Err(err) => error!("Task {} tick #{} failed: {:#}", name, count, err),
                }
            }
        });
        self.handles.push(handle);
    }

    pub fn task_count(&self) -> usize {
        self.handles.len()
    }

    pub fn shutdown(self) {
        for handle in self.handles {
            handle.abort();
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

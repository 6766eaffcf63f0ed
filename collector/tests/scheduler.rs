use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use collector::Scheduler;

#[tokio::test]
async fn failing_ticks_do_not_stop_the_timer() {
    let ticks = Arc::new(AtomicU32::new(0));
    let mut scheduler = Scheduler::new();
    {
        let ticks = ticks.clone();
        scheduler.spawn_periodic(
            "always_fails",
            Duration::from_millis(0),
            Duration::from_millis(20),
            move || {
                let ticks = ticks.clone();
                async move {
                    ticks.fetch_add(1, Ordering::SeqCst);
                    anyhow::bail!("upstream unreachable")
                }
            },
        );
    }

    tokio::time::sleep(Duration::from_millis(150)).await;
    // Every tick failed, yet the schedule kept firing.
    assert!(ticks.load(Ordering::SeqCst) >= 3);
    scheduler.shutdown();
}

#[tokio::test]
async fn first_tick_waits_for_the_start_delay() {
    let ticks = Arc::new(AtomicU32::new(0));
    let mut scheduler = Scheduler::new();
    {
        let ticks = ticks.clone();
        scheduler.spawn_periodic(
            "delayed",
            Duration::from_millis(200),
            Duration::from_millis(10),
            move || {
                let ticks = ticks.clone();
                async move {
                    ticks.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            },
        );
    }

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(ticks.load(Ordering::SeqCst), 0);

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(ticks.load(Ordering::SeqCst) >= 1);
    scheduler.shutdown();
}

#[tokio::test]
async fn collectors_run_independently() {
    let fast = Arc::new(AtomicU32::new(0));
    let mut scheduler = Scheduler::new();
    {
        let fast = fast.clone();
        scheduler.spawn_periodic(
            "fast",
            Duration::from_millis(0),
            Duration::from_millis(20),
            move || {
                let fast = fast.clone();
                async move {
                    fast.fetch_add(1, Ordering::SeqCst);
                    Ok(())
                }
            },
        );
    }
    // A stuck sibling must not delay the fast collector.
    scheduler.spawn_periodic(
        "stuck",
        Duration::from_millis(0),
        Duration::from_millis(20),
        || async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(())
        },
    );

    assert_eq!(scheduler.task_count(), 2);
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(fast.load(Ordering::SeqCst) >= 3);
    scheduler.shutdown();
}

//! Periodic sweep scheduler.
//!
//! Runs one sweep per interval tick on a dedicated thread, with a broadcast
//! channel for manually triggered sweeps. Iterations never overlap.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;

use super::sweep::Sweeper;

/// Periodic archive sweep scheduler.
pub struct SweepScheduler {
    sweeper: Arc<Sweeper>,
    interval: Duration,
    shutdown: Arc<AtomicBool>,
}

impl SweepScheduler {
    /// Creates a new sweep scheduler.
    pub fn new(sweeper: Arc<Sweeper>, interval: Duration) -> Self {
        Self {
            sweeper,
            interval,
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start the sweep loop in a background thread.
    /// Accepts a trigger receiver for manual sweep requests.
    pub fn start(&self, mut trigger_rx: broadcast::Receiver<()>) -> JoinHandle<()> {
        let sweeper = Arc::clone(&self.sweeper);
        let shutdown = Arc::clone(&self.shutdown);
        let interval = self.interval;

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            rt.block_on(async {
                let mut interval_timer = tokio::time::interval(interval);
                interval_timer.tick().await; // skip immediate first tick

                loop {
                    if shutdown.load(Ordering::Acquire) {
                        break;
                    }

                    tokio::select! {
                        _ = interval_timer.tick() => {},
                        Ok(()) = trigger_rx.recv() => {
                            log::info!("Manual archive sweep triggered");
                        },
                    }

                    if shutdown.load(Ordering::Acquire) {
                        break;
                    }

                    let report = sweeper.sweep(Utc::now());
                    if !report.errors.is_empty() {
                        log::error!(
                            "Archive sweep finished with {} errors ({} messages archived)",
                            report.errors.len(),
                            report.messages_archived
                        );
                    } else if report.messages_archived > 0 {
                        log::info!("Archive sweep: {} messages archived", report.messages_archived);
                    }
                }
            });
        })
    }

    /// Signals the scheduler to stop.
    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Release);
    }
}

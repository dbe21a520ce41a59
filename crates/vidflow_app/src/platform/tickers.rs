//! The in-flight submission's two display timers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Instant;

use app_logging::app_warn;
use vidflow_core::{Msg, PROGRESS_TICK_INTERVAL, STAGE_TICK_INTERVAL};

/// Owns at most one live pair of ticker threads: the 500 ms simulated
/// progress tick and the 3 s stage-message tick. Stopping raises a shared
/// flag; both threads notice it on their next wake-up and exit.
pub(crate) struct Tickers {
    active: Option<Arc<AtomicBool>>,
}

impl Tickers {
    pub(crate) fn new() -> Self {
        Self { active: None }
    }

    pub(crate) fn start(&mut self, msg_tx: mpsc::Sender<Msg>) {
        if self.active.is_some() {
            // The core rejects overlapping submissions, so this indicates a
            // missed stop; recover by cancelling the stale pair.
            app_warn!("ticker pair already running; stopping the stale one");
            self.stop();
        }

        let stop = Arc::new(AtomicBool::new(false));

        let progress_stop = stop.clone();
        let progress_tx = msg_tx.clone();
        thread::spawn(move || {
            let mut last = Instant::now();
            loop {
                thread::sleep(PROGRESS_TICK_INTERVAL);
                if progress_stop.load(Ordering::Relaxed) {
                    break;
                }
                let since_last = last.elapsed();
                last = Instant::now();
                let tick = Msg::ProgressTick {
                    jitter: rand::random::<f64>(),
                    since_last,
                };
                if progress_tx.send(tick).is_err() {
                    break;
                }
            }
        });

        let stage_stop = stop.clone();
        thread::spawn(move || {
            let started = Instant::now();
            loop {
                thread::sleep(STAGE_TICK_INTERVAL);
                if stage_stop.load(Ordering::Relaxed) {
                    break;
                }
                let tick = Msg::StageTick {
                    elapsed: started.elapsed(),
                };
                if msg_tx.send(tick).is_err() {
                    break;
                }
            }
        });

        self.active = Some(stop);
    }

    pub(crate) fn stop(&mut self) {
        if let Some(stop) = self.active.take() {
            stop.store(true, Ordering::Relaxed);
        }
    }
}

impl Drop for Tickers {
    fn drop(&mut self) {
        self.stop();
    }
}

//! Clock driver: dedicated thread generating ticks for a `Clock`
//! subscription.
//!
//! Ticks are posted to the main-loop channel; the subscription's mapping
//! closure runs on the main thread. A slow consumer makes the driver skip
//! ahead rather than queue a backlog.

use crate::runtime::interpreter::LoopItem;
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime};

/// Handle to a ticker thread.
pub(crate) struct ClockDriver {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl ClockDriver {
    /// Spawn a ticker posting to the subscription at `index` every
    /// `interval`.
    pub(crate) fn spawn<Msg: Send + 'static>(
        index: usize,
        interval: Duration,
        tx: Sender<LoopItem<Msg>>,
    ) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("ratchet-clock".to_string())
            .spawn(move || {
                let mut next_tick = Instant::now() + interval;
                loop {
                    if flag.load(Ordering::Relaxed) {
                        break;
                    }
                    let now = Instant::now();
                    if now >= next_tick {
                        if tx.send(LoopItem::Tick(index, SystemTime::now())).is_err() {
                            break;
                        }
                        next_tick += interval;
                        // Catch up without queuing if we fell behind.
                        if next_tick < now {
                            next_tick = now + interval;
                        }
                    } else {
                        // Short sleep slices keep shutdown prompt.
                        let remaining = next_tick - now;
                        thread::sleep(remaining.min(Duration::from_millis(1)));
                    }
                }
            })
            .expect("Failed to spawn clock thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the ticker to stop.
    pub(crate) fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the ticker thread to finish.
    pub(crate) fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for ClockDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_ticks_arrive_with_subscription_index() {
        let (tx, rx) = unbounded::<LoopItem<()>>();
        let driver = ClockDriver::spawn(3, Duration::from_millis(5), tx);

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(1)),
            Ok(LoopItem::Tick(3, _))
        ));
        driver.join();
    }

    #[test]
    fn test_shutdown_stops_ticking() {
        let (tx, rx) = unbounded::<LoopItem<()>>();
        let driver = ClockDriver::spawn(0, Duration::from_millis(5), tx);
        driver.join();
        // Drain whatever was in flight; afterwards the channel stays quiet.
        while rx.try_recv().is_ok() {}
        assert!(rx.recv_timeout(Duration::from_millis(30)).is_err());
    }
}

//! Input driver: dedicated thread for polling terminal events.
//!
//! The driver is the only component that reads raw input. It forwards
//! events to the main loop, is the sole observer of the reserved interrupt
//! key, and acknowledges shutdown by enqueueing a stop marker before it
//! exits. The main loop waits for that marker, so the poll thread is never
//! left blocking on a read against a closed channel.

use crate::runtime::interpreter::LoopItem;
use crate::terminal::{EventSource, TerminalEvent};
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to the input-poll thread.
pub(crate) struct InputDriver {
    handle: Option<JoinHandle<()>>,
    shutdown: Arc<AtomicBool>,
}

impl InputDriver {
    /// Spawn the poll thread.
    pub(crate) fn spawn<Msg, S>(
        mut source: S,
        tx: Sender<LoopItem<Msg>>,
        poll_timeout: Duration,
    ) -> Self
    where
        Msg: Send + 'static,
        S: EventSource + Send + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::Builder::new()
            .name("ratchet-input".to_string())
            .spawn(move || loop {
                if flag.load(Ordering::Relaxed) {
                    let _ = tx.send(LoopItem::PollStopped);
                    break;
                }
                match source.poll(poll_timeout) {
                    Ok(Some(TerminalEvent::Key(key))) if key.is_interrupt() => {
                        let _ = tx.send(LoopItem::Interrupt);
                    }
                    Ok(Some(event)) => {
                        if tx.send(LoopItem::Raw(event)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => {
                        let _ = tx.send(LoopItem::InputError(err.to_string()));
                    }
                }
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the poll thread to stop after its current poll.
    pub(crate) fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the poll thread to finish.
    pub(crate) fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for InputDriver {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{KeyEvent, ScriptedEvents};
    use crossbeam_channel::unbounded;

    #[test]
    fn test_events_are_forwarded_in_order() {
        let (tx, rx) = unbounded::<LoopItem<()>>();
        let source = ScriptedEvents::new([
            TerminalEvent::Key(KeyEvent::char('a')),
            TerminalEvent::Key(KeyEvent::char('b')),
        ]);
        let driver = InputDriver::spawn(source, tx, Duration::from_millis(1));

        let timeout = Duration::from_secs(1);
        assert!(matches!(
            rx.recv_timeout(timeout),
            Ok(LoopItem::Raw(TerminalEvent::Key(k))) if k == KeyEvent::char('a')
        ));
        assert!(matches!(
            rx.recv_timeout(timeout),
            Ok(LoopItem::Raw(TerminalEvent::Key(k))) if k == KeyEvent::char('b')
        ));
        driver.join();
    }

    #[test]
    fn test_interrupt_key_becomes_interrupt_item() {
        let (tx, rx) = unbounded::<LoopItem<()>>();
        let source = ScriptedEvents::new([TerminalEvent::Key(KeyEvent::ctrl('c'))]);
        let driver = InputDriver::spawn(source, tx, Duration::from_millis(1));

        assert!(matches!(
            rx.recv_timeout(Duration::from_secs(1)),
            Ok(LoopItem::Interrupt)
        ));
        driver.join();
    }

    #[test]
    fn test_shutdown_is_acknowledged_with_stop_marker() {
        let (tx, rx) = unbounded::<LoopItem<()>>();
        let driver = InputDriver::spawn(ScriptedEvents::new([]), tx, Duration::from_millis(1));
        driver.shutdown();

        let deadline = std::time::Instant::now() + Duration::from_secs(1);
        let mut stopped = false;
        while std::time::Instant::now() < deadline {
            if let Ok(LoopItem::PollStopped) = rx.recv_timeout(Duration::from_millis(50)) {
                stopped = true;
                break;
            }
        }
        assert!(stopped);
        driver.join();
    }
}

use super::{App, MAX_MESSAGES_PER_TICK};
use crate::kernel::Action;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

impl App {
    /// Applies pending background results and expires timed state. Called by the main loop.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = self.drain_messages(now);
        changed |= self.dispatch(Action::Tick { now });
        changed
    }

    pub fn drain_messages(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for _ in 0..MAX_MESSAGES_PER_TICK {
            match self.rx.try_recv() {
                Ok(message) => changed |= self.dispatch(message.into_action(now)),
                Err(TryRecvError::Empty) => break,
                // The runtime keeps a sender for as long as the app lives.
                Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    /// Blocks until one background message arrives (or `timeout` passes), then drains the
    /// rest. Returns whether anything was applied.
    pub fn wait_messages(&mut self, timeout: Duration, now: Instant) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(message) => {
                let applied = self.dispatch(message.into_action(now));
                self.drain_messages(now) | applied
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }
}

use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

/// Fixed-interval driver for repeated passes.
///
/// The scheduler knows nothing about windows: it calls the supplied
/// closure once at startup and then once per interval until told to stop.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Runs `tick` immediately, then again after every `interval`.
    ///
    /// Returns when a message arrives on `stop` or every sender for it
    /// has been dropped. The interval is measured from the end of one
    /// tick to the start of the next. Returns the number of ticks run.
    pub fn run(&self, stop: &Receiver<()>, mut tick: impl FnMut()) -> u64 {
        let mut ticks = 0;
        loop {
            tick();
            ticks += 1;

            match stop.recv_timeout(self.interval) {
                Err(RecvTimeoutError::Timeout) => continue,
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        ticks
    }
}

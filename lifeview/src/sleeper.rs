use std::time::{Duration, Instant};

use libgame::sim::Pause;
use tracing::trace;

/// Pauses between frames with `spin_sleep`, which overshoots far less than `thread::sleep`.
#[derive(Debug, Default)]
pub struct Sleeper {
    pub total_slept: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            spin_sleep::sleep(duration);
        }

        let this_instant = Instant::now();
        if let Some(last_instant) = self.last_instant {
            trace!(since_last_pause = ?(this_instant - last_instant), "woke up");
        }

        self.total_slept += duration;
        self.last_instant = Some(this_instant);
    }
}

impl Pause for Sleeper {
    fn pause(&mut self, duration: Duration) -> anyhow::Result<()> {
        self.sleep(duration);
        Ok(())
    }
}

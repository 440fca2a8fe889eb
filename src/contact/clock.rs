//! Time source used by the contact controllers

use chrono::{DateTime, Utc};
use chrono_tz::Africa::Nairobi;
use std::time::Instant;

/// Monotonic and wall-clock time, injectable for tests
pub trait Clock: Send + Sync {
    /// Monotonic time used for deadlines
    fn now(&self) -> Instant;

    /// Wall-clock time stamped on outgoing messages
    fn wall_time(&self) -> DateTime<Utc>;
}

/// The real system clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall_time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Render a timestamp the way the studio reads it: Nairobi local time,
/// full date plus short time (`Monday, 19 October 2026 at 14:05`).
pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.with_timezone(&Nairobi)
        .format("%A, %-d %B %Y at %H:%M")
        .to_string()
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Clock that only moves when told to
    #[derive(Debug)]
    pub struct ManualClock {
        base: Instant,
        offset: Mutex<Duration>,
        wall: DateTime<Utc>,
    }

    impl ManualClock {
        pub fn new(wall: DateTime<Utc>) -> Self {
            Self {
                base: Instant::now(),
                offset: Mutex::new(Duration::ZERO),
                wall,
            }
        }

        pub fn advance(&self, by: Duration) {
            if let Ok(mut offset) = self.offset.lock() {
                *offset += by;
            }
        }

        fn elapsed(&self) -> Duration {
            self.offset.lock().map(|o| *o).unwrap_or_default()
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            self.base + self.elapsed()
        }

        fn wall_time(&self) -> DateTime<Utc> {
            let elapsed = chrono::Duration::from_std(self.elapsed())
                .unwrap_or_else(|_| chrono::Duration::zero());
            self.wall + elapsed
        }
    }
}

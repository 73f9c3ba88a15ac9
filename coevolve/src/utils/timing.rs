#[cfg(test)]
#[path = "../../tests/unit/utils/timing_test.rs"]
mod timing_test;

use std::time::SystemTime;

/// Implements performance timer functionality, mostly exists due to problem
/// with `Instant` and `SystemTime` on wasm32 arch.
pub type Timer = actual::Timer;

#[cfg(not(target_arch = "wasm32"))]
mod actual {
    use super::*;
    use std::time::Instant;

    #[derive(Clone, Debug)]
    pub struct Timer {
        start: Instant,
        started_at: SystemTime,
    }

    impl Timer {
        /// Starts a new timer.
        pub fn start() -> Self {
            Self { start: Instant::now(), started_at: SystemTime::now() }
        }

        /// Returns wall-clock time when the timer was started.
        pub fn started_at(&self) -> SystemTime {
            self.started_at
        }

        /// Returns elapsed milliseconds.
        pub fn elapsed_millis(&self) -> u128 {
            (Instant::now() - self.start).as_millis()
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod actual {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[derive(Clone, Debug)]
    pub struct Timer {
        start: f64,
    }

    impl Timer {
        pub fn start() -> Self {
            Self { start: now() }
        }

        pub fn started_at(&self) -> SystemTime {
            UNIX_EPOCH + Duration::from_millis(self.start as u64)
        }

        pub fn elapsed_millis(&self) -> u128 {
            // js clock is not monotonic
            (now() - self.start).max(0.) as u128
        }
    }

    fn now() -> f64 {
        js_sys::Date::new_0().get_time()
    }
}

use crate::TimeSource;
use core::time::Duration;

/// A `TimeSource` backed by the system wall clock.
///
/// Every call queries the clock. Times before the Unix epoch read as `0`.
///
/// On `wasm32-unknown-unknown` the browser clock is read through `web-time`.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClock;

impl SystemClock {
    fn since_epoch() -> Duration {
        #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
        {
            use web_time::web::SystemTimeExt;
            web_time::SystemTime::now()
                .to_std()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or(Duration::ZERO)
        }
        #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
        {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or(Duration::ZERO)
        }
    }
}

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        u64::try_from(Self::since_epoch().as_millis()).unwrap_or(u64::MAX)
    }
}

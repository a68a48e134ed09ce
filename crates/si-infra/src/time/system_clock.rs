use si_core::ports::ClockPort;

/// Wall clock in Unix epoch milliseconds (UTC).
///
/// # Examples
///
/// ```
/// use si_core::ports::ClockPort;
/// use si_infra::SystemClock;
///
/// assert!(SystemClock.now_ms() > 0);
/// ```
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

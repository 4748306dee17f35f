use chrono::NaiveDate;

/// Injected source of "today" for the `validity_expired` factor, so the
/// scorer stays a pure function of its explicit inputs rather than reading
/// the system clock.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Reads the real wall-clock date. Used by the orchestrator in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Utc::now().date_naive()
    }
}

/// Returns a fixed date. Used by tests that need the six literal scenarios
/// to be reproducible regardless of when the suite runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

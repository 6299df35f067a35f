use chrono::{DateTime, Datelike, Utc};

/// Clock abstracts access to the current timestamp so services remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar year. Defaults to `now().year()`.
    fn current_year(&self) -> i32 {
        self.now().year()
    }

    /// Returns the current month (1-12). Defaults to `now().month()`.
    fn current_month(&self) -> u32 {
        self.now().month()
    }
}

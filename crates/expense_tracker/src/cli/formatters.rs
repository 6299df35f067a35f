use chrono::{DateTime, Datelike, Month, Utc};
use et_config::Config;

/// Renders amounts, dates and month names according to the active configuration.
#[derive(Debug, Clone)]
pub struct CliFormatters {
    currency: String,
    precision: usize,
}

impl CliFormatters {
    pub fn new(config: &Config) -> Self {
        Self {
            currency: config.currency.clone(),
            precision: config.currency_precision as usize,
        }
    }

    pub fn format_amount(&self, amount: f64) -> String {
        format!(
            "{amount:.prec$} {code}",
            amount = amount,
            prec = self.precision,
            code = self.currency
        )
    }

    /// Bare number with the configured precision, for table cells.
    pub fn format_number(&self, amount: f64) -> String {
        format!("{amount:.prec$}", amount = amount, prec = self.precision)
    }

    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        format!("{}-{}-{}", date.year(), date.month(), date.day())
    }
}

/// English month name, or the raw number when out of range.
pub fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|value| Month::try_from(value).ok())
        .map(|month| month.name().to_string())
        .unwrap_or_else(|| format!("month {month}"))
}

/// Truncates to at most `max` characters without splitting a code point.
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

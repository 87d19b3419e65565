//! Scout payment rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Business rules for scout payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Outreach records created on or before this day are never payable.
    #[serde(default = "default_program_start_date")]
    pub program_start_date: NaiveDate,
}

impl PaymentConfig {
    /// The cutoff instant: midnight UTC at the start of the program day.
    pub fn program_start(&self) -> DateTime<Utc> {
        self.program_start_date.and_time(chrono::NaiveTime::MIN).and_utc()
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            program_start_date: default_program_start_date(),
        }
    }
}

fn default_program_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).unwrap_or_default()
}

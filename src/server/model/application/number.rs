//! Application number generation.
//!
//! Application numbers have the form `KK-YYYYMM-NNNN`: the calendar month the application was
//! submitted in, followed by a zero-padded sequence that restarts every month. The sequence is
//! fixed at four digits, a month can issue at most 9999 numbers.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};

use crate::server::error::{application::ApplicationError, Error};

/// Prefix shared by every application number.
pub const APPLICATION_NUMBER_PREFIX: &str = "KK";

/// Width of the monthly sequence segment.
pub const SEQUENCE_WIDTH: usize = 4;

/// Highest sequence value that fits in [`SEQUENCE_WIDTH`] digits.
pub const MAX_SEQUENCE: u32 = 9999;

/// The (year, month) bucket application numbers are counted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequencePeriod {
    year: i32,
    month: u32,
}

impl SequencePeriod {
    /// Creates a period, rejecting months outside 1-12 and years that don't fit in four digits.
    pub fn new(year: i32, month: u32) -> Result<Self, Error> {
        if !(1..=12).contains(&month) || !(0..=9999).contains(&year) {
            return Err(Error::InternalError(format!(
                "Invalid application number period year {} month {}",
                year, month
            )));
        }

        Ok(Self { year, month })
    }

    /// Period containing the given instant, months are counted in UTC.
    pub fn from_datetime(now: DateTime<Utc>) -> Self {
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    /// Calendar year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1 to 12
    pub fn month(&self) -> u32 {
        self.month
    }

    /// `YYYYMM` key used for the sequence row and inside the application number.
    pub fn key(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }
}

/// A generated `KK-YYYYMM-NNNN` application number.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ApplicationNumber(String);

impl ApplicationNumber {
    /// Generates the number following `issued_this_month` previously issued numbers.
    ///
    /// The caller is responsible for reserving `issued_this_month` atomically so that no two
    /// submissions observe the same count.
    ///
    /// # Arguments
    /// - `period` - Month the application is submitted in
    /// - `issued_this_month` - Count of numbers issued in `period` before this one
    ///
    /// # Returns
    /// - `Ok(ApplicationNumber)` - e.g. `KK-202403-0004` for 3 prior numbers in March 2024
    /// - `Err(Error::ApplicationError(ApplicationError::SequenceExhausted))` - The month has
    ///   already issued [`MAX_SEQUENCE`] numbers
    pub fn generate(period: SequencePeriod, issued_this_month: u32) -> Result<Self, Error> {
        let sequence = issued_this_month
            .checked_add(1)
            .filter(|sequence| *sequence <= MAX_SEQUENCE)
            .ok_or_else(|| ApplicationError::SequenceExhausted {
                period: period.key(),
            })?;

        Ok(Self(format!(
            "{}-{}-{:0width$}",
            APPLICATION_NUMBER_PREFIX,
            period.key(),
            sequence,
            width = SEQUENCE_WIDTH
        )))
    }

    /// The number as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the number into its text
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ApplicationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

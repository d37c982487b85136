// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

//! Split-second time representation used throughout the toolkit
//!
//! A [`GTime`] keeps whole seconds since the unix epoch separately from the
//! fractional part so that sub-microsecond differences survive arithmetic
//! on epochs decades apart.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use thiserror::Error;

/// Calendar range accepted by [`GTime::from_epoch`]
const YEARS: std::ops::RangeInclusive<i32> = 1970..=2099;

/// Decimal places used by the [`fmt::Display`] impl unless a precision is given
const DEFAULT_DECIMALS: usize = 3;

/// A point in time, as whole seconds plus a fraction
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct GTime {
    /// Whole seconds since 1970-01-01 00:00:00
    pub time: i64,
    /// Fraction of a second, normally within `[0, 1)`
    pub sec: f64,
}

impl GTime {
    /// The "not set" sentinel
    pub const UNSET: Self = Self { time: 0, sec: 0.0 };

    pub fn new(time: i64, sec: f64) -> Self {
        Self { time, sec }
    }

    /// Current system time
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            time: now.timestamp(),
            sec: f64::from(now.timestamp_subsec_nanos()) * 1e-9,
        }
    }

    /// Build from a calendar epoch `[year, month, day, hour, minute, second]`
    ///
    /// The seconds field may carry a fraction. Years outside 1970..=2099 are rejected.
    pub fn from_epoch(ep: [f64; 6]) -> Result<Self, Error> {
        if ep.iter().any(|field| !field.is_finite()) {
            return Err(Error::NotFinite(ep));
        }

        let [year, month, day, hour, min, sec] = ep;

        let year = year as i32;
        if !YEARS.contains(&year) {
            return Err(Error::YearOutOfRange(year));
        }

        let date = NaiveDate::from_ymd_opt(year, month as u32, day as u32)
            .ok_or(Error::InvalidDate { year, month, day })?;
        let whole = sec.floor();
        let datetime = date
            .and_hms_opt(hour as u32, min as u32, whole as u32)
            .ok_or(Error::InvalidTimeOfDay { hour, min, sec })?;

        Ok(Self {
            time: datetime.and_utc().timestamp(),
            sec: sec - whole,
        })
    }

    /// Decompose into a calendar epoch `[year, month, day, hour, minute, second]`
    pub fn to_epoch(&self) -> [f64; 6] {
        let Some(datetime) = DateTime::<Utc>::from_timestamp(self.time, 0) else {
            return [0.0; 6];
        };

        [
            f64::from(datetime.year()),
            f64::from(datetime.month()),
            f64::from(datetime.day()),
            f64::from(datetime.hour()),
            f64::from(datetime.minute()),
            f64::from(datetime.second()) + self.sec,
        ]
    }

    pub fn is_unset(&self) -> bool {
        self.time == 0
    }

    /// Seconds elapsed from `other` to `self`
    pub fn diff(&self, other: &Self) -> f64 {
        self.time.saturating_sub(other.time) as f64 + self.sec - other.sec
    }

    /// Shift by `secs` seconds, keeping the fraction within `[0, 1)`
    ///
    /// Saturates at the `i64` range of whole seconds.
    pub fn add(&self, secs: f64) -> Self {
        let sec = self.sec + secs;
        let whole = sec.floor();
        Self {
            // `as` saturates the float, the sum must not overflow either
            time: self.time.saturating_add(whole as i64),
            sec: sec - whole,
        }
    }

    /// Render as `yyyy/mm/dd hh:mm:ss[.s..]` with `decimals` fractional digits
    pub fn format(&self, decimals: usize) -> String {
        let decimals = decimals.min(12);
        let mut t = *self;

        // carry a fraction that would round up to a full second
        if 1.0 - t.sec < 0.5 / 10f64.powi(decimals as i32) {
            t.time = t.time.saturating_add(1);
            t.sec = 0.0;
        }

        let [year, month, day, hour, min, sec] = t.to_epoch();
        let width = if decimals == 0 { 2 } else { decimals + 3 };

        format!(
            "{year:04.0}/{month:02.0}/{day:02.0} {hour:02.0}:{min:02.0}:{sec:0width$.decimals$}"
        )
    }
}

/// Seconds elapsed from `t2` to `t1`
pub fn timediff(t1: GTime, t2: GTime) -> f64 {
    t1.diff(&t2)
}

impl fmt::Display for GTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(f.precision().unwrap_or(DEFAULT_DECIMALS)))
    }
}

impl FromStr for GTime {
    type Err = Error;

    /// Parse `yyyy/mm/dd hh:mm:ss[.sss]`
    ///
    /// Any of `/`, `-`, `:`, `T` or whitespace separate the fields. Two digit
    /// years map to 1980..=2079.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(|c: char| c.is_whitespace() || matches!(c, '/' | '-' | ':' | 'T'))
            .filter(|field| !field.is_empty())
            .map(|field| match field.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(Error::Parse(s.to_owned())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let Ok(mut ep) = <[f64; 6]>::try_from(fields) else {
            return Err(Error::Parse(s.to_owned()));
        };

        if ep[0] < 100.0 {
            ep[0] += if ep[0] < 80.0 { 2000.0 } else { 1900.0 };
        }

        Self::from_epoch(ep)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("year {0} outside supported range 1970..=2099")]
    YearOutOfRange(i32),
    #[error("invalid date {year}/{month}/{day}")]
    InvalidDate { year: i32, month: f64, day: f64 },
    #[error("invalid time of day {hour}:{min}:{sec}")]
    InvalidTimeOfDay { hour: f64, min: f64, sec: f64 },
    #[error("epoch {0:?} has a non-finite field")]
    NotFinite([f64; 6]),
    #[error("cannot parse time from {0:?}")]
    Parse(String),
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between civil dates and Julian days.
//!
//! A Julian day is the number of days elapsed since mean noon of January 1st
//! 4713 BC. Dates before the Gregorian reform of October 1582 are dates of
//! the Julian calendar, later dates are Gregorian. Years are astronomical,
//! i.e. year `0` is 1 BC and year `-1` is 2 BC.
//!
//! # Examples
//!
//! ```
//! use bcbp::julian::{civil_to_julian, julian_to_civil, CivilDate, J2000};
//!
//! let date = CivilDate::new(2000, 1, 1.5);
//! assert_eq!(civil_to_julian(date), J2000);
//! assert!(julian_to_civil(J2000).approx_eq(&date, 1e-6));
//! ```

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeDelta, Timelike, Utc};

use crate::Error;

/// Seconds per day.
pub const SEC_PER_DAY: f64 = 86_400.0;

/// Number of days in a second.
pub const DAYS_PER_SEC: f64 = 1.0 / SEC_PER_DAY;

/// Days per Julian century.
pub const DAYS_PER_CENT: f64 = 36_525.0;

/// Julian day of 2000 January 1.5.
pub const J2000: f64 = 2_451_545.0;

/// Julian day of 1900 January 0.5.
pub const J1900: f64 = 2_415_020.0;

// last Julian day of the Julian calendar, i.e. 1582 October 4
const GREGORIAN_REFORM: f64 = 2_299_160.0;

/// A date of the civil calendar.
///
/// The time of the day is the fractional part of `day`, e.g. 7h30m UT of the
/// 4th is `4.3125`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub struct CivilDate {
    /// Astronomical year, negative for BC dates.
    pub year: i32,
    /// Month from 1 to 12.
    pub month: u8,
    pub day: f64,
}

impl CivilDate {
    pub fn new(year: i32, month: u8, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Returns `true` if both dates are the same within `tolerance` days.
    pub fn approx_eq(&self, other: &CivilDate, tolerance: f64) -> bool {
        self.year == other.year
            && self.month == other.month
            && (self.day - other.day).abs() <= tolerance
    }

    fn is_gregorian(&self) -> bool {
        (self.year, self.month) > (1582, 10)
            || (self.year, self.month) == (1582, 10) && self.day >= 10.0
    }
}

/// Compares two dates with a tolerance of 1e-6 days.
pub fn equal_dates(a: &CivilDate, b: &CivilDate) -> bool {
    a.approx_eq(b, 1e-6)
}

/// Returns `true` if `year` is a leap year of the Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of the day within its year, starting at 1 for January 1st.
pub fn day_of_year(date: &CivilDate) -> u16 {
    let k = if is_leap_year(date.year) { 1.0 } else { 2.0 };
    let mo = f64::from(date.month);
    let a = (275.0 * mo / 9.0).floor();
    let b = k * ((mo + 9.0) / 12.0).floor();
    let c = date.day.floor();
    (a - b + c - 30.0) as u16
}

/// Converts the civil date into Julian days.
pub fn civil_to_julian(date: CivilDate) -> f64 {
    // January and February are the 13th and 14th month of the previous year
    let (y, m) = if date.month > 2 {
        (f64::from(date.year), f64::from(date.month))
    } else {
        (f64::from(date.year) - 1.0, f64::from(date.month) + 12.0)
    };

    let t = if date.year < 0 { 0.75 } else { 0.0 };

    let b = if date.is_gregorian() {
        let a = (y / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    } else {
        0.0
    };

    b + (365.25 * y - t).trunc() + (30.6001 * (m + 1.0)).trunc() + date.day + 1_720_994.5
}

/// Converts Julian days into the civil date.
///
/// The conversion is total for finite input. A non-finite `jd` has no date
/// and results in a meaningless one.
pub fn julian_to_civil(jd: f64) -> CivilDate {
    let jd = jd + 0.5;
    let (i, f) = (jd.trunc(), jd.fract());

    let b = if i > GREGORIAN_REFORM {
        let a = ((i - 1_867_216.25) / 36_524.25).trunc();
        i + 1.0 + a - (a / 4.0).trunc()
    } else {
        i
    };

    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).trunc();
    let e = (365.25 * d).trunc();
    let g = ((c - e) / 30.6001).trunc();

    let day = c - e + f - (30.6001 * g).trunc();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    CivilDate {
        year: year as i32,
        month: month as u8,
        day,
    }
}

/// Returns the Julian day at the Greenwich midnight before `jd`.
pub fn julian_midnight(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Returns the Julian day of January 0.0 of the `year` in the Gregorian
/// calendar.
///
/// January 0.0 is the midnight starting December 31st of the previous year,
/// thus adding the day of the year results in that day's midnight.
pub fn julian_date_zero(year: i32) -> f64 {
    let y = f64::from(year) - 1.0;
    let a = (y / 100.0).trunc();
    (365.25 * y).trunc() - a + (a / 4.0).trunc() + 1_721_424.5
}

/// Returns the time of `jd` in decimal hours (UTC).
pub fn extract_utc(jd: f64) -> f64 {
    (jd - julian_midnight(jd)) * 24.0
}

/// Converts a RFC 3339 date string like `2006-01-02T15:04:05Z` into Julian days.
///
/// # Errors
///
/// Returns an error if the string is not a RFC 3339 date.
pub fn date_string_to_julian(date: &str) -> Result<f64, Error> {
    let dt = DateTime::parse_from_rfc3339(date)
        .map_err(|_| Error::InvalidDate {
            value: date.to_owned(),
        })?
        .with_timezone(&Utc);

    let naive = dt.date_naive();
    let ut = f64::from(dt.num_seconds_from_midnight()) / 3600.0;

    Ok(civil_to_julian(CivilDate::new(
        naive.year(),
        naive.month() as u8,
        f64::from(naive.day()) + ut / 24.0,
    )))
}

/// Converts Julian days into a RFC 3339 date string in UTC.
///
/// The time is rounded to the nearest second.
///
/// # Errors
///
/// Returns an error if `jd` is not finite or out of the range of a date.
pub fn julian_to_date_string(jd: f64) -> Result<String, Error> {
    let invalid = || Error::InvalidDate {
        value: jd.to_string(),
    };

    if !jd.is_finite() {
        return Err(invalid());
    }

    let civil = julian_to_civil(jd);
    let day = civil.day.trunc();
    let secs = (civil.day.fract() * SEC_PER_DAY).round() as i64;

    let midnight = NaiveDate::from_ymd_opt(civil.year, u32::from(civil.month), day as u32)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(invalid)?;
    let dt = midnight
        .checked_add_signed(TimeDelta::seconds(secs))
        .ok_or_else(invalid)?
        .and_utc();

    Ok(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(year: i32, month: u8, day: f64) {
        let date = CivilDate::new(year, month, day);
        let civil = julian_to_civil(civil_to_julian(date));
        assert!(
            equal_dates(&civil, &date),
            "{date:?} converted back to {civil:?}"
        );
    }

    #[test]
    fn converts_civil_to_julian() {
        assert_eq!(civil_to_julian(CivilDate::new(2000, 1, 1.5)), J2000);
        assert_eq!(civil_to_julian(CivilDate::new(1900, 1, 0.5)), J1900);
        assert_eq!(civil_to_julian(CivilDate::new(-4712, 1, 1.5)), 0.0);
        assert_eq!(civil_to_julian(CivilDate::new(333, 1, 27.5)), 1_842_713.0);
        assert_eq!(civil_to_julian(CivilDate::new(-1000, 7, 12.5)), 1_356_001.0);
        assert_eq!(civil_to_julian(CivilDate::new(2024, 2, 29.0)), 2_460_369.5);
    }

    #[test]
    fn converts_julian_to_civil() {
        let date = julian_to_civil(2_436_116.31);
        assert!(date.approx_eq(&CivilDate::new(1957, 10, 4.81), 1e-6));

        let date = julian_to_civil(J1900);
        assert!(date.approx_eq(&CivilDate::new(1899, 12, 31.5), 1e-6));

        let date = julian_to_civil(1_356_001.0);
        assert!(date.approx_eq(&CivilDate::new(-1000, 7, 12.5), 1e-6));
    }

    #[test]
    fn round_trips_across_the_gregorian_reform() {
        round_trip(1582, 10, 4.0);
        round_trip(1582, 10, 15.0);
        round_trip(1900, 1, 1.0);
        round_trip(2000, 1, 1.0);
        round_trip(2024, 2, 29.0);
        round_trip(2026, 10, 19.25);
        round_trip(-4712, 1, 1.5);
    }

    #[test]
    fn reform_skips_ten_days() {
        let julian = civil_to_julian(CivilDate::new(1582, 10, 4.0));
        let gregorian = civil_to_julian(CivilDate::new(1582, 10, 15.0));
        assert_eq!(gregorian - julian, 1.0);
    }

    #[test]
    fn small_julian_days_are_in_4712_bc() {
        let date = julian_to_civil(226.0);
        assert!(date.approx_eq(&CivilDate::new(-4712, 8, 14.5), 1e-6));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn computes_day_of_year() {
        assert_eq!(day_of_year(&CivilDate::new(1978, 11, 14.0)), 318);
        assert_eq!(day_of_year(&CivilDate::new(1988, 4, 22.0)), 113);
        assert_eq!(day_of_year(&CivilDate::new(2024, 8, 13.0)), 226);
        assert_eq!(day_of_year(&CivilDate::new(2023, 8, 14.0)), 226);
    }

    #[test]
    fn january_zero() {
        assert_eq!(julian_date_zero(2024), 2_460_309.5);
        let date = julian_to_civil(julian_date_zero(2024) + 60.0);
        assert!(date.approx_eq(&CivilDate::new(2024, 2, 29.0), 1e-6));
    }

    #[test]
    fn midnight_and_utc() {
        assert_eq!(julian_midnight(J2000), 2_451_544.5);
        assert!((extract_utc(2_436_116.31) - 19.44).abs() < 1e-6);
    }

    #[test]
    fn converts_date_strings() {
        assert_eq!(date_string_to_julian("2000-01-01T12:00:00Z"), Ok(J2000));
        assert_eq!(
            julian_to_date_string(J2000).as_deref(),
            Ok("2000-01-01T12:00:00Z")
        );
        assert_eq!(
            julian_to_date_string(2_460_535.5).as_deref(),
            Ok("2024-08-13T00:00:00Z")
        );
        assert!(date_string_to_julian("yesterday").is_err());
        assert!(julian_to_date_string(f64::NAN).is_err());
    }
}

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::YEAR_RANGE;
use crate::error::AppError;

const SECS_PER_YEAR: i64 = 31_556_952;

/// Timezone in which modification times are turned into calendar dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    /// Calendar date of `time` as seen on a wall clock in this timezone.
    ///
    /// Times far outside the four-digit year range are rejected here, before
    /// any timezone shift could overflow chrono.
    pub(crate) fn date_of(self, time: SystemTime) -> Result<NaiveDate, AppError> {
        let utc = to_utc(time)?;
        // One year of slack either side so the shift itself stays in range
        let year = utc.year();
        if year < YEAR_RANGE.start() - 1 || year > YEAR_RANGE.end() + 1 {
            return Err(AppError::FormatRange { year });
        }
        Ok(match self {
            Timezone::Local => utc.with_timezone(&Local).date_naive(),
            Timezone::Named(tz) => utc.with_timezone(&tz).date_naive(),
        })
    }
}

/// `SystemTime` to `DateTime<Utc>` without chrono's panicking `From` impl
fn to_utc(time: SystemTime) -> Result<DateTime<Utc>, AppError> {
    let (secs, nanos) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok(), after.subsec_nanos()),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok().map(|s| -s);
            match before.subsec_nanos() {
                0 => (secs, 0),
                n => (secs.and_then(|s| s.checked_sub(1)), 1_000_000_000 - n),
            }
        }
    };
    secs.and_then(|s| DateTime::<Utc>::from_timestamp(s, nanos))
        .ok_or_else(|| AppError::FormatRange {
            year: approximate_year(time),
        })
}

fn approximate_year(time: SystemTime) -> i32 {
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(e) => i64::try_from(e.duration().as_secs()).map_or(i64::MIN, |s| -s),
    };
    let year = 1970 + secs.div_euclid(SECS_PER_YEAR);
    i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX })
}

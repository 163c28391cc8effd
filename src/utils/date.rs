use chrono::Datelike;

use crate::consts::YEAR_RANGE;
use crate::error::AppError;

/// Format any calendar value as the 8-digit `YYYYMMDD` date portion.
///
/// Accepts anything exposing year/month/day through chrono's `Datelike`
/// (`NaiveDate`, `NaiveDateTime`, `DateTime<Tz>`). Years that would not fit
/// in four digits are rejected instead of producing a longer prefix.
pub(crate) fn format_date<D: Datelike>(date: &D) -> Result<String, AppError> {
    let year = date.year();
    if !YEAR_RANGE.contains(&year) {
        return Err(AppError::FormatRange { year });
    }
    Ok(format!("{:04}{:02}{:02}", year, date.month(), date.day()))
}

/// Printed on stdout when the argument count is wrong
pub(crate) const USAGE: &str = "Usage: PrependFiledateToFilename <start dir>";

/// Joins the date portion and the original base name
pub(crate) const SEPARATOR: &str = "_";

/// Years that fit the four-digit slot of the date portion
pub(crate) const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

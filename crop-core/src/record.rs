//! Record model for one row of the source agricultural dataset.
//!
//! Rows are kept as strings exactly as read; numeric fields are coerced
//! on demand via [`parse_metric`] so that a bad value in one column
//! never rejects the row.

use serde::Deserialize;

/// One row of the source dataset.
///
/// Field names map to the CSV header columns. Missing columns
/// deserialize to empty strings; nothing here is validated beyond that.
/// Records are immutable once loaded and held for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CropRecord {
    #[serde(rename = "State", default)]
    pub state: String,
    #[serde(rename = "District", default)]
    pub district: String,
    /// Year as a literal string; compared by equality, never as a range.
    #[serde(rename = "Year", default)]
    pub year: String,
    #[serde(rename = "Crop", default)]
    pub crop: String,
    #[serde(rename = "Season", default)]
    pub season: String,
    #[serde(rename = "Area", default)]
    pub area: String,
    #[serde(rename = "Area Units", default)]
    pub area_units: String,
    #[serde(rename = "Production", default)]
    pub production: String,
    #[serde(rename = "Production Units", default)]
    pub production_units: String,
    #[serde(rename = "Yield", default)]
    pub yield_value: String,
}

/// Coerce a raw metric field to `f64`.
///
/// Unparsable values (including empty strings) contribute `0.0` so a
/// single bad cell never fails an aggregation.
pub fn parse_metric(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::parse_metric;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_metric("100"), 100.0);
        assert_eq!(parse_metric(" 12.5 "), 12.5);
    }

    #[test]
    fn unparsable_values_coerce_to_zero() {
        assert_eq!(parse_metric("abc"), 0.0);
        assert_eq!(parse_metric(""), 0.0);
        assert_eq!(parse_metric("12,5"), 0.0);
    }
}

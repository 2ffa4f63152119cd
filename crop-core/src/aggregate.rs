//! District derivation and per-crop aggregation.
//!
//! Both operations are pure functions over the loaded record slice so
//! the display layer can recompute them on every selection change
//! (there is no caching; the dataset is small and the work is a single
//! pass).

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::distinct_sorted;
use crate::record::{parse_metric, CropRecord};

/// Maximum number of crop summaries returned for one selection.
pub const TOP_CROP_LIMIT: usize = 5;

/// Aggregate of all matching records for one crop within one
/// (state, district, year) selection.
///
/// `area` and `production` are sums across the contributing records;
/// `season`, the unit labels and `yield_value` are taken from the last
/// contributing record encountered, not averaged. That asymmetry is
/// intentional-by-contract (it mirrors the shipped behavior) even
/// though it is arguably inconsistent; see the aggregation tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropSummary {
    pub crop: String,
    pub season: String,
    pub area: f64,
    pub area_units: String,
    pub production: f64,
    pub production_units: String,
    pub yield_value: f64,
    /// Number of records that contributed to this summary.
    pub record_count: usize,
}

impl CropSummary {
    fn new(crop: &str) -> Self {
        CropSummary {
            crop: crop.to_string(),
            season: String::new(),
            area: 0.0,
            area_units: String::new(),
            production: 0.0,
            production_units: String::new(),
            yield_value: 0.0,
            record_count: 0,
        }
    }
}

/// Distinct sorted district names among records of the given state.
///
/// An empty state selection produces an empty list.
pub fn district_options(records: &[CropRecord], state: &str) -> Vec<String> {
    if state.is_empty() {
        return Vec::new();
    }
    distinct_sorted(
        records
            .iter()
            .filter(|r| r.state == state)
            .map(|r| r.district.as_str()),
    )
}

/// Rank the crops of one (state, district, year) selection by total
/// cultivated area.
///
/// Records matching the selection (exact string equality on all three
/// fields) are grouped by crop name in first-encounter order, summed,
/// stably sorted by total area descending and truncated to
/// [`TOP_CROP_LIMIT`]. Ties keep their grouping order. Any unset
/// selector short-circuits to an empty list.
pub fn top_crops(
    records: &[CropRecord],
    state: &str,
    district: &str,
    year: &str,
) -> Vec<CropSummary> {
    if state.is_empty() || district.is_empty() || year.is_empty() {
        return Vec::new();
    }

    let mut summaries: Vec<CropSummary> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    let matching = records
        .iter()
        .filter(|r| r.state == state && r.district == district && r.year == year);
    for record in matching {
        let slot = *slots.entry(record.crop.clone()).or_insert_with(|| {
            summaries.push(CropSummary::new(&record.crop));
            summaries.len() - 1
        });
        let summary = &mut summaries[slot];
        summary.area += parse_metric(&record.area);
        summary.production += parse_metric(&record.production);
        summary.record_count += 1;
        // last record encountered wins for the unsummed fields
        summary.season = record.season.clone();
        summary.area_units = record.area_units.clone();
        summary.production_units = record.production_units.clone();
        summary.yield_value = parse_metric(&record.yield_value);
    }

    summaries.sort_by(|a, b| b.area.partial_cmp(&a.area).unwrap_or(Ordering::Equal));
    summaries.truncate(TOP_CROP_LIMIT);
    log::info!(
        "aggregate: {} crop summaries for {}/{} in {}",
        summaries.len(),
        state,
        district,
        year
    );
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        state: &str,
        district: &str,
        year: &str,
        crop: &str,
        season: &str,
        area: &str,
        production: &str,
        yield_value: &str,
    ) -> CropRecord {
        CropRecord {
            state: state.to_string(),
            district: district.to_string(),
            year: year.to_string(),
            crop: crop.to_string(),
            season: season.to_string(),
            area: area.to_string(),
            area_units: "Hectare".to_string(),
            production: production.to_string(),
            production_units: "Tonnes".to_string(),
            yield_value: yield_value.to_string(),
        }
    }

    fn ludhiana_rows() -> Vec<CropRecord> {
        vec![
            record("Punjab", "Ludhiana", "2025", "Wheat", "Rabi", "100", "400", "4.0"),
            record("Punjab", "Ludhiana", "2025", "Wheat", "Rabi", "50", "210", "4.2"),
            record("Punjab", "Ludhiana", "2025", "Rice", "Kharif", "80", "200", "2.5"),
        ]
    }

    #[test]
    fn districts_scoped_to_state() {
        let records = vec![
            record("Punjab", "Ludhiana", "2025", "Wheat", "Rabi", "1", "1", "1"),
            record("Punjab", "Amritsar", "2025", "Rice", "Kharif", "1", "1", "1"),
            record("Punjab", "Amritsar", "2024", "Rice", "Kharif", "1", "1", "1"),
            record("Assam", "Jorhat", "2025", "Rice", "Kharif", "1", "1", "1"),
        ];
        assert_eq!(
            district_options(&records, "Punjab"),
            vec!["Amritsar", "Ludhiana"]
        );
        assert_eq!(district_options(&records, "Assam"), vec!["Jorhat"]);
        assert!(district_options(&records, "").is_empty());
        assert!(district_options(&records, "Kerala").is_empty());
    }

    #[test]
    fn sums_area_and_ranks_descending() {
        let crops = top_crops(&ludhiana_rows(), "Punjab", "Ludhiana", "2025");
        assert_eq!(crops.len(), 2);
        assert_eq!(crops[0].crop, "Wheat");
        assert_eq!(crops[0].area, 150.0);
        assert_eq!(crops[0].production, 610.0);
        assert_eq!(crops[0].record_count, 2);
        assert_eq!(crops[1].crop, "Rice");
        assert_eq!(crops[1].area, 80.0);
    }

    #[test]
    fn unset_selector_yields_empty() {
        let records = ludhiana_rows();
        assert!(top_crops(&records, "", "Ludhiana", "2025").is_empty());
        assert!(top_crops(&records, "Punjab", "", "2025").is_empty());
        assert!(top_crops(&records, "Punjab", "Ludhiana", "").is_empty());
    }

    #[test]
    fn no_matching_records_yields_empty() {
        let crops = top_crops(&ludhiana_rows(), "Punjab", "Ludhiana", "2024");
        assert!(crops.is_empty());
    }

    #[test]
    fn year_is_compared_as_literal_string() {
        let records = vec![record(
            "Punjab", "Ludhiana", "2025.0", "Wheat", "Rabi", "10", "40", "4.0",
        )];
        // "2025" != "2025.0" even though they coerce to the same number
        assert!(top_crops(&records, "Punjab", "Ludhiana", "2025").is_empty());
        assert_eq!(top_crops(&records, "Punjab", "Ludhiana", "2025.0").len(), 1);
    }

    #[test]
    fn truncates_to_top_five() {
        let mut records = Vec::new();
        for (i, crop) in ["A", "B", "C", "D", "E", "F", "G"].iter().enumerate() {
            records.push(record(
                "Punjab",
                "Ludhiana",
                "2025",
                crop,
                "Rabi",
                &format!("{}", 10 * (i + 1)),
                "1",
                "1",
            ));
        }
        let crops = top_crops(&records, "Punjab", "Ludhiana", "2025");
        assert_eq!(crops.len(), TOP_CROP_LIMIT);
        assert_eq!(crops[0].crop, "G");
        assert_eq!(crops[4].crop, "C");
        // strictly non-increasing area
        for pair in crops.windows(2) {
            assert!(pair[0].area >= pair[1].area);
        }
    }

    #[test]
    fn equal_areas_keep_grouping_order() {
        let records = vec![
            record("Punjab", "Ludhiana", "2025", "Maize", "Kharif", "40", "1", "1"),
            record("Punjab", "Ludhiana", "2025", "Barley", "Rabi", "40", "1", "1"),
        ];
        let crops = top_crops(&records, "Punjab", "Ludhiana", "2025");
        // stable sort: first-encounter order decides ties
        assert_eq!(crops[0].crop, "Maize");
        assert_eq!(crops[1].crop, "Barley");
    }

    #[test]
    fn unparsable_metrics_contribute_zero() {
        let records = vec![
            record("Punjab", "Ludhiana", "2025", "Wheat", "Rabi", "abc", "400", "4.0"),
            record("Punjab", "Ludhiana", "2025", "Wheat", "Rabi", "50", "n/a", "4.2"),
        ];
        let crops = top_crops(&records, "Punjab", "Ludhiana", "2025");
        assert_eq!(crops[0].area, 50.0);
        assert_eq!(crops[0].production, 400.0);
        assert_eq!(crops[0].record_count, 2);
    }

    // area and production are summed but season, units and yield are
    // not: the last contributing record simply overwrites them. Looks
    // like an oversight in the shipped aggregation, preserved here on
    // purpose.
    #[test]
    fn unsummed_fields_take_last_record() {
        let mut records = ludhiana_rows();
        records[1].season = "Summer".to_string();
        records[1].area_units = "Acre".to_string();
        let crops = top_crops(&records, "Punjab", "Ludhiana", "2025");
        let wheat = &crops[0];
        assert_eq!(wheat.crop, "Wheat");
        assert_eq!(wheat.season, "Summer");
        assert_eq!(wheat.area_units, "Acre");
        assert_eq!(wheat.yield_value, 4.2);
    }
}

//! Dataset loading and load-time derivations.
//!
//! `Dataset::from_csv` is the single entry point: it parses the raw CSV
//! text (first row = header), skipping rows that fail to deserialize,
//! and derives the two values fixed for the rest of the session — the
//! sorted distinct state list and the resolved current year.
//!
//! Loading never fails. A malformed or empty resource produces an empty
//! dataset and the rest of the system tolerates that: no states to
//! select, no districts, no summaries.

use crate::record::CropRecord;

/// Year preferred when present in the dataset.
pub const TARGET_YEAR: &str = "2025";

/// The parsed dataset plus its load-time derivations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// All rows, in file order. Read-only after load.
    pub records: Vec<CropRecord>,
    /// Distinct state names, sorted ascending.
    pub states: Vec<String>,
    /// The single year used for filtering this session. Empty when the
    /// dataset is empty.
    pub current_year: String,
}

impl Dataset {
    /// Parse CSV text into a dataset.
    ///
    /// Rows that fail to deserialize are skipped and counted; they never
    /// abort the load. A resource that yields no parseable rows produces
    /// an empty dataset.
    pub fn from_csv(csv_data: &str) -> Self {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut records: Vec<CropRecord> = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.deserialize::<CropRecord>() {
            match result {
                Ok(record) => records.push(record),
                Err(_) => skipped += 1,
            }
        }
        log::info!(
            "dataset: loaded {} records, skipped {} unparseable rows",
            records.len(),
            skipped
        );

        let states = distinct_sorted(records.iter().map(|r| r.state.as_str()));
        let current_year = resolve_current_year(&records);
        Dataset {
            records,
            states,
            current_year,
        }
    }
}

/// Collect distinct non-duplicate values, sorted ascending.
pub fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = values.map(str::to_string).collect();
    out.sort();
    out.dedup();
    out
}

/// Resolve the single year used for filtering this session.
///
/// The literal [`TARGET_YEAR`] wins when present among the dataset's
/// distinct years; otherwise the year with the greatest value under
/// numeric coercion. Non-numeric years coerce to negative infinity and
/// therefore always lose to any numeric year. Empty dataset resolves to
/// an empty string.
fn resolve_current_year(records: &[CropRecord]) -> String {
    let years = distinct_sorted(records.iter().map(|r| r.year.as_str()));
    if years.iter().any(|y| y == TARGET_YEAR) {
        return TARGET_YEAR.to_string();
    }
    years
        .into_iter()
        .max_by(|a, b| year_ordinal(a).total_cmp(&year_ordinal(b)))
        .unwrap_or_default()
}

fn year_ordinal(year: &str) -> f64 {
    year.trim().parse::<f64>().unwrap_or(f64::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "State,District,Year,Crop,Season,Area,Area Units,Production,Production Units,Yield\n";

    fn dataset(rows: &str) -> Dataset {
        Dataset::from_csv(&format!("{HEADER}{rows}"))
    }

    #[test]
    fn states_are_distinct_and_sorted() {
        let ds = dataset(
            "Punjab,Ludhiana,2025,Wheat,Rabi,100,Hectare,400,Tonnes,4\n\
             Assam,Jorhat,2025,Rice,Kharif,50,Hectare,120,Tonnes,2.4\n\
             Punjab,Amritsar,2025,Rice,Kharif,80,Hectare,200,Tonnes,2.5\n",
        );
        assert_eq!(ds.states, vec!["Assam", "Punjab"]);
    }

    #[test]
    fn target_year_wins_when_present() {
        let ds = dataset(
            "Punjab,Ludhiana,2023,Wheat,Rabi,100,Hectare,400,Tonnes,4\n\
             Punjab,Ludhiana,2025,Wheat,Rabi,90,Hectare,380,Tonnes,4.2\n",
        );
        assert_eq!(ds.current_year, "2025");
    }

    #[test]
    fn falls_back_to_numerically_largest_year() {
        let ds = dataset(
            "Punjab,Ludhiana,2023,Wheat,Rabi,100,Hectare,400,Tonnes,4\n\
             Punjab,Ludhiana,2024,Wheat,Rabi,90,Hectare,380,Tonnes,4.2\n",
        );
        assert_eq!(ds.current_year, "2024");
    }

    #[test]
    fn non_numeric_years_sort_lowest() {
        let ds = dataset(
            "Punjab,Ludhiana,unknown,Wheat,Rabi,100,Hectare,400,Tonnes,4\n\
             Punjab,Ludhiana,2019,Wheat,Rabi,90,Hectare,380,Tonnes,4.2\n",
        );
        assert_eq!(ds.current_year, "2019");
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        let ds = Dataset::from_csv("");
        assert!(ds.records.is_empty());
        assert!(ds.states.is_empty());
        assert_eq!(ds.current_year, "");
    }

    #[test]
    fn garbage_input_yields_empty_dataset() {
        let ds = Dataset::from_csv("<!doctype html><html>not a csv</html>");
        assert!(ds.records.is_empty());
        assert!(ds.states.is_empty());
        assert_eq!(ds.current_year, "");
    }

    #[test]
    fn short_rows_keep_missing_fields_empty() {
        // flexible parsing: a truncated row still loads, trailing fields empty
        let ds = dataset("Punjab,Ludhiana,2025,Wheat\n");
        assert_eq!(ds.records.len(), 1);
        assert_eq!(ds.records[0].season, "");
        assert_eq!(ds.records[0].yield_value, "");
        assert_eq!(ds.current_year, "2025");
    }
}

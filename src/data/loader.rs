use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Row-level parse failures
// ---------------------------------------------------------------------------

/// Why a single row was excluded.  Rows failing to parse are dropped, never
/// fatal; the counts are logged so silent data loss is visible.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("missing YEAR")]
    MissingYear,
    #[error("unparseable YEAR {0:?}")]
    BadYear(String),
    #[error("missing ESTIMATE")]
    MissingEstimate,
    #[error("unparseable ESTIMATE {0:?}")]
    BadEstimate(String),
}

/// Per-kind counts of dropped rows for one load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DropCounts {
    pub missing_year: usize,
    pub bad_year: usize,
    pub missing_estimate: usize,
    pub bad_estimate: usize,
}

impl DropCounts {
    fn record(&mut self, err: &RowError) {
        match err {
            RowError::MissingYear => self.missing_year += 1,
            RowError::BadYear(_) => self.bad_year += 1,
            RowError::MissingEstimate => self.missing_estimate += 1,
            RowError::BadEstimate(_) => self.bad_estimate += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.missing_year + self.bad_year + self.missing_estimate + self.bad_estimate
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the observation dataset from a delimited file.
///
/// Expected layout: header row with at least `YEAR`, `AGE`, `STUB_LABEL` and
/// `ESTIMATE` columns.  A missing column or unreadable file is an error; a
/// row whose YEAR or ESTIMATE fails to parse is dropped and counted.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening dataset {}", path.display()))?;
    let (observations, drops) = read_observations(file)?;

    if drops.total() > 0 {
        log::warn!(
            "dropped {} rows (missing YEAR: {}, bad YEAR: {}, missing ESTIMATE: {}, bad ESTIMATE: {})",
            drops.total(),
            drops.missing_year,
            drops.bad_year,
            drops.missing_estimate,
            drops.bad_estimate,
        );
    }
    log::info!(
        "loaded {} observations from {}",
        observations.len(),
        path.display()
    );

    Ok(Dataset::from_observations(observations))
}

/// Parse observations from any reader.  Returns the kept rows and the
/// per-kind counts of dropped ones.
pub fn read_observations<R: Read>(reader: R) -> Result<(Vec<Observation>, DropCounts)> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers: Vec<String> = rdr
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let year_idx = column_index(&headers, "YEAR")?;
    let age_idx = column_index(&headers, "AGE")?;
    let label_idx = column_index(&headers, "STUB_LABEL")?;
    let estimate_idx = column_index(&headers, "ESTIMATE")?;

    let mut observations = Vec::new();
    let mut drops = DropCounts::default();

    for (row_no, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;

        let year = match parse_year(record.get(year_idx).unwrap_or("")) {
            Ok(y) => y,
            Err(e) => {
                log::debug!("row {row_no} dropped: {e}");
                drops.record(&e);
                continue;
            }
        };
        let estimate = match parse_estimate(record.get(estimate_idx).unwrap_or("")) {
            Ok(v) => v,
            Err(e) => {
                log::debug!("row {row_no} dropped: {e}");
                drops.record(&e);
                continue;
            }
        };

        observations.push(Observation {
            year,
            age: record.get(age_idx).unwrap_or("").to_string(),
            label: record.get(label_idx).unwrap_or("").to_string(),
            estimate,
        });
    }

    Ok((observations, drops))
}

fn column_index(headers: &[String], name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .with_context(|| format!("CSV missing '{name}' column"))
}

/// Parse a 4-digit calendar year.
fn parse_year(s: &str) -> std::result::Result<i32, RowError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RowError::MissingYear);
    }
    match s.parse::<i32>() {
        Ok(y) if (1000..=9999).contains(&y) => Ok(y),
        _ => Err(RowError::BadYear(s.to_string())),
    }
}

fn parse_estimate(s: &str) -> std::result::Result<f64, RowError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(RowError::MissingEstimate);
    }
    s.parse::<f64>()
        .map_err(|_| RowError::BadEstimate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "YEAR,AGE,STUB_LABEL,ESTIMATE\n";

    fn read(body: &str) -> (Vec<Observation>, DropCounts) {
        let csv = format!("{HEADER}{body}");
        read_observations(csv.as_bytes()).unwrap()
    }

    #[test]
    fn one_valid_one_invalid_row_yields_one_observation() {
        let (obs, drops) = read("2018,15-24 years,Male,12.0\n2019,15-24 years,Male,not-a-number\n");

        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].year, 2018);
        assert_eq!(obs[0].estimate, 12.0);
        assert_eq!(drops.bad_estimate, 1);
        assert_eq!(drops.total(), 1);
    }

    #[test]
    fn rows_missing_year_or_estimate_are_dropped() {
        let (obs, drops) = read(
            ",15-24 years,Male,12.0\n\
             2018,15-24 years,Male,\n\
             2019,25-34 years,Female,6.4\n",
        );

        assert_eq!(obs.len(), 1);
        assert_eq!(obs[0].label, "Female");
        assert_eq!(drops.missing_year, 1);
        assert_eq!(drops.missing_estimate, 1);
    }

    #[test]
    fn non_four_digit_year_is_dropped() {
        let (obs, drops) = read("18,15-24 years,Male,12.0\n20018,15-24 years,Male,12.0\n");
        assert!(obs.is_empty());
        assert_eq!(drops.bad_year, 2);
    }

    #[test]
    fn empty_categories_are_kept_verbatim() {
        let (obs, drops) = read("2018,,,12.5\n");
        assert_eq!(drops.total(), 0);
        assert_eq!(obs[0].age, "");
        assert_eq!(obs[0].label, "");
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let csv = "YEAR,AGE,ESTIMATE\n2018,15-24 years,12.0\n";
        let err = read_observations(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("STUB_LABEL"));
    }
}

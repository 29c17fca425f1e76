use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use super::aggregate::GroupMean;

// ---------------------------------------------------------------------------
// Aggregated-series export
// ---------------------------------------------------------------------------

/// Value column header, matching the dashboard's table captions.
const VALUE_HEADER: &str = "Average Suicide Rate";

/// Write an aggregated series as a two-column delimited file: one row per
/// group key, values as the shortest round-trippable decimal form.
pub fn write_series<W: Write>(writer: W, key_header: &str, series: &[GroupMean]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([key_header, VALUE_HEADER])
        .context("writing export header")?;

    for group in series {
        wtr.write_record([group.key.to_string(), group.mean.to_string()])
            .with_context(|| format!("writing export row {}", group.key))?;
    }

    wtr.flush().context("flushing export")?;
    Ok(())
}

/// Write an aggregated series to a file path (used by the save dialog).
pub fn export_series(path: &Path, key_header: &str, series: &[GroupMean]) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    write_series(file, key_header, series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::GroupKey;

    fn series() -> Vec<GroupMean> {
        vec![
            GroupMean {
                key: GroupKey::Category("Female".to_string()),
                mean: 6.2,
            },
            GroupMean {
                key: GroupKey::Category("Male".to_string()),
                mean: 22.75,
            },
        ]
    }

    #[test]
    fn row_count_equals_distinct_group_keys() {
        let mut buf = Vec::new();
        write_series(&mut buf, "STUB_LABEL", &series()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // header + one row per distinct key
        assert_eq!(lines.len(), 1 + series().len());
        assert_eq!(lines[0], "STUB_LABEL,Average Suicide Rate");
        assert_eq!(lines[1], "Female,6.2");
        assert_eq!(lines[2], "Male,22.75");
    }

    #[test]
    fn empty_series_exports_header_only() {
        let mut buf = Vec::new();
        write_series(&mut buf, "AGE", &[]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}

use std::collections::BTreeMap;
use std::fmt;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Filters: equality constraints applied before grouping
// ---------------------------------------------------------------------------

/// Equality filters over the observation set.  `None` means no constraint on
/// that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    pub age: Option<String>,
    pub label: Option<String>,
    pub year: Option<i32>,
}

impl RowFilter {
    fn matches(&self, obs: &Observation) -> bool {
        if let Some(age) = &self.age {
            if obs.age != *age {
                return false;
            }
        }
        if let Some(label) = &self.label {
            if obs.label != *label {
                return false;
            }
        }
        if let Some(year) = self.year {
            if obs.year != year {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Grouping key
// ---------------------------------------------------------------------------

/// Which field the aggregation groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Year,
    Age,
    Label,
}

impl GroupBy {
    /// Column header used when the aggregated series is exported.
    pub fn column_name(&self) -> &'static str {
        match self {
            GroupBy::Year => "YEAR",
            GroupBy::Age => "AGE",
            GroupBy::Label => "STUB_LABEL",
        }
    }

    fn key_of(&self, obs: &Observation) -> GroupKey {
        match self {
            GroupBy::Year => GroupKey::Year(obs.year),
            GroupBy::Age => GroupKey::Category(obs.age.clone()),
            GroupBy::Label => GroupKey::Category(obs.label.clone()),
        }
    }
}

/// One concrete group key value.  Years order numerically, categories
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum GroupKey {
    Year(i32),
    Category(String),
}

impl GroupKey {
    /// The key as a year, if this series is keyed by year.
    pub fn year(&self) -> Option<i32> {
        match self {
            GroupKey::Year(y) => Some(*y),
            GroupKey::Category(_) => None,
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Year(y) => write!(f, "{y}"),
            GroupKey::Category(c) => write!(f, "{c}"),
        }
    }
}

/// One (group key, mean estimate) pair of an aggregated series.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub key: GroupKey,
    pub mean: f64,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Group the observations passing `filter` by `group_by` and compute the mean
/// estimate per group, sorted by the natural order of the key.
///
/// Zero matching rows produce an empty series; callers are expected to render
/// an explicit "no data" state instead of an empty chart.
pub fn mean_by(observations: &[Observation], filter: &RowFilter, group_by: GroupBy) -> Vec<GroupMean> {
    let mut groups: BTreeMap<GroupKey, (f64, usize)> = BTreeMap::new();

    for obs in observations.iter().filter(|o| filter.matches(o)) {
        let entry = groups.entry(group_by.key_of(obs)).or_insert((0.0, 0));
        entry.0 += obs.estimate;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(key, (sum, count))| GroupMean {
            key,
            mean: sum / count as f64,
        })
        .collect()
}

/// Yearly mean series for one (age group, demographic label) pair — the
/// Trends view aggregation.
pub fn yearly_trend(dataset: &Dataset, age: &str, label: &str) -> Vec<GroupMean> {
    let filter = RowFilter {
        age: Some(age.to_string()),
        label: Some(label.to_string()),
        year: None,
    };
    mean_by(&dataset.observations, &filter, GroupBy::Year)
}

/// Mean per demographic group for one year — the Demographics view
/// aggregation.  `group_by` must be `Age` or `Label`.
pub fn demographic_breakdown(dataset: &Dataset, year: i32, group_by: GroupBy) -> Vec<GroupMean> {
    let filter = RowFilter {
        age: None,
        label: None,
        year: Some(year),
    };
    mean_by(&dataset.observations, &filter, group_by)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(year: i32, age: &str, label: &str, estimate: f64) -> Observation {
        Observation {
            year,
            age: age.to_string(),
            label: label.to_string(),
            estimate,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_observations(vec![
            obs(2018, "15-24", "Male", 12.0),
            obs(2019, "15-24", "Male", 13.0),
            obs(2018, "15-24", "Female", 3.4),
            obs(2018, "25-34", "Male", 17.5),
            obs(2019, "25-34", "Male", 18.1),
        ])
    }

    #[test]
    fn mean_of_single_row_is_the_row_value() {
        let ds = sample();
        let series = yearly_trend(&ds, "15-24", "Female");
        assert_eq!(
            series,
            vec![GroupMean {
                key: GroupKey::Year(2018),
                mean: 3.4
            }]
        );
    }

    #[test]
    fn trend_keyed_by_year_is_chronological() {
        let ds = sample();
        let series = yearly_trend(&ds, "15-24", "Male");
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, GroupKey::Year(2018));
        assert_eq!(series[0].mean, 12.0);
        assert_eq!(series[1].key, GroupKey::Year(2019));
        assert_eq!(series[1].mean, 13.0);
    }

    #[test]
    fn zero_match_filter_yields_empty_series() {
        let ds = sample();
        let series = yearly_trend(&ds, "65 and over", "Female");
        assert!(series.is_empty());
    }

    #[test]
    fn grouping_averages_across_remaining_fields() {
        let ds = sample();
        // 2018 across all ages and labels: (12.0 + 3.4 + 17.5) / 3
        let series = demographic_breakdown(&ds, 2018, GroupBy::Label);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].key, GroupKey::Category("Female".to_string()));
        assert_eq!(series[0].mean, 3.4);
        assert_eq!(series[1].key, GroupKey::Category("Male".to_string()));
        assert!((series[1].mean - (12.0 + 17.5) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn category_keys_sort_lexicographically() {
        let ds = sample();
        let series = demographic_breakdown(&ds, 2018, GroupBy::Age);
        let keys: Vec<String> = series.iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["15-24", "25-34"]);
    }

    #[test]
    fn unconstrained_filter_matches_everything() {
        let ds = sample();
        let all = mean_by(&ds.observations, &RowFilter::default(), GroupBy::Year);
        assert_eq!(all.len(), 2);
        // 2019: (13.0 + 18.1) / 2
        assert!((all[1].mean - 15.55).abs() < 1e-12);
    }
}

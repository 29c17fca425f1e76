use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Observation – one cleaned row of the source dataset
// ---------------------------------------------------------------------------

/// A single cleaned row: the year, the two demographic categories, and the
/// death rate per 100,000 population.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Calendar year the rate was measured for.
    pub year: i32,
    /// Age group, e.g. `"15-24 years"`.
    pub age: String,
    /// Demographic label, e.g. `"Male"` or `"Female: White"`.
    pub label: String,
    /// Death rate estimate.
    pub estimate: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed unique-value indices for the
/// selector widgets.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All cleaned rows.
    pub observations: Vec<Observation>,
    /// Sorted unique age groups.
    pub ages: Vec<String>,
    /// Sorted unique demographic labels.
    pub labels: Vec<String>,
    /// Sorted unique years.
    pub years: Vec<i32>,
}

impl Dataset {
    /// Build the unique-value indices from the loaded observations.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut ages: BTreeSet<String> = BTreeSet::new();
        let mut labels: BTreeSet<String> = BTreeSet::new();
        let mut years: BTreeSet<i32> = BTreeSet::new();

        for obs in &observations {
            ages.insert(obs.age.clone());
            labels.insert(obs.label.clone());
            years.insert(obs.year);
        }

        Dataset {
            observations,
            ages: ages.into_iter().collect(),
            labels: labels.into_iter().collect(),
            years: years.into_iter().collect(),
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
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

    #[test]
    fn unique_indices_are_sorted_and_deduplicated() {
        let ds = Dataset::from_observations(vec![
            obs(2019, "25-34 years", "Male", 23.1),
            obs(2018, "15-24 years", "Female", 5.2),
            obs(2019, "15-24 years", "Male", 22.7),
        ]);

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.ages, vec!["15-24 years", "25-34 years"]);
        assert_eq!(ds.labels, vec!["Female", "Male"]);
        assert_eq!(ds.years, vec![2018, 2019]);
    }

    #[test]
    fn empty_dataset_has_empty_indices() {
        let ds = Dataset::from_observations(Vec::new());
        assert!(ds.is_empty());
        assert!(ds.ages.is_empty());
        assert!(ds.years.is_empty());
    }
}

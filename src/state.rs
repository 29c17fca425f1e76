use crate::color::Theme;
use crate::data::aggregate::{self, GroupBy, GroupMean};
use crate::data::model::Dataset;
use crate::forecast::provider::ForecastPoint;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard's three views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Forecast,
    Trends,
    Demographics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Forecast, Tab::Trends, Tab::Demographics];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Forecast => "Forecast",
            Tab::Trends => "Trends",
            Tab::Demographics => "Demographics",
        }
    }
}

/// Trends view selections: one age group and one demographic label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSelection {
    pub age: String,
    pub label: String,
}

/// Demographics view selections: a year and a grouping dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSelection {
    pub year: i32,
    pub group_by: GroupBy,
}

/// The full UI state, independent of rendering.  The dataset and forecast
/// sequence are loaded once at startup and never mutated by the views; every
/// interaction recomputes its series from them.
pub struct AppState {
    /// Loaded and cleaned observation set.
    pub dataset: Dataset,

    /// Forecast sequence (fitted range + future horizon), fixed per session.
    pub forecast: Vec<ForecastPoint>,

    /// Light/dark mode.
    pub theme: Theme,

    /// Currently shown view.
    pub tab: Tab,

    /// Trends view selections.
    pub trend: TrendSelection,

    /// Demographics view selections.
    pub demo: DemoSelection,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(dataset: Dataset, forecast: Vec<ForecastPoint>) -> Self {
        let trend = default_trend_selection(&dataset);
        let demo = default_demo_selection(&dataset);
        Self {
            dataset,
            forecast,
            theme: Theme::default(),
            tab: Tab::default(),
            trend,
            demo,
            status_message: None,
        }
    }

    /// Swap in a newly loaded dataset and reset the selections that depend
    /// on it.  Theme, tab, and the forecast sequence stay as they are.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.trend = default_trend_selection(&dataset);
        self.demo = default_demo_selection(&dataset);
        self.dataset = dataset;
        self.status_message = None;
    }

    /// Yearly mean series for the current Trends selections.
    pub fn trend_series(&self) -> Vec<GroupMean> {
        aggregate::yearly_trend(&self.dataset, &self.trend.age, &self.trend.label)
    }

    /// Per-group mean series for the current Demographics selections.
    pub fn demographic_series(&self) -> Vec<GroupMean> {
        aggregate::demographic_breakdown(&self.dataset, self.demo.year, self.demo.group_by)
    }

    /// Observed yearly means across the whole dataset, overlaid on the
    /// forecast chart.
    pub fn observed_yearly_means(&self) -> Vec<GroupMean> {
        aggregate::mean_by(
            &self.dataset.observations,
            &aggregate::RowFilter::default(),
            GroupBy::Year,
        )
    }
}

/// First sorted age and label, matching the original selector defaults.
fn default_trend_selection(dataset: &Dataset) -> TrendSelection {
    TrendSelection {
        age: dataset.ages.first().cloned().unwrap_or_default(),
        label: dataset.labels.first().cloned().unwrap_or_default(),
    }
}

/// Latest year and label grouping, matching the original selector defaults.
fn default_demo_selection(dataset: &Dataset) -> DemoSelection {
    DemoSelection {
        year: dataset.years.last().copied().unwrap_or(0),
        group_by: GroupBy::Label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn obs(year: i32, age: &str, label: &str, estimate: f64) -> Observation {
        Observation {
            year,
            age: age.to_string(),
            label: label.to_string(),
            estimate,
        }
    }

    fn state() -> AppState {
        let dataset = Dataset::from_observations(vec![
            obs(2017, "25-34 years", "Male", 20.0),
            obs(2018, "15-24 years", "Male", 12.0),
            obs(2019, "15-24 years", "Male", 13.0),
        ]);
        AppState::new(dataset, Vec::new())
    }

    #[test]
    fn defaults_are_first_categories_and_latest_year() {
        let s = state();
        assert_eq!(s.trend.age, "15-24 years");
        assert_eq!(s.trend.label, "Male");
        assert_eq!(s.demo.year, 2019);
        assert_eq!(s.demo.group_by, GroupBy::Label);
    }

    #[test]
    fn trend_series_follows_current_selection() {
        let s = state();
        let series = s.trend_series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].mean, 12.0);
        assert_eq!(series[1].mean, 13.0);
    }

    #[test]
    fn replacing_the_dataset_resets_selections() {
        let mut s = state();
        s.trend.age = "25-34 years".to_string();
        s.status_message = Some("stale".to_string());

        s.replace_dataset(Dataset::from_observations(vec![obs(
            2020,
            "45-64 years",
            "Female",
            9.1,
        )]));

        assert_eq!(s.trend.age, "45-64 years");
        assert_eq!(s.trend.label, "Female");
        assert_eq!(s.demo.year, 2020);
        assert_eq!(s.status_message, None);
    }

    #[test]
    fn empty_dataset_defaults_produce_empty_series() {
        let s = AppState::new(Dataset::default(), Vec::new());
        assert!(s.trend_series().is_empty());
        assert!(s.demographic_series().is_empty());
    }
}

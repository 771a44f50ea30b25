use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, error};

use crate::color::ActivityColors;
use crate::data::chart::{histogram, scatter_series, HistogramBin};
use crate::data::error::DataError;
use crate::data::model::{Dataset, Gender, Intensity, NumericField, Record};
use crate::data::query::{filter, mean_of, Query};

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Explore,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Home, Tab::Explore];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Explore => "Explore Data",
        }
    }
}

// ---------------------------------------------------------------------------
// ExploreView – everything the explore page draws for one query
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum ExploreView {
    /// The query matched nothing; show the informational warning.
    NoData,
    Results {
        mean_calories: f64,
        histogram: Vec<HistogramBin>,
        scatter: BTreeMap<String, Vec<[f64; 2]>>,
        rows: Vec<Record>,
    },
}

impl ExploreView {
    /// Run one query end to end. The mean is only taken on a non-empty result.
    pub fn compute(dataset: &Dataset, query: &Query, bins: usize) -> Result<Self, DataError> {
        let result = filter(dataset, query);
        debug!(
            "Query {} / {} matched {} of {} records",
            query.gender,
            query.intensity,
            result.len(),
            dataset.len()
        );
        if result.is_empty() {
            return Ok(ExploreView::NoData);
        }

        let calories: Vec<f64> = result.values(NumericField::CaloriesBurned).collect();
        Ok(ExploreView::Results {
            mean_calories: mean_of(&result, NumericField::CaloriesBurned)?,
            histogram: histogram(&calories, bins),
            scatter: scatter_series(&result),
            rows: result.records().cloned().collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, or the reason it could not be loaded.
    pub dataset: Result<Arc<Dataset>, String>,

    pub tab: Tab,

    /// Current radio selections.
    pub query: Query,

    /// Result of the current query; replaced on every selection change.
    pub view: ExploreView,

    /// Colour per activity type, fixed for the dataset.
    pub activity_colors: ActivityColors,

    pub bins: usize,
}

impl AppState {
    pub fn new(dataset: Result<Arc<Dataset>, DataError>, query: Query, bins: usize) -> Self {
        let dataset = dataset.map_err(|e| {
            error!("Failed to load dataset: {e}");
            e.to_string()
        });
        let activity_colors = match &dataset {
            Ok(ds) => ActivityColors::new(ds.activity_types()),
            Err(_) => ActivityColors::new(&Default::default()),
        };
        let mut state = Self {
            dataset,
            tab: Tab::default(),
            query,
            view: ExploreView::NoData,
            activity_colors,
            bins,
        };
        state.select(query);
        state
    }

    /// Handle a selection change: recompute the view for `query`.
    pub fn select(&mut self, query: Query) {
        self.query = query;
        let Ok(dataset) = &self.dataset else {
            return;
        };
        self.view = match ExploreView::compute(dataset, &query, self.bins) {
            Ok(view) => view,
            Err(e) => {
                error!("Query {query:?} failed: {e}");
                ExploreView::NoData
            }
        };
    }

    pub fn set_gender(&mut self, gender: Gender) {
        if gender != self.query.gender {
            self.select(Query::new(gender, self.query.intensity));
        }
    }

    pub fn set_intensity(&mut self, intensity: Intensity) {
        if intensity != self.query.intensity {
            self.select(Query::new(self.query.gender, intensity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(gender: Gender, intensity: Intensity, activity: &str, dur: f64, kcal: f64) -> Record {
        Record {
            gender,
            intensity,
            activity_type: activity.to_string(),
            duration_minutes: dur,
            calories_burned: kcal,
        }
    }

    fn state() -> AppState {
        let ds = Dataset::from_records(vec![
            rec(Gender::Female, Intensity::Low, "Yoga", 30.0, 120.0),
            rec(Gender::Female, Intensity::Low, "Walking", 45.0, 200.0),
            rec(Gender::Male, Intensity::High, "Running", 10.0, 80.0),
        ]);
        AppState::new(Ok(Arc::new(ds)), Query::default(), 20)
    }

    #[test]
    fn default_selection_with_no_matches_shows_no_data() {
        let state = state();
        assert_eq!(state.query, Query::new(Gender::Male, Intensity::Low));
        assert!(matches!(state.view, ExploreView::NoData));
    }

    #[test]
    fn selection_changes_recompute_the_view() {
        let mut state = state();
        state.set_gender(Gender::Female);

        match &state.view {
            ExploreView::Results {
                mean_calories,
                histogram,
                scatter,
                rows,
            } => {
                assert_eq!(*mean_calories, 160.0);
                assert_eq!(rows.len(), 2);
                assert_eq!(histogram.iter().map(|b| b.count).sum::<usize>(), 2);
                assert_eq!(scatter.len(), 2);
            }
            ExploreView::NoData => panic!("expected results"),
        }

        state.set_intensity(Intensity::High);
        assert!(matches!(state.view, ExploreView::NoData));

        state.set_gender(Gender::Male);
        assert!(matches!(state.view, ExploreView::Results { mean_calories, .. } if mean_calories == 80.0));
    }

    #[test]
    fn load_failure_is_kept_as_a_message() {
        let err = DataError::Load {
            path: "missing.csv".into(),
            reason: "No such file".to_string(),
        };
        let mut state = AppState::new(Err(err), Query::default(), 20);
        assert!(state.dataset.as_ref().unwrap_err().contains("missing.csv"));

        state.set_gender(Gender::Female);
        assert_eq!(state.query.gender, Gender::Female);
        assert!(matches!(state.view, ExploreView::NoData));
    }
}

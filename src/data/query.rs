use super::error::DataError;
use super::model::{Dataset, Gender, Intensity, NumericField, Record};

// ---------------------------------------------------------------------------
// Query: the two radio selections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub gender: Gender,
    pub intensity: Intensity,
}

impl Default for Query {
    /// First option of each radio group.
    fn default() -> Self {
        Query {
            gender: Gender::Male,
            intensity: Intensity::Low,
        }
    }
}

impl Query {
    pub fn new(gender: Gender, intensity: Intensity) -> Self {
        Query { gender, intensity }
    }

    /// Build a query from display labels, failing on anything outside the
    /// fixed enumerations.
    pub fn parse(gender: &str, intensity: &str) -> Result<Self, DataError> {
        Ok(Query {
            gender: gender.parse()?,
            intensity: intensity.parse()?,
        })
    }

    pub fn matches(&self, record: &Record) -> bool {
        record.gender == self.gender && record.intensity == self.intensity
    }
}

// ---------------------------------------------------------------------------
// QueryResult: matching rows, in dataset order
// ---------------------------------------------------------------------------

/// The rows of a [`Dataset`] that matched a [`Query`], held as indices.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    dataset: &'a Dataset,
    indices: Vec<usize>,
}

impl<'a> QueryResult<'a> {
    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + '_ {
        let records = self.dataset.records();
        self.indices.iter().map(move |&i| &records[i])
    }

    /// One numeric column of the matching rows.
    pub fn values(&self, field: NumericField) -> impl Iterator<Item = f64> + '_ {
        self.records().map(move |r| field.value_of(r))
    }
}

/// Return the rows matching both keys of `query`.
///
/// Pure: the dataset is only read, and equal inputs give equal outputs.
/// An empty result is a normal outcome, not an error.
pub fn filter<'a>(dataset: &'a Dataset, query: &Query) -> QueryResult<'a> {
    let indices = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| query.matches(r))
        .map(|(i, _)| i)
        .collect();
    QueryResult { dataset, indices }
}

/// Arithmetic mean of `field` over the result.
///
/// Fails with [`DataError::EmptyAggregation`] instead of producing NaN.
pub fn mean_of(result: &QueryResult<'_>, field: NumericField) -> Result<f64, DataError> {
    if result.is_empty() {
        return Err(DataError::EmptyAggregation { field });
    }
    let sum: f64 = result.values(field).sum();
    Ok(sum / result.len() as f64)
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

    fn scenario() -> Dataset {
        Dataset::from_records(vec![
            rec(Gender::Female, Intensity::Low, "Yoga", 30.0, 120.0),
            rec(Gender::Female, Intensity::Low, "Walking", 45.0, 200.0),
            rec(Gender::Male, Intensity::High, "Running", 10.0, 80.0),
        ])
    }

    /// Every (gender, intensity) combination appears at a known set of rows.
    fn mixed() -> Dataset {
        let mut records = Vec::new();
        for (n, g) in Gender::ALL.into_iter().enumerate() {
            for (m, i) in Intensity::ALL.into_iter().enumerate() {
                for k in 0..(n + m + 1) {
                    records.push(rec(g, i, "Cycling", k as f64, (10 * k) as f64));
                }
            }
        }
        // interleave so matches are not contiguous
        records.reverse();
        Dataset::from_records(records)
    }

    #[test]
    fn female_low_scenario() {
        let ds = scenario();
        let result = filter(&ds, &Query::new(Gender::Female, Intensity::Low));
        assert_eq!(result.indices(), &[0, 1]);
        assert_eq!(mean_of(&result, NumericField::CaloriesBurned).unwrap(), 160.0);
        assert_eq!(mean_of(&result, NumericField::DurationMinutes).unwrap(), 37.5);
    }

    #[test]
    fn absent_combination_is_empty_not_an_error() {
        let ds = scenario();
        let result = filter(&ds, &Query::new(Gender::Male, Intensity::Low));
        assert!(result.is_empty());
        assert!(matches!(
            mean_of(&result, NumericField::CaloriesBurned),
            Err(DataError::EmptyAggregation {
                field: NumericField::CaloriesBurned
            })
        ));
    }

    #[test]
    fn filter_has_no_false_positives_or_negatives() {
        let ds = mixed();
        for g in Gender::ALL {
            for i in Intensity::ALL {
                let q = Query::new(g, i);
                let result = filter(&ds, &q);
                assert!(result.records().all(|r| r.gender == g && r.intensity == i));

                let expected: Vec<usize> = ds
                    .records()
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| r.gender == g && r.intensity == i)
                    .map(|(idx, _)| idx)
                    .collect();
                assert_eq!(result.indices(), expected.as_slice());
            }
        }
    }

    #[test]
    fn filter_preserves_order_and_is_idempotent() {
        let ds = mixed();
        let q = Query::new(Gender::Female, Intensity::High);
        let a = filter(&ds, &q);
        let b = filter(&ds, &q);
        assert_eq!(a.indices(), b.indices());
        assert!(a.indices().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn mean_of_single_row_is_that_value() {
        let ds = Dataset::from_records(vec![rec(
            Gender::Male,
            Intensity::Medium,
            "Swimming",
            33.3,
            271.9,
        )]);
        let result = filter(&ds, &Query::new(Gender::Male, Intensity::Medium));
        assert_eq!(mean_of(&result, NumericField::CaloriesBurned).unwrap(), 271.9);
        assert_eq!(mean_of(&result, NumericField::DurationMinutes).unwrap(), 33.3);
    }

    #[test]
    fn parse_rejects_values_outside_the_enumerations() {
        assert_eq!(
            Query::parse("Female", "Medium").unwrap(),
            Query::new(Gender::Female, Intensity::Medium)
        );
        assert!(matches!(Query::parse("F", "Low"), Err(DataError::InvalidQuery(_))));
        assert!(matches!(Query::parse("Male", "Extreme"), Err(DataError::InvalidQuery(_))));
    }
}

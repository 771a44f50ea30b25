use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use super::error::DataError;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Normalised gender label. Raw `F`/`M` codes are mapped in `normalize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Radio-button order in the explore page.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Female" => Ok(Gender::Female),
            "Male" => Ok(Gender::Male),
            other => Err(DataError::InvalidQuery(format!(
                "gender must be Male or Female, got {other:?}"
            ))),
        }
    }
}

/// Exercise intensity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    pub fn label(self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Intensity {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Intensity::Low),
            "Medium" => Ok(Intensity::Medium),
            "High" => Ok(Intensity::High),
            other => Err(DataError::InvalidQuery(format!(
                "intensity must be Low, Medium or High, got {other:?}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric columns
// ---------------------------------------------------------------------------

/// The numeric columns a mean or a chart axis can be taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    DurationMinutes,
    CaloriesBurned,
}

impl NumericField {
    /// Column name in the source file.
    pub fn column(self) -> &'static str {
        match self {
            NumericField::DurationMinutes => "duration_minutes",
            NumericField::CaloriesBurned => "calories_burned",
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            NumericField::DurationMinutes => "Duration (Minutes)",
            NumericField::CaloriesBurned => "Calories Burned",
        }
    }

    pub fn value_of(self, record: &Record) -> f64 {
        match self {
            NumericField::DurationMinutes => record.duration_minutes,
            NumericField::CaloriesBurned => record.calories_burned,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub gender: Gender,
    pub intensity: Intensity,
    pub activity_type: String,
    pub duration_minutes: f64,
    pub calories_burned: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All records in file order. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    /// Sorted distinct activity types, used for stable chart colours.
    activity_types: BTreeSet<String>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        let activity_types = records.iter().map(|r| r.activity_type.clone()).collect();
        Dataset {
            records,
            activity_types,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn activity_types(&self) -> &BTreeSet<String> {
        &self.activity_types
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_labels_parse_exactly() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("High".parse::<Intensity>().unwrap(), Intensity::High);

        // Raw codes and other casings are not query values.
        assert!(matches!("F".parse::<Gender>(), Err(DataError::InvalidQuery(_))));
        assert!(matches!("male".parse::<Gender>(), Err(DataError::InvalidQuery(_))));
        assert!(matches!("low".parse::<Intensity>(), Err(DataError::InvalidQuery(_))));
    }

    #[test]
    fn labels_round_trip_through_display() {
        for g in Gender::ALL {
            assert_eq!(g.to_string().parse::<Gender>().unwrap(), g);
        }
        for i in Intensity::ALL {
            assert_eq!(i.to_string().parse::<Intensity>().unwrap(), i);
        }
    }

    #[test]
    fn dataset_collects_sorted_activity_types() {
        let rec = |activity: &str| Record {
            gender: Gender::Male,
            intensity: Intensity::Low,
            activity_type: activity.to_string(),
            duration_minutes: 10.0,
            calories_burned: 50.0,
        };
        let ds = Dataset::from_records(vec![rec("Swimming"), rec("Cycling"), rec("Swimming")]);
        assert_eq!(ds.len(), 3);
        let types: Vec<&str> = ds.activity_types().iter().map(String::as_str).collect();
        assert_eq!(types, vec!["Cycling", "Swimming"]);
    }
}

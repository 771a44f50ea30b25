use log::warn;

use super::error::DataError;
use super::model::{Gender, Intensity, Record};

/// What to do with a gender code that is neither `F`/`M` nor an already
/// normalised label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownGender {
    /// Fail the whole load with [`DataError::Normalization`].
    #[default]
    Reject,
    /// Drop the row and keep going.
    Skip,
}

/// A validated row whose gender column still holds the raw code.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub gender: String,
    pub intensity: Intensity,
    pub activity_type: String,
    pub duration_minutes: f64,
    pub calories_burned: f64,
}

/// Map a raw gender code to its label. `None` for anything unrecognised.
pub fn normalize_gender(code: &str) -> Option<Gender> {
    match code.trim() {
        "F" | "Female" => Some(Gender::Female),
        "M" | "Male" => Some(Gender::Male),
        _ => None,
    }
}

/// Apply gender normalisation to every row, in order.
pub fn normalize_records(
    raw: Vec<RawRecord>,
    policy: UnknownGender,
) -> Result<Vec<Record>, DataError> {
    let mut records = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;

    for (row, r) in raw.into_iter().enumerate() {
        let gender = match normalize_gender(&r.gender) {
            Some(g) => g,
            None => match policy {
                UnknownGender::Reject => {
                    return Err(DataError::Normalization { row, code: r.gender });
                }
                UnknownGender::Skip => {
                    skipped += 1;
                    continue;
                }
            },
        };
        records.push(Record {
            gender,
            intensity: r.intensity,
            activity_type: r.activity_type,
            duration_minutes: r.duration_minutes,
            calories_burned: r.calories_burned,
        });
    }

    if skipped > 0 {
        warn!("Skipped {skipped} rows with unrecognised gender codes");
    }
    Ok(records)
}

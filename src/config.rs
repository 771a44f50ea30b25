use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::Parser;

use crate::data::chart::DEFAULT_BINS;
use crate::data::error::DataError;
use crate::data::normalize::UnknownGender;
use crate::data::query::Query;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Dataset to explore (.csv, .json or .parquet)
    #[arg(long, env = "FITNESS_DATA", default_value = "health_fitness_dataset.csv")]
    pub data: PathBuf,

    /// Number of bins in the calories histogram
    #[arg(long, default_value_t = DEFAULT_BINS, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub bins: usize,

    /// Gender selected when the explore page opens (Male or Female)
    #[arg(long, default_value = "Male")]
    pub gender: String,

    /// Intensity selected when the explore page opens (Low, Medium or High)
    #[arg(long, default_value = "Low")]
    pub intensity: String,

    /// Drop rows whose gender code is not F or M instead of refusing to start
    #[arg(long)]
    pub skip_unknown_gender: bool,
}

impl Config {
    pub fn initial_query(&self) -> Result<Query, DataError> {
        Query::parse(&self.gender, &self.intensity)
    }

    pub fn unknown_gender(&self) -> UnknownGender {
        if self.skip_unknown_gender {
            UnknownGender::Skip
        } else {
            UnknownGender::Reject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Gender, Intensity};

    #[test]
    fn defaults() {
        let cfg = Config::try_parse_from(["fitness-explorer"]).unwrap();
        assert_eq!(cfg.bins, DEFAULT_BINS);
        assert_eq!(cfg.unknown_gender(), UnknownGender::Reject);
        assert_eq!(cfg.initial_query().unwrap(), Query::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = Config::try_parse_from([
            "fitness-explorer",
            "--data",
            "other.parquet",
            "--bins",
            "8",
            "--skip-unknown-gender",
            "--gender",
            "Female",
            "--intensity",
            "High",
        ])
        .unwrap();
        assert_eq!(cfg.data, PathBuf::from("other.parquet"));
        assert_eq!(cfg.bins, 8);
        assert_eq!(cfg.unknown_gender(), UnknownGender::Skip);
        assert_eq!(
            cfg.initial_query().unwrap(),
            Query::new(Gender::Female, Intensity::High)
        );
    }

    #[test]
    fn selection_outside_the_enumerations_is_invalid() {
        let cfg = Config::try_parse_from(["fitness-explorer", "--gender", "F"]).unwrap();
        assert!(matches!(cfg.initial_query(), Err(DataError::InvalidQuery(_))));
    }

    #[test]
    fn zero_bins_rejected() {
        assert!(Config::try_parse_from(["fitness-explorer", "--bins", "0"]).is_err());
    }
}

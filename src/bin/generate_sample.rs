use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use log::info;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Write a synthetic health & fitness dataset for trying out the explorer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output file; `.parquet` writes Parquet, anything else CSV
    #[arg(long, default_value = "health_fitness_dataset.csv")]
    output: PathBuf,

    #[arg(long, default_value_t = 2000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Activity name and calories per minute at medium intensity.
const ACTIVITIES: [(&str, f64); 8] = [
    ("Running", 11.0),
    ("Cycling", 8.5),
    ("Swimming", 9.5),
    ("Walking", 4.5),
    ("Yoga", 3.5),
    ("HIIT", 12.5),
    ("Weight Training", 6.5),
    ("Dancing", 7.0),
];

const INTENSITIES: [(&str, f64); 3] = [("Low", 0.75), ("Medium", 1.0), ("High", 1.3)];

#[derive(Debug, Serialize)]
struct Row {
    participant_id: i64,
    age: i64,
    gender: &'static str,
    intensity: &'static str,
    activity_type: &'static str,
    duration_minutes: f64,
    calories_burned: f64,
}

fn generate(rows: usize, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..rows)
        .map(|i| {
            let (gender, gender_factor) = if rng.random_bool(0.5) {
                ("F", 0.9)
            } else {
                ("M", 1.1)
            };
            let (activity_type, per_minute) = ACTIVITIES[rng.random_range(0..ACTIVITIES.len())];
            let (intensity, intensity_factor) = INTENSITIES[rng.random_range(0..INTENSITIES.len())];
            let duration_minutes = rng.random_range(10..=120) as f64;
            let noise = rng.random_range(0.85..1.15);
            let calories = duration_minutes * per_minute * intensity_factor * gender_factor * noise;

            Row {
                participant_id: (i / 4) as i64 + 1,
                age: rng.random_range(18..=65),
                gender,
                intensity,
                activity_type,
                duration_minutes,
                calories_burned: (calories * 10.0).round() / 10.0,
            }
        })
        .collect()
}

fn write_csv(path: &Path, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &Path, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("participant_id", DataType::Int64, false),
        Field::new("age", DataType::Int64, false),
        Field::new("gender", DataType::Utf8, false),
        Field::new("intensity", DataType::Utf8, false),
        Field::new("activity_type", DataType::Utf8, false),
        Field::new("duration_minutes", DataType::Float64, false),
        Field::new("calories_burned", DataType::Float64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.participant_id))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.age))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.gender))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.intensity))),
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.activity_type))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.duration_minutes))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.calories_burned))),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing record batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rows = generate(args.rows, args.seed);
    let is_parquet = args
        .output
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("parquet"));

    if is_parquet {
        write_parquet(&args.output, &rows)?;
    } else {
        write_csv(&args.output, &rows)?;
    }

    info!("Wrote {} records to {}", rows.len(), args.output.display());
    println!("Wrote {} records to {}", rows.len(), args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_rows() {
        let a = generate(50, 7);
        let b = generate(50, 7);
        let key = |r: &Row| (r.gender, r.intensity, r.activity_type, r.calories_burned.to_bits());
        assert!(a.iter().map(key).eq(b.iter().map(key)));
    }

    #[test]
    fn rows_use_raw_codes_and_non_negative_values() {
        for r in generate(500, 1) {
            assert!(r.gender == "F" || r.gender == "M");
            assert!(INTENSITIES.iter().any(|(name, _)| *name == r.intensity));
            assert!(r.duration_minutes >= 10.0 && r.calories_burned > 0.0);
        }
    }
}

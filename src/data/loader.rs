use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use log::info;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::error::DataError;
use super::model::{Dataset, Intensity};
use super::normalize::{normalize_records, RawRecord, UnknownGender};

/// Columns every input file must provide. Anything else is ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "gender",
    "intensity",
    "activity_type",
    "duration_minutes",
    "calories_burned",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load and normalise a fitness dataset.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming at least [`REQUIRED_COLUMNS`]
/// * `.json`    – `[{ "gender": "F", "intensity": "Low", ... }, ...]`
/// * `.parquet` – Utf8 categorical columns, integer or float numeric columns
///
/// The file is opened, parsed and closed before this returns.
pub fn load_file(path: &Path, unknown_gender: UnknownGender) -> Result<Dataset, DataError> {
    let raw = read_raw(path).map_err(|e| DataError::load(path, e))?;
    let records = normalize_records(raw, unknown_gender)?;
    let dataset = Dataset::from_records(records);
    info!(
        "Loaded {} records ({} activity types) from {}",
        dataset.len(),
        dataset.activity_types().len(),
        path.display()
    );
    Ok(dataset)
}

fn read_raw(path: &Path) -> Result<Vec<RawRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Row validation shared by the CSV and JSON loaders
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    gender: String,
    intensity: String,
    activity_type: String,
    duration_minutes: f64,
    calories_burned: f64,
}

impl RawRow {
    fn validate(self) -> Result<RawRecord> {
        let intensity = self
            .intensity
            .trim()
            .parse::<Intensity>()
            .map_err(|_| anyhow!("unknown intensity {:?}", self.intensity))?;
        Ok(RawRecord {
            gender: self.gender,
            intensity,
            activity_type: self.activity_type,
            duration_minutes: finite("duration_minutes", self.duration_minutes)?,
            calories_burned: finite("calories_burned", self.calories_burned)?,
        })
    }
}

/// NaN or infinity would poison every mean taken over the column.
fn finite(column: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        bail!("{column} must be a finite number, got {value}")
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(row.validate().with_context(|| format!("CSV row {row_no}"))?);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` shape.
fn load_json(path: &Path) -> Result<Vec<RawRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRow> = serde_json::from_str(&text).context("parsing JSON records")?;

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| row.validate().with_context(|| format!("JSON row {i}")))
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

fn load_parquet(path: &Path) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let mut cols = Vec::with_capacity(REQUIRED_COLUMNS.len());
        for name in REQUIRED_COLUMNS {
            let idx = schema
                .index_of(name)
                .map_err(|_| anyhow!("Parquet file missing '{name}' column"))?;
            cols.push(batch.column(idx));
        }
        for row in 0..batch.num_rows() {
            let n = rows.len();
            rows.push(parquet_row(&cols, row).with_context(|| format!("Parquet row {n}"))?);
        }
    }

    Ok(rows)
}

// -- Arrow helpers --

/// `cols` are the batch columns in [`REQUIRED_COLUMNS`] order.
fn parquet_row(cols: &[&ArrayRef], row: usize) -> Result<RawRecord> {
    let [gender, intensity, activity, duration, calories] = cols else {
        bail!("expected {} columns, got {}", REQUIRED_COLUMNS.len(), cols.len());
    };
    RawRow {
        gender: string_at(gender, row).context("gender")?,
        intensity: string_at(intensity, row).context("intensity")?,
        activity_type: string_at(activity, row).context("activity_type")?,
        duration_minutes: number_at(duration, row).context("duration_minutes")?,
        calories_burned: number_at(calories, row).context("calories_burned")?,
    }
    .validate()
}

fn string_at(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn number_at(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    let value = match col.data_type() {
        DataType::Int32 => col.as_primitive::<Int32Type>().value(row) as f64,
        DataType::Int64 => col.as_primitive::<Int64Type>().value(row) as f64,
        DataType::Float32 => col.as_primitive::<Float32Type>().value(row) as f64,
        DataType::Float64 => col.as_primitive::<Float64Type>().value(row),
        other => bail!("Expected numeric column, got {other:?}"),
    };
    Ok(value)
}

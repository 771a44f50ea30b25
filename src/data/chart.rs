//! Turns a [`QueryResult`] into the shapes the plot widgets draw.

use std::collections::BTreeMap;

use super::query::QueryResult;

/// Bin count used for the calories histogram.
pub const DEFAULT_BINS: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

impl HistogramBin {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Equal-width histogram over `[min, max]`.
///
/// The maximum lands in the last bin. All-equal input gives one unit-wide
/// bin centred on the value; empty input gives no bins.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }
    let bins = bins.max(1);

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range <= 0.0 {
        return vec![HistogramBin {
            start: min - 0.5,
            end: min + 0.5,
            count: values.len(),
        }];
    }

    let width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + i as f64 * width,
            end: if i + 1 == bins {
                max
            } else {
                min + (i + 1) as f64 * width
            },
            count,
        })
        .collect()
}

/// `(duration_minutes, calories_burned)` points grouped by activity type.
pub fn scatter_series(result: &QueryResult<'_>) -> BTreeMap<String, Vec<[f64; 2]>> {
    let mut series: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for r in result.records() {
        series
            .entry(r.activity_type.clone())
            .or_default()
            .push([r.duration_minutes, r.calories_burned]);
    }
    series
}

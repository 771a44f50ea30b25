/// Data layer: core types, loading, querying and chart preparation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐   ┌───────────┐
///   │  loader   │──▶│ normalize │  F/M → Female/Male
///   └──────────┘   └───────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │  LazyDataset  │  loads once, hands out Arc<Dataset>
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  query    │  (gender, intensity) → QueryResult, mean_of
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  chart    │  histogram bins, scatter series
///   └──────────┘
/// ```

pub mod chart;
pub mod error;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod query;
pub mod source;

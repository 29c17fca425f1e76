/// Data layer: core types, loading, aggregation, and export.
///
/// Architecture:
/// ```text
///  mortality_rates.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, drop invalid → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Observation>, unique-value index
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  equality filters + group key → mean per key
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  aggregated series → delimited file
///   └──────────┘
/// ```

pub mod aggregate;
pub mod export;
pub mod loader;
pub mod model;

/// Data layer: core types, loading, salary normalisation and aggregation.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → JobDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  salary   │  drop unsalaried rows, fill bounds → SalarySet
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  describe, group means, rankings, histogram, box
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
pub mod salary;

/// Data layer: core types, loading, classification, coercion, filtering.
///
/// Architecture:
/// ```text
///  .csv bytes
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + infer column types → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  typed columns, immutable after load
///   └──────────┘
///        │
///        ├──────────────► summary   (row / column / type counts)
///        │
///        ▼
///   ┌──────────────────┐
///   │ classify / coerce │  pick the input modality, type the raw filter text
///   └──────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  exact-match predicate → View (row indices)
///   └──────────┘
/// ```

pub mod classify;
pub mod coerce;
pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;

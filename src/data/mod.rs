/// Data layer: product records, loading, filtering and report rendering.
///
/// Architecture:
/// ```text
///  .json / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  read file once → Vec<ProductRecord> + LoadStatus
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  keyword stage → attribute stage → FilterOutcome
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  report  │  FilterOutcome → Markdown text
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod report;

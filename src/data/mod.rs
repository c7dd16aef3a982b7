//! Data layer: core types, loading, and standardization.
//!
//! Architecture:
//! ```text
//!  .csv
//!    │
//!    ▼
//!  ┌──────────┐
//!  │  loader   │  parse file → TimeSeriesTable
//!  └──────────┘
//!    │
//!    ▼
//!  ┌─────────────────┐
//!  │ TimeSeriesTable  │  time axis + subject columns
//!  └─────────────────┘
//!    │
//!    ▼
//!  ┌──────────┐
//!  │  zscore   │  per-subject standardization → ZscoreMatrix
//!  └──────────┘
//! ```

pub mod loader;
pub mod model;
pub mod zscore;

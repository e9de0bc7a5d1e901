//! Two-phase screening: a cheap price-history pass over the whole universe, then a
//! rate-limited fundamentals pass over the top-K survivors only.

pub mod fundamentals;
pub mod outcome;
pub mod performance;
pub mod pipeline;
pub mod scoring;
pub mod universe;

#[cfg(test)]
pub(crate) mod fake;

pub use fundamentals::{enrich_fundamentals, EnrichParams, Enrichment};
pub use outcome::{FilterReason, SymbolOutcome, SymbolStatus};
pub use performance::{scan_performance, PerformanceScan, ScanParams};
pub use pipeline::{run_screen, ScreenReport};
pub use universe::{build_universe, Universe, UniverseEntry};

//! Post-processing of per-frame object detections for traffic monitoring.
//!
//! Raw detector output is mapped onto a closed six-class taxonomy, kept in an
//! append-only history per viewing session, and bucketed into fixed-width
//! time windows for charting and CSV/JSON export.

pub mod aggregation;
pub mod detection;
pub mod export;
pub mod session;
pub mod taxonomy;
pub mod utils;

use crate::utils::log_entry::aggregation::AggregationEntry;
use serde_json::error::Error as SerdeJsonError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportEntry {
    #[error("Unable to aggregate series: {0}")]
    Aggregation(#[from] AggregationEntry),
    #[error("Failed to serialize series: {0}")]
    SerializeError(#[from] SerdeJsonError),
}

impl From<ExportEntry> for String {
    #[inline(always)]
    fn from(value: ExportEntry) -> Self {
        value.to_string()
    }
}

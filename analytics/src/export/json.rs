use crate::aggregation::aggregated_bucket::AggregatedBucket;
use crate::aggregation::summary::SeriesSummary;
use common::utils::log_entry::export::ExportEntry;
use serde::{Deserialize, Serialize};

/// Machine-readable form of an exported series.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeriesExport {
    pub location_id: String,
    pub bucket_width: f64, //seconds
    pub total_detections: usize,
    pub summary: SeriesSummary,
    pub time_series: Vec<AggregatedBucket>,
}

impl SeriesExport {
    pub fn new(location_id: String, summary: SeriesSummary, time_series: Vec<AggregatedBucket>) -> Self {
        Self {
            location_id,
            bucket_width: summary.bucket_width,
            total_detections: summary.recorded_detections,
            summary,
            time_series,
        }
    }
}

pub fn render_json(export: &SeriesExport) -> Result<String, ExportEntry> {
    Ok(serde_json::to_string_pretty(export)?)
}

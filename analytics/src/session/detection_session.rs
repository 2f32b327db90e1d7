use crate::aggregation::aggregated_bucket::AggregatedBucket;
use crate::aggregation::aggregator;
use crate::aggregation::summary::SeriesSummary;
use crate::aggregation::traffic_count::TrafficCount;
use crate::detection::detection::Detection;
use crate::detection::raw_prediction::RawPrediction;
use crate::export::csv::render_csv;
use crate::export::json::{render_json, SeriesExport};
use crate::session::detection_history::DetectionHistory;
use crate::session::session_information::SessionInformation;
use crate::taxonomy::class_lookup::ClassLookup;
use crate::utils::logging::*;
use chrono::{DateTime, Local};
use std::sync::Arc;
use uuid::Uuid;

/// Detection engine of one viewing session (one selected video or location).
///
/// Owns the history exclusively. Hosts calling from several threads wrap the
/// session in a lock; every operation here runs to completion without I/O.
#[derive(Debug, Clone)]
pub struct DetectionSession {
    uuid: Uuid,
    location_id: String,
    created_at: DateTime<Local>,
    lookup: Arc<ClassLookup>,
    history: DetectionHistory,
}

impl DetectionSession {
    pub fn new<T: Into<String>>(location_id: T) -> Self {
        Self::with_lookup(location_id, Arc::new(ClassLookup::default()))
    }

    pub fn with_lookup<T: Into<String>>(location_id: T, lookup: Arc<ClassLookup>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            location_id: location_id.into(),
            created_at: Local::now(),
            lookup,
            history: DetectionHistory::new(),
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn history(&self) -> &DetectionHistory {
        &self.history
    }

    /// Classifies one frame of detector output, appends it to the history and
    /// returns the new detections in input order. Every detection of the frame
    /// carries `timestamp`.
    pub fn record_frame(&mut self, predictions: &[RawPrediction], timestamp: f64) -> Vec<Detection> {
        let detections: Vec<Detection> = predictions
            .iter()
            .map(|prediction| Detection::new(prediction.bbox, self.lookup.classify(&prediction.label), prediction.confidence, timestamp))
            .collect();
        self.history.append(detections.iter().cloned());
        detections
    }

    pub fn clear_history(&mut self) {
        let dropped = self.history.clear();
        logging_information!(SessionEntry::HistoryCleared(self.location_id.clone(), self.uuid, dropped));
    }

    pub fn snapshot_count(detections: &[Detection]) -> TrafficCount {
        aggregator::snapshot_count(detections)
    }

    pub fn aggregate(&self, start_time: f64, end_time: f64, bucket_width: f64) -> Result<Vec<AggregatedBucket>, AggregationEntry> {
        aggregator::aggregate(self.history.as_slice(), start_time, end_time, bucket_width)
            .inspect_err(|err| logging_warning!(*err, format!("Session {}, range {start_time}..{end_time}", self.uuid)))
    }

    /// The exported series: `0` up to the largest recorded timestamp.
    pub fn series(&self, bucket_width: f64) -> Result<Vec<AggregatedBucket>, AggregationEntry> {
        self.aggregate(0.0, self.history.max_timestamp(), bucket_width)
    }

    pub fn export_series(&self, bucket_width: f64) -> Result<String, AggregationEntry> {
        Ok(render_csv(&self.series(bucket_width)?))
    }

    pub fn summary(&self, bucket_width: f64) -> Result<SeriesSummary, AggregationEntry> {
        let buckets = self.series(bucket_width)?;
        Ok(SeriesSummary::new(self.history.as_slice(), &buckets, bucket_width))
    }

    pub fn export_series_json(&self, bucket_width: f64) -> Result<String, ExportEntry> {
        let buckets = self.series(bucket_width)?;
        let summary = SeriesSummary::new(self.history.as_slice(), &buckets, bucket_width);
        render_json(&SeriesExport::new(self.location_id.clone(), summary, buckets))
    }

    pub fn information(&self) -> SessionInformation {
        SessionInformation {
            uuid: self.uuid,
            location_id: self.location_id.clone(),
            created_at: self.created_at,
            recorded_detections: self.history.len(),
            max_timestamp: self.history.max_timestamp(),
        }
    }
}

use crate::aggregation::aggregated_bucket::AggregatedBucket;
use crate::aggregation::traffic_count::TrafficCount;
use crate::detection::detection::Detection;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub recorded_detections: usize,
    pub unrecognized_detections: usize,
    pub counts: TrafficCount,
    pub counted_detections: usize,
    pub bucket_width: f64, //seconds
    pub bucket_count: usize,
    pub peak_bucket_start: Option<f64>,
    pub peak_bucket_total: usize,
    pub detections_per_minute: f64,
}

impl SeriesSummary {
    /// Summarizes a series produced from `history`. Per-class totals come from
    /// the buckets, so detections outside the series range are not counted.
    pub fn new(history: &[Detection], buckets: &[AggregatedBucket], bucket_width: f64) -> Self {
        let mut counts = TrafficCount::new();
        let mut peak: Option<&AggregatedBucket> = None;
        for bucket in buckets {
            counts.merge(&bucket.counts);
            // Earliest bucket wins a tie.
            if bucket.total() > peak.map_or(0, |peak| peak.total()) {
                peak = Some(bucket);
            }
        }
        let counted_detections = counts.total();
        let covered_minutes = buckets.len() as f64 * bucket_width / 60.0;
        let detections_per_minute = if covered_minutes > 0.0 {
            counted_detections as f64 / covered_minutes
        } else {
            0.0
        };
        Self {
            recorded_detections: history.len(),
            unrecognized_detections: history.iter().filter(|detection| !detection.actor_class.is_canonical()).count(),
            counts,
            counted_detections,
            bucket_width,
            bucket_count: buckets.len(),
            peak_bucket_start: peak.map(|peak| peak.bucket_start),
            peak_bucket_total: peak.map_or(0, |peak| peak.total()),
            detections_per_minute,
        }
    }
}

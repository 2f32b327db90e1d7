use crate::aggregation::traffic_count::TrafficCount;
use serde::{Deserialize, Serialize};

/// Counts of one bucket. `bucket_start` is seconds elapsed since the start of
/// the aggregated range, so the first bucket always starts at `0`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct AggregatedBucket {
    pub bucket_start: f64,
    #[serde(flatten)]
    pub counts: TrafficCount,
}

impl AggregatedBucket {
    pub fn new(bucket_start: f64, counts: TrafficCount) -> Self {
        Self {
            bucket_start,
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.total()
    }
}

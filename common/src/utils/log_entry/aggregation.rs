use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq)]
pub enum AggregationEntry {
    #[error("Bucket width must be a finite number of seconds greater than zero, got {0}")]
    InvalidBucketWidth(f64),
    #[error("Time range {0}..{1} is not finite")]
    InvalidTimeRange(f64, f64),
    #[error("Range {0}..{1} holds more buckets of {2} seconds than can be counted")]
    BucketCountOverflow(f64, f64, f64),
}

impl From<AggregationEntry> for String {
    #[inline(always)]
    fn from(value: AggregationEntry) -> Self {
        value.to_string()
    }
}

use crate::aggregation::aggregated_bucket::AggregatedBucket;
use crate::aggregation::traffic_count::TrafficCount;
use crate::detection::detection::Detection;
use common::utils::log_entry::aggregation::AggregationEntry;

/// Counts `detections` per canonical class, ignoring unrecognized classes.
pub fn snapshot_count(detections: &[Detection]) -> TrafficCount {
    TrafficCount::from_detections(detections)
}

pub fn validate_bucket_width(bucket_width: f64) -> Result<(), AggregationEntry> {
    if bucket_width.is_finite() && bucket_width > 0.0 {
        Ok(())
    } else {
        Err(AggregationEntry::InvalidBucketWidth(bucket_width))
    }
}

/// Number of buckets `aggregate` emits for the range: the count of steps
/// `start_time + i * bucket_width` that are still below `end_time`.
pub fn bucket_count(start_time: f64, end_time: f64, bucket_width: f64) -> Result<usize, AggregationEntry> {
    validate_bucket_width(bucket_width)?;
    if !start_time.is_finite() || !end_time.is_finite() {
        return Err(AggregationEntry::InvalidTimeRange(start_time, end_time));
    }
    let span = end_time - start_time;
    if span <= 0.0 {
        return Ok(0_usize);
    }
    let estimate = (span / bucket_width).ceil();
    if !estimate.is_finite() || estimate >= usize::MAX as f64 {
        return Err(AggregationEntry::BucketCountOverflow(start_time, end_time, bucket_width));
    }
    // The estimate can be off by one where the division rounds.
    let mut count = estimate as usize;
    while count > 0 && bucket_edge(start_time, bucket_width, count - 1) >= end_time {
        count -= 1;
    }
    while bucket_edge(start_time, bucket_width, count) < end_time {
        count += 1;
    }
    Ok(count)
}

/// Partitions `history` into consecutive `[start + i * width, start + (i + 1) * width)`
/// buckets covering `start_time..end_time`.
///
/// The last bucket is emitted whole even when it extends past `end_time`. An
/// empty or inverted range yields no buckets. Detections are matched by
/// timestamp value, independent of insertion order.
pub fn aggregate(history: &[Detection], start_time: f64, end_time: f64, bucket_width: f64) -> Result<Vec<AggregatedBucket>, AggregationEntry> {
    let bucket_count = bucket_count(start_time, end_time, bucket_width)?;
    if bucket_count == 0 {
        return Ok(Vec::new());
    }
    let index = TimestampIndex::new(history);
    let buckets = (0..bucket_count)
        .map(|bucket| {
            let lower = bucket_edge(start_time, bucket_width, bucket);
            let upper = bucket_edge(start_time, bucket_width, bucket + 1);
            let counts = TrafficCount::from_detections(index.range(lower, upper));
            AggregatedBucket::new(bucket as f64 * bucket_width, counts)
        })
        .collect();
    Ok(buckets)
}

#[inline(always)]
fn bucket_edge(start_time: f64, bucket_width: f64, bucket: usize) -> f64 {
    start_time + bucket as f64 * bucket_width
}

/// History entries ordered by timestamp. NaN timestamps never fall in a bucket
/// and are left out.
struct TimestampIndex<'a> {
    entries: Vec<(f64, &'a Detection)>,
}

impl<'a> TimestampIndex<'a> {
    fn new(history: &'a [Detection]) -> Self {
        let mut entries: Vec<(f64, &Detection)> = history
            .iter()
            .filter(|detection| !detection.timestamp.is_nan())
            .map(|detection| (detection.timestamp, detection))
            .collect();
        entries.sort_by(|(left, _), (right, _)| left.total_cmp(right));
        Self {
            entries,
        }
    }

    fn range(&self, lower: f64, upper: f64) -> impl Iterator<Item = &'a Detection> + '_ {
        let from = self.entries.partition_point(|(timestamp, _)| *timestamp < lower);
        let to = self.entries.partition_point(|(timestamp, _)| *timestamp < upper).max(from);
        self.entries[from..to].iter().map(|(_, detection)| *detection)
    }
}

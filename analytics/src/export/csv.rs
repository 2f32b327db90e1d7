use crate::aggregation::aggregated_bucket::AggregatedBucket;
use crate::taxonomy::canonical_class::CanonicalClass;

pub const TIME_COLUMN: &str = "Time";
pub const TOTAL_COLUMN: &str = "Total";

pub fn header_row() -> String {
    let mut columns = Vec::with_capacity(CanonicalClass::ALL.len() + 2);
    columns.push(TIME_COLUMN);
    columns.extend(CanonicalClass::ALL.iter().map(|class| class.column_name()));
    columns.push(TOTAL_COLUMN);
    columns.join(",")
}

pub fn data_row(bucket: &AggregatedBucket) -> String {
    let mut fields = Vec::with_capacity(CanonicalClass::ALL.len() + 2);
    fields.push(format_elapsed(bucket.bucket_start));
    fields.extend(bucket.counts.iter().map(|(_, count)| count.to_string()));
    fields.push(bucket.total().to_string());
    fields.join(",")
}

/// Header followed by one row per bucket, joined by `\n` without a trailing newline.
pub fn render_csv(buckets: &[AggregatedBucket]) -> String {
    let mut rows = Vec::with_capacity(buckets.len() + 1);
    rows.push(header_row());
    rows.extend(buckets.iter().map(data_row));
    rows.join("\n")
}

/// `HH:MM:SS` of whole elapsed seconds. Hours keep counting past 24.
pub fn format_elapsed(seconds: f64) -> String {
    let elapsed = seconds.max(0.0).floor() as u64;
    format!("{:02}:{:02}:{:02}", elapsed / 3600, elapsed % 3600 / 60, elapsed % 60)
}

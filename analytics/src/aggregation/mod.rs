pub mod aggregated_bucket;
pub mod aggregator;
pub mod summary;
pub mod traffic_count;

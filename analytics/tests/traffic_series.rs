use analytics::aggregation::traffic_count::TrafficCount;
use analytics::detection::bounding_box::BoundingBox;
use analytics::detection::raw_prediction::RawPrediction;
use analytics::session::detection_session::DetectionSession;
use analytics::taxonomy::actor_class::ActorClass;
use analytics::taxonomy::canonical_class::CanonicalClass;
use analytics::taxonomy::class_lookup::ClassLookup;

fn car() -> RawPrediction {
    RawPrediction::new("car", 0.9, BoundingBox::new(0.0, 0.0, 1.0, 1.0))
}

fn three_car_frames() -> DetectionSession {
    let mut session = DetectionSession::new("Amsterdam-80th");
    for timestamp in [0.0, 10.0, 20.0] {
        session.record_frame(&[car()], timestamp);
    }
    session
}

fn mixed_session() -> DetectionSession {
    let labels = ["car", "truck", "bus", "motorcycle", "bicycle", "person", "dog", "traffic light"];
    let mut session = DetectionSession::new("Columbus-86th");
    // Frames arrive out of timestamp order, as after a seek in the player.
    for (frame, timestamp) in [3.0, 41.5, 17.25, 0.0, 88.0, 17.25, 60.0, 29.999, 30.0, 99.5].into_iter().enumerate() {
        let predictions: Vec<RawPrediction> = (0..=frame % 4)
            .map(|offset| RawPrediction::new(labels[(frame + offset) % labels.len()], 0.5, BoundingBox::new(1.0, 2.0, 3.0, 4.0)))
            .collect();
        session.record_frame(&predictions, timestamp);
    }
    session
}

#[test]
fn three_frames_of_cars_fill_two_buckets() {
    let session = three_car_frames();
    let buckets = session.aggregate(0.0, 30.0, 15.0).unwrap();
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].bucket_start, 0.0);
    assert_eq!(buckets[0].counts, TrafficCount { cars: 2, ..TrafficCount::new() });
    assert_eq!(buckets[1].bucket_start, 15.0);
    assert_eq!(buckets[1].counts, TrafficCount { cars: 1, ..TrafficCount::new() });
}

#[test]
fn export_of_three_frames() {
    let session = three_car_frames();
    let exported = session.export_series(15.0).unwrap();
    let rows: Vec<&str> = exported.split('\n').collect();
    assert_eq!(rows[0], "Time,Cars,Trucks,Buses,Motorcycles,Bicycles,Pedestrians,Total");
    assert_eq!(rows[1], "00:00:00,2,0,0,0,0,0,2");
    assert_eq!(rows[2], "00:00:15,1,0,0,0,0,0,1");
    assert_eq!(rows.len(), 3);
}

#[test]
fn export_of_empty_history_is_header_only() {
    let session = DetectionSession::new("Amsterdam-80th");
    assert_eq!(session.export_series(15.0).unwrap(), "Time,Cars,Trucks,Buses,Motorcycles,Bicycles,Pedestrians,Total");
}

#[test]
fn export_rejects_invalid_width() {
    let session = three_car_frames();
    assert!(session.export_series(0.0).is_err());
    assert!(session.export_series(-15.0).is_err());
}

#[test]
fn aggregation_is_idempotent() {
    let session = mixed_session();
    let first = session.aggregate(0.0, 100.0, 7.5).unwrap();
    let second = session.aggregate(0.0, 100.0, 7.5).unwrap();
    assert_eq!(first, second);
    let bits = |buckets: &[analytics::aggregation::aggregated_bucket::AggregatedBucket]| {
        buckets.iter().map(|bucket| bucket.bucket_start.to_bits()).collect::<Vec<u64>>()
    };
    assert_eq!(bits(&first), bits(&second));
    assert_eq!(session.export_series(7.5).unwrap(), session.export_series(7.5).unwrap());
}

#[test]
fn bucket_count_follows_ceiling() {
    let session = mixed_session();
    let buckets = session.aggregate(0.0, 47.0, 15.0).unwrap();
    let starts: Vec<f64> = buckets.iter().map(|bucket| bucket.bucket_start).collect();
    assert_eq!(starts, vec![0.0, 15.0, 30.0, 45.0]);
}

#[test]
fn counts_are_conserved_across_buckets() {
    let session = mixed_session();
    for (end_time, bucket_width) in [(100.0, 15.0), (47.0, 15.0), (30.0, 10.0), (99.5, 0.5), (5.0, 100.0)] {
        let buckets = session.aggregate(0.0, end_time, bucket_width).unwrap();
        let covered_end = buckets.len() as f64 * bucket_width;
        let expected = session
            .history()
            .as_slice()
            .iter()
            .filter(|detection| detection.actor_class.is_canonical())
            .filter(|detection| detection.timestamp >= 0.0 && detection.timestamp < covered_end)
            .count();
        let counted: usize = buckets.iter().map(|bucket| bucket.total()).sum();
        assert_eq!(counted, expected, "end {end_time}, width {bucket_width}");
    }
}

#[test]
fn classification_is_deterministic() {
    let mut session = DetectionSession::new("Amsterdam-80th");
    for timestamp in 0..5 {
        let detections = session.record_frame(
            &[
                RawPrediction::new("car", 0.9, BoundingBox::default()),
                RawPrediction::new("dog", 0.4, BoundingBox::default()),
            ],
            timestamp as f64,
        );
        assert_eq!(detections[0].actor_class.as_str(), "cars");
        assert_eq!(detections[1].actor_class.as_str(), "dog");
    }
    assert_eq!(ClassLookup::default().classify("car"), ActorClass::Canonical(CanonicalClass::Cars));
}

#[test]
fn clear_leaves_all_zero_buckets() {
    let mut session = mixed_session();
    assert!(!session.history().is_empty());
    session.clear_history();
    let buckets = session.aggregate(0.0, 100.0, 15.0).unwrap();
    assert_eq!(buckets.len(), 7);
    assert!(buckets.iter().all(|bucket| bucket.counts == TrafficCount::new()));
}

#[test]
fn recording_after_clear_starts_a_new_series() {
    let mut session = three_car_frames();
    session.clear_history();
    session.record_frame(&[RawPrediction::new("bus", 0.7, BoundingBox::default())], 40.0);
    let buckets = session.series(15.0).unwrap();
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets.iter().map(|bucket| bucket.counts.cars).sum::<usize>(), 0);
    assert_eq!(buckets[2].counts.buses, 1);
}

#[test]
fn summary_matches_export() {
    let session = mixed_session();
    let summary = session.summary(15.0).unwrap();
    let buckets = session.series(15.0).unwrap();
    assert_eq!(summary.bucket_count, buckets.len());
    assert_eq!(summary.counted_detections, buckets.iter().map(|bucket| bucket.total()).sum::<usize>());
    assert_eq!(summary.recorded_detections, session.history().len());
}

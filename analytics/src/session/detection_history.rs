use crate::detection::detection::Detection;

/// Append-only record of every detection since the last clear.
///
/// Entries are never reordered, deduplicated or removed individually.
#[derive(Debug, Clone, Default)]
pub struct DetectionHistory {
    detections: Vec<Detection>,
}

impl DetectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append<I: IntoIterator<Item = Detection>>(&mut self, detections: I) {
        self.detections.extend(detections);
    }

    /// Empties the history and returns how many detections were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.detections.len();
        self.detections.clear();
        dropped
    }

    pub fn as_slice(&self) -> &[Detection] {
        &self.detections
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Largest recorded timestamp, `0` when empty. NaN timestamps are ignored.
    pub fn max_timestamp(&self) -> f64 {
        self.detections
            .iter()
            .map(|detection| detection.timestamp)
            .filter(|timestamp| !timestamp.is_nan())
            .fold(None, |max: Option<f64>, timestamp| Some(max.map_or(timestamp, |max| max.max(timestamp))))
            .unwrap_or(0.0)
    }
}

use crate::detection::bounding_box::BoundingBox;
use serde::{Deserialize, Serialize};

/// One object reported by the detector for a frame, before classification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawPrediction {
    #[serde(alias = "class", alias = "rawLabel")]
    pub label: String,
    #[serde(alias = "score")]
    pub confidence: f64,
    pub bbox: BoundingBox,
}

impl RawPrediction {
    pub fn new<T: Into<String>>(label: T, confidence: f64, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_detector_field_names() {
        let predictions: Vec<RawPrediction> = serde_json::from_str(
            r#"[
                {"class": "car", "score": 0.91, "bbox": [10, 20, 30, 40]},
                {"rawLabel": "bus", "confidence": 0.5, "bbox": [0, 0, 1, 1]},
                {"label": "person", "confidence": 0.75, "bbox": [1.5, 2.5, 3, 4]}
            ]"#,
        )
        .unwrap();
        assert_eq!(predictions[0], RawPrediction::new("car", 0.91, BoundingBox::new(10.0, 20.0, 30.0, 40.0)));
        assert_eq!(predictions[1].label, "bus");
        assert_eq!(predictions[2].bbox, BoundingBox::new(1.5, 2.5, 3.0, 4.0));
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let prediction: RawPrediction = serde_json::from_str(r#"{"label": "car", "confidence": 1.7, "bbox": [-5, -5, -1, 0]}"#).unwrap();
        assert_eq!(prediction.confidence, 1.7);
        assert_eq!(<[f64; 4]>::from(prediction.bbox), [-5.0, -5.0, -1.0, 0.0]);
    }
}

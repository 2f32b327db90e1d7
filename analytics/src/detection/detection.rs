use crate::detection::bounding_box::BoundingBox;
use crate::taxonomy::actor_class::ActorClass;
use serde::{Deserialize, Serialize};

/// A classified, timestamped observation. Never mutated once recorded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Detection {
    pub bounding_box: BoundingBox,
    pub actor_class: ActorClass,
    pub confidence: f64,
    pub timestamp: f64, //seconds
}

impl Detection {
    pub fn new(bounding_box: BoundingBox, actor_class: ActorClass, confidence: f64, timestamp: f64) -> Self {
        Self {
            bounding_box,
            actor_class,
            confidence,
            timestamp,
        }
    }
}

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionInformation {
    pub uuid: Uuid,
    pub location_id: String,
    pub created_at: DateTime<Local>,
    pub recorded_detections: usize,
    pub max_timestamp: f64, //seconds
}

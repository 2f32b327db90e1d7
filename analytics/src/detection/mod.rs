pub mod bounding_box;
pub mod detection;
pub mod raw_prediction;

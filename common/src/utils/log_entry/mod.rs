pub mod aggregation;
pub mod export;
pub mod session;
pub mod system;

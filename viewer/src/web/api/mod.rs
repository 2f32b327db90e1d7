pub mod config;
pub mod default;
pub mod location;
pub mod log;
pub mod session;

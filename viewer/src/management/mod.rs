pub mod session_manager;
pub mod utils;
pub mod viewer;

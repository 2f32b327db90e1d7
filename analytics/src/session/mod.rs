pub mod detection_history;
pub mod detection_session;
pub mod session_information;

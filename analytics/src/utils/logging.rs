pub use crate::{logging_information, logging_warning};
pub use common::utils::log_entry::aggregation::AggregationEntry;
pub use common::utils::log_entry::export::ExportEntry;
pub use common::utils::log_entry::session::SessionEntry;
pub use common::utils::logging::*;

#[macro_export]
macro_rules! logging_information {
    ($message:expr) => {
        logging_console(&LogEntry::new(LogLevel::Information, format!("{}:{}", file!(), line!()), $message, ""))
    };
    ($message:expr, $debug_info:expr) => {
        logging_console(&LogEntry::new(LogLevel::Information, format!("{}:{}", file!(), line!()), $message, $debug_info))
    };
}

#[macro_export]
macro_rules! logging_warning {
    ($message:expr) => {
        logging_console(&LogEntry::new(LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, ""))
    };
    ($message:expr, $debug_info:expr) => {
        logging_console(&LogEntry::new(LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, $debug_info))
    };
}

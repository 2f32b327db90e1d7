pub use crate::{logging_critical, logging_emergency, logging_error, logging_information, logging_warning};
pub use common::utils::log_entry::aggregation::AggregationEntry;
pub use common::utils::log_entry::export::ExportEntry;
pub use common::utils::log_entry::session::SessionEntry;
pub use common::utils::log_entry::system::SystemEntry;
pub use common::utils::logging::*;

use chrono::{DateTime, Local};
use lazy_static::lazy_static;
use std::collections::{HashMap, VecDeque};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Entries retained per log, oldest dropped first.
pub const LOG_CAPACITY: usize = 4096;

lazy_static! {
    static ref LOGGER: RwLock<Logger> = RwLock::new(Logger::new());
}

pub struct Logger {
    system_log: VecDeque<LogEntry>,
    session_log: HashMap<Uuid, VecDeque<LogEntry>>,
}

impl Logger {
    fn new() -> Self {
        let mut system_log = VecDeque::new();
        system_log.push_back(information_entry!("Logger", "Online now"));
        Self {
            system_log,
            session_log: HashMap::new(),
        }
    }

    pub async fn instance() -> RwLockReadGuard<'static, Logger> {
        LOGGER.read().await
    }

    pub async fn instance_mut() -> RwLockWriteGuard<'static, Logger> {
        LOGGER.write().await
    }

    pub async fn add_system_log<T: Into<String>, U: Into<String>, V: Into<String>>(level: LogLevel, position: T, message: U, debug_info: V) {
        let log_entry = LogEntry::new(level, position, message, debug_info);
        logging_console(&log_entry);
        let mut logger = Self::instance_mut().await;
        Self::push_bounded(&mut logger.system_log, log_entry);
    }

    /// Session events go to the system log as well as the session's own log.
    pub async fn add_session_log<T: Into<String>, U: Into<String>, V: Into<String>>(session_id: Uuid, level: LogLevel, position: T, message: U, debug_info: V) {
        let log_entry = LogEntry::new(level, position, message, debug_info);
        logging_console(&log_entry);
        let mut logger = Self::instance_mut().await;
        Self::push_bounded(&mut logger.system_log, log_entry.clone());
        Self::push_bounded(logger.session_log.entry(session_id).or_default(), log_entry);
    }

    pub async fn get_system_logs() -> Vec<LogEntry> {
        Self::instance().await.system_log.iter().cloned().collect()
    }

    pub async fn get_system_logs_since(time: DateTime<Local>) -> Vec<LogEntry> {
        let logger = Self::instance().await;
        logger.system_log.iter().filter(|entry| entry.timestamp > time).cloned().collect()
    }

    pub async fn get_session_logs(session_id: Uuid) -> Option<Vec<LogEntry>> {
        let logger = Self::instance().await;
        logger.session_log.get(&session_id).map(|logs| logs.iter().cloned().collect())
    }

    pub async fn remove_session_log(session_id: Uuid) -> Option<Vec<LogEntry>> {
        let mut logger = Self::instance_mut().await;
        logger.session_log.remove(&session_id).map(Vec::from)
    }

    fn push_bounded(log: &mut VecDeque<LogEntry>, log_entry: LogEntry) {
        if log.len() >= LOG_CAPACITY {
            log.pop_front();
        }
        log.push_back(log_entry);
    }
}

#[macro_export]
macro_rules! logging_information {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Information, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Information, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_session_log($uuid, LogLevel::Information, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_warning {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_session_log($uuid, LogLevel::Warning, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_error {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Error, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Error, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
    ($uuid:expr, $message:expr, $debug_info:expr) => {
        Logger::add_session_log($uuid, LogLevel::Error, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_critical {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Critical, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Critical, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

#[macro_export]
macro_rules! logging_emergency {
    ($message:expr) => {
        Logger::add_system_log(LogLevel::Emergency, format!("{}:{}", file!(), line!()), $message, "").await
    };
    ($message:expr, $debug_info:expr) => {
        Logger::add_system_log(LogLevel::Emergency, format!("{}:{}", file!(), line!()), $message, $debug_info).await
    };
}

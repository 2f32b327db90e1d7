use std::io::Error as IoError;
use thiserror::Error;
use toml::de::Error as TomlDeError;

#[derive(Error, Debug)]
pub enum SystemEntry {
    #[error("Online now")]
    Online,
    #[error("Initializing")]
    Initializing,
    #[error("Initialization completed")]
    InitializeComplete,
    #[error("Termination in process")]
    Terminating,
    #[error("Termination completed")]
    TerminateComplete,
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(IoError),
    #[error("Unable to parse configuration file: {0}")]
    ConfigParseError(TomlDeError),
    #[error("Invalid configuration")]
    InvalidConfig,
    #[error("Configuration updated")]
    ConfigUpdated,
    #[error("Failed to bind port: {0}")]
    BindPortError(IoError),
    #[error("Web service ready")]
    WebReady,
    #[error("Web service panic: {0}")]
    WebPanic(IoError),
}

impl From<SystemEntry> for String {
    #[inline(always)]
    fn from(value: SystemEntry) -> Self {
        value.to_string()
    }
}

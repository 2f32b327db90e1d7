use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionEntry {
    #[error("Session {1} opened for location {0}")]
    SessionCreated(String, Uuid),
    #[error("Session {1} for location {0} was reset")]
    SessionReset(String, Uuid),
    #[error("Session {1} for location {0} was discarded")]
    SessionDiscarded(String, Uuid),
    #[error("History of session {1} cleared, {2} detections dropped")]
    HistoryCleared(String, Uuid, usize),
    #[error("No active session for location {0}")]
    SessionDoesNotExist(String),
    #[error("Location {0} is not configured")]
    LocationDoesNotExist(String),
    #[error("Requested series would contain {0} buckets, limit is {1}")]
    TooManyBuckets(usize, usize),
}

impl From<SessionEntry> for String {
    #[inline(always)]
    fn from(value: SessionEntry) -> Self {
        value.to_string()
    }
}

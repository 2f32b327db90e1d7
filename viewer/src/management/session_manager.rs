use crate::utils::logging::*;
use analytics::session::detection_session::DetectionSession;
use analytics::session::session_information::SessionInformation;
use analytics::taxonomy::class_lookup::ClassLookup;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub type SharedSession = Arc<RwLock<DetectionSession>>;

/// Active detection sessions, at most one per location.
///
/// Each session sits behind its own lock so frames for one location never wait
/// on aggregation of another.
#[derive(Default)]
pub struct SessionManager {
    sessions: HashMap<String, SharedSession>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the session for `location_id`. Selecting a location again keeps its
    /// session and clears the history.
    pub async fn select(&mut self, location_id: &str, lookup: Arc<ClassLookup>) -> SharedSession {
        if let Some(session) = self.sessions.get(location_id) {
            let uuid = {
                let mut session = session.write().await;
                session.clear_history();
                session.uuid()
            };
            logging_information!(uuid, SessionEntry::SessionReset(location_id.to_string(), uuid), "");
            return session.clone();
        }
        let session = DetectionSession::with_lookup(location_id, lookup);
        let uuid = session.uuid();
        let session = Arc::new(RwLock::new(session));
        self.sessions.insert(location_id.to_string(), session.clone());
        logging_information!(uuid, SessionEntry::SessionCreated(location_id.to_string(), uuid), "");
        session
    }

    pub fn get(&self, location_id: &str) -> Option<SharedSession> {
        self.sessions.get(location_id).cloned()
    }

    /// Ends the session for `location_id` and drops its session log.
    pub async fn discard(&mut self, location_id: &str) -> Option<SessionInformation> {
        let session = self.sessions.remove(location_id)?;
        let information = session.read().await.information();
        Logger::remove_session_log(information.uuid).await;
        logging_information!(SessionEntry::SessionDiscarded(location_id.to_string(), information.uuid));
        Some(information)
    }

    pub async fn information(&self, location_id: &str) -> Option<SessionInformation> {
        let session = self.get(location_id)?;
        let information = session.read().await.information();
        Some(information)
    }

    pub async fn list(&self) -> Vec<SessionInformation> {
        let mut sessions = Vec::with_capacity(self.sessions.len());
        for session in self.sessions.values() {
            sessions.push(session.read().await.information());
        }
        sessions.sort_by(|left, right| left.location_id.cmp(&right.location_id));
        sessions
    }
}

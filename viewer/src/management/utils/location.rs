use analytics::session::session_information::SessionInformation;
use serde::{Deserialize, Serialize};

/// A monitored intersection the operator can pick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub video_file: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct LocationStatus {
    #[serde(flatten)]
    pub location: Location,
    pub session: Option<SessionInformation>,
}

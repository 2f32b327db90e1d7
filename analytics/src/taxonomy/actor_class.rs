use crate::taxonomy::canonical_class::CanonicalClass;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Class attached to a recorded detection.
///
/// Labels the lookup does not know are kept verbatim as `Unrecognized`; they are
/// stored in the history but never counted. Serialized as the plain label string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum ActorClass {
    Canonical(CanonicalClass),
    Unrecognized(String),
}

impl ActorClass {
    pub fn canonical(&self) -> Option<CanonicalClass> {
        match self {
            ActorClass::Canonical(class) => Some(*class),
            ActorClass::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActorClass::Canonical(class) => class.as_str(),
            ActorClass::Unrecognized(label) => label,
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, ActorClass::Canonical(_))
    }
}

impl From<CanonicalClass> for ActorClass {
    fn from(value: CanonicalClass) -> Self {
        ActorClass::Canonical(value)
    }
}

impl From<&str> for ActorClass {
    fn from(value: &str) -> Self {
        match CanonicalClass::from_name(value) {
            Some(class) => ActorClass::Canonical(class),
            None => ActorClass::Unrecognized(value.to_string()),
        }
    }
}

impl From<String> for ActorClass {
    fn from(value: String) -> Self {
        match CanonicalClass::from_name(&value) {
            Some(class) => ActorClass::Canonical(class),
            None => ActorClass::Unrecognized(value),
        }
    }
}

impl From<ActorClass> for String {
    fn from(value: ActorClass) -> Self {
        match value {
            ActorClass::Canonical(class) => class.as_str().to_string(),
            ActorClass::Unrecognized(label) => label,
        }
    }
}

impl Display for ActorClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

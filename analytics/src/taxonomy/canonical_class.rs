use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The closed set of traffic actor classes every count and export is expressed in.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalClass {
    Cars,
    Trucks,
    Buses,
    Motorcycles,
    Bicycles,
    Pedestrians,
}

impl CanonicalClass {
    /// Fixed column order used by counts, charts and exports.
    pub const ALL: [CanonicalClass; 6] = [
        CanonicalClass::Cars,
        CanonicalClass::Trucks,
        CanonicalClass::Buses,
        CanonicalClass::Motorcycles,
        CanonicalClass::Bicycles,
        CanonicalClass::Pedestrians,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalClass::Cars => "cars",
            CanonicalClass::Trucks => "trucks",
            CanonicalClass::Buses => "buses",
            CanonicalClass::Motorcycles => "motorcycles",
            CanonicalClass::Bicycles => "bicycles",
            CanonicalClass::Pedestrians => "pedestrians",
        }
    }

    pub fn column_name(&self) -> &'static str {
        match self {
            CanonicalClass::Cars => "Cars",
            CanonicalClass::Trucks => "Trucks",
            CanonicalClass::Buses => "Buses",
            CanonicalClass::Motorcycles => "Motorcycles",
            CanonicalClass::Bicycles => "Bicycles",
            CanonicalClass::Pedestrians => "Pedestrians",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == name)
    }
}

impl Display for CanonicalClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use crate::management::utils::location::Location;
use crate::utils::logging::*;
use analytics::aggregation::aggregator::validate_bucket_width;
use analytics::taxonomy::canonical_class::CanonicalClass;
use analytics::taxonomy::class_lookup::ClassLookup;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use tokio::fs;
use tokio::sync::RwLock;

pub const CONFIG_PATH: &str = "./viewer.toml";

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::default());
}

#[derive(Debug, Deserialize)]
struct ConfigTable {
    #[serde(rename = "Config")]
    config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub http_server_bind_port: u16, //port
    pub bind_retry_duration: u64, //seconds
    pub bucket_width: f64, //seconds
    pub max_bucket_count: usize,
    pub min_confidence: f64, //0..=1
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub class_aliases: BTreeMap<String, CanonicalClass>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_server_bind_port: 8001,
            bind_retry_duration: 5,
            bucket_width: 15.0,
            max_bucket_count: 10_000,
            min_confidence: 0.0,
            locations: Vec::new(),
            class_aliases: BTreeMap::new(),
        }
    }
}

impl Config {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Config, SystemEntry> {
        let toml_string = fs::read_to_string(path).await.map_err(SystemEntry::ConfigNotFound)?;
        Self::parse(&toml_string)
    }

    pub fn parse(toml_string: &str) -> Result<Config, SystemEntry> {
        let config = toml::from_str::<ConfigTable>(toml_string).map_err(SystemEntry::ConfigParseError)?.config;
        if Self::validate(&config) {
            Ok(config)
        } else {
            Err(SystemEntry::InvalidConfig)
        }
    }

    pub async fn now() -> Config {
        CONFIG.read().await.clone()
    }

    pub async fn update(config: Config) {
        *CONFIG.write().await = config
    }

    pub fn validate(config: &Config) -> bool {
        Config::validate_second(config.bind_retry_duration)
            && validate_bucket_width(config.bucket_width).is_ok()
            && Config::validate_bucket_count(config.max_bucket_count)
            && Config::validate_confidence(config.min_confidence)
            && Config::validate_locations(&config.locations)
    }

    pub fn location(&self, location_id: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.id == location_id)
    }

    /// Detector vocabulary plus the configured aliases.
    pub fn class_lookup(&self) -> ClassLookup {
        let mut lookup = ClassLookup::default();
        lookup.extend(self.class_aliases.iter().map(|(raw_label, class)| (raw_label.clone(), *class)));
        lookup
    }

    fn validate_second(second: u64) -> bool {
        second <= 3600
    }

    fn validate_bucket_count(count: usize) -> bool {
        count > 0
    }

    fn validate_confidence(confidence: f64) -> bool {
        (0.0..=1.0).contains(&confidence)
    }

    fn validate_locations(locations: &[Location]) -> bool {
        let mut seen = HashSet::new();
        locations.iter().all(|location| !location.id.is_empty() && seen.insert(location.id.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [Config]
        http_server_bind_port = 8080
        bind_retry_duration = 3
        bucket_width = 15.0
        max_bucket_count = 5000
        min_confidence = 0.5

        [[Config.locations]]
        id = "Amsterdam-80th"
        name = "Arthur Kill Rd & Storer Ave, Staten Island"
        video_file = "2025-02-13_06-00-04.mp4"

        [Config.class_aliases]
        motorbike = "motorcycles"
        van = "cars"
    "#;

    #[test]
    fn parses_config_table() {
        let config = Config::parse(SAMPLE).unwrap();
        assert_eq!(config.http_server_bind_port, 8080);
        assert_eq!(config.max_bucket_count, 5000);
        assert_eq!(config.location("Amsterdam-80th").map(|location| location.video_file.as_str()), Some("2025-02-13_06-00-04.mp4"));
        assert!(config.location("Columbus-86th").is_none());
        let lookup = config.class_lookup();
        assert_eq!(lookup.get("motorbike"), Some(CanonicalClass::Motorcycles));
        assert_eq!(lookup.get("car"), Some(CanonicalClass::Cars));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(Config::parse(&SAMPLE.replace("bucket_width = 15.0", "bucket_width = 0.0")), Err(SystemEntry::InvalidConfig)));
        assert!(matches!(Config::parse(&SAMPLE.replace("min_confidence = 0.5", "min_confidence = 1.5")), Err(SystemEntry::InvalidConfig)));
        assert!(matches!(Config::parse(&SAMPLE.replace("max_bucket_count = 5000", "max_bucket_count = 0")), Err(SystemEntry::InvalidConfig)));
        assert!(matches!(Config::parse(&SAMPLE.replace("motorbike = \"motorcycles\"", "motorbike = \"scooters\"")), Err(SystemEntry::ConfigParseError(_))));
        assert!(matches!(Config::parse("[Config]\nhttp_server_bind_port = 1"), Err(SystemEntry::ConfigParseError(_))));
    }

    #[test]
    fn rejects_duplicate_locations() {
        let mut config = Config::parse(SAMPLE).unwrap();
        config.locations.push(config.locations[0].clone());
        assert!(!Config::validate(&config));
        assert!(Config::validate(&Config::default()));
    }
}

use crate::taxonomy::actor_class::ActorClass;
use crate::taxonomy::canonical_class::CanonicalClass;
use std::collections::HashMap;

/// Native vocabulary of the pretrained detector mapped onto the taxonomy.
const DETECTOR_LABELS: [(&str, CanonicalClass); 6] = [
    ("car", CanonicalClass::Cars),
    ("truck", CanonicalClass::Trucks),
    ("bus", CanonicalClass::Buses),
    ("motorcycle", CanonicalClass::Motorcycles),
    ("bicycle", CanonicalClass::Bicycles),
    ("person", CanonicalClass::Pedestrians),
];

/// Maps raw detector labels onto the canonical taxonomy.
///
/// Matching is exact and case-sensitive. A label missing from the table passes
/// through unchanged, which still yields a canonical class if the label already
/// is a canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassLookup {
    table: HashMap<String, CanonicalClass>,
}

impl ClassLookup {
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    pub fn with_alias<T: Into<String>>(mut self, raw_label: T, class: CanonicalClass) -> Self {
        self.insert(raw_label, class);
        self
    }

    pub fn insert<T: Into<String>>(&mut self, raw_label: T, class: CanonicalClass) -> Option<CanonicalClass> {
        self.table.insert(raw_label.into(), class)
    }

    pub fn extend<I, T>(&mut self, aliases: I)
    where
        I: IntoIterator<Item = (T, CanonicalClass)>,
        T: Into<String>,
    {
        for (raw_label, class) in aliases {
            self.insert(raw_label, class);
        }
    }

    pub fn get(&self, raw_label: &str) -> Option<CanonicalClass> {
        self.table.get(raw_label).copied()
    }

    pub fn classify(&self, raw_label: &str) -> ActorClass {
        match self.get(raw_label) {
            Some(class) => ActorClass::Canonical(class),
            None => ActorClass::from(raw_label),
        }
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for ClassLookup {
    fn default() -> Self {
        let mut lookup = Self::empty();
        lookup.extend(DETECTOR_LABELS);
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_taxonomy() {
        let lookup = ClassLookup::default();
        assert_eq!(lookup.classify("car"), ActorClass::Canonical(CanonicalClass::Cars));
        assert_eq!(lookup.classify("truck"), ActorClass::Canonical(CanonicalClass::Trucks));
        assert_eq!(lookup.classify("bus"), ActorClass::Canonical(CanonicalClass::Buses));
        assert_eq!(lookup.classify("motorcycle"), ActorClass::Canonical(CanonicalClass::Motorcycles));
        assert_eq!(lookup.classify("bicycle"), ActorClass::Canonical(CanonicalClass::Bicycles));
        assert_eq!(lookup.classify("person"), ActorClass::Canonical(CanonicalClass::Pedestrians));
        assert_eq!(lookup.len(), 6);
    }

    #[test]
    fn unknown_labels_pass_through_verbatim() {
        let lookup = ClassLookup::default();
        assert_eq!(lookup.classify("dog"), ActorClass::Unrecognized("dog".to_string()));
        assert_eq!(lookup.classify("Car"), ActorClass::Unrecognized("Car".to_string()));
        assert_eq!(lookup.classify(""), ActorClass::Unrecognized(String::new()));
    }

    #[test]
    fn passthrough_of_canonical_name_is_canonical() {
        let lookup = ClassLookup::default();
        assert_eq!(lookup.classify("cars"), ActorClass::Canonical(CanonicalClass::Cars));
    }

    #[test]
    fn aliases_extend_the_default_table() {
        let lookup = ClassLookup::default()
            .with_alias("motorbike", CanonicalClass::Motorcycles)
            .with_alias("van", CanonicalClass::Cars);
        assert_eq!(lookup.classify("motorbike"), ActorClass::Canonical(CanonicalClass::Motorcycles));
        assert_eq!(lookup.classify("van"), ActorClass::Canonical(CanonicalClass::Cars));
        assert_eq!(lookup.classify("car"), ActorClass::Canonical(CanonicalClass::Cars));
        assert!(ClassLookup::empty().is_empty());
        assert_eq!(ClassLookup::empty().classify("car"), ActorClass::Unrecognized("car".to_string()));
    }
}

use crate::detection::detection::Detection;
use crate::taxonomy::actor_class::ActorClass;
use crate::taxonomy::canonical_class::CanonicalClass;
use serde::{Deserialize, Serialize};

/// Per-class counts, always carrying all six canonical keys.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TrafficCount {
    pub cars: usize,
    pub trucks: usize,
    pub buses: usize,
    pub motorcycles: usize,
    pub bicycles: usize,
    pub pedestrians: usize,
}

impl TrafficCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_detections<'a, I: IntoIterator<Item = &'a Detection>>(detections: I) -> Self {
        let mut count = Self::new();
        for detection in detections {
            count.record(&detection.actor_class);
        }
        count
    }

    /// Counts `class` if it is canonical. Returns whether it was counted.
    pub fn record(&mut self, class: &ActorClass) -> bool {
        match class.canonical() {
            Some(class) => {
                self.increment(class);
                true
            }
            None => false,
        }
    }

    pub fn increment(&mut self, class: CanonicalClass) {
        *self.slot_mut(class) += 1;
    }

    pub fn get(&self, class: CanonicalClass) -> usize {
        match class {
            CanonicalClass::Cars => self.cars,
            CanonicalClass::Trucks => self.trucks,
            CanonicalClass::Buses => self.buses,
            CanonicalClass::Motorcycles => self.motorcycles,
            CanonicalClass::Bicycles => self.bicycles,
            CanonicalClass::Pedestrians => self.pedestrians,
        }
    }

    pub fn total(&self) -> usize {
        CanonicalClass::ALL.iter().map(|class| self.get(*class)).sum()
    }

    /// Counts in canonical column order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalClass, usize)> + '_ {
        CanonicalClass::ALL.into_iter().map(move |class| (class, self.get(class)))
    }

    pub fn merge(&mut self, other: &TrafficCount) {
        for (class, count) in other.iter() {
            *self.slot_mut(class) += count;
        }
    }

    fn slot_mut(&mut self, class: CanonicalClass) -> &mut usize {
        match class {
            CanonicalClass::Cars => &mut self.cars,
            CanonicalClass::Trucks => &mut self.trucks,
            CanonicalClass::Buses => &mut self.buses,
            CanonicalClass::Motorcycles => &mut self.motorcycles,
            CanonicalClass::Bicycles => &mut self.bicycles,
            CanonicalClass::Pedestrians => &mut self.pedestrians,
        }
    }
}

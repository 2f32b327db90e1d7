pub mod actor_class;
pub mod canonical_class;
pub mod class_lookup;

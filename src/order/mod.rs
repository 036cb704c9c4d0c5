//! Ordering of features/extensions before emission.

pub mod features;
pub mod schedule;

pub use features::{FeatureList, FeatureSpec};
pub use schedule::{CyclicOrMissingDependency, Pending, Schedule, schedule};

//! Feature list input for the scheduler.
//!
//! JSON shape:
//! {
//!   "features": [
//!     { "name": "GL_VERSION_1_0" },
//!     { "name": "GL_ARB_sync", "requires": ["GL_VERSION_1_0"] }
//!   ]
//! }

use crate::order::schedule::{CyclicOrMissingDependency, schedule};
use anyhow::bail;
use serde::Deserialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureList {
    pub features: Vec<FeatureSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeatureSpec {
    /// Must be unique within the list.
    pub name: String,
    /// Names of features that must be emitted first.
    #[serde(default)]
    pub requires: Vec<String>,
}

impl FeatureList {
    /// Validate the list:
    /// - at least one feature
    /// - unique names
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.features.is_empty() {
            bail!("feature list must contain at least 1 feature");
        }

        let mut seen = BTreeSet::new();
        for f in &self.features {
            if !seen.insert(f.name.as_str()) {
                bail!("duplicate feature name in feature list: {}", f.name);
            }
        }
        Ok(())
    }

    /// Dependency order of the features, ties kept in list order.
    pub fn order(
        self,
    ) -> Result<Vec<FeatureSpec>, CyclicOrMissingDependency<FeatureSpec, String>> {
        schedule(
            self.features,
            |f: &FeatureSpec| f.name.clone(),
            |f: &FeatureSpec| f.requires.clone(),
        )
        .collect()
    }

    /// Like [`FeatureList::order`], but keeps the features placed before a stall.
    pub fn order_partial(
        self,
    ) -> (
        Vec<FeatureSpec>,
        Option<CyclicOrMissingDependency<FeatureSpec, String>>,
    ) {
        let mut placed = Vec::new();
        let steps = schedule(
            self.features,
            |f: &FeatureSpec| f.name.clone(),
            |f: &FeatureSpec| f.requires.clone(),
        );
        for step in steps {
            match step {
                Ok(f) => placed.push(f),
                Err(err) => return (placed, Some(err)),
            }
        }
        (placed, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(json: &str) -> FeatureList {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn orders_by_requires() {
        let l = list(
            r#"{"features": [
                {"name": "GL_ARB_sync", "requires": ["GL_VERSION_3_2"]},
                {"name": "GL_VERSION_1_0"},
                {"name": "GL_VERSION_3_2", "requires": ["GL_VERSION_1_0"]}
            ]}"#,
        );
        l.validate().unwrap();
        let names: Vec<_> = l.order().unwrap().into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["GL_VERSION_1_0", "GL_VERSION_3_2", "GL_ARB_sync"]);
    }

    #[test]
    fn rejects_duplicates_and_empty() {
        let dup = list(r#"{"features": [{"name": "a"}, {"name": "a"}]}"#);
        assert!(dup.validate().unwrap_err().to_string().contains("duplicate"));

        let empty = list(r#"{"features": []}"#);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn missing_requirement_is_reported() {
        let l = list(r#"{"features": [{"name": "a", "requires": ["nope"]}]}"#);
        let err = l.order().unwrap_err();
        assert_eq!(err.pending[0].item.name, "a");
        assert_eq!(err.pending[0].unresolved, vec!["nope".to_string()]);
    }

    #[test]
    fn partial_order_keeps_placed_features() {
        let l = list(
            r#"{"features": [
                {"name": "b", "requires": ["a", "missing"]},
                {"name": "a"},
                {"name": "c", "requires": ["a"]}
            ]}"#,
        );
        let (placed, err) = l.order_partial();
        let names: Vec<_> = placed.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
        let err = err.unwrap();
        assert_eq!(err.pending.len(), 1);
        assert_eq!(err.pending[0].item.name, "b");
    }
}

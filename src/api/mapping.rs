//! API name -> specification family.
//!
//! Used only when a selector does not name its family explicitly (`gl/custom`).
//! Can be loaded from JSON: { "gl": "gl", "vulkan": "vk" }

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

const DEFAULT_FAMILIES: &[(&str, &str)] = &[
    ("opencl", "cl"),
    ("gl", "gl"),
    ("gles1", "gl"),
    ("gles2", "gl"),
    ("glsc2", "gl"),
    ("egl", "egl"),
    ("glx", "glx"),
    ("wgl", "wgl"),
    ("vulkan", "vk"),
];

static DEFAULT_MAPPING: LazyLock<SpecMapping> =
    LazyLock::new(|| DEFAULT_FAMILIES.iter().copied().collect());

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SpecMapping(BTreeMap<String, String>);

impl SpecMapping {
    /// The built-in mapping shared by the whole process.
    pub fn builtin() -> &'static SpecMapping {
        &DEFAULT_MAPPING
    }

    pub fn get(&self, api: &str) -> Option<&str> {
        self.0.get(api).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SpecMapping {
    fn default() -> Self {
        DEFAULT_MAPPING.clone()
    }
}

impl<A: Into<String>, S: Into<String>> FromIterator<(A, S)> for SpecMapping {
    fn from_iter<I: IntoIterator<Item = (A, S)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(api, spec)| (api.into(), spec.into()))
                .collect(),
        )
    }
}

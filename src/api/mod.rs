//! API selection: which APIs (and which versions/profiles of them) to generate for.
//!
//! Owns:
//! - Version type (`major.minor`)
//! - Specification-family mapping (API name -> registry family)
//! - Selector parsing (`gl:core=4.6,gles2=3.2`)
//! - Display names for API identifiers

pub mod mapping;
pub mod names;
pub mod selector;
pub mod version;

pub use mapping::SpecMapping;
pub use names::api_name;
pub use selector::{ApiSelector, ApiSelectors, parse_apis, parse_apis_with};
pub use version::{Version, parse_version};

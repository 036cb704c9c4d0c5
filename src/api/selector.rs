use crate::api::mapping::SpecMapping;
use crate::api::version::{Version, parse_version};
use crate::{Error, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::{debug, trace};

// Capture:
// api: word chars
// profile: after ':'
// spec: after '/'
// version: after '=', may be empty
static SELECTOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<api>\w+)(?::(?P<profile>\w+))?(?:/(?P<spec>\w+))?(?:=(?P<version>[0-9]+(?:\.[0-9]+)?)?)?$",
    )
    .expect("selector pattern is valid")
});

/// One requested API after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiSelector {
    /// Specification family, e.g. "gl" for both "gl" and "gles2". Never empty.
    pub specification: String,
    pub version: Option<Version>,
    pub profile: Option<String>,
}

/// Parsed selectors keyed by API name.
pub type ApiSelectors = BTreeMap<String, ApiSelector>;

/// Parse a comma-separated selector list against the built-in family mapping.
///
/// See [`parse_apis_with`].
pub fn parse_apis(text: &str) -> Result<ApiSelectors> {
    parse_apis_with(text, SpecMapping::builtin())
}

/// Parse a comma-separated selector list into an API-name -> selector map.
///
/// Clause shape (surrounding whitespace ignored):
/// name[:profile][/spec][=version]
///
/// Example:
/// gl:core=4.6, gles2=3.2, wgl, foo/custom=1.0
///
/// The first bad clause aborts the whole call. A repeated API name replaces
/// the earlier entry. Blank input yields an empty map.
pub fn parse_apis_with(text: &str, mapping: &SpecMapping) -> Result<ApiSelectors> {
    let mut out = ApiSelectors::new();
    if text.trim().is_empty() {
        return Ok(out);
    }

    for clause in text.split(',') {
        let clause = clause.trim();
        let invalid = || Error::InvalidApiSyntax {
            clause: clause.to_string(),
        };

        let caps = SELECTOR_RE.captures(clause).ok_or_else(invalid)?;
        let api = caps.name("api").ok_or_else(invalid)?.as_str();

        let specification = match caps.name("spec") {
            Some(spec) => spec.as_str().to_string(),
            None => mapping
                .get(api)
                .ok_or_else(|| Error::UnresolvedSpecification {
                    api: api.to_string(),
                })?
                .to_string(),
        };

        // The regex already vetted the digits; only u32 overflow can fail here.
        let version =
            parse_version(caps.name("version").map(|m| m.as_str())).map_err(|_| invalid())?;
        let profile = caps.name("profile").map(|m| m.as_str().to_string());

        let selector = ApiSelector {
            specification,
            version,
            profile,
        };
        debug!(api, ?selector, "parsed api selector");

        if let Some(prev) = out.insert(api.to_string(), selector) {
            trace!(api, ?prev, "api selected twice, keeping the later clause");
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sel(spec: &str, version: Option<(u32, u32)>, profile: Option<&str>) -> ApiSelector {
        ApiSelector {
            specification: spec.to_string(),
            version: version.map(|(major, minor)| Version::new(major, minor)),
            profile: profile.map(str::to_string),
        }
    }

    #[test]
    fn canonical_input() {
        let apis = parse_apis("gl:core=4.6,gles2=3.2").unwrap();
        let expected = ApiSelectors::from([
            ("gl".to_string(), sel("gl", Some((4, 6)), Some("core"))),
            ("gles2".to_string(), sel("gl", Some((3, 2)), None)),
        ]);
        assert_eq!(apis, expected);
    }

    #[test]
    fn whitespace_and_bare_names() {
        let apis = parse_apis(" gl:core=4.6 , gles2=3.2,  wgl ").unwrap();
        assert_eq!(apis.len(), 3);
        assert_eq!(apis["wgl"], sel("wgl", None, None));
    }

    #[test]
    fn explicit_spec_wins() {
        let apis = parse_apis("foo/customspec=1.0").unwrap();
        assert_eq!(apis["foo"], sel("customspec", Some((1, 0)), None));

        let apis = parse_apis("gl:compat/glcustom").unwrap();
        assert_eq!(apis["gl"], sel("glcustom", None, Some("compat")));
    }

    #[test]
    fn unresolved_specification() {
        let err = parse_apis("gl=4.6,foo=1.0").unwrap_err();
        match err {
            Error::UnresolvedSpecification { api } => assert_eq!(api, "foo"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn custom_mapping_replaces_default() {
        let mapping: SpecMapping = [("foo", "bar")].into_iter().collect();
        let apis = parse_apis_with("foo=2", &mapping).unwrap();
        assert_eq!(apis["foo"], sel("bar", Some((2, 0)), None));
        assert!(parse_apis_with("gl", &mapping).is_err());
    }

    #[test]
    fn last_write_wins() {
        let apis = parse_apis("gl=4.0,gl=4.6").unwrap();
        assert_eq!(apis.len(), 1);
        assert_eq!(apis["gl"].version, Some(Version::new(4, 6)));
    }

    #[test]
    fn empty_version_is_none() {
        let apis = parse_apis("gl=,egl=0").unwrap();
        assert_eq!(apis["gl"].version, None);
        assert_eq!(apis["egl"].version, Some(Version::new(0, 0)));
        assert_eq!(apis["gl"].profile, None);
    }

    #[test]
    fn repeated_calls_share_the_pattern() {
        for _ in 0..3 {
            let apis = parse_apis("gl:core=4.6").unwrap();
            assert_eq!(apis["gl"], sel("gl", Some((4, 6)), Some("core")));
        }
        assert!(SELECTOR_RE.is_match("vulkan/vk=1.3"));
        assert!(!SELECTOR_RE.is_match("vulkan 1.3"));
    }

    #[test]
    fn empty_input() {
        assert!(parse_apis("").unwrap().is_empty());
        assert!(parse_apis("   ").unwrap().is_empty());
    }

    #[test]
    fn syntax_errors_fail_fast() {
        for (input, clause) in [
            ("gl=4.x", "gl=4.x"),
            ("gl,,gles2", ""),
            ("gl,", ""),
            ("gl-es=2", "gl-es=2"),
            ("gl=4.6.1", "gl=4.6.1"),
            ("gl:core:compat", "gl:core:compat"),
            ("gl=99999999999", "gl=99999999999"),
            // syntax is checked before the mapping lookup
            ("gl, foo bar", "foo bar"),
        ] {
            match parse_apis(input) {
                Err(Error::InvalidApiSyntax { clause: got }) => assert_eq!(got, clause),
                other => panic!("{input:?}: unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn first_failing_clause_aborts() {
        // "foo" is unresolved and comes before the syntax error.
        let err = parse_apis("foo, gl=x").unwrap_err();
        assert!(matches!(err, Error::UnresolvedSpecification { .. }));
    }
}

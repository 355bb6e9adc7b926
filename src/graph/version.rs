//! Module version ordering.
//!
//! Go module versions look like semantic versions with a leading `v`
//! (`v1.4.2`, `v0.0.0-20230101000000-abcdef123456`, `v2.0.0+incompatible`).
//! This module orders them by semver precedence and defines a deterministic
//! fallback for strings that are not versions at all.
//!
//! # Ordering rules
//!
//! - An optional leading `v` is stripped before parsing.
//! - The shorthands `v1` and `v1.2` mean `v1.0.0` and `v1.2.0`.
//! - Release numbers compare numerically, so `10.0.0 > 9.0.0`.
//! - A pre-release sorts below the same release without one.
//! - Build metadata (`+incompatible`) does not affect precedence.
//! - Any unparsable version sorts below every parsable one, and two
//!   unparsable versions compare by plain byte order.
//! - Release numbers must fit in a `u64`. A longer number such as
//!   `v99999999999999999999.0.0` is unparsable and loses to `v0.0.1`.

use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// A version string paired with its parsed semver form, if it has one.
///
/// Equality follows precedence, so `v1.2.0` and `1.2.0+meta` are equal.
///
/// # Example
///
/// ```rust
/// use modview::graph::ModuleVersion;
///
/// let old = ModuleVersion::parse("v9.0.0");
/// let new = ModuleVersion::parse("v10.0.0");
/// assert!(new > old);
/// ```
#[derive(Debug, Clone)]
pub struct ModuleVersion {
    /// The version exactly as it appeared in the input
    pub raw: String,
    parsed: Option<Version>,
}

impl ModuleVersion {
    /// Parses a version string. Never fails; unparsable input is kept raw.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_semver(&raw);
        Self { raw, parsed }
    }

    /// Returns true if the string was understood as a semantic version.
    pub fn is_valid(&self) -> bool {
        self.parsed.is_some()
    }

    /// Returns true if the version carries a pre-release tag.
    pub fn is_prerelease(&self) -> bool {
        self.parsed.as_ref().is_some_and(|v| !v.pre.is_empty())
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Ord for ModuleVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.parsed, &other.parsed) {
            (Some(a), Some(b)) => precedence(a, b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ModuleVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ModuleVersion {}

/// Compares two raw version strings using [`ModuleVersion`] ordering.
///
/// # Example
///
/// ```rust
/// use modview::graph::compare_versions;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_versions("v1.0.0", "v1.0.0-rc.1"), Ordering::Greater);
/// assert_eq!(compare_versions("not-a-version", "v0.0.1"), Ordering::Less);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    ModuleVersion::parse(a).cmp(&ModuleVersion::parse(b))
}

fn precedence(a: &Version, b: &Version) -> Ordering {
    a.major
        .cmp(&b.major)
        .then(a.minor.cmp(&b.minor))
        .then(a.patch.cmp(&b.patch))
        .then_with(|| a.pre.cmp(&b.pre))
}

fn parse_semver(raw: &str) -> Option<Version> {
    let text = raw.strip_prefix('v').unwrap_or(raw);
    if let Ok(version) = Version::parse(text) {
        return Some(version);
    }

    // Shorthand forms only apply to bare release numbers.
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    let padded = match text.split('.').count() {
        1 => format!("{}.0.0", text),
        2 => format!("{}.0", text),
        _ => return None,
    };
    Version::parse(&padded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_not_lexicographic() {
        assert_eq!(compare_versions("9.0.0", "10.0.0"), Ordering::Less);
        assert_eq!(compare_versions("v1.10.0", "v1.9.3"), Ordering::Greater);
    }

    #[test]
    fn test_leading_v_is_optional() {
        assert_eq!(compare_versions("v1.2.3", "1.2.3"), Ordering::Equal);
        assert!(ModuleVersion::parse("v1.2.3").is_valid());
        assert!(ModuleVersion::parse("1.2.3").is_valid());
    }

    #[test]
    fn test_prerelease_lower_than_release() {
        assert_eq!(compare_versions("v1.0.0-rc.1", "v1.0.0"), Ordering::Less);
        assert_eq!(compare_versions("v1.0.0-alpha", "v1.0.0-beta"), Ordering::Less);
        assert!(ModuleVersion::parse("v1.0.0-rc.1").is_prerelease());
        assert!(!ModuleVersion::parse("v1.0.0").is_prerelease());
    }

    #[test]
    fn test_pseudo_versions() {
        let older = "v0.0.0-20210101000000-aaaaaaaaaaaa";
        let newer = "v0.0.0-20230101000000-bbbbbbbbbbbb";
        assert_eq!(compare_versions(older, newer), Ordering::Less);
        assert_eq!(compare_versions(newer, "v0.0.1"), Ordering::Less);
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(
            compare_versions("v2.0.0+incompatible", "v2.0.0"),
            Ordering::Equal
        );
        assert_eq!(
            compare_versions("v2.0.1+incompatible", "v2.0.0"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_shorthand_versions() {
        assert_eq!(compare_versions("v1", "v1.0.0"), Ordering::Equal);
        assert_eq!(compare_versions("v1.2", "v1.2.0"), Ordering::Equal);
        assert_eq!(compare_versions("v1.2", "v1.1.9"), Ordering::Greater);
        assert!(!ModuleVersion::parse("v1.2-pre").is_valid());
    }

    #[test]
    fn test_unparsable_sorts_below_parsable() {
        assert_eq!(compare_versions("latest", "v0.0.0"), Ordering::Less);
        assert_eq!(compare_versions("v0.0.0", ""), Ordering::Greater);
        assert_eq!(compare_versions("1.21", "go1.21.0"), Ordering::Greater);
    }

    #[test]
    fn test_oversized_release_number_is_unparsable() {
        let huge = ModuleVersion::parse("v99999999999999999999.0.0");
        assert!(!huge.is_valid());
        assert_eq!(
            compare_versions("v99999999999999999999.0.0", "v0.0.1"),
            Ordering::Less
        );
    }

    #[test]
    fn test_unparsable_compare_bytewise() {
        assert_eq!(compare_versions("go1.21.0", "go1.9"), Ordering::Less);
        assert_eq!(compare_versions("beta", "alpha"), Ordering::Greater);
        assert_eq!(compare_versions("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_display_keeps_raw_text() {
        let version = ModuleVersion::parse("v2.0.0+incompatible");
        assert_eq!(version.to_string(), "v2.0.0+incompatible");
    }
}

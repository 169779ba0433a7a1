use super::types::VersionEntry;
use regex::Regex;
use std::cmp::{Ordering, Reverse};
use std::sync::OnceLock;

/// Permissive "looks like a version number" pattern: optional `v`, a run of
/// digits and dots, then anything that is neither.
const SEMVER_LIKE: &str = r"^v?([0-9.]+)([^0-9.]*)?$";

fn semver_like() -> &'static Regex {
    // RUST LEARNING: `OnceLock` initializes a static exactly once on first use
    // - Like a lazily-created module-level constant in TypeScript
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(SEMVER_LIKE).expect("Invalid regex"))
}

/// Ordering key derived from a version string.
///
/// Both variants are compared as sequences of string segments:
/// - `Numeric` yields its dot-separated components followed by the suffix
/// - `Raw` yields one segment per character
///
/// Segments compare by code point and a sequence that is a strict prefix of
/// another orders first. Components are compared as text, so `"10"` sorts
/// below `"9"`.
#[derive(Debug, Clone)]
pub enum SortKey {
    Numeric {
        components: Vec<String>,
        suffix: String,
    },
    Raw(String),
}

impl SortKey {
    pub fn from_version(version: &str) -> Self {
        match semver_like().captures(version) {
            Some(caps) => {
                let numbers = caps.get(1).map_or("", |m| m.as_str());
                let suffix = caps.get(2).map_or("", |m| m.as_str());
                SortKey::Numeric {
                    components: numbers.split('.').map(str::to_string).collect(),
                    suffix: suffix.to_string(),
                }
            }
            None => SortKey::Raw(version.to_string()),
        }
    }

    /// The segment sequence this key is ordered by.
    pub fn segments(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            SortKey::Numeric { components, suffix } => Box::new(
                components
                    .iter()
                    .map(String::as_str)
                    .chain(std::iter::once(suffix.as_str())),
            ),
            SortKey::Raw(raw) => Box::new(
                raw.char_indices()
                    .map(move |(i, c)| &raw[i..i + c.len_utf8()]),
            ),
        }
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.segments().cmp(other.segments())
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Highest key first. Entries with equal keys keep their relative order.
pub fn sort_descending(entries: &mut [VersionEntry]) {
    entries.sort_by_cached_key(|entry| Reverse(SortKey::from_version(entry.version())));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(versions: &[&str]) -> Vec<String> {
        let mut entries: Vec<VersionEntry> = versions
            .iter()
            .map(|v| VersionEntry::new(*v, v.replace('.', "_")))
            .collect();
        sort_descending(&mut entries);
        entries.into_iter().map(|e| e.version().to_string()).collect()
    }

    #[test]
    fn test_numeric_key_with_suffix() {
        let key = SortKey::from_version("v2.1.0-beta");
        assert_eq!(
            key,
            SortKey::Numeric {
                components: vec!["2".to_string(), "1".to_string(), "0".to_string()],
                suffix: "-beta".to_string(),
            }
        );
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, vec!["2", "1", "0", "-beta"]);
    }

    #[test]
    fn test_numeric_key_without_suffix_ends_with_empty_segment() {
        let key = SortKey::from_version("1.0");
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, vec!["1", "0", ""]);
    }

    #[test]
    fn test_non_matching_versions_fall_back_to_characters() {
        assert_eq!(
            SortKey::from_version("master"),
            SortKey::Raw("master".to_string())
        );
        // digits after the suffix break the pattern
        let key = SortKey::from_version("2.1.0+build.1");
        assert!(matches!(key, SortKey::Raw(_)));
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments[..4], ["2", ".", "1", "."]);
    }

    #[test]
    fn test_suffix_without_digits_stays_numeric() {
        let key = SortKey::from_version("2.1.0@ar/stable");
        assert!(matches!(key, SortKey::Numeric { .. }));
        let segments: Vec<&str> = key.segments().collect();
        assert_eq!(segments, vec!["2", "1", "0", "@ar/stable"]);
    }

    #[test]
    fn test_components_compare_as_text() {
        assert_eq!(
            sorted(&["v1.2.0", "v1.10.0", "v1.9.0"]),
            vec!["v1.9.0", "v1.2.0", "v1.10.0"]
        );
    }

    #[test]
    fn test_mixed_matched_and_raw_keys() {
        assert_eq!(
            sorted(&["v1.0.0", "master", "2.1.0@ar/stable"]),
            vec!["master", "2.1.0@ar/stable", "v1.0.0"]
        );
    }

    #[test]
    fn test_suffix_orders_above_bare_version() {
        let bare = SortKey::from_version("2.1.0");
        let suffixed = SortKey::from_version("2.1.0@ar/stable");
        assert!(suffixed > bare);
        assert_eq!(
            sorted(&["2.1.0", "2.1.0@ar/stable"]),
            vec!["2.1.0@ar/stable", "2.1.0"]
        );
    }

    #[test]
    fn test_numeric_key_beats_raw_key_with_same_prefix() {
        // "1" > "." at the second segment
        let numeric = SortKey::from_version("2.1.0");
        let raw = SortKey::from_version("2.1.0+build.1");
        assert!(matches!(raw, SortKey::Raw(_)));
        assert!(numeric > raw);
        assert_eq!(
            sorted(&["2.1.0+build.1", "2.1.0"]),
            vec!["2.1.0", "2.1.0+build.1"]
        );
    }

    #[test]
    fn test_strict_prefix_orders_first() {
        let short = SortKey::Raw("dev".to_string());
        let long = SortKey::Raw("develop".to_string());
        assert!(short < long);
        assert_eq!(sorted(&["dev", "develop"]), vec!["develop", "dev"]);
    }

    #[test]
    fn test_v_prefix_is_ignored() {
        assert_eq!(
            SortKey::from_version("v3.0.0").cmp(&SortKey::from_version("3.0.0")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        assert_eq!(sorted(&["3.0.0", "v3.0.0"]), vec!["3.0.0", "v3.0.0"]);
        assert_eq!(sorted(&["v3.0.0", "3.0.0"]), vec!["v3.0.0", "3.0.0"]);
    }

    #[test]
    fn test_empty_and_non_ascii_versions_do_not_panic() {
        let result = sorted(&["", "ü-release", "v1"]);
        assert_eq!(result.len(), 3);
        assert_eq!(result[0], "ü-release");
        assert_eq!(result[2], "");
    }
}

use semver::Version;
use std::fmt;

/// A git tag whose name is a valid semantic version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    /// Tag name as it appears in the repository (e.g. "v1.2.0")
    pub name: String,
    /// Parsed version (e.g. 1.2.0)
    pub version: Version,
}

impl VersionTag {
    /// Parse a tag name, returning `None` when it is not a semantic version.
    pub fn parse(name: &str) -> Option<Self> {
        parse_version(name).map(|version| VersionTag {
            name: name.to_string(),
            version,
        })
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Largest numeric component a version may carry (2^53 - 1).
pub const MAX_VERSION_COMPONENT: u64 = (1 << 53) - 1;

/// Strict semver parsing that tolerates surrounding whitespace and a leading `v` or `=`.
///
/// `"v1.2.3"`, `"=1.2.3"` and `" 1.2.3 "` are accepted; `"1.2"`, `"01.2.3"` and
/// `"release-1.2.3"` are not. Versions with a component above
/// [MAX_VERSION_COMPONENT] are rejected, so incrementing a parsed version cannot
/// overflow.
pub fn parse_version(input: &str) -> Option<Version> {
    let trimmed = input
        .trim()
        .trim_start_matches(|c: char| c == 'v' || c == '=' || c.is_whitespace());
    Version::parse(trimmed)
        .ok()
        .filter(|v| [v.major, v.minor, v.patch].iter().all(|&c| c <= MAX_VERSION_COMPONENT))
}

/// Select the highest-precedence semantic version among `names`.
///
/// Blank and non-semver names are discarded. Returns `None` when nothing is left.
pub fn latest_tag<S: AsRef<str>>(names: &[S]) -> Option<VersionTag> {
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| !n.trim().is_empty())
        .filter_map(VersionTag::parse)
        .max_by(|a, b| a.version.cmp(&b.version).then_with(|| b.name.cmp(&a.name)))
}

/// Tag names that were discarded because they are not semantic versions.
pub fn invalid_tags<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.as_ref())
        .filter(|n| !n.trim().is_empty() && parse_version(n).is_none())
        .map(str::to_string)
        .collect()
}

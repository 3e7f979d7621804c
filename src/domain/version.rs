use semver::Version;
use serde::Serialize;
use std::fmt;

/// Minimum version bump required by a set of commits.
///
/// Ordered by severity: `Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IncrementClass {
    Patch,
    Minor,
    Major,
}

impl IncrementClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementClass::Patch => "patch",
            IncrementClass::Minor => "minor",
            IncrementClass::Major => "major",
        }
    }

    /// Apply this increment to `version`.
    ///
    /// Follows the usual semver increment rules: the field is raised and the lower
    /// fields are zeroed, prerelease and build metadata are dropped. A prerelease
    /// that already sits on the target release is released instead of raised again:
    /// - **Major**: `2.0.0-rc.1` -> `2.0.0`, `1.2.0-rc.1` -> `2.0.0`
    /// - **Minor**: `1.3.0-beta` -> `1.3.0`, `1.3.1-beta` -> `1.4.0`
    /// - **Patch**: `1.2.4-alpha` -> `1.2.4`
    pub fn apply(&self, version: &Version) -> Version {
        let is_prerelease = !version.pre.is_empty();
        let mut next = Version::new(version.major, version.minor, version.patch);

        match self {
            IncrementClass::Major => {
                if version.minor != 0 || version.patch != 0 || !is_prerelease {
                    next.major += 1;
                }
                next.minor = 0;
                next.patch = 0;
            }
            IncrementClass::Minor => {
                if version.patch != 0 || !is_prerelease {
                    next.minor += 1;
                }
                next.patch = 0;
            }
            IncrementClass::Patch => {
                if !is_prerelease {
                    next.patch += 1;
                }
            }
        }

        next
    }
}

impl fmt::Display for IncrementClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

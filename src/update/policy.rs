//! Updatability rules
//!
//! `SubstringPolicy` is the default: a dependency is updatable when its
//! declared range does not contain the latest version as a substring. It is a
//! heuristic with known false results, e.g. `^1.2.0` against `1.2.1` is
//! reported updatable although the range already admits it.
//!
//! `SemverPolicy` evaluates the range with the semver crate and falls back to
//! the substring rule for anything it cannot parse (tags, URLs, npm
//! space-separated ranges).

use semver::{Version, VersionReq};

/// Decides whether a declared range needs updating to reach `latest_version`
pub trait UpdatePolicy: Send + Sync {
    fn is_updatable(&self, declared_range: &str, latest_version: &str) -> bool;
}

/// Textual containment check
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringPolicy;

impl UpdatePolicy for SubstringPolicy {
    fn is_updatable(&self, declared_range: &str, latest_version: &str) -> bool {
        !declared_range.contains(latest_version)
    }
}

/// Semantic range evaluation with substring fallback
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverPolicy;

impl UpdatePolicy for SemverPolicy {
    fn is_updatable(&self, declared_range: &str, latest_version: &str) -> bool {
        let Ok(latest) = Version::parse(latest_version) else {
            return SubstringPolicy.is_updatable(declared_range, latest_version);
        };

        let range = declared_range.trim();

        // npm reads a bare version as an exact pin, semver as a caret range
        let bare = range.trim_start_matches(['v', '=']);
        if let Ok(exact) = Version::parse(bare) {
            return exact != latest;
        }

        // npm reads `1.2` as `1.2.x` and `1` as `1.x`, semver as a caret range
        if is_partial_version(bare) {
            if let Ok(req) = VersionReq::parse(&format!("~{}", bare)) {
                return !req.matches(&latest);
            }
        }

        match VersionReq::parse(range) {
            Ok(req) => !req.matches(&latest),
            Err(e) => {
                tracing::debug!(
                    "cannot evaluate range '{}' as semver ({}), using substring check",
                    declared_range,
                    e
                );
                SubstringPolicy.is_updatable(declared_range, latest_version)
            }
        }
    }
}

/// A bare `major` or `major.minor` version without operators
fn is_partial_version(range: &str) -> bool {
    let parts: Vec<&str> = range.split('.').collect();
    (1..=2).contains(&parts.len())
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
}

/// Create the policy selected on the command line
pub fn create_policy(semver: bool) -> Box<dyn UpdatePolicy> {
    if semver {
        Box::new(SemverPolicy)
    } else {
        Box::new(SubstringPolicy)
    }
}

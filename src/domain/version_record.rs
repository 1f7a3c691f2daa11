//! Comparison records and the batch of updatable dependencies

use super::DependencyDeclaration;
use std::fmt;

/// Result of comparing a declared range with the latest published version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    /// Package name
    pub name: String,
    /// The declared version range from the manifest
    pub declared_range: String,
    /// The latest version reported by the registry
    pub latest_version: String,
    /// Whether the declared range does not already cover the latest version
    pub updatable: bool,
}

impl VersionRecord {
    /// Creates a record for a declaration
    pub fn new(
        declaration: &DependencyDeclaration,
        latest_version: impl Into<String>,
        updatable: bool,
    ) -> Self {
        Self {
            name: declaration.name.clone(),
            declared_range: declaration.declared_range.clone(),
            latest_version: latest_version.into(),
            updatable,
        }
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.updatable {
            write!(
                f,
                "{}: {} → {}",
                self.name, self.declared_range, self.latest_version
            )
        } else {
            write!(f, "{}: {} (up to date)", self.name, self.declared_range)
        }
    }
}

/// Ordered subset of records that can be updated, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateBatch {
    records: Vec<VersionRecord>,
}

impl UpdateBatch {
    /// Collects the updatable records, keeping their relative order
    pub fn from_records(records: &[VersionRecord]) -> Self {
        Self {
            records: records.iter().filter(|r| r.updatable).cloned().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionRecord> {
        self.records.iter()
    }
}

//! Dependency classification
//!
//! Looks up the latest version of every declaration, in declaration order and
//! one lookup at a time, and applies the update policy to each.

use crate::domain::{DependencyDeclaration, VersionRecord};
use crate::error::RegistryError;
use crate::progress::ProgressReporter;
use crate::registry::VersionSource;
use crate::update::{SubstringPolicy, UpdatePolicy};

/// Compares declared ranges against the latest published versions
pub struct Classifier {
    policy: Box<dyn UpdatePolicy>,
}

impl Classifier {
    /// Create a classifier with the given updatability policy
    pub fn new(policy: Box<dyn UpdatePolicy>) -> Self {
        Self { policy }
    }

    /// Classify every declaration.
    ///
    /// Returns one record per declaration, in the same order. The first lookup
    /// failure aborts the whole run and no records are returned.
    pub async fn classify(
        &self,
        declarations: &[DependencyDeclaration],
        source: &dyn VersionSource,
        progress: &mut dyn ProgressReporter,
    ) -> Result<Vec<VersionRecord>, RegistryError> {
        let mut records = Vec::with_capacity(declarations.len());

        for declaration in declarations {
            progress.start_check(&declaration.name);

            let latest = match source.latest_version(&declaration.name).await {
                Ok(v) => v,
                Err(e) => {
                    progress.finish();
                    return Err(e);
                }
            };

            let updatable = self
                .policy
                .is_updatable(&declaration.declared_range, &latest);
            let record = VersionRecord::new(declaration, latest, updatable);

            progress.checked(&record);
            records.push(record);
        }

        progress.finish();
        tracing::debug!(
            "classified {} dependencies, {} updatable",
            records.len(),
            records.iter().filter(|r| r.updatable).count()
        );

        Ok(records)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Box::new(SubstringPolicy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::SemverPolicy;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory registry that records the order of lookups
    struct FakeSource {
        versions: HashMap<String, String>,
        lookups: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(versions: &[(&str, &str)]) -> Self {
            Self {
                versions: versions
                    .iter()
                    .map(|(n, v)| (n.to_string(), v.to_string()))
                    .collect(),
                lookups: Mutex::new(Vec::new()),
            }
        }

        fn lookups(&self) -> Vec<String> {
            self.lookups.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl VersionSource for FakeSource {
        fn registry_name(&self) -> &str {
            "fake"
        }

        async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
            self.lookups.lock().unwrap().push(package.to_string());
            self.versions
                .get(package)
                .cloned()
                .ok_or_else(|| RegistryError::package_not_found(package, "fake"))
        }
    }

    /// Captures progress events as strings
    #[derive(Default)]
    struct RecordingProgress {
        events: Vec<String>,
    }

    impl ProgressReporter for RecordingProgress {
        fn start_check(&mut self, name: &str) {
            self.events.push(format!("start {}", name));
        }

        fn checked(&mut self, record: &VersionRecord) {
            self.events.push(format!("checked {}", record.name));
        }

        fn finish(&mut self) {
            self.events.push("finish".to_string());
        }
    }

    fn declarations(items: &[(&str, &str)]) -> Vec<DependencyDeclaration> {
        items
            .iter()
            .map(|(n, r)| DependencyDeclaration::new(*n, *r))
            .collect()
    }

    #[tokio::test]
    async fn test_classify_preserves_order_and_length() {
        let source = FakeSource::new(&[("zod", "3.23.8"), ("axios", "1.7.2"), ("chalk", "5.3.0")]);
        let decls = declarations(&[("zod", "^3.23.8"), ("axios", "^0.27.2"), ("chalk", "5.3.0")]);
        let mut progress = RecordingProgress::default();

        let records = Classifier::default()
            .classify(&decls, &source, &mut progress)
            .await
            .unwrap();

        assert_eq!(records.len(), decls.len());
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zod", "axios", "chalk"]);
        assert_eq!(source.lookups(), vec!["zod", "axios", "chalk"]);
    }

    #[tokio::test]
    async fn test_classify_updatable_flags() {
        let source = FakeSource::new(&[("a", "1.2.0"), ("b", "2.0.0")]);
        let decls = declarations(&[("a", "^1.2.0"), ("b", "^1.2.0")]);
        let mut progress = RecordingProgress::default();

        let records = Classifier::default()
            .classify(&decls, &source, &mut progress)
            .await
            .unwrap();

        assert!(!records[0].updatable);
        assert!(records[1].updatable);
        assert_eq!(records[1].declared_range, "^1.2.0");
        assert_eq!(records[1].latest_version, "2.0.0");
    }

    #[tokio::test]
    async fn test_classify_progress_events_are_sequential() {
        let source = FakeSource::new(&[("a", "1.0.0"), ("b", "1.0.0")]);
        let decls = declarations(&[("a", "1.0.0"), ("b", "0.9.0")]);
        let mut progress = RecordingProgress::default();

        Classifier::default()
            .classify(&decls, &source, &mut progress)
            .await
            .unwrap();

        assert_eq!(
            progress.events,
            vec!["start a", "checked a", "start b", "checked b", "finish"]
        );
    }

    #[tokio::test]
    async fn test_classify_aborts_on_first_lookup_failure() {
        let source = FakeSource::new(&[("a", "1.0.0"), ("c", "1.0.0")]);
        let decls = declarations(&[("a", "^1.0.0"), ("missing", "^1.0.0"), ("c", "^1.0.0")]);
        let mut progress = RecordingProgress::default();

        let err = Classifier::default()
            .classify(&decls, &source, &mut progress)
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::PackageNotFound { .. }));
        // Nothing after the failing package is looked up
        assert_eq!(source.lookups(), vec!["a", "missing"]);
        assert_eq!(progress.events.last().map(String::as_str), Some("finish"));
    }

    #[tokio::test]
    async fn test_classify_empty_manifest() {
        let source = FakeSource::new(&[]);
        let mut progress = RecordingProgress::default();

        let records = Classifier::default()
            .classify(&[], &source, &mut progress)
            .await
            .unwrap();

        assert!(records.is_empty());
        assert!(source.lookups().is_empty());
        assert_eq!(progress.events, vec!["finish"]);
    }

    #[tokio::test]
    async fn test_classify_with_semver_policy() {
        let source = FakeSource::new(&[("a", "1.4.0")]);
        let decls = declarations(&[("a", "^1.2.0")]);
        let mut progress = RecordingProgress::default();

        let records = Classifier::new(Box::new(SemverPolicy))
            .classify(&decls, &source, &mut progress)
            .await
            .unwrap();

        assert!(!records[0].updatable);
    }
}

//! package.json parser
//!
//! Only the top-level `dependencies` object is read. serde_json is built with
//! `preserve_order`, so declarations come back in file order.

use crate::domain::DependencyDeclaration;
use crate::error::ManifestError;
use serde_json::Value;
use std::path::Path;

/// Read and parse the manifest at `path`
pub fn read_manifest(path: &Path) -> Result<Vec<DependencyDeclaration>, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::not_found(path)
        } else {
            ManifestError::read_error(path, e)
        }
    })?;

    let declarations = parse_package_json(&content, path)?;
    tracing::debug!(
        "read {} dependencies from {}",
        declarations.len(),
        path.display()
    );
    Ok(declarations)
}

/// Parse package.json content; `path` is only used for error messages
pub fn parse_package_json(
    content: &str,
    path: &Path,
) -> Result<Vec<DependencyDeclaration>, ManifestError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

    let deps = json
        .get("dependencies")
        .and_then(|v| v.as_object())
        .ok_or_else(|| ManifestError::missing_dependencies(path))?;

    deps.iter()
        .map(|(name, range)| {
            range
                .as_str()
                .map(|r| DependencyDeclaration::new(name.clone(), r))
                .ok_or_else(|| ManifestError::invalid_range(path, name.clone()))
        })
        .collect()
}

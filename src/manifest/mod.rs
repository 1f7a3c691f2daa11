//! Manifest reading
//!
//! Reads the `dependencies` object of a package.json into an ordered list of
//! declarations. Key order of the file is preserved.

mod package_json;

pub use package_json::{parse_package_json, read_manifest};

use std::path::Path;

/// Directory containing the manifest, used as the install working directory
pub fn manifest_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

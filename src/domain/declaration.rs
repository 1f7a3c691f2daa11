//! Dependency declarations as written in the manifest

use std::fmt;

/// A dependency as declared in the manifest's `dependencies` object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyDeclaration {
    /// Package name
    pub name: String,
    /// The declared version range, verbatim (e.g. "^4.17.21")
    pub declared_range: String,
}

impl DependencyDeclaration {
    /// Creates a new declaration
    pub fn new(name: impl Into<String>, declared_range: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_range: declared_range.into(),
        }
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.declared_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_new() {
        let decl = DependencyDeclaration::new("lodash", "^4.17.21");
        assert_eq!(decl.name, "lodash");
        assert_eq!(decl.declared_range, "^4.17.21");
    }

    #[test]
    fn test_declaration_display() {
        let decl = DependencyDeclaration::new("@types/node", "~20.1.0");
        assert_eq!(decl.to_string(), "@types/node@~20.1.0");
    }
}

//! Core domain models for npmup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations read from the manifest
//! - Version comparison records produced by the classifier
//! - The ordered batch of updatable dependencies

mod declaration;
mod version_record;

pub use declaration::DependencyDeclaration;
pub use version_record::{UpdateBatch, VersionRecord};

//! Update classification and command construction
//!
//! This module provides:
//! - The updatability rule, isolated behind `UpdatePolicy`
//! - The classifier that compares every declaration with the registry
//! - The install command builder for the updatable batch

mod classifier;
mod command;
mod policy;

pub use classifier::Classifier;
pub use command::{CommandBuilder, InstallCommand};
pub use policy::{create_policy, SemverPolicy, SubstringPolicy, UpdatePolicy};

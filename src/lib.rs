//! npmup - npm dependency update checker library
//!
//! This library provides the core functionality for checking the dependencies
//! of a package.json against the latest published versions and updating them:
//! - Manifest reading (package.json `dependencies`)
//! - Latest-version lookups against the npms.io API
//! - Updatability classification and install command construction
//! - The interactive update flow and install execution

pub mod cli;
pub mod domain;
pub mod error;
pub mod executor;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod prompt;
pub mod registry;
pub mod update;

//! Package manager selection
//!
//! This module provides:
//! - The supported Node.js package managers and their add verbs
//! - Detection of the package manager from lockfiles next to the manifest

use clap::ValueEnum;
use std::fmt;
use std::path::Path;

/// A Node.js package manager able to install packages by tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Verb that adds or upgrades named packages
    pub fn add_verb(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => "add",
        }
    }

    /// Detect the package manager from lockfiles in `working_dir`.
    ///
    /// Lockfiles are checked in order of preference; without any, npm is used.
    pub fn detect(working_dir: &Path) -> Self {
        let detected = if working_dir.join("pnpm-lock.yaml").exists() {
            PackageManager::Pnpm
        } else if working_dir.join("yarn.lock").exists() {
            PackageManager::Yarn
        } else if working_dir.join("bun.lockb").exists() || working_dir.join("bun.lock").exists()
        {
            PackageManager::Bun
        } else {
            PackageManager::Npm
        };

        tracing::debug!(
            "using {} for {}",
            detected.program(),
            working_dir.display()
        );
        detected
    }

    /// The explicit choice if there is one, otherwise detection
    pub fn resolve(explicit: Option<PackageManager>, working_dir: &Path) -> Self {
        explicit.unwrap_or_else(|| Self::detect(working_dir))
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

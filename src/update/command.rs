//! Install command construction

use crate::domain::UpdateBatch;
use crate::package_manager::PackageManager;
use std::fmt;

/// Tag appended to every package in the install command
const LATEST_TAG: &str = "latest";

/// A package-manager invocation, kept as program and arguments so it can be
/// spawned without a shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    program: String,
    args: Vec<String>,
}

impl InstallCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Builds the command that upgrades a batch to latest
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandBuilder {
    manager: PackageManager,
}

impl CommandBuilder {
    pub fn new(manager: PackageManager) -> Self {
        Self { manager }
    }

    /// Base verb followed by `<name>@latest` for each record, in batch order.
    /// An empty batch yields the bare base command.
    pub fn build(&self, batch: &UpdateBatch) -> InstallCommand {
        let mut args = vec![self.manager.add_verb().to_string()];
        args.extend(
            batch
                .iter()
                .map(|record| format!("{}@{}", record.name, LATEST_TAG)),
        );

        InstallCommand::new(self.manager.program(), args)
    }
}

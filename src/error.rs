//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues reading or parsing package.json
//! - RegistryError: Issues looking up the latest version of a package
//! - ExecutionError: The install command could not be run at all
//! - PromptError: Issues asking the user for a decision
//!
//! A non-zero exit of a spawned install command is not an error here. It is
//! reported as the `Failed` outcome of the orchestrator.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Install command execution errors
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// User prompt errors
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Failed to write to the output stream
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing error
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },

    /// The manifest has no `dependencies` object
    #[error("no dependencies object found in {path}")]
    MissingDependencies { path: PathBuf },

    /// A dependency whose declared range is not a string
    #[error("invalid version range for '{name}' in {path}: expected a string")]
    InvalidRange { path: PathBuf, name: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },

    /// The registry base URL cannot carry a package path
    #[error("invalid registry url '{url}'")]
    InvalidRegistryUrl { url: String },
}

/// Errors related to running the install command
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process could not be started
    #[error("failed to execute '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process did not finish within the configured timeout
    #[error("'{command}' did not finish within {}s", timeout.as_secs())]
    TimedOut { command: String, timeout: Duration },
}

/// Errors related to interactive prompts
#[derive(Error, Debug)]
pub enum PromptError {
    /// No terminal is attached to answer the prompt
    #[error("cannot ask '{question}' without a terminal; pass --update to apply updates non-interactively")]
    NotInteractive { question: String },

    /// Terminal IO failed while prompting
    #[error("prompt failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingDependencies error
    pub fn missing_dependencies(path: impl Into<PathBuf>) -> Self {
        ManifestError::MissingDependencies { path: path.into() }
    }

    /// Creates a new InvalidRange error
    pub fn invalid_range(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        ManifestError::InvalidRange {
            path: path.into(),
            name: name.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl ExecutionError {
    /// Creates a new SpawnFailed error
    pub fn spawn_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        ExecutionError::SpawnFailed {
            command: command.into(),
            source,
        }
    }
}

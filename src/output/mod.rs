//! Output formatting for the update flow
//!
//! This module provides:
//! - The summary line and the table of updatable modules
//! - The messages printed at each step of the interactive flow

mod text;

pub use text::{TextReport, VersionChangeType};

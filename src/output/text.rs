//! Text output for human-readable display
//!
//! This module provides:
//! - Summary count and an aligned table of updatable modules
//! - Semantic version change type indication (major/minor/patch)
//! - Messages for each terminal state of the update flow

use crate::domain::{UpdateBatch, VersionRecord};
use crate::update::InstallCommand;
use colored::Colorize;
use std::io::Write;

/// Column headers of the update table
const HEADERS: [&str; 4] = ["Module", "Current", "Latest", "Change"];

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between a declared range and a version.
    ///
    /// Range operators are stripped from the declared side, so `^1.2.0` is
    /// compared as `1.2.0`.
    pub fn from_versions(declared: &str, latest: &str) -> Self {
        let parse = |v: &str| -> Option<(u64, u64, u64)> {
            let v = v.trim_start_matches(['^', '~', '>', '<', '=', 'v', ' ']);
            // Split by . and - to handle prerelease suffixes
            let parts: Vec<&str> = v.split(['.', '-']).collect();
            match parts.as_slice() {
                [major, minor, patch, ..] => {
                    Some((major.parse().ok()?, minor.parse().ok()?, patch.parse().ok()?))
                }
                [major, minor] => Some((major.parse().ok()?, minor.parse().ok()?, 0)),
                [major] => Some((major.parse().ok()?, 0, 0)),
                [] => None,
            }
        };

        match (parse(declared), parse(latest)) {
            (Some((old_major, old_minor, old_patch)), Some((new_major, new_minor, new_patch))) => {
                if new_major != old_major {
                    VersionChangeType::Major
                } else if new_minor != old_minor {
                    VersionChangeType::Minor
                } else if new_patch != old_patch {
                    VersionChangeType::Patch
                } else {
                    VersionChangeType::Unknown
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }

    /// Get the display label with color, padded to `width`
    fn colored_label(&self, width: usize) -> String {
        let padded = format!("{:width$}", self.label(), width = width);
        match self {
            VersionChangeType::Major => padded.red().bold().to_string(),
            VersionChangeType::Minor => padded.yellow().to_string(),
            VersionChangeType::Patch => padded.green().to_string(),
            VersionChangeType::Unknown => padded.dimmed().to_string(),
        }
    }
}

/// Text writer for every message of the update flow
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    /// Whether to use colors
    color: bool,
}

impl TextReport {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// "<n> modules can be updated."
    pub fn write_summary(&self, updatable: usize, writer: &mut dyn Write) -> std::io::Result<()> {
        let noun = if updatable == 1 { "module" } else { "modules" };
        let line = format!("{} {} can be updated.", updatable, noun);
        if self.color {
            writeln!(writer, "{}", line.bold())
        } else {
            writeln!(writer, "{}", line)
        }
    }

    /// Aligned table of the batch; writes nothing for an empty batch
    pub fn write_table(&self, batch: &UpdateBatch, writer: &mut dyn Write) -> std::io::Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let rows: Vec<(&VersionRecord, VersionChangeType)> = batch
            .iter()
            .map(|r| {
                (
                    r,
                    VersionChangeType::from_versions(&r.declared_range, &r.latest_version),
                )
            })
            .collect();

        let name_w = rows
            .iter()
            .map(|(r, _)| r.name.len())
            .chain([HEADERS[0].len()])
            .max()
            .unwrap_or(0);
        let current_w = rows
            .iter()
            .map(|(r, _)| r.declared_range.len())
            .chain([HEADERS[1].len()])
            .max()
            .unwrap_or(0);
        let latest_w = rows
            .iter()
            .map(|(r, _)| r.latest_version.len())
            .chain([HEADERS[2].len()])
            .max()
            .unwrap_or(0);
        let change_w = rows
            .iter()
            .map(|(_, c)| c.label().len())
            .chain([HEADERS[3].len()])
            .max()
            .unwrap_or(0);

        let header = format!(
            "  {:name_w$}  {:current_w$}  {:latest_w$}  {:change_w$}",
            HEADERS[0], HEADERS[1], HEADERS[2], HEADERS[3]
        );
        if self.color {
            writeln!(writer, "{}", header.trim_end().underline())?;
        } else {
            writeln!(writer, "{}", header.trim_end())?;
        }

        for (record, change) in &rows {
            if self.color {
                writeln!(
                    writer,
                    "  {}  {}  {}  {}",
                    format!("{:name_w$}", record.name),
                    format!("{:current_w$}", record.declared_range).dimmed(),
                    format!("{:latest_w$}", record.latest_version)
                        .bright_white()
                        .bold(),
                    change.colored_label(change_w)
                )?;
            } else {
                let line = format!(
                    "  {:name_w$}  {:current_w$}  {:latest_w$}  {}",
                    record.name,
                    record.declared_range,
                    record.latest_version,
                    change.label()
                );
                writeln!(writer, "{}", line.trim_end())?;
            }
        }

        Ok(())
    }

    /// Declined path: show the command the user can run later
    pub fn write_suggestion(
        &self,
        command: &InstallCommand,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "Okay. In case you change your mind, run:")?;
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "  {}", command.to_string().cyan())?;
        } else {
            writeln!(writer, "  {}", command)?;
        }
        writeln!(writer)
    }

    /// Update-some path, which has no selection flow
    pub fn write_partial_unsupported(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        let message = "Updating a selection of modules is not supported yet.";
        writeln!(writer)?;
        if self.color {
            writeln!(writer, "{}", message.yellow())
        } else {
            writeln!(writer, "{}", message)
        }
    }

    /// Install succeeded; echoes the command's output
    pub fn write_success(&self, stdout: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        let message = "Modules updated.";
        if self.color {
            writeln!(writer, "{} {}", "✓".green(), message.green().bold())?;
        } else {
            writeln!(writer, "{}", message)?;
        }
        if !stdout.trim().is_empty() {
            writeln!(writer, "Here's the log:")?;
            writeln!(writer, "{}", stdout.trim_end())?;
        }
        Ok(())
    }

    /// Warnings the user asked to see
    pub fn write_warnings(&self, stderr: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", stderr.trim_end().yellow())
        } else {
            writeln!(writer, "{}", stderr.trim_end())
        }
    }

    /// Install failed; echoes the diagnostic stream
    pub fn write_failure(
        &self,
        exit_code: i32,
        diagnostic: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let message = format!("Something went wrong (exit code {}).", exit_code);
        if self.color {
            writeln!(writer, "{} {}", "✗".red(), message.red().bold())?;
            writeln!(writer, "{}", diagnostic.trim_end().red())
        } else {
            writeln!(writer, "{}", message)?;
            writeln!(writer, "{}", diagnostic.trim_end())
        }
    }

    pub fn write_done(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer)?;
        writeln!(writer, "All done.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyDeclaration;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&TextReport, &mut Vec<u8>) -> std::io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&TextReport::new(false), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn batch() -> UpdateBatch {
        let records = vec![
            VersionRecord::new(&DependencyDeclaration::new("react", "^17.0.2"), "18.3.1", true),
            VersionRecord::new(&DependencyDeclaration::new("zod", "^3.23.8"), "3.23.8", false),
            VersionRecord::new(&DependencyDeclaration::new("axios", "~1.6.0"), "1.7.2", true),
        ];
        UpdateBatch::from_records(&records)
    }

    #[test]
    fn test_change_type_from_versions() {
        assert_eq!(
            VersionChangeType::from_versions("^1.2.3", "2.0.0"),
            VersionChangeType::Major
        );
        assert_eq!(
            VersionChangeType::from_versions("~1.2.3", "1.3.0"),
            VersionChangeType::Minor
        );
        assert_eq!(
            VersionChangeType::from_versions(">=1.2.3", "1.2.4"),
            VersionChangeType::Patch
        );
        assert_eq!(
            VersionChangeType::from_versions("latest", "1.2.4"),
            VersionChangeType::Unknown
        );
        assert_eq!(
            VersionChangeType::from_versions("^2", "3.0.0"),
            VersionChangeType::Major
        );
    }

    #[test]
    fn test_change_type_label() {
        assert_eq!(VersionChangeType::Major.label(), "major");
        assert_eq!(VersionChangeType::Unknown.label(), "?");
    }

    #[test]
    fn test_summary_plural_and_singular() {
        assert_eq!(
            render(|r, w| r.write_summary(2, w)),
            "2 modules can be updated.\n"
        );
        assert_eq!(
            render(|r, w| r.write_summary(0, w)),
            "0 modules can be updated.\n"
        );
        assert_eq!(
            render(|r, w| r.write_summary(1, w)),
            "1 module can be updated.\n"
        );
    }

    #[test]
    fn test_table_lists_batch_in_order() {
        let out = render(|r, w| r.write_table(&batch(), w));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  Module  Current  Latest  Change");
        assert_eq!(lines[1], "  react   ^17.0.2  18.3.1  major");
        assert_eq!(lines[2], "  axios   ~1.6.0   1.7.2   minor");
    }

    #[test]
    fn test_table_empty_batch_writes_nothing() {
        let out = render(|r, w| r.write_table(&UpdateBatch::default(), w));
        assert!(out.is_empty());
    }

    #[test]
    fn test_suggestion_contains_command() {
        let command = InstallCommand::new(
            "npm",
            vec!["install".to_string(), "react@latest".to_string()],
        );
        let out = render(|r, w| r.write_suggestion(&command, w));
        assert!(out.contains("In case you change your mind"));
        assert!(out.contains("  npm install react@latest\n"));
    }

    #[test]
    fn test_success_echoes_stdout() {
        let out = render(|r, w| r.write_success("added 2 packages\n", w));
        assert!(out.starts_with("Modules updated.\n"));
        assert!(out.contains("added 2 packages"));
    }

    #[test]
    fn test_success_without_output() {
        let out = render(|r, w| r.write_success("", w));
        assert_eq!(out, "Modules updated.\n");
    }

    #[test]
    fn test_failure_echoes_diagnostic() {
        let out = render(|r, w| r.write_failure(1, "ENOENT\n", w));
        assert!(out.contains("exit code 1"));
        assert!(out.ends_with("ENOENT\n"));
    }

    #[test]
    fn test_colored_output_keeps_text() {
        let mut buf = Vec::new();
        TextReport::new(true).write_table(&batch(), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("react"));
        assert!(out.contains("18.3.1"));
    }
}

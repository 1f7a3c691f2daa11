//! Update orchestrator for the interactive upgrade flow
//!
//! This module provides:
//! - The state machine run after classification:
//!   report → decide → build command → execute → report outcome
//! - Non-interactive mode (`--update`) that skips every prompt
//! - Outcome classification of the install run (success, warnings, failure)
//!
//! Terminal states write their message when they are entered. A non-zero exit
//! of the install command ends in `Failed` and is not an error; only failing to
//! spawn it, failing to prompt, or failing to write output is.

use crate::domain::{UpdateBatch, VersionRecord};
use crate::error::{AppError, ExecutionError};
use crate::executor::{CommandExecutor, ExecutionOutcome};
use crate::output::TextReport;
use crate::progress::Progress;
use crate::prompt::{Decider, Question};
use crate::update::{CommandBuilder, InstallCommand};
use std::io::Write;

/// States of the update flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Idle,
    /// Summary and table written
    Reported,
    /// Waiting for "Update all?"
    AwaitingAllDecision,
    /// Waiting for "Update some?"
    AwaitingSomeDecision,
    /// User declined; the command was printed as a suggestion
    Declined,
    /// User asked for a partial update, which is not available
    PartialUnsupported,
    /// User accepted the update
    Confirmed,
    /// Install command running
    Executing,
    Succeeded,
    SucceededWithWarnings,
    Failed,
    Done,
}

impl State {
    /// Whether the state ends the flow (it is always followed by `Done`)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            State::Declined
                | State::PartialUnsupported
                | State::Succeeded
                | State::SucceededWithWarnings
                | State::Failed
        )
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The batch was empty; nothing was asked or run
    NothingToUpdate,
    /// The user declined; `suggestion` was printed instead of run
    Declined { suggestion: InstallCommand },
    /// The user asked to pick a subset of updates
    PartialUnsupported,
    /// The install command exited 0 with nothing on stderr
    Succeeded { stdout: String },
    /// The install command exited 0 but wrote to stderr
    SucceededWithWarnings {
        stdout: String,
        warnings: String,
        /// Whether the user chose to see the warnings
        shown: bool,
    },
    /// The install command exited non-zero
    Failed { exit_code: i32, diagnostic: String },
}

/// Result of one orchestrator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Every state visited, starting with `Idle` and ending with `Done`
    pub transitions: Vec<State>,
    pub outcome: Outcome,
}

impl RunReport {
    /// The last state before `Done`
    pub fn final_state(&self) -> State {
        self.transitions
            .iter()
            .rev()
            .copied()
            .find(|s| *s != State::Done)
            .unwrap_or(State::Idle)
    }

    /// Whether the install command ran and failed
    pub fn is_failure(&self) -> bool {
        matches!(self.outcome, Outcome::Failed { .. })
    }
}

/// Configuration for the orchestrator
#[derive(Debug, Clone, Copy)]
pub struct OrchestratorConfig {
    /// Apply updates without asking (`--update`)
    pub auto_update: bool,
    /// Show a spinner while the install command runs
    pub show_progress: bool,
    /// Whether to use colors in output
    pub color: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            auto_update: false,
            show_progress: true,
            color: true,
        }
    }
}

/// Drives the update flow for one run
pub struct UpdateOrchestrator<'a> {
    decider: &'a mut dyn Decider,
    executor: &'a dyn CommandExecutor,
    builder: CommandBuilder,
    config: OrchestratorConfig,
    report: TextReport,
}

impl<'a> UpdateOrchestrator<'a> {
    pub fn new(
        decider: &'a mut dyn Decider,
        executor: &'a dyn CommandExecutor,
        builder: CommandBuilder,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            decider,
            executor,
            builder,
            config,
            report: TextReport::new(config.color),
        }
    }

    /// Run the flow for classified `records`, writing messages to `writer`
    pub async fn run(
        &mut self,
        records: &[VersionRecord],
        writer: &mut dyn Write,
    ) -> Result<RunReport, AppError> {
        let batch = UpdateBatch::from_records(records);
        let command = self.builder.build(&batch);

        let mut transitions = vec![State::Idle];
        let mut state = State::Idle;
        let mut outcome = Outcome::NothingToUpdate;

        while state != State::Done {
            let next = match state {
                State::Idle => {
                    self.report.write_summary(batch.len(), writer)?;
                    self.report.write_table(&batch, writer)?;
                    State::Reported
                }
                State::Reported => {
                    if batch.is_empty() {
                        State::Done
                    } else if self.config.auto_update {
                        State::Executing
                    } else {
                        State::AwaitingAllDecision
                    }
                }
                State::AwaitingAllDecision => {
                    if self.decider.confirm(Question::UpdateAll)? {
                        State::Confirmed
                    } else {
                        State::AwaitingSomeDecision
                    }
                }
                State::AwaitingSomeDecision => {
                    if self.decider.confirm(Question::UpdateSome)? {
                        self.report.write_partial_unsupported(writer)?;
                        outcome = Outcome::PartialUnsupported;
                        State::PartialUnsupported
                    } else {
                        self.report.write_suggestion(&command, writer)?;
                        outcome = Outcome::Declined {
                            suggestion: command.clone(),
                        };
                        State::Declined
                    }
                }
                State::Confirmed => State::Executing,
                State::Executing => {
                    writeln!(writer)?;
                    writeln!(writer, "Running {}", command)?;
                    writer.flush()?;
                    let result = self.execute(&command).await?;
                    let terminal = classify_execution(&result);
                    outcome = self.report_execution(terminal, result, writer)?;
                    terminal
                }
                State::Declined
                | State::PartialUnsupported
                | State::Succeeded
                | State::SucceededWithWarnings
                | State::Failed => State::Done,
                State::Done => State::Done,
            };

            tracing::debug!("{:?} -> {:?}", state, next);
            if next.is_terminal() {
                tracing::info!("update flow ended in {:?}", next);
            }
            transitions.push(next);
            state = next;
        }

        Ok(RunReport {
            transitions,
            outcome,
        })
    }

    /// Run the install command behind a spinner
    async fn execute(&self, command: &InstallCommand) -> Result<ExecutionOutcome, ExecutionError> {
        let mut progress = Progress::new(self.config.show_progress);
        progress.spinner("Updating modules...");
        let result = self.executor.execute(command).await;
        progress.finish_and_clear();

        result
    }

    /// Write the messages of an execution terminal state
    fn report_execution(
        &mut self,
        terminal: State,
        result: ExecutionOutcome,
        writer: &mut dyn Write,
    ) -> Result<Outcome, AppError> {
        let outcome = match terminal {
            State::Failed => {
                self.report
                    .write_failure(result.exit_code, &result.stderr, writer)?;
                Outcome::Failed {
                    exit_code: result.exit_code,
                    diagnostic: result.stderr,
                }
            }
            State::SucceededWithWarnings => {
                self.report.write_success(&result.stdout, writer)?;
                writer.flush()?;
                // --update never prompts; warnings are printed as-is
                let shown = self.config.auto_update
                    || self.decider.confirm(Question::ShowWarnings)?;
                if shown {
                    self.report.write_warnings(&result.stderr, writer)?;
                }
                Outcome::SucceededWithWarnings {
                    stdout: result.stdout,
                    warnings: result.stderr,
                    shown,
                }
            }
            _ => {
                self.report.write_success(&result.stdout, writer)?;
                Outcome::Succeeded {
                    stdout: result.stdout,
                }
            }
        };

        self.report.write_done(writer)?;
        Ok(outcome)
    }
}

/// Map an install run onto its terminal state
fn classify_execution(result: &ExecutionOutcome) -> State {
    if !result.succeeded() {
        State::Failed
    } else if result.has_warnings() {
        State::SucceededWithWarnings
    } else {
        State::Succeeded
    }
}

// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Check execution and reporting.
//!
//! Provides the [`Check`] trait that every smoke check implements, and the [`Suite`] type that
//! runs a list of checks to produce a [`Report`] of their outcomes.

use crate::{arith::Addition, seq::Aggregate, text::Concatenation, Error, Result};

use anyhow::anyhow;
use beau_collector::BeauCollector as _;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use tracing::{info, instrument, warn};

/// Named smoke check.
pub trait Check: Debug {
    /// Name of check used for reporting.
    fn name(&self) -> &str;

    /// Execute check.
    ///
    /// # Errors
    ///
    /// - Will fail if actual value of check does not hold against its expectation.
    fn run(&self) -> Result<()>;
}

/// Ordered collection of checks to run together.
#[derive(Debug, Default)]
pub struct Suite {
    checks: Vec<Box<dyn Check>>,
}

impl Suite {
    /// Construct new empty suite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct suite of default checks.
    ///
    /// Runs addition, concatenation, and aggregate checks in that order.
    pub fn default_checks() -> Self {
        Self::new()
            .with_check(Addition::default())
            .with_check(Concatenation::default())
            .with_check(Aggregate::default())
    }

    /// Append check to end of suite.
    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Number of checks in suite.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Determine if suite has no checks.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Run all checks of suite.
    ///
    /// # Invariants
    ///
    /// - Every check is run, even if previous checks failed.
    /// - Outcomes are reported in the same order checks were added.
    #[instrument(skip(self), level = "debug")]
    pub fn run(&self) -> Report {
        let mut outcomes = Vec::with_capacity(self.checks.len());
        for check in &self.checks {
            let status = match check.run() {
                Ok(()) => {
                    info!("Check {:?} passed", check.name());
                    Status::Passed
                }
                Err(error) => {
                    warn!("Check {:?} failed: {error}", check.name());
                    Status::Failed(error)
                }
            };
            outcomes.push(Outcome { name: check.name().into(), status });
        }

        Report { outcomes }
    }
}

/// Outcome of a single check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Name of check.
    pub name: String,

    /// Result status of check.
    pub status: Status,
}

/// Pass or fail status of check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// Check held.
    Passed,

    /// Check did not hold.
    Failed(Error),
}

impl Status {
    pub fn is_passed(&self) -> bool {
        matches!(self, Status::Passed)
    }
}

impl Display for Status {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self {
            Status::Passed => fmt.write_str("passed"),
            Status::Failed(error) => write!(fmt, "failed: {error}"),
        }
    }
}

/// Ordered outcomes of a suite run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    /// All outcomes in run order.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Iterate through outcomes of checks that passed.
    pub fn passed(&self) -> impl Iterator<Item = &Outcome> + '_ {
        self.outcomes.iter().filter(|outcome| outcome.status.is_passed())
    }

    /// Iterate through outcomes of checks that failed.
    pub fn failed(&self) -> impl Iterator<Item = &Outcome> + '_ {
        self.outcomes.iter().filter(|outcome| !outcome.status.is_passed())
    }

    /// Determine if every check passed.
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Render report as table.
    pub fn render(&self) -> String {
        let mut builder = tabled::builder::Builder::new();
        builder.push_record(["check", "outcome"]);
        for outcome in &self.outcomes {
            builder.push_record([outcome.name.clone(), outcome.status.to_string()]);
        }

        let mut table = builder.build();
        table.with(tabled::settings::Style::ascii_rounded());
        table.to_string()
    }

    /// Convert report into single result.
    ///
    /// # Errors
    ///
    /// - Will fail if any check failed.
    ///     - All failures are reported in one-shot.
    pub fn into_result(self) -> anyhow::Result<()> {
        info!("Smoke check report:\n{}", self.render());

        // INVARIANT: Collect and report _all_ failures encountered.
        let _ = self
            .outcomes
            .into_iter()
            .map(|outcome| match outcome.status {
                Status::Passed => Ok(()),
                Status::Failed(error) => Err(anyhow!("Check {:?} failed: {error}", outcome.name)),
            })
            .bcollect::<Vec<_>>()?;

        Ok(())
    }
}

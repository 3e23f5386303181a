// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Sequence aggregate check.

use crate::{suite::Check, Error, Result};

use tracing::{debug, instrument};

/// Length and total of an integer sequence.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub len: usize,
    pub sum: i64,
}

/// Compute length and total of integer sequence.
///
/// # Errors
///
/// - Return [`Error::Overflow`] if total does not fit in an `i64`.
///
/// [`Error::Overflow`]: crate::Error::Overflow
#[instrument(level = "debug")]
pub fn summarize(values: &[i64]) -> Result<Summary> {
    let sum = values
        .iter()
        .try_fold(0i64, |total, value| total.checked_add(*value))
        .ok_or(Error::Overflow { check: Aggregate::NAME.into() })?;

    Ok(Summary { len: values.len(), sum })
}

/// Check length, membership, and total of integer sequence.
///
/// # Invariants
///
/// - Length is checked first, membership second, and total last.
/// - Stop at first failed expectation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    pub values: Vec<i64>,
    pub expect_len: usize,
    pub member: i64,
    pub expect_sum: i64,
}

impl Aggregate {
    pub const NAME: &'static str = "aggregate";

    pub fn new(
        values: impl IntoIterator<Item = i64>,
        expect_len: usize,
        member: i64,
        expect_sum: i64,
    ) -> Self {
        Self { values: values.into_iter().collect(), expect_len, member, expect_sum }
    }
}

impl Default for Aggregate {
    fn default() -> Self {
        Self::new([1, 2, 3, 4, 5], 5, 3, 15)
    }
}

impl Check for Aggregate {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self) -> Result<()> {
        if self.values.len() != self.expect_len {
            return Err(Error::mismatch(Self::NAME, self.expect_len, self.values.len()));
        }

        if !self.values.contains(&self.member) {
            return Err(Error::MissingMember { check: Self::NAME.into(), member: self.member });
        }

        let summary = summarize(&self.values)?;
        debug!("Summarized {:?} as {summary:?}", self.values);
        if summary.sum != self.expect_sum {
            return Err(Error::mismatch(Self::NAME, self.expect_sum, summary.sum));
        }

        Ok(())
    }
}

// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Integer arithmetic check.

use crate::{suite::Check, Error, Result};

use tracing::{debug, instrument};

/// Sum two integers.
///
/// # Errors
///
/// - Return [`Error::Overflow`] if sum does not fit in an `i64`.
///
/// [`Error::Overflow`]: crate::Error::Overflow
#[instrument(level = "debug")]
pub fn add(left: i64, right: i64) -> Result<i64> {
    left.checked_add(right).ok_or(Error::Overflow { check: Addition::NAME.into() })
}

/// Check that two integers sum to an expected total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addition {
    pub left: i64,
    pub right: i64,
    pub expect: i64,
}

impl Addition {
    pub const NAME: &'static str = "addition";

    pub fn new(left: i64, right: i64, expect: i64) -> Self {
        Self { left, right, expect }
    }
}

impl Default for Addition {
    fn default() -> Self {
        Self::new(2, 2, 4)
    }
}

impl Check for Addition {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self) -> Result<()> {
        let actual = add(self.left, self.right)?;
        debug!("{} + {} = {actual}", self.left, self.right);
        if actual != self.expect {
            return Err(Error::mismatch(Self::NAME, self.expect, actual));
        }

        Ok(())
    }
}

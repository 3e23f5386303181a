// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! String concatenation check.
//!
//! Parts are joined exactly as given. Nothing is inserted between them, so any separator must be
//! passed in as a part of its own.

use crate::{suite::Check, Error, Result};

use tracing::{debug, instrument};

/// Join string parts in order.
#[instrument(skip(parts), level = "debug")]
pub fn concat(parts: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    parts.into_iter().fold(String::new(), |mut joined, part| {
        joined.push_str(part.as_ref());
        joined
    })
}

/// Check that string parts join into an expected string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenation {
    pub parts: Vec<String>,
    pub expect: String,
}

impl Concatenation {
    pub const NAME: &'static str = "concatenation";

    pub fn new(
        parts: impl IntoIterator<Item = impl Into<String>>,
        expect: impl Into<String>,
    ) -> Self {
        Self { parts: parts.into_iter().map(Into::into).collect(), expect: expect.into() }
    }
}

impl Default for Concatenation {
    fn default() -> Self {
        Self::new(["Hello", " ", "World"], "Hello World")
    }
}

impl Check for Concatenation {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn run(&self) -> Result<()> {
        let actual = concat(&self.parts);
        debug!("Joined {:?} into {actual:?}", self.parts);
        if actual != self.expect {
            return Err(Error::mismatch(Self::NAME, &self.expect, actual));
        }

        Ok(())
    }
}

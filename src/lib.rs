// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Host-side smoke checks for a development environment.
//!
//! Before trusting a freshly provisioned machine with real work, it helps to know that the
//! toolchain and test runner on it behave the way everybody expects. This crate bundles three
//! deliberately trivial checks against language built-ins for exactly that purpose:
//!
//! - __Addition__: two integers sum to a known total, see [`arith`].
//! - __Concatenation__: string parts join into a known string, see [`text`].
//! - __Aggregate__: a fixed sequence has a known length, member, and sum, see [`seq`].
//!
//! ## Running Checks
//!
//! Every check implements the [`Check`] trait, giving it a name and a fallible `run` operation.
//! Checks are independent of each other. A [`Suite`] runs a list of checks one after another,
//! recording each outcome into a [`Report`]. A failing check never stops the rest of the suite from
//! running, so the report always contains one outcome per check. The report can be rendered as a
//! table, or turned into a single error that lists _every_ failure at once.
//!
//! [`Check`]: crate::suite::Check
//! [`Suite`]: crate::suite::Suite
//! [`Report`]: crate::suite::Report

#![warn(
    clippy::complexity,
    clippy::correctness,
    missing_debug_implementations,
    rust_2021_compatibility
)]

pub mod arith;
pub mod seq;
pub mod suite;
pub mod text;


use std::fmt::Debug;

/// Failure of a single smoke check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Actual value of a check differs from its expected value.
    #[error("{check}: expected {expect}, got {actual}")]
    Mismatch { check: String, expect: String, actual: String },

    /// Sequence does not contain an expected member.
    #[error("{check}: sequence does not contain {member}")]
    MissingMember { check: String, member: i64 },

    /// Integer arithmetic overflowed.
    #[error("{check}: integer overflow")]
    Overflow { check: String },
}

impl Error {
    /// Construct [`Error::Mismatch`] from any debug printable pair of values.
    pub fn mismatch(check: impl Into<String>, expect: impl Debug, actual: impl Debug) -> Self {
        Self::Mismatch {
            check: check.into(),
            expect: format!("{expect:?}"),
            actual: format!("{actual:?}"),
        }
    }
}

/// Result alias using crate [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

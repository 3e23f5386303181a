// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::init_tracing;
use devenv_smoke::{
    arith::Addition,
    seq::Aggregate,
    suite::{Status, Suite},
    text::Concatenation,
    Error,
};

use anyhow::Result;
use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;

#[test]
fn default_suite_passes() -> Result<()> {
    init_tracing();
    let report = Suite::default_checks().run();
    assert!(report.is_success());
    report.into_result()
}

#[test_case(
    Suite::new().with_check(Addition::new(2, 2, 5)),
    vec![Status::Failed(Error::mismatch("addition", 5, 4))];
    "addition mismatch"
)]
#[test_case(
    Suite::new()
        .with_check(Concatenation::new(["Hello", "World"], "Hello World"))
        .with_check(Aggregate::default()),
    vec![
        Status::Failed(Error::mismatch("concatenation", "Hello World", "HelloWorld")),
        Status::Passed,
    ];
    "failure does not stop suite"
)]
#[test_case(
    Suite::new().with_check(Aggregate::new([1, 2, 4, 5, 6], 5, 3, 18)),
    vec![Status::Failed(Error::MissingMember { check: "aggregate".into(), member: 3 })];
    "missing member"
)]
#[test]
fn suite_reports_failures(suite: Suite, expect: Vec<Status>) {
    init_tracing();
    let report = suite.run();
    let result = report.outcomes().iter().map(|outcome| outcome.status.clone()).collect::<Vec<_>>();
    pretty_assert_eq!(result, expect);
    assert!(report.into_result().is_err());
}

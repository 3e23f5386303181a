// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::init_tracing;
use devenv_smoke::{arith::*, seq::*, suite::Check, text::*};

use anyhow::Result;
use pretty_assertions::assert_eq as pretty_assert_eq;

#[test]
fn addition_is_correct() -> Result<()> {
    init_tracing();
    pretty_assert_eq!(add(2, 2)?, 4);
    Addition::default().run()?;
    Ok(())
}

#[test]
fn string_concatenation_works() -> Result<()> {
    init_tracing();
    let result = concat(["Hello", " ", "World"]);
    pretty_assert_eq!(result, "Hello World");
    Concatenation::default().run()?;
    Ok(())
}

#[test]
fn list_operations_work() -> Result<()> {
    init_tracing();
    let list: Vec<i64> = vec![1, 2, 3, 4, 5];
    let summary = summarize(&list)?;
    pretty_assert_eq!(summary.len, 5);
    assert!(list.contains(&3));
    pretty_assert_eq!(summary.sum, 15);
    Aggregate::default().run()?;
    Ok(())
}

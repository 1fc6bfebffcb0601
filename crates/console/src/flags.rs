// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flag extraction: separates `?abc` / `??name` arguments from positional
//! arguments.

use std::collections::BTreeSet;

use crate::parse_error::ParseError;
use crate::token::{Span, FLAG_PREFIX};

/// An argument together with where it came from in the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArgument {
    pub text: String,
    pub span: Span,
}

impl RawArgument {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self { text: text.into(), span }
    }
}

/// Remove flag tokens from `args` and return the collected flag names.
///
/// Arguments are visited from last to first and removed by index; visiting
/// in reverse keeps the indices of not-yet-visited arguments stable.
/// Positional arguments keep their relative order. A flag already present
/// in the set still consumes its argument.
pub fn extract_flags(args: &mut Vec<RawArgument>) -> Result<BTreeSet<String>, ParseError> {
    let mut flags = BTreeSet::new();

    for index in (0..args.len()).rev() {
        let Some(names) = flag_names(&args[index])? else {
            continue;
        };
        flags.extend(names);
        args.remove(index);
    }

    Ok(flags)
}

/// Decode one argument: `None` if it is positional, the flag names if it is
/// a flag token, or an error if it looks like a flag but is malformed.
fn flag_names(arg: &RawArgument) -> Result<Option<Vec<String>>, ParseError> {
    let mut chars = arg.text.chars();
    if chars.next() != Some(FLAG_PREFIX) {
        return Ok(None);
    }
    let rest = chars.as_str();
    if rest.is_empty() {
        return Ok(None);
    }

    let invalid = || ParseError::InvalidFlag { flag: arg.text.clone(), span: arg.span };

    if let Some(literal) = rest.strip_prefix(FLAG_PREFIX) {
        if !literal.is_empty() {
            if !literal.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(invalid());
            }
            return Ok(Some(vec![literal.to_string()]));
        }
    }

    if !rest.chars().all(char::is_alphabetic) {
        return Err(invalid());
    }
    Ok(Some(rest.chars().map(String::from).collect()))
}

#[cfg(test)]
#[path = "flags_tests.rs"]
mod tests;

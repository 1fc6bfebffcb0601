// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer tests split by concern.

#[macro_use]
mod macros;

mod basic;
mod errors;
mod lossy;
mod properties;
mod quoting;
mod separators;

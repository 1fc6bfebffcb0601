// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! devcon-console: command-line grammar engine for developer consoles.
//!
//! A raw line such as `spawn crate ?f ; say "hello there" & quit` is lexed
//! once into spanned tokens, split into a [`Chain`] of [`Invocation`]s on `;`
//! (always run the next command) and `&` (run the next command only after a
//! success), and executed through callbacks from a [`CommandRegistry`]. The
//! same token stream drives [`highlight`](highlight::highlight) for live
//! colouring.

mod console;
mod error;
pub mod exec;
mod flags;
pub mod highlight;
mod invocation;
mod lexer;
mod parse_error;
mod parser;
mod registry;
mod span;
mod token;

#[cfg(test)]
mod test_support;

pub use console::{Console, SharedRegistry};
pub use error::LexerError;
pub use exec::{execute, ExecOutput, InvocationTrace, Outcome};
pub use flags::{extract_flags, RawArgument};
pub use highlight::{HighlightTheme, Rgb};
pub use invocation::{Chain, Invocation};
pub use lexer::Lexer;
pub use parse_error::ParseError;
pub use parser::Parser;
pub use registry::{
    Callback, CommandDescriptor, CommandError, CommandLookup, CommandRegistry, CommandResult,
    RegistryError,
};
pub use span::{context_snippet, Span};
pub use token::{Token, TokenKind};

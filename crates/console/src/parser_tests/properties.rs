// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for chain resolution.

use proptest::prelude::*;

use crate::parser::Parser;
use crate::test_support::{registry, CallLog};

fn known_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("ok"), Just("echo"), Just("bad")]
}

fn plain_arg() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,6}".prop_map(String::from)
}

fn segment() -> impl Strategy<Value = (&'static str, Vec<String>)> {
    (known_name(), prop::collection::vec(plain_arg(), 0..4))
}

fn separator() -> impl Strategy<Value = char> {
    prop_oneof![Just(';'), Just('&')]
}

proptest! {
    /// Invariant: N known segments produce N invocations, each keeping its
    /// arguments, with independence following the preceding separator.
    #[test]
    fn segments_map_to_invocations(
        first in segment(),
        rest in prop::collection::vec((separator(), segment()), 0..5),
    ) {
        let mut input = format!("{} {}", first.0, first.1.join(" "));
        for (sep, (name, args)) in &rest {
            input.push_str(&format!(" {sep} {name} {}", args.join(" ")));
        }

        let registry = registry(&CallLog::default());
        let chain = Parser::parse(&input, &registry).unwrap();
        prop_assert_eq!(chain.len(), rest.len() + 1);

        prop_assert!(chain.invocations[0].independent);
        prop_assert_eq!(chain.invocations[0].name(), first.0);
        prop_assert_eq!(&chain.invocations[0].arguments, &first.1);

        for (inv, (sep, (name, args))) in chain.invocations[1..].iter().zip(&rest) {
            prop_assert_eq!(inv.name(), *name);
            prop_assert_eq!(&inv.arguments, args);
            prop_assert_eq!(inv.independent, *sep == ';');
        }
    }

    /// Invariant: arbitrary input either parses or fails; it never panics.
    #[test]
    fn parse_never_panics(input in "[a-z ?\";&\\\\]{0,32}") {
        let registry = registry(&CallLog::default());
        let _ = Parser::parse(&input, &registry);
    }
}

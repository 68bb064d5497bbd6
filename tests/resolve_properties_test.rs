//! Property tests for classification totality and determinism.
//!
//! `resolve` is a pure, total function over scalar literals: every string
//! classifies to exactly one tag, identical inputs classify identically,
//! and the string fallback is the only tag reachable without a pattern
//! match.

use implicitly::{NodeKind, Resolver, Tag};
use proptest::prelude::*;

proptest! {
    #[test]
    fn resolve_is_total(value in ".*") {
        let resolver = Resolver::new();
        // Must return without panicking for arbitrary input, including
        // multi-line and non-ASCII strings.
        let _ = resolver.resolve(NodeKind::Scalar, &value, true);
    }

    #[test]
    fn resolve_is_deterministic(value in ".*") {
        let resolver = Resolver::new();
        let first = resolver.resolve(NodeKind::Scalar, &value, true);
        let second = resolver.resolve(NodeKind::Scalar, &value, true);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn resolve_agrees_across_instances(value in ".*") {
        // The table is built the same way every time; two independently
        // constructed resolvers must agree on every input.
        let a = Resolver::new();
        let b = Resolver::new();
        prop_assert_eq!(
            a.resolve(NodeKind::Scalar, &value, true),
            b.resolve(NodeKind::Scalar, &value, true)
        );
    }

    #[test]
    fn collections_never_consult_the_literal(value in ".*") {
        let resolver = Resolver::new();
        prop_assert_eq!(resolver.resolve(NodeKind::Sequence, &value, true), Tag::Seq);
        prop_assert_eq!(resolver.resolve(NodeKind::Mapping, &value, true), Tag::Map);
    }

    #[test]
    fn non_implicit_scalars_are_strings(value in ".*") {
        let resolver = Resolver::new();
        prop_assert_eq!(resolver.resolve(NodeKind::Scalar, &value, false), Tag::Str);
    }

    #[test]
    fn alphabetic_words_fall_back_to_str(value in "[g-m][a-z]{0,16}") {
        // No default rule claims first characters g..m, so these literals
        // can only ever take the universal fallback.
        let resolver = Resolver::new();
        prop_assert_eq!(resolver.resolve(NodeKind::Scalar, &value, true), Tag::Str);
    }

    #[test]
    fn nonzero_decimal_runs_resolve_to_int(value in "[1-9][0-9]{0,11}") {
        // A plain decimal run is always an integer (Int is registered
        // before Float, so the tie-break never yields Float here).
        let resolver = Resolver::new();
        prop_assert_eq!(resolver.resolve(NodeKind::Scalar, &value, true), Tag::Int);
    }
}

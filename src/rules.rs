//! Default implicit-resolver rules and the fixed override list.
//!
//! The canonical YAML 1.1 rule set is declared here as data, in registration
//! order (order is observable: within a first-character bucket, the earliest
//! registered rule wins). Before any default registration reaches the table,
//! [`apply_overrides`] edits it:
//!
//! - `Float` is replaced with a stricter pattern that rejects a leading zero
//!   followed by further digits before the decimal point (`01.5` is not a
//!   float; `0.5` is), so octal-like literals never classify as floats.
//! - `Bool` is replaced with a pattern accepting only the `true`/`false`
//!   spelling families. The YAML 1.1 `on`/`off`/`yes`/`no` spellings are
//!   ambiguous with ordinary prose and feature-flag strings, and resolve to
//!   plain strings instead.
//! - `Timestamp` is suppressed entirely: a timestamp auto-detected here can
//!   be deserialized into a different in-memory representation than what a
//!   companion serializer later re-emits, silently breaking round-trips.
//!   Timestamps require an explicit tag.

use crate::tag::Tag;

/// A rule as declared, before regex compilation.
///
/// `first` follows the table's bucket convention: `None` registers under the
/// unconstrained bucket, `Some("")` under the empty-scalar bucket, and any
/// other string under each of its characters.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RuleSpec {
    pub tag: Tag,
    pub pattern: &'static str,
    pub first: Option<&'static str>,
}

/// Decimal, sexagesimal, infinity, and not-a-number float forms, with a
/// `(?:0|[1-9][0-9_]*)` integer part so `0` alone is accepted but `01.5`
/// falls through. Underscores are digit-group separators throughout.
const FLOAT_NO_LEADING_ZERO: &str = r"^(?:[-+]?(?:\.[0-9]+|(?:0|[1-9][0-9_]*)(?:\.[0-9_]*)?)(?:[eE][-+]?[0-9]+)?|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$";

/// Only the `true`/`false` families: lowercase, title-case, all-caps.
const BOOL_TRUE_FALSE_ONLY: &str = r"^(?:true|True|TRUE|false|False|FALSE)$";

/// The canonical YAML 1.1 implicit-resolver rule set, in registration order.
///
/// `Int` precedes `Float` deliberately: both patterns match a plain run of
/// digits, and the tie-break makes `123` an integer.
pub(crate) const DEFAULT_RULES: &[RuleSpec] = &[
    RuleSpec {
        tag: Tag::Bool,
        pattern: r"^(?:yes|Yes|YES|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF)$",
        first: Some("yYnNtTfFoO"),
    },
    RuleSpec {
        tag: Tag::Int,
        pattern: r"^(?:[-+]?0b[0-1_]+|[-+]?0[0-7_]+|[-+]?(?:0|[1-9][0-9_]*)|[-+]?0x[0-9a-fA-F_]+|[-+]?[1-9][0-9_]*(?::[0-5]?[0-9])+)$",
        first: Some("-+0123456789"),
    },
    RuleSpec {
        tag: Tag::Float,
        pattern: r"^(?:[-+]?(?:\.[0-9]+|[0-9][0-9_]*(?:\.[0-9_]*)?)(?:[eE][-+]?[0-9]+)?|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
        first: Some("-+0123456789."),
    },
    RuleSpec {
        tag: Tag::Merge,
        pattern: r"^(?:<<)$",
        first: Some("<"),
    },
    RuleSpec {
        tag: Tag::Null,
        pattern: r"^(?:~|null|Null|NULL| )$",
        first: Some("~nN\u{0}"),
    },
    RuleSpec {
        tag: Tag::Null,
        pattern: r"^$",
        first: None,
    },
    RuleSpec {
        tag: Tag::Timestamp,
        pattern: r"^(?:[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]|[0-9][0-9][0-9][0-9]-[0-9][0-9]?-[0-9][0-9]?(?:[Tt]|[ \t]+)[0-9][0-9]?:[0-9][0-9]:[0-9][0-9](?:\.[0-9]*)?(?:[ \t]*(?:Z|[-+][0-9][0-9]?(?::[0-9][0-9])?))?)$",
        first: Some("0123456789"),
    },
    RuleSpec {
        tag: Tag::Value,
        pattern: r"^(?:=)$",
        first: Some("="),
    },
    RuleSpec {
        tag: Tag::Yaml,
        pattern: r"^(?:!|&|\*)$",
        first: Some("!&*"),
    },
];

/// Edit a default registration before it reaches the table.
///
/// Returns the rule to actually register, or `None` to suppress the tag.
pub(crate) fn apply_overrides(rule: RuleSpec) -> Option<RuleSpec> {
    match rule.tag {
        Tag::Float => Some(RuleSpec {
            tag: Tag::Float,
            pattern: FLOAT_NO_LEADING_ZERO,
            first: Some("-+0123456789."),
        }),
        Tag::Bool => Some(RuleSpec {
            tag: Tag::Bool,
            pattern: BOOL_TRUE_FALSE_ONLY,
            first: Some("TtFf"),
        }),
        // Never auto-promote to timestamp; see module docs.
        Tag::Timestamp => None,
        _ => Some(rule),
    }
}

/// The default rule set with the override list applied, in registration
/// order. This is what [`Resolver::new`] feeds into the table.
///
/// [`Resolver::new`]: crate::Resolver::new
pub(crate) fn default_rules() -> impl Iterator<Item = RuleSpec> {
    DEFAULT_RULES.iter().copied().filter_map(apply_overrides)
}

// ============================================================================
// Tests
// ============================================================================

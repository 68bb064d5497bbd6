//! Implicit tag resolution: table construction and classification.
//!
//! The resolver owns a table of `(tag, pattern)` rules partitioned by the
//! first character of candidate input, so classifying a scalar only tries
//! the rules that could possibly match it. The table is populated once
//! (defaults plus any integrator registrations) and is read-only during
//! classification; [`Resolver::resolve`] takes `&self`, has no interior
//! mutability, and is safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use implicitly::{NodeKind, Resolver, Tag};
//!
//! let resolver = Resolver::new();
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "123", true), Tag::Int);
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "0.5", true), Tag::Float);
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "On", true), Tag::Str);
//! ```

use indexmap::IndexMap;
use regex::Regex;

use crate::error::ResolveError;
use crate::rules;
use crate::tag::{NodeKind, Tag};

/// Bucket key used for empty scalars and for rules registered with an empty
/// first-character set.
const EMPTY_KEY: char = '\0';

/// A compiled rule: the first full match in a bucket decides the tag.
#[derive(Debug, Clone)]
struct Rule {
    tag: Tag,
    pattern: Regex,
}

/// Resolves implicitly-tagged nodes to their semantic [`Tag`].
///
/// Construction registers the default YAML 1.1 rule set with this crate's
/// overrides applied (strict float, `true`/`false`-only bool, no timestamp
/// auto-detection). Additional rules may be registered before first use via
/// [`Resolver::register`].
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Rules bucketed by the first character they can match, in
    /// registration order within each bucket.
    buckets: IndexMap<char, Vec<Rule>>,
    /// Rules with no first-character constraint, tried after the bucket.
    unconstrained: Vec<Rule>,
}

impl Resolver {
    /// Build a resolver with the default rule set.
    pub fn new() -> Self {
        let mut resolver = Self {
            buckets: IndexMap::new(),
            unconstrained: Vec::new(),
        };
        for rule in rules::default_rules() {
            resolver
                .register(rule.tag, rule.pattern, rule.first)
                .expect("built-in rule patterns are valid");
        }
        resolver
    }

    /// Register an implicit-resolution rule.
    ///
    /// `pattern` must match the entire literal for the rule to apply; it is
    /// compiled with whole-string anchoring, so `search`-style partial
    /// matches never classify. `first` constrains which literals the rule
    /// is tried against:
    ///
    /// - `Some(chars)` - tried only for literals starting with one of
    ///   `chars`
    /// - `Some("")` - tried only for the empty literal
    /// - `None` - tried for any literal, after the first-character bucket
    ///
    /// Rules are tried in registration order; the first full match wins.
    /// A pattern that fails to compile aborts the registration.
    pub fn register(
        &mut self,
        tag: Tag,
        pattern: &str,
        first: Option<&str>,
    ) -> Result<(), ResolveError> {
        let anchored = format!(r"\A(?:{pattern})\z");
        let compiled =
            Regex::new(&anchored).map_err(|source| ResolveError::InvalidPattern { tag, source })?;
        let rule = Rule {
            tag,
            pattern: compiled,
        };
        match first {
            None => self.unconstrained.push(rule),
            Some("") => self.buckets.entry(EMPTY_KEY).or_default().push(rule),
            Some(chars) => {
                for ch in chars.chars() {
                    self.buckets.entry(ch).or_default().push(rule.clone());
                }
            }
        }
        Ok(())
    }

    /// Resolve a node to its semantic tag.
    ///
    /// For implicit scalars, tries the rules bucketed under the literal's
    /// first character, then the unconstrained rules, in registration
    /// order; an unmatched scalar resolves to [`Tag::Str`]. Sequences and
    /// mappings resolve to [`Tag::Seq`] and [`Tag::Map`] without any
    /// matching. When `implicit` is false the document supplied an explicit
    /// tag and only the node-kind default is returned.
    ///
    /// This never fails: every input resolves to exactly one tag.
    pub fn resolve(&self, kind: NodeKind, value: &str, implicit: bool) -> Tag {
        if kind == NodeKind::Scalar && implicit {
            let key = value.chars().next().unwrap_or(EMPTY_KEY);
            if let Some(bucket) = self.buckets.get(&key) {
                for rule in bucket {
                    if rule.pattern.is_match(value) {
                        return rule.tag;
                    }
                }
            }
            for rule in &self.unconstrained {
                if rule.pattern.is_match(value) {
                    return rule.tag;
                }
            }
        }
        match kind {
            NodeKind::Scalar => Tag::Str,
            NodeKind::Sequence => Tag::Seq,
            NodeKind::Mapping => Tag::Map,
        }
    }

    /// First characters with at least one registered rule, in registration
    /// order. Useful for diagnostics and tooling.
    pub fn first_chars(&self) -> impl Iterator<Item = char> + '_ {
        self.buckets.keys().copied()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

//! # Implicitly
//!
//! Implicit tag resolution for the YAML data model.
//!
//! Given a parsed node (a scalar literal, a sequence, or a mapping), this
//! crate decides which semantic tag the node represents when the document
//! author wrote no explicit tag: is `123` an integer, is `true` a boolean,
//! is `2015-01-01` a date or just a string? The decision sits between the
//! event parser and the composer: the parser hands over the node kind and
//! literal text, and the composer receives back exactly one [`Tag`].
//!
//! ## Module Organization
//!
//! - [`Resolver`] - rule table construction and classification
//! - [`Tag`] / [`NodeKind`] - semantic tags and node kinds
//! - [`ResolveError`] - construction-time registration failures
//!
//! ## Quick Start
//!
//! ```
//! use implicitly::{NodeKind, Resolver, Tag};
//!
//! let resolver = Resolver::new();
//!
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "123", true), Tag::Int);
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "true", true), Tag::Bool);
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "~", true), Tag::Null);
//! assert_eq!(resolver.resolve(NodeKind::Sequence, "", true), Tag::Seq);
//!
//! // Unmatched scalars always fall back to plain strings.
//! assert_eq!(resolver.resolve(NodeKind::Scalar, "hello", true), Tag::Str);
//! ```
//!
//! ## Departures from YAML 1.1 defaults
//!
//! The default table applies three deliberate overrides to the canonical
//! rule set:
//!
//! - Booleans accept only the `true`/`false` spelling families; `on`,
//!   `off`, `yes`, and `no` resolve to strings.
//! - Floats reject a leading zero followed by further digits (`01.5` is a
//!   string, `0.5` is a float), keeping octal-like literals out of the
//!   float space.
//! - Timestamps are never auto-detected; date/time-looking scalars resolve
//!   to strings unless explicitly tagged. This avoids silent round-trip
//!   mismatches with serializers that represent timestamps differently.
//!
//! Classification is total and pure: every input resolves to exactly one
//! tag, and a built resolver may be shared across threads freely.

mod error;
mod resolver;
mod rules;
mod tag;

pub use error::ResolveError;
pub use resolver::Resolver;
pub use tag::{NodeKind, Tag};

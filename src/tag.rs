//! Semantic tags and node kinds for the YAML data model.
//!
//! A [`Tag`] identifies the semantic type a node resolves to (`!!int`,
//! `!!bool`, `!!str`, ...). A [`NodeKind`] identifies the structural shape
//! of the node being resolved and is supplied by the composer, not computed
//! here.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A semantic type tag from the YAML 1.1 tag repository.
///
/// Tags are cheap value types compared by equality. The canonical tag URI
/// (e.g. `tag:yaml.org,2002:int`) is available through [`Tag::uri`] and is
/// what [`fmt::Display`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    /// `tag:yaml.org,2002:null` - the null value
    Null,
    /// `tag:yaml.org,2002:bool` - boolean
    Bool,
    /// `tag:yaml.org,2002:int` - integer
    Int,
    /// `tag:yaml.org,2002:float` - floating point
    Float,
    /// `tag:yaml.org,2002:timestamp` - date/time
    Timestamp,
    /// `tag:yaml.org,2002:str` - string (the universal scalar fallback)
    Str,
    /// `tag:yaml.org,2002:seq` - sequence
    Seq,
    /// `tag:yaml.org,2002:map` - mapping
    Map,
    /// `tag:yaml.org,2002:set` - unordered set
    Set,
    /// `tag:yaml.org,2002:binary` - base64-encoded binary
    Binary,
    /// `tag:yaml.org,2002:merge` - the `<<` merge key
    Merge,
    /// `tag:yaml.org,2002:value` - the `=` default value key
    Value,
    /// `tag:yaml.org,2002:omap` - ordered mapping
    Omap,
    /// `tag:yaml.org,2002:pairs` - ordered key/value pairs with duplicates
    Pairs,
    /// `tag:yaml.org,2002:yaml` - YAML's own `!`, `&`, `*` indicators
    Yaml,
}

impl Tag {
    /// The canonical tag URI in the `tag:yaml.org,2002:*` namespace.
    pub const fn uri(self) -> &'static str {
        match self {
            Tag::Null => "tag:yaml.org,2002:null",
            Tag::Bool => "tag:yaml.org,2002:bool",
            Tag::Int => "tag:yaml.org,2002:int",
            Tag::Float => "tag:yaml.org,2002:float",
            Tag::Timestamp => "tag:yaml.org,2002:timestamp",
            Tag::Str => "tag:yaml.org,2002:str",
            Tag::Seq => "tag:yaml.org,2002:seq",
            Tag::Map => "tag:yaml.org,2002:map",
            Tag::Set => "tag:yaml.org,2002:set",
            Tag::Binary => "tag:yaml.org,2002:binary",
            Tag::Merge => "tag:yaml.org,2002:merge",
            Tag::Value => "tag:yaml.org,2002:value",
            Tag::Omap => "tag:yaml.org,2002:omap",
            Tag::Pairs => "tag:yaml.org,2002:pairs",
            Tag::Yaml => "tag:yaml.org,2002:yaml",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}

/// Structural kind of the node being resolved.
///
/// Supplied by the composer alongside the literal text; the resolver never
/// inspects document structure itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeKind {
    /// Scalar value (plain, quoted, or block)
    Scalar,
    /// Sequence (array-like): ordered list
    Sequence,
    /// Mapping (object-like): key-value pairs
    Mapping,
}

// ============================================================================
// Tests
// ============================================================================

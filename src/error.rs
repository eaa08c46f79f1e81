//! Error types for schema construction and decoding.

use thiserror::Error;

/// A schema definition that cannot produce a single unambiguous rule.
///
/// Raised by [`SchemaBuilder::build`](crate::SchemaBuilder::build); a schema
/// that builds successfully never produces one of these later.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema declares no fields")]
    NoFields,

    #[error("invalid field name {0:?}: expected a letter or '_' followed by letters, digits or '_'")]
    InvalidFieldName(String),

    #[error("duplicate field name {0:?}")]
    DuplicateField(String),

    #[error("invalid shape for field {field:?}: {reason}")]
    InvalidShape { field: String, reason: String },

    #[error("fields {first:?} and {second:?} are both variable-length with no separator between them")]
    AmbiguousFields { first: String, second: String },

    #[error("separator {separator:?} can also occur inside variable-length field {field:?}")]
    AmbiguousSeparator { field: String, separator: String },

    #[error("failed to compile schema rule: {0}")]
    Pattern(#[from] regex::Error),
}

/// A filename that does not conform to a schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("filename {filename:?} does not match the schema")]
    NoMatch { filename: String },
}

//! Decode structured, fixed-format file names into named fields.
//!
//! A [`FilenameSchema`] is declared once as an ordered list of fields, each
//! with a [`Shape`], joined by literal separators. Building it validates the
//! layout and compiles a single matching rule; decoding then yields a
//! [`DecodedFields`] with one raw string per field, or [`DecodeError::NoMatch`].
//!
//! ```rust
//! use filename_decoder::{FilenameSchema, Shape};
//!
//! let schema = FilenameSchema::builder()
//!     .field("Code", Shape::digits(6))
//!     .separator("_")
//!     .field("Name", Shape::letters())
//!     .build()
//!     .unwrap();
//!
//! let fields = schema.decode("123456_CompanyA").unwrap();
//! assert_eq!(fields.get("Code"), Some("123456"));
//! assert_eq!(fields.get("Name"), Some("CompanyA"));
//! ```

pub mod consts;
pub mod error;
pub mod fields;
pub mod presets;
pub mod schema;
pub mod shape;

pub use error::{DecodeError, SchemaError};
pub use fields::DecodedFields;
pub use schema::{FieldSpec, FilenameSchema, SchemaBuilder, decode};
pub use shape::{CharClass, Repeat, Shape};

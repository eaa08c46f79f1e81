//! Ready-made schemas for known naming schemes.

use crate::error::SchemaError;
use crate::schema::FilenameSchema;
use crate::shape::Shape;

/// Regulatory submission files, e.g. `123456_CompanyA_20201214_1_1.xml`.
///
/// `CompanyCode` (6 digits), `CompanyName` (letters), `Date` (8 digits, kept
/// as text), `SubmissionNumber` (1 digit), `SchemaVersion` (1 digit) and
/// `FileExtension` (letters).
pub fn submission(anchored: bool) -> Result<FilenameSchema, SchemaError> {
    FilenameSchema::builder()
        .field("CompanyCode", Shape::digits(6))
        .separator("_")
        .field("CompanyName", Shape::letters())
        .separator("_")
        .field("Date", Shape::digits(8))
        .separator("_")
        .field("SubmissionNumber", Shape::digits(1))
        .separator("_")
        .field("SchemaVersion", Shape::digits(1))
        .separator(".")
        .field("FileExtension", Shape::letters())
        .anchored(anchored)
        .build()
}

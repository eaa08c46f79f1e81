use crate::consts::FIELD_NAME_RE;
use crate::error::{DecodeError, SchemaError};
use crate::fields::DecodedFields;
use crate::shape::Shape;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

/// A named segment of a structured filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: String,
    pub shape: Shape,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, shape: Shape) -> Self {
        Self {
            name: name.into(),
            shape,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Field(FieldSpec),
    Literal(String),
}

/// Accumulates fields and separators in declaration order.
///
/// Nothing is validated until [`SchemaBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    segments: Vec<Segment>,
    anchored: bool,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, shape: Shape) -> Self {
        self.segments.push(Segment::Field(FieldSpec::new(name, shape)));
        self
    }

    /// Append a literal separator. Adjacent separators are joined.
    pub fn separator(mut self, text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if text.is_empty() {
            return self;
        }
        match self.segments.last_mut() {
            Some(Segment::Literal(prev)) => prev.push_str(text),
            _ => self.segments.push(Segment::Literal(text.to_string())),
        }
        self
    }

    /// Require the whole filename to match instead of the first match anywhere.
    pub fn anchored(mut self, anchored: bool) -> Self {
        self.anchored = anchored;
        self
    }

    /// Validate the declared segments and compile them into one rule.
    pub fn build(self) -> Result<FilenameSchema, SchemaError> {
        let mut seen = HashSet::new();
        // The variable-length field, if any, in the current run of fields
        // not yet closed by a separator.
        let mut free_form: Option<&FieldSpec> = None;
        let mut field_count = 0;

        for segment in &self.segments {
            let field = match segment {
                Segment::Field(field) => field,
                Segment::Literal(text) => {
                    if let Some(prev) = free_form.take()
                        && let Some(first) = text.chars().next()
                        && prev.shape.class.contains(first)
                    {
                        return Err(SchemaError::AmbiguousSeparator {
                            field: prev.name.clone(),
                            separator: text.clone(),
                        });
                    }
                    continue;
                }
            };
            field_count += 1;

            if !FIELD_NAME_RE.is_match(&field.name) {
                return Err(SchemaError::InvalidFieldName(field.name.clone()));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
            field
                .shape
                .validate()
                .map_err(|reason| SchemaError::InvalidShape {
                    field: field.name.clone(),
                    reason,
                })?;
            if !field.shape.is_fixed_length() {
                if let Some(prev) = free_form {
                    return Err(SchemaError::AmbiguousFields {
                        first: prev.name.clone(),
                        second: field.name.clone(),
                    });
                }
                free_form = Some(field);
            }
        }

        if field_count == 0 {
            return Err(SchemaError::NoFields);
        }

        let mut pattern = String::new();
        if self.anchored {
            pattern.push('^');
        }
        for segment in &self.segments {
            match segment {
                Segment::Field(field) => {
                    pattern.push_str(&format!("(?P<{}>{})", field.name, field.shape.pattern()))
                }
                Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
            }
        }
        if self.anchored {
            pattern.push('$');
        }

        let regex = Regex::new(&pattern)?;
        tracing::debug!(
            pattern = %pattern,
            fields = field_count,
            anchored = self.anchored,
            "compiled filename schema"
        );

        let fields = self
            .segments
            .into_iter()
            .filter_map(|s| match s {
                Segment::Field(field) => Some(field),
                Segment::Literal(_) => None,
            })
            .collect();

        Ok(FilenameSchema {
            fields,
            regex,
            anchored: self.anchored,
        })
    }
}

/// A validated, compiled filename layout.
///
/// Immutable after construction and safe to share between threads; every
/// call to [`FilenameSchema::decode`] produces an independent result.
#[derive(Debug, Clone)]
pub struct FilenameSchema {
    fields: Vec<FieldSpec>,
    regex: Regex,
    anchored: bool,
}

impl FilenameSchema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The compiled rule text.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Decode `filename` into one raw value per field.
    ///
    /// Either every field is populated or [`DecodeError::NoMatch`] is returned.
    pub fn decode(&self, filename: &str) -> Result<DecodedFields, DecodeError> {
        let Some(caps) = self.regex.captures(filename) else {
            tracing::trace!(filename, "no match");
            return Err(DecodeError::NoMatch {
                filename: filename.to_string(),
            });
        };

        let mut decoded = DecodedFields::with_capacity(self.fields.len());
        for field in &self.fields {
            // Every field is a non-optional group, so a match populates all of them.
            let value = caps.name(&field.name).map_or("", |m| m.as_str());
            decoded.push(field.name.clone(), value.to_string());
        }
        tracing::trace!(filename, fields = decoded.len(), "decoded");
        Ok(decoded)
    }
}

/// Decode `filename` against `schema`.
pub fn decode(schema: &FilenameSchema, filename: &str) -> Result<DecodedFields, DecodeError> {
    schema.decode(filename)
}

//! Schema validation for static records.
//!
//! Every record type implements [`Schema`]. Validation happens once, at load time:
//! a record is first deserialized into its typed form (which rejects unknown enum values
//! and missing fields) and then checked against its field rules. Results are explicit
//! per record; [`validate_all`] collects every failure so a single load error can list all
//! of them.

use crate::catalog::record::{Artifact, GenreNode, Site, SlotFilter};
use crate::error::{NexaiError, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;

/// Upper bound on site and artifact names.
pub const MAX_NAME_LEN: usize = 200;
/// Upper bound on site descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 500;
/// Upper bound on artifact lore.
pub const MAX_LORE_LEN: usize = 1000;
/// Maximum number of tags on a site.
pub const MAX_TAGS: usize = 10;
/// Maximum artifact durability.
pub const MAX_DURABILITY: i64 = 9999;

/// A single broken rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// All violations of one record inside a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordViolation {
    /// Position of the record in its source list
    pub index: usize,
    /// Record id, when one could be read
    pub id: Option<String>,
    pub fields: Vec<FieldViolation>,
}

impl fmt::Display for RecordViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{}", self.index)?;
        if let Some(id) = &self.id {
            write!(f, " (id \"{}\")", id)?;
        }
        let fields = self
            .fields
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, ": {}", fields)
    }
}

/// A record type with load-time validation rules.
pub trait Schema: DeserializeOwned {
    /// Human-readable record kind used in error messages
    const KIND: &'static str;

    /// Identifier used for duplicate detection and error messages
    fn id(&self) -> &str;

    /// Check field rules on an already well-typed record
    fn check(&self) -> Vec<FieldViolation>;
}

/// Validate one raw record, returning the typed value or every violated rule.
pub fn validate<T: Schema>(value: toml::Value) -> std::result::Result<T, Vec<FieldViolation>> {
    let record: T = value
        .try_into()
        .map_err(|err: toml::de::Error| vec![FieldViolation::new("record", err.message())])?;

    let violations = record.check();
    if violations.is_empty() {
        Ok(record)
    } else {
        Err(violations)
    }
}

/// Validate one raw record, turning violations into an error.
pub fn validate_or_fail<T: Schema>(value: toml::Value) -> Result<T> {
    validate::<T>(value).map_err(|violations| NexaiError::ValidationError {
        kind: T::KIND,
        message: violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; "),
    })
}

/// Validate a whole list. Succeeds only if every record is valid and ids are unique.
pub fn validate_all<T: Schema>(
    values: Vec<toml::Value>,
) -> std::result::Result<Vec<T>, Vec<RecordViolation>> {
    let mut records = Vec::with_capacity(values.len());
    let mut failures = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, value) in values.into_iter().enumerate() {
        let raw_id = value
            .get("id")
            .and_then(toml::Value::as_str)
            .map(str::to_string);

        match validate::<T>(value) {
            Ok(record) => {
                if !seen_ids.insert(record.id().to_string()) {
                    failures.push(RecordViolation {
                        index,
                        id: Some(record.id().to_string()),
                        fields: vec![FieldViolation::new("id", "is a duplicate")],
                    });
                } else {
                    records.push(record);
                }
            }
            Err(fields) => failures.push(RecordViolation {
                index,
                id: raw_id,
                fields,
            }),
        }
    }

    if failures.is_empty() {
        Ok(records)
    } else {
        Err(failures)
    }
}

fn check_text(out: &mut Vec<FieldViolation>, field: &str, value: &str, max_len: Option<usize>) {
    if value.is_empty() {
        out.push(FieldViolation::new(field, "must not be empty"));
        return;
    }
    if let Some(max) = max_len {
        let len = value.chars().count();
        if len > max {
            out.push(FieldViolation::new(
                field,
                format!("must be at most {} characters (got {})", max, len),
            ));
        }
    }
}

fn check_url(out: &mut Vec<FieldViolation>, field: &str, value: &str) {
    if let Err(err) = url::Url::parse(value) {
        out.push(FieldViolation::new(
            field,
            format!("must be an absolute URL ({})", err),
        ));
    }
}

impl Schema for Site {
    const KIND: &'static str = "site";

    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();
        check_text(&mut out, "id", &self.id, None);
        check_text(&mut out, "name", &self.name, Some(MAX_NAME_LEN));
        check_text(
            &mut out,
            "description",
            &self.description,
            Some(MAX_DESCRIPTION_LEN),
        );
        check_url(&mut out, "url", &self.url);
        check_text(&mut out, "image", &self.image, None);

        if self.tags.is_empty() {
            out.push(FieldViolation::new("tags", "must contain at least 1 tag"));
        } else if self.tags.len() > MAX_TAGS {
            out.push(FieldViolation::new(
                "tags",
                format!("must contain at most {} tags (got {})", MAX_TAGS, self.tags.len()),
            ));
        }
        for (idx, tag) in self.tags.iter().enumerate() {
            if tag.is_empty() {
                out.push(FieldViolation::new(format!("tags[{}]", idx), "must not be empty"));
            }
        }
        out
    }
}

impl Schema for Artifact {
    const KIND: &'static str = "artifact";

    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Vec<FieldViolation> {
        let mut out = Vec::new();
        check_text(&mut out, "id", &self.id, None);
        check_text(&mut out, "name", &self.name, Some(MAX_NAME_LEN));
        check_url(&mut out, "url", &self.url);
        check_text(&mut out, "lore", &self.lore, Some(MAX_LORE_LEN));
        if self.durability <= 0 {
            out.push(FieldViolation::new("durability", "must be positive"));
        } else if self.durability > MAX_DURABILITY {
            out.push(FieldViolation::new(
                "durability",
                format!("must be at most {}", MAX_DURABILITY),
            ));
        }
        out
    }
}

// Genre nodes and slot filters only need to be well-formed.
impl Schema for GenreNode {
    const KIND: &'static str = "genre node";

    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Vec<FieldViolation> {
        Vec::new()
    }
}

impl Schema for SlotFilter {
    const KIND: &'static str = "slot filter";

    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Vec<FieldViolation> {
        Vec::new()
    }
}

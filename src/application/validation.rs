// src/application/validation.rs
use crate::domain::article::{ArticleBody, ArticleTitle};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

const MSG_REQUIRED: &str = "This field is required.";
const MSG_NULL: &str = "This field may not be null.";
const MSG_NOT_STRING: &str = "Not a valid string.";
const MSG_BLANK: &str = "This field may not be blank.";

/// Field name mapped to the list of violation messages, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {}", messages.join(" "))?;
            first = false;
        }
        Ok(())
    }
}

/// A payload that passed schema validation: both content fields present and
/// well-formed, held as domain value objects.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: ArticleTitle,
    pub body: ArticleBody,
}

impl ArticleDraft {
    /// Validate a raw JSON payload against the article schema.
    ///
    /// All field checks run even after the first failure so the caller gets
    /// the complete field→messages map in one pass. A non-object payload is
    /// treated as an object with no fields.
    pub fn from_payload(payload: &Value) -> Result<Self, FieldErrors> {
        let empty = Map::new();
        let object = payload.as_object().unwrap_or(&empty);

        let mut errors = FieldErrors::default();
        let title = string_field(object, "title", &mut errors);
        let body = string_field(object, "body", &mut errors);

        let title = title.and_then(|raw| match ArticleTitle::new(raw) {
            Ok(title) => Some(title),
            Err(_) => {
                errors.push("title", MSG_BLANK);
                None
            }
        });
        let body = body.and_then(|raw| match ArticleBody::new(raw) {
            Ok(body) => Some(body),
            Err(_) => {
                errors.push("body", MSG_BLANK);
                None
            }
        });

        match (title, body) {
            (Some(title), Some(body)) if errors.is_empty() => Ok(Self { title, body }),
            _ => Err(errors),
        }
    }
}

fn string_field(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match object.get(field) {
        None => {
            errors.push(field, MSG_REQUIRED);
            None
        }
        Some(Value::Null) => {
            errors.push(field, MSG_NULL);
            None
        }
        Some(Value::String(value)) => {
            if value.trim().is_empty() {
                errors.push(field, MSG_BLANK);
                None
            } else {
                Some(value.clone())
            }
        }
        Some(_) => {
            errors.push(field, MSG_NOT_STRING);
            None
        }
    }
}

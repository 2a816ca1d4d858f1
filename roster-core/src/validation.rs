//! Request-body validation.
//!
//! Bodies are parsed into a [`serde_json::Value`] first and then checked field by
//! field, so a single response can report every problem at once. The error payload
//! has the shape `{"detail": [{"type", "loc", "msg", "input"}, ...]}`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ValidationKind {
    Missing,
    StringType,
    JsonInvalid,
    ModelAttributesType,
}

impl ValidationKind {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationKind::Missing => "Field required",
            ValidationKind::StringType => "Input should be a valid string",
            ValidationKind::JsonInvalid => "JSON decode error",
            ValidationKind::ModelAttributesType => {
                "Input should be a valid dictionary or object to extract fields from"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: ValidationKind,
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(default)]
    pub input: Value,
}

impl ValidationError {
    pub fn new(kind: ValidationKind, loc: &[&str], input: Value) -> Self {
        Self {
            kind,
            loc: loc.iter().map(|segment| segment.to_string()).collect(),
            msg: kind.message().to_string(),
            input,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.loc.join("."), self.msg)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("{}", join_errors(.detail))]
pub struct ValidationErrors {
    pub detail: Vec<ValidationError>,
}

fn join_errors(detail: &[ValidationError]) -> String {
    detail
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn single(kind: ValidationKind, loc: &[&str], input: Value) -> Self {
        Self {
            detail: vec![ValidationError::new(kind, loc, input)],
        }
    }

    pub fn push(&mut self, error: ValidationError) {
        self.detail.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.detail.is_empty()
    }
}

/// A type that can be built from an untrusted JSON request body.
pub trait RequestSchema: Sized {
    fn from_json(value: &Value) -> Result<Self, ValidationErrors>;

    fn from_body(body: &[u8]) -> Result<Self, ValidationErrors> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationErrors::single(
                ValidationKind::Missing,
                &["body"],
                Value::Null,
            ));
        }

        let value: Value = serde_json::from_slice(body).map_err(|_| {
            ValidationErrors::single(
                ValidationKind::JsonInvalid,
                &["body"],
                Value::String(String::from_utf8_lossy(body).into_owned()),
            )
        })?;

        Self::from_json(&value)
    }
}

/// Reads fields out of a body object, collecting errors instead of stopping at the first.
pub struct FieldReader<'a> {
    body: &'a Value,
    object: &'a Map<String, Value>,
    errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
    pub fn new(body: &'a Value) -> Result<Self, ValidationErrors> {
        let object = body.as_object().ok_or_else(|| {
            ValidationErrors::single(ValidationKind::ModelAttributesType, &["body"], body.clone())
        })?;

        Ok(Self {
            body,
            object,
            errors: ValidationErrors::default(),
        })
    }

    /// Returns the field's value, or an empty string after recording an error.
    pub fn required_string(&mut self, field: &str) -> String {
        match self.object.get(field) {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                self.errors.push(ValidationError::new(
                    ValidationKind::StringType,
                    &["body", field],
                    other.clone(),
                ));
                String::new()
            }
            None => {
                self.errors.push(ValidationError::new(
                    ValidationKind::Missing,
                    &["body", field],
                    self.body.clone(),
                ));
                String::new()
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

//! Typed document fields
//!
//! A [`Field`] is one answerable slot of a blueprint or contract. Its value is a
//! closed union keyed by [`FieldKind`], so a checkbox never holds text and a text
//! field never holds a flag.

use crate::ids::FieldId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Date format used on the wire and for user input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Kind of a field (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free text
    Text,
    /// Calendar date
    Date,
    /// Typed signer name
    Signature,
    /// Boolean tick box
    Checkbox,
}

impl FieldKind {
    /// Every kind, in builder button order
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Text,
        FieldKind::Date,
        FieldKind::Signature,
        FieldKind::Checkbox,
    ];

    /// Wire token, also the default label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Date => "date",
            FieldKind::Signature => "signature",
            FieldKind::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| FieldError::UnknownKind(s.to_owned()))
    }
}

/// Errors raised by field operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Unknown field kind token
    #[error("unknown field kind: {0}")]
    UnknownKind(String),

    /// Value does not belong to the field's kind
    #[error("{field} is a {expected} field, got a {actual} value")]
    KindMismatch {
        field: FieldId,
        expected: FieldKind,
        actual: FieldKind,
    },

    /// Raw input cannot be read as a value of the kind
    #[error("invalid {kind} value: {input:?}")]
    InvalidInput { kind: FieldKind, input: String },

    /// Stored value has the wrong shape for the kind
    #[error("stored {kind} value has the wrong shape: {found}")]
    MalformedValue { kind: FieldKind, found: String },
}

/// Value held by a contract field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text content
    Text(String),
    /// Date, `None` until picked
    Date(Option<NaiveDate>),
    /// Signer name
    Signature(String),
    /// Tick state
    Checkbox(bool),
}

impl FieldValue {
    /// Empty value for a freshly instantiated field of `kind`
    #[must_use]
    pub fn empty(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Date => FieldValue::Date(None),
            FieldKind::Signature => FieldValue::Signature(String::new()),
            FieldKind::Checkbox => FieldValue::Checkbox(false),
        }
    }

    /// Kind this value belongs to
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Signature(_) => FieldKind::Signature,
            FieldValue::Checkbox(_) => FieldKind::Checkbox,
        }
    }

    /// True for the empty value of the kind
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == FieldValue::empty(self.kind())
    }

    /// Parse user input for a field of `kind`
    ///
    /// Dates take `YYYY-MM-DD` or blank. Checkboxes take the usual yes/no
    /// spellings.
    ///
    /// # Errors
    /// [`FieldError::InvalidInput`] when the text cannot be read as `kind`.
    pub fn parse_for(kind: FieldKind, raw: &str) -> Result<Self, FieldError> {
        let invalid = || FieldError::InvalidInput {
            kind,
            input: raw.to_owned(),
        };
        match kind {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_owned())),
            FieldKind::Signature => Ok(FieldValue::Signature(raw.to_owned())),
            FieldKind::Date => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(FieldValue::Date(None));
                }
                NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
                    .map(|d| FieldValue::Date(Some(d)))
                    .map_err(|_| invalid())
            }
            FieldKind::Checkbox => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" | "on" | "checked" => Ok(FieldValue::Checkbox(true)),
                "false" | "no" | "n" | "0" | "off" | "" => Ok(FieldValue::Checkbox(false)),
                _ => Err(invalid()),
            },
        }
    }

    /// Wire encoding: strings for text-like kinds, a boolean for checkboxes
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::Text(s) | FieldValue::Signature(s) => Value::String(s.clone()),
            FieldValue::Date(None) => Value::String(String::new()),
            FieldValue::Date(Some(d)) => Value::String(d.format(DATE_FORMAT).to_string()),
            FieldValue::Checkbox(b) => Value::Bool(*b),
        }
    }

    /// Decode a stored value for a field of `kind`
    ///
    /// A checkbox stored as `""` reads as unticked; older records wrote an
    /// empty string for every kind.
    ///
    /// # Errors
    /// [`FieldError::MalformedValue`] when the JSON shape does not fit `kind`.
    pub fn from_json(kind: FieldKind, value: &Value) -> Result<Self, FieldError> {
        let malformed = || FieldError::MalformedValue {
            kind,
            found: value.to_string(),
        };
        match (kind, value) {
            (FieldKind::Text, Value::String(s)) => Ok(FieldValue::Text(s.clone())),
            (FieldKind::Signature, Value::String(s)) => Ok(FieldValue::Signature(s.clone())),
            (FieldKind::Date, Value::String(s)) if s.is_empty() => Ok(FieldValue::Date(None)),
            (FieldKind::Date, Value::String(s)) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map(|d| FieldValue::Date(Some(d)))
                .map_err(|_| malformed()),
            (FieldKind::Checkbox, Value::Bool(b)) => Ok(FieldValue::Checkbox(*b)),
            (FieldKind::Checkbox, Value::String(s)) if s.is_empty() => {
                Ok(FieldValue::Checkbox(false))
            }
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) | FieldValue::Signature(s) => f.write_str(s),
            FieldValue::Date(None) => Ok(()),
            FieldValue::Date(Some(d)) => write!(f, "{}", d.format(DATE_FORMAT)),
            FieldValue::Checkbox(true) => f.write_str("yes"),
            FieldValue::Checkbox(false) => f.write_str("no"),
        }
    }
}

/// A single answerable slot
///
/// # Invariants
/// - `id`, `kind` and `label` never change after creation
/// - `value`, when present, has kind `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawField", into = "RawField")]
pub struct Field {
    id: FieldId,
    kind: FieldKind,
    label: String,
    value: Option<FieldValue>,
}

impl Field {
    /// New blueprint field definition labelled with its kind token
    #[must_use]
    pub fn definition(kind: FieldKind) -> Self {
        Self {
            id: FieldId::generate(),
            kind,
            label: kind.as_str().to_owned(),
            value: None,
        }
    }

    /// Copy of this definition carrying the empty value for its kind
    #[must_use]
    pub fn instantiate(&self) -> Self {
        Self {
            id: self.id.clone(),
            kind: self.kind,
            label: self.label.clone(),
            value: Some(FieldValue::empty(self.kind)),
        }
    }

    #[inline]
    #[must_use]
    pub fn id(&self) -> &FieldId {
        &self.id
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value, `None` on blueprint definitions
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }

    /// Replace the value
    ///
    /// # Errors
    /// [`FieldError::KindMismatch`] if `value` belongs to another kind.
    pub fn set_value(&mut self, value: FieldValue) -> Result<(), FieldError> {
        if value.kind() != self.kind {
            return Err(FieldError::KindMismatch {
                field: self.id.clone(),
                expected: self.kind,
                actual: value.kind(),
            });
        }
        self.value = Some(value);
        Ok(())
    }
}

/// Wire shape of a field, checked against its kind on the way in
#[derive(Debug, Serialize, Deserialize)]
struct RawField {
    id: FieldId,
    #[serde(rename = "type")]
    kind: FieldKind,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
}

impl TryFrom<RawField> for Field {
    type Error = FieldError;

    fn try_from(raw: RawField) -> Result<Self, Self::Error> {
        let value = raw
            .value
            .as_ref()
            .map(|v| FieldValue::from_json(raw.kind, v))
            .transpose()?;
        Ok(Self {
            id: raw.id,
            kind: raw.kind,
            label: raw.label,
            value,
        })
    }
}

impl From<Field> for RawField {
    fn from(field: Field) -> Self {
        Self {
            value: field.value.as_ref().map(FieldValue::to_json),
            id: field.id,
            kind: field.kind,
            label: field.label,
        }
    }
}

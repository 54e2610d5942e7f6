//! Movie schema — a declarative field table and the routine that checks a
//! JSON body against it.
//!
//! The table ([`MOVIE_SCHEMA`]) maps each field name to a [`Rule`]. One
//! generic routine ([`check`]) walks the table in either [`Mode::Full`]
//! (every field required) or [`Mode::Partial`] (every field optional, but
//! checked when present). Unknown keys are dropped, so whatever comes out is
//! exactly the schema's fields, normalized.
//!
//! ```ignore
//! let new = schema::validate_movie(&body)?;          // NewMovie
//! let patch = schema::validate_partial_movie(&body)?; // MoviePatch
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::movie::{Genre, MoviePatch, NewMovie};

/// One failed rule, addressed by field path (`"year"`, `"genre.2"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Every rule a body broke. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(transparent)]
#[error("validation failed with {} field error(s)", .0.len())]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any error is reported for `field` or one of its elements.
    pub fn mentions(&self, field: &str) -> bool {
        self.0.iter().any(|e| {
            e.field == field
                || e.field
                    .strip_prefix(field)
                    .is_some_and(|rest| rest.starts_with('.'))
        })
    }
}

/// Lower or upper bound on a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
}

/// The check applied to one field's value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// A string with at least `min_len` characters.
    Text { min_len: usize },
    /// A whole number in `min..=max`.
    Integer { min: i64, max: i64 },
    /// Any number within the optional bounds.
    Number {
        min: Option<Bound>,
        max: Option<Bound>,
    },
    /// A string that parses as an absolute URL.
    Url,
    /// A non-empty array of exact genre labels.
    GenreList { empty_message: &'static str },
}

/// A named field, its rule, and any message overrides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub name: &'static str,
    pub rule: Rule,
    pub required_message: &'static str,
    pub type_message: Option<&'static str>,
}

impl FieldRule {
    pub const fn new(name: &'static str, rule: Rule) -> Self {
        Self {
            name,
            rule,
            required_message: "Required",
            type_message: None,
        }
    }

    pub const fn required_message(mut self, message: &'static str) -> Self {
        self.required_message = message;
        self
    }

    pub const fn type_message(mut self, message: &'static str) -> Self {
        self.type_message = Some(message);
        self
    }

    /// Check `value` and return its normalized form.
    fn check(&self, value: &Value) -> Result<Value, Vec<FieldError>> {
        match self.rule {
            Rule::Text { min_len } => {
                let text = value
                    .as_str()
                    .ok_or_else(|| vec![self.type_error("string", value)])?;
                if text.chars().count() < min_len {
                    return Err(vec![FieldError::new(
                        self.name,
                        format!("String must contain at least {} character(s)", min_len),
                    )]);
                }
                Ok(Value::String(text.to_string()))
            }
            Rule::Integer { min, max } => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| vec![self.type_error("number", value)])?;
                let mut errors = Vec::new();
                if number.fract() != 0.0 {
                    errors.push(FieldError::new(
                        self.name,
                        "Expected integer, received float",
                    ));
                }
                self.check_bounds(
                    number,
                    Some(Bound::Inclusive(min as f64)),
                    Some(Bound::Inclusive(max as f64)),
                    &mut errors,
                );
                if !errors.is_empty() {
                    return Err(errors);
                }
                Ok(Value::from(number as i64))
            }
            Rule::Number { min, max } => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| vec![self.type_error("number", value)])?;
                let mut errors = Vec::new();
                self.check_bounds(number, min, max, &mut errors);
                if !errors.is_empty() {
                    return Err(errors);
                }
                Ok(Value::from(number))
            }
            Rule::Url => {
                let text = value
                    .as_str()
                    .ok_or_else(|| vec![self.type_error("string", value)])?;
                if Url::parse(text).is_err() {
                    return Err(vec![FieldError::new(self.name, "Invalid url")]);
                }
                Ok(Value::String(text.to_string()))
            }
            Rule::GenreList { empty_message } => {
                let items = value
                    .as_array()
                    .ok_or_else(|| vec![self.type_error("array", value)])?;
                if items.is_empty() {
                    return Err(vec![FieldError::new(self.name, empty_message)]);
                }
                let mut errors = Vec::new();
                let mut labels = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let path = format!("{}.{}", self.name, index);
                    match item.as_str() {
                        Some(label) if Genre::from_label(label).is_some() => {
                            labels.push(Value::String(label.to_string()));
                        }
                        Some(label) => errors.push(FieldError::new(
                            path,
                            format!(
                                "Invalid enum value. Expected {}, received '{}'",
                                genre_choices(),
                                label
                            ),
                        )),
                        None => errors.push(FieldError::new(
                            path,
                            format!("Expected {}, received {}", genre_choices(), type_name(item)),
                        )),
                    }
                }
                if !errors.is_empty() {
                    return Err(errors);
                }
                Ok(Value::Array(labels))
            }
        }
    }

    fn check_bounds(
        &self,
        number: f64,
        min: Option<Bound>,
        max: Option<Bound>,
        errors: &mut Vec<FieldError>,
    ) {
        match min {
            Some(Bound::Inclusive(limit)) if number < limit => errors.push(FieldError::new(
                self.name,
                format!("Number must be greater than or equal to {}", format_number(limit)),
            )),
            Some(Bound::Exclusive(limit)) if number <= limit => errors.push(FieldError::new(
                self.name,
                format!("Number must be greater than {}", format_number(limit)),
            )),
            _ => {}
        }
        match max {
            Some(Bound::Inclusive(limit)) if number > limit => errors.push(FieldError::new(
                self.name,
                format!("Number must be less than or equal to {}", format_number(limit)),
            )),
            Some(Bound::Exclusive(limit)) if number >= limit => errors.push(FieldError::new(
                self.name,
                format!("Number must be less than {}", format_number(limit)),
            )),
            _ => {}
        }
    }

    fn type_error(&self, expected: &str, value: &Value) -> FieldError {
        match self.type_message {
            Some(message) => FieldError::new(self.name, message),
            None => FieldError::new(
                self.name,
                format!("Expected {}, received {}", expected, type_name(value)),
            ),
        }
    }
}

/// The movie schema.
pub const MOVIE_SCHEMA: &[FieldRule] = &[
    FieldRule::new("title", Rule::Text { min_len: 1 })
        .required_message("Title is required")
        .type_message("Title must be a string"),
    FieldRule::new("year", Rule::Integer { min: 1900, max: 2024 }),
    FieldRule::new("director", Rule::Text { min_len: 0 }),
    FieldRule::new(
        "duration",
        Rule::Number {
            min: Some(Bound::Exclusive(0.0)),
            max: None,
        },
    ),
    FieldRule::new("poster", Rule::Url),
    FieldRule::new(
        "genre",
        Rule::GenreList {
            empty_message: "Genre is required",
        },
    ),
    FieldRule::new(
        "rate",
        Rule::Number {
            min: Some(Bound::Inclusive(0.0)),
            max: Some(Bound::Inclusive(10.0)),
        },
    ),
];

/// Whether every field is required or only checked when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Full,
    Partial,
}

/// Check `input` against `schema`, returning only the schema's fields.
pub fn check(
    schema: &[FieldRule],
    input: &Value,
    mode: Mode,
) -> Result<Map<String, Value>, ValidationErrors> {
    let Some(object) = input.as_object() else {
        return Err(ValidationErrors::single(
            "body",
            format!("Expected object, received {}", type_name(input)),
        ));
    };

    let mut fields = Map::new();
    let mut errors = Vec::new();
    for rule in schema {
        match object.get(rule.name) {
            None if mode == Mode::Full => {
                errors.push(FieldError::new(rule.name, rule.required_message));
            }
            None => {}
            Some(value) => match rule.check(value) {
                Ok(normalized) => {
                    fields.insert(rule.name.to_string(), normalized);
                }
                Err(mut failed) => errors.append(&mut failed),
            },
        }
    }

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Full validation for create.
pub fn validate_movie(input: &Value) -> Result<NewMovie, ValidationErrors> {
    let fields = check(MOVIE_SCHEMA, input, Mode::Full)?;
    decode(fields)
}

/// Partial validation for update.
pub fn validate_partial_movie(input: &Value) -> Result<MoviePatch, ValidationErrors> {
    let fields = check(MOVIE_SCHEMA, input, Mode::Partial)?;
    decode(fields)
}

fn decode<T: DeserializeOwned>(fields: Map<String, Value>) -> Result<T, ValidationErrors> {
    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ValidationErrors::single("body", e.to_string()))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn genre_choices() -> String {
    Genre::ALL
        .iter()
        .map(|g| format!("'{}'", g.as_str()))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

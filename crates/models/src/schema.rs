//! Field rules for `ForageItem` request bodies.
//!
//! Each field is checked independently against its rule and every failure is
//! collected, so a caller sees all problems with a body in one response.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Map, Value};
use url::Url;

use crate::errors::{FieldError, ValidationErrors};
use crate::forage_item::ForageItem;

/// Longest `photo_url` accepted, matching common browser limits.
pub const MAX_URL_LEN: usize = 2083;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
    /// Calendar date as `YYYY-MM-DD`.
    Date,
    Boolean,
    /// Absolute http(s) URL.
    Url,
}

#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule { name, kind, required: true }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule { name, kind, required: false }
}

pub const FORAGE_ITEM_FIELDS: &[FieldRule] = &[
    required("id", FieldKind::Integer),
    required("name", FieldKind::Text),
    required("type", FieldKind::Text),
    required("location", FieldKind::Text),
    required("date", FieldKind::Date),
    required("is_edible", FieldKind::Boolean),
    optional("notes", FieldKind::Text),
    optional("photo_url", FieldKind::Url),
];

/// Check a JSON body against [`FORAGE_ITEM_FIELDS`] and build the item.
///
/// `null` counts as absent. Unknown keys are ignored.
pub fn validate_item(body: &Value) -> Result<ForageItem, ValidationErrors> {
    let obj = body.as_object().ok_or_else(|| {
        ValidationErrors::single(FieldError::body(
            "model_attributes_type",
            "Input should be a valid dictionary or object to extract fields from",
        ))
    })?;

    let errors: Vec<FieldError> = FORAGE_ITEM_FIELDS
        .iter()
        .filter_map(|rule| check_field(obj, rule).err())
        .collect();
    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    ForageItem::deserialize(body)
        .map_err(|e| ValidationErrors::single(FieldError::body("model_construction", e.to_string())))
}

fn check_field(obj: &Map<String, Value>, rule: &FieldRule) -> Result<(), FieldError> {
    let value = match obj.get(rule.name) {
        None | Some(Value::Null) if rule.required => {
            return Err(FieldError::new(Some(rule.name), "missing", "Field required"));
        }
        None | Some(Value::Null) => return Ok(()),
        Some(v) => v,
    };
    check_kind(rule.kind, value).map_err(|(kind, msg)| FieldError::new(Some(rule.name), kind, msg))
}

fn check_kind(kind: FieldKind, value: &Value) -> Result<(), (&'static str, String)> {
    match kind {
        FieldKind::Integer => match value {
            Value::Number(n) if n.is_i64() => Ok(()),
            Value::Number(n) if n.is_u64() || n.as_f64().is_some_and(whole_beyond_i64) => Err((
                "int_out_of_range",
                format!("Input should be an integer between {} and {}", i64::MIN, i64::MAX),
            )),
            _ => Err(("int_type", "Input should be a valid integer".into())),
        },
        FieldKind::Text => value
            .as_str()
            .map(|_| ())
            .ok_or(("string_type", "Input should be a valid string".into())),
        FieldKind::Boolean => value
            .as_bool()
            .map(|_| ())
            .ok_or(("bool_type", "Input should be a valid boolean".into())),
        FieldKind::Date => {
            let s = value.as_str().ok_or(("date_type", "Input should be a valid date".to_string()))?;
            parse_date(s).map(|_| ())
        }
        FieldKind::Url => {
            let s = value.as_str().ok_or(("url_type", "URL input should be a string or URL".to_string()))?;
            parse_http_url(s).map(|_| ())
        }
    }
}

// serde_json hands back integers outside the u64/i64 range as floats.
fn whole_beyond_i64(f: f64) -> bool {
    f.fract() == 0.0 && f.abs() >= i64::MAX as f64
}

fn parse_date(s: &str) -> Result<NaiveDate, (&'static str, String)> {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-';
    let parsed = if shaped { NaiveDate::parse_from_str(s, "%Y-%m-%d").ok() } else { None };
    parsed.ok_or((
        "date_parsing",
        "Input should be a valid date in the format YYYY-MM-DD".into(),
    ))
}

fn parse_http_url(s: &str) -> Result<Url, (&'static str, String)> {
    if s.chars().count() > MAX_URL_LEN {
        return Err(("url_too_long", format!("URL should have at most {MAX_URL_LEN} characters")));
    }
    let url = Url::parse(s).map_err(|e| ("url_parsing", format!("Input should be a valid URL, {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(("url_scheme", "URL scheme should be 'http' or 'https'".into())),
    }
}

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// A single rejected field: where it sits in the request, what went wrong,
/// and a machine-readable error type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(field: Option<&str>, kind: &str, msg: impl Into<String>) -> Self {
        let mut loc = vec!["body".to_string()];
        if let Some(f) = field {
            loc.push(f.to_string());
        }
        Self { loc, msg: msg.into(), kind: kind.to_string() }
    }

    /// Error about the request body as a whole rather than one field.
    pub fn body(kind: &str, msg: impl Into<String>) -> Self {
        Self::new(None, kind, msg)
    }
}

/// Every field error found in one request body.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn single(err: FieldError) -> Self {
        Self(vec![err])
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.len();
        write!(f, "{} validation error{} for ForageItem", n, if n == 1 { "" } else { "s" })?;
        for e in &self.0 {
            write!(f, "; {}: {}", e.loc.join("."), e.msg)?;
        }
        Ok(())
    }
}

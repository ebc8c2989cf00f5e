use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text rendered for a field that was never supplied or is null
pub const ABSENT: &str = "None";

/// Where an error report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    /// Uncaught exception in the web client
    Browser,
    /// Exception caught by a server-side handler
    Server,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Browser => "browser",
            ReportKind::Server => "server",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown report type: {0}")]
pub struct UnknownReportKind(pub String);

impl FromStr for ReportKind {
    type Err = UnknownReportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "browser" => Ok(ReportKind::Browser),
            "server" => Ok(ReportKind::Server),
            other => Err(UnknownReportKind(other.to_string())),
        }
    }
}

/// An error report whose every field lookup succeeds.
///
/// Missing keys read as an absent [`Field`], so formatting code never has to
/// check whether a client bothered to send a value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Report {
    fields: Map<String, Value>,
}

impl Report {
    /// Wrap a raw report as received from the client.
    pub fn normalize(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Field<'_> {
        Field(self.fields.get(key))
    }

    /// Look up request metadata such as `REMOTE_ADDR`, which clients send under
    /// any casing. The lower-cased key wins over other spellings.
    pub fn get_ignore_case(&self, key: &str) -> Field<'_> {
        let lowered = key.to_lowercase();
        match self.fields.get(&lowered) {
            Some(value) => Field(Some(value)),
            None => Field(
                self.fields
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(key))
                    .map(|(_, value)| value),
            ),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Extra key/value pairs the client attached, in the order they were sent.
    pub fn more_info(&self) -> Option<&Map<String, Value>> {
        self.get("more_info").value().and_then(Value::as_object)
    }
}

impl From<Map<String, Value>> for Report {
    fn from(fields: Map<String, Value>) -> Self {
        Self::normalize(fields)
    }
}

/// A report field that may be absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field<'a>(Option<&'a Value>);

impl<'a> Field<'a> {
    /// The value, with JSON `null` treated the same as a missing key.
    pub fn value(&self) -> Option<&'a Value> {
        self.0.filter(|value| !value.is_null())
    }

    /// True for a value that carries information: not absent, null, empty, zero or false.
    pub fn is_present(&self) -> bool {
        match self.value() {
            None => false,
            Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(map)) => !map.is_empty(),
        }
    }
}

impl<'a> From<&'a Value> for Field<'a> {
    fn from(value: &'a Value) -> Self {
        Field(Some(value))
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            None => f.write_str(ABSENT),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}

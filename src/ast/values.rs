use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A literal or parameter operand inside an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// NULL value
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Float
    Float(f64),
    /// Exact decimal
    Decimal(Decimal),
    /// String
    Text(String),
    /// UTC timestamp
    Timestamp(DateTime<Utc>),
    /// Calendar date
    Date(NaiveDate),
    /// UUID value
    Uuid(Uuid),
    /// JSON document, rendered as a quoted literal
    Json(serde_json::Value),
    /// Positional parameter reference ($1, $2, etc.)
    Param(usize),
    /// Named parameter reference (:name, :id, etc.)
    NamedParam(String),
}

impl Value {
    /// Append the canonical SQL literal for this value.
    ///
    /// Text-like literals are single-quoted with embedded quotes doubled.
    pub fn write_literal(&self, buf: &mut String) {
        match self {
            Value::Null => buf.push_str("NULL"),
            Value::Bool(b) => buf.push_str(if *b { "TRUE" } else { "FALSE" }),
            Value::Int(n) => buf.push_str(&n.to_string()),
            Value::Float(n) => buf.push_str(&n.to_string()),
            Value::Decimal(d) => buf.push_str(&d.to_string()),
            Value::Text(s) => push_quoted(buf, s),
            Value::Timestamp(t) => push_quoted(buf, &t.format("%Y-%m-%d %H:%M:%S%.f%:z").to_string()),
            Value::Date(d) => push_quoted(buf, &d.format("%Y-%m-%d").to_string()),
            Value::Uuid(u) => push_quoted(buf, &u.to_string()),
            Value::Json(j) => push_quoted(buf, &j.to_string()),
            Value::Param(n) => {
                buf.push('$');
                buf.push_str(&n.to_string());
            }
            Value::NamedParam(name) => {
                buf.push(':');
                buf.push_str(name);
            }
        }
    }
}

fn push_quoted(buf: &mut String, s: &str) {
    buf.push('\'');
    buf.push_str(&s.replace('\'', "''"));
    buf.push('\'');
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Timestamp(t)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<Uuid> for Value {
    fn from(u: Uuid) -> Self {
        Value::Uuid(u)
    }
}

impl From<serde_json::Value> for Value {
    fn from(j: serde_json::Value) -> Self {
        Value::Json(j)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(opt: Option<V>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

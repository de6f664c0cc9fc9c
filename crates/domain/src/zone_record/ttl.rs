use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Time-to-live of a zone record, in whatever shape the API row carried it.
///
/// Rows coming back from the zone API are loosely typed: the TTL may be a
/// number, a numeric string, missing, or something else entirely (a bool, an
/// object). `normalize` collapses all of those into `Seconds` or `Invalid`;
/// `Invalid` is written back out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Ttl {
    Seconds(i64),
    Fractional(f64),
    Text(String),
    #[default]
    Invalid,
    Other(Value),
}

impl Ttl {
    /// Integer-prefix parse: leading whitespace and an optional sign are
    /// accepted, parsing stops at the first non-digit, and input with no
    /// leading digits yields `Invalid`.
    pub fn normalize(&self) -> Ttl {
        match self {
            Ttl::Seconds(secs) => Ttl::Seconds(*secs),
            Ttl::Fractional(value) => truncate(*value),
            Ttl::Text(text) => parse_integer_prefix(text).map_or(Ttl::Invalid, Ttl::Seconds),
            Ttl::Invalid | Ttl::Other(_) => Ttl::Invalid,
        }
    }

    pub fn seconds(&self) -> Option<i64> {
        match self.normalize() {
            Ttl::Seconds(secs) => Some(secs),
            _ => None,
        }
    }

    /// Equality of parsed values. `Invalid` matches nothing, not even itself.
    pub fn matches(&self, other: &Ttl) -> bool {
        match (self.seconds(), other.seconds()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

fn truncate(value: f64) -> Ttl {
    if !value.is_finite() {
        return Ttl::Invalid;
    }
    let whole = value.trunc();
    if whole < i64::MIN as f64 || whole >= i64::MAX as f64 {
        return Ttl::Invalid;
    }
    Ttl::Seconds(whole as i64)
}

fn parse_integer_prefix(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (sign, rest) = match rest.as_bytes().first() {
        Some(b'-') => ("-", &rest[1..]),
        Some(b'+') => ("", &rest[1..]),
        _ => ("", rest),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ttl::Seconds(secs) => write!(f, "{}", secs),
            Ttl::Fractional(value) => write!(f, "{}", value),
            Ttl::Text(text) => f.write_str(text),
            Ttl::Invalid => f.write_str("NaN"),
            Ttl::Other(value) => write!(f, "{}", value),
        }
    }
}

impl From<i64> for Ttl {
    fn from(secs: i64) -> Self {
        Ttl::Seconds(secs)
    }
}

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl::Seconds(secs.into())
    }
}

impl From<f64> for Ttl {
    fn from(value: f64) -> Self {
        Ttl::Fractional(value)
    }
}

impl From<&str> for Ttl {
    fn from(text: &str) -> Self {
        Ttl::Text(text.to_string())
    }
}

impl From<String> for Ttl {
    fn from(text: String) -> Self {
        Ttl::Text(text)
    }
}

impl From<bool> for Ttl {
    fn from(value: bool) -> Self {
        Ttl::Other(Value::Bool(value))
    }
}

//! Attribute values.
//!
//! Identity sources are inconsistent about how they hand over data, so a
//! value is a closed set of representations rather than one type per field.
//! Readers match on the variant they expect and treat anything else as
//! absent.

use chrono::{DateTime, Utc};
use url::Url;

use crate::gender::Gender;
use crate::locale::Locale;

/// A single attribute value as stored in a profile.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Explicitly stored null.
    Null,
    /// Plain string.
    String(String),
    /// Boolean flag.
    Boolean(bool),
    /// Signed integer (also used for Unix timestamps).
    Integer(i64),
    /// Floating point number.
    Float(f64),
    /// Language tag.
    Locale(Locale),
    /// Absolute URI.
    Uri(Url),
    /// Gender enumeration.
    Gender(Gender),
    /// Point in time.
    DateTime(DateTime<Utc>),
    /// Fixed-size array of strings.
    StringArray(Box<[String]>),
    /// Ordered, growable list of strings.
    StringList(Vec<String>),
    /// Any other data, kept verbatim.
    Opaque(serde_json::Value),
}

impl AttributeValue {
    /// Returns a short name of the representation, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Locale(_) => "locale",
            Self::Uri(_) => "uri",
            Self::Gender(_) => "gender",
            Self::DateTime(_) => "datetime",
            Self::StringArray(_) => "string_array",
            Self::StringList(_) => "string_list",
            Self::Opaque(_) => "opaque",
        }
    }

    /// Checks if this is an explicitly stored null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Gets the string, if this is a string value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Gets the flag, if this is a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Gets the locale, if this is a locale value.
    #[must_use]
    pub const fn as_locale(&self) -> Option<&Locale> {
        match self {
            Self::Locale(locale) => Some(locale),
            _ => None,
        }
    }

    /// Gets the URI, if this is a URI value.
    #[must_use]
    pub const fn as_uri(&self) -> Option<&Url> {
        match self {
            Self::Uri(uri) => Some(uri),
            _ => None,
        }
    }

    /// Gets the gender, if this is a gender value.
    #[must_use]
    pub const fn as_gender(&self) -> Option<Gender> {
        match self {
            Self::Gender(gender) => Some(*gender),
            _ => None,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<Locale> for AttributeValue {
    fn from(locale: Locale) -> Self {
        Self::Locale(locale)
    }
}

impl From<Url> for AttributeValue {
    fn from(uri: Url) -> Self {
        Self::Uri(uri)
    }
}

impl From<Gender> for AttributeValue {
    fn from(gender: Gender) -> Self {
        Self::Gender(gender)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(at: DateTime<Utc>) -> Self {
        Self::DateTime(at)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::StringList(values)
    }
}

impl From<Box<[String]>> for AttributeValue {
    fn from(values: Box<[String]>) -> Self {
        Self::StringArray(values)
    }
}

impl<const N: usize> From<[String; N]> for AttributeValue {
    fn from(values: [String; N]) -> Self {
        Self::StringArray(Box::new(values))
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Opaque(value)
    }
}

impl<T> From<Option<T>> for AttributeValue
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

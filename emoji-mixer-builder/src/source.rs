//! Raw emoji metadata source.
//!
//! The source is a JSON array of emoji objects, or an object wrapping that
//! array under `data`. Individual records are read leniently: a field with
//! the wrong JSON type is treated as absent, and an element that is not an
//! object at all is skipped.

use crate::error::BuildError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse source text and return its record elements.
pub fn parse_source(text: &str) -> Result<Vec<Value>, BuildError> {
    let parsed: Value = serde_json::from_str(text).map_err(BuildError::Parse)?;
    match parsed {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(BuildError::UnexpectedShape {
                found: json_type(&other),
            }),
            None => Err(BuildError::UnexpectedShape { found: "object" }),
        },
        other => Err(BuildError::UnexpectedShape {
            found: json_type(&other),
        }),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Deserialize a field as `T`, or `None` if it has the wrong shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One element of the raw source.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEmoji {
    #[serde(default, deserialize_with = "lenient")]
    pub emoji: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub emoji_codepoint: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub keywords: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub subcategory: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub g_board_order: Option<serde_json::Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub combinations: Option<Vec<Value>>,
}

impl RawEmoji {
    /// Read a source element; `None` for anything that is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }

    /// Keywords that are strings, in source order.
    pub fn keyword_strings(&self) -> Vec<String> {
        self.keywords
            .iter()
            .flatten()
            .filter_map(|k| k.as_str().map(str::to_string))
            .collect()
    }

    /// True if the record lists at least one combination.
    pub fn has_combinations(&self) -> bool {
        self.combinations.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// The combination sub-records that are objects.
    pub fn combination_records(&self) -> impl Iterator<Item = RawCombination> + '_ {
        self.combinations
            .iter()
            .flatten()
            .filter(|c| c.is_object())
            .filter_map(|c| serde_json::from_value(c.clone()).ok())
    }
}

/// A combination partner given as a nested object or as a bare glyph.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPartner {
    Glyph(String),
    Object {
        #[serde(default, deserialize_with = "lenient")]
        codepoint: Option<String>,
        #[serde(default, deserialize_with = "lenient")]
        emoji: Option<String>,
    },
}

impl RawPartner {
    pub fn codepoint(&self) -> Option<&str> {
        match self {
            RawPartner::Glyph(_) => None,
            RawPartner::Object { codepoint, .. } => codepoint.as_deref(),
        }
    }

    pub fn glyph(&self) -> Option<&str> {
        match self {
            RawPartner::Glyph(glyph) => Some(glyph),
            RawPartner::Object { emoji, .. } => emoji.as_deref(),
        }
    }
}

/// One combination sub-record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCombination {
    #[serde(default, deserialize_with = "lenient")]
    pub left_emoji_codepoint: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub right_emoji_codepoint: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub left_emoji: Option<RawPartner>,
    #[serde(default, deserialize_with = "lenient")]
    pub right_emoji: Option<RawPartner>,
    #[serde(default, deserialize_with = "lenient")]
    pub g_static_url: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub alt: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
}

impl RawCombination {
    /// Left partner codepoint, direct field first, then the nested partner.
    pub fn left_codepoint(&self) -> Option<&str> {
        self.left_emoji_codepoint
            .as_deref()
            .or_else(|| self.left_emoji.as_ref().and_then(RawPartner::codepoint))
    }

    pub fn right_codepoint(&self) -> Option<&str> {
        self.right_emoji_codepoint
            .as_deref()
            .or_else(|| self.right_emoji.as_ref().and_then(RawPartner::codepoint))
    }
}

//! Profile document model.
//!
//! A profile is one JSON object describing a named bundle of plugins, MCP
//! servers and marketplaces. Every field is optional at the parse layer: an
//! absent or `null` field deserializes to its empty value and the required-field
//! rules in [`crate::rules`] decide whether that is acceptable. Unknown fields
//! are ignored. A field of the wrong JSON type is still a parse error.
//!
//! Documents are read into a [`Value`] first so that struct positions only
//! accept objects (or `null`, which reads as the empty struct) and a repeated
//! key keeps its last value.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One profile document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub plugins: Vec<String>,

    #[serde(rename = "mcpServers", default, deserialize_with = "null_as_default")]
    pub mcp_servers: Vec<McpServer>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub marketplaces: Vec<Marketplace>,

    #[serde(default)]
    pub detect: Option<Detection>,
}

/// External tool server launched for the profile
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct McpServer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub command: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub args: Vec<String>,

    #[serde(default)]
    pub scope: Option<String>,

    /// Secret bindings; values are opaque to validation
    #[serde(default)]
    pub secrets: Option<HashMap<String, Value>>,
}

/// Plugin marketplace reference
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Marketplace {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub repo: String,
}

/// Project detection heuristics, parsed but not validated
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub files: Option<Vec<String>>,

    #[serde(default)]
    pub contains: Option<HashMap<String, String>>,
}

impl Profile {
    /// Parse a profile from raw file bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let mut document: Value = serde_json::from_slice(bytes)?;
        normalize_profile(&mut document)?;
        serde_json::from_value(document)
    }
}

/// Reject non-object struct positions and fill `null` elements with their
/// empty value, so the derived impls never see a positional array.
fn normalize_profile(document: &mut Value) -> Result<(), serde_json::Error> {
    let profile = object_or_empty(document, "a profile object")?;

    blank_null_strings(profile.get_mut("plugins"));

    for server in elements(profile.get_mut("mcpServers")) {
        let server = object_or_empty(server, "an MCP server object")?;
        blank_null_strings(server.get_mut("args"));
    }

    for marketplace in elements(profile.get_mut("marketplaces")) {
        object_or_empty(marketplace, "a marketplace object")?;
    }

    if let Some(detect) = profile.get_mut("detect") {
        if !detect.is_null() {
            let detect = object_or_empty(detect, "a detection object")?;
            blank_null_strings(detect.get_mut("files"));
        }
    }

    Ok(())
}

fn object_or_empty<'a>(
    value: &'a mut Value,
    expected: &'static str,
) -> Result<&'a mut Map<String, Value>, serde_json::Error> {
    if value.is_null() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(fields) => Ok(fields),
        other => Err(serde_json::Error::invalid_type(unexpected(other), &expected)),
    }
}

/// Array elements of `value`; anything else is left for the typed parse to reject.
fn elements(value: Option<&mut Value>) -> impl Iterator<Item = &mut Value> {
    value.and_then(Value::as_array_mut).into_iter().flatten()
}

fn blank_null_strings(value: Option<&mut Value>) {
    for item in elements(value).filter(|item| item.is_null()) {
        *item = Value::String(String::new());
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

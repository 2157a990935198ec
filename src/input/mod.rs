//! Input handling
//!
//! Two concerns live here: turning pasted, possibly multi-line text into a
//! single command line ([`normalize`]), and classifying the request items
//! of an HTTPie command (`Name:Value`, `key=value`, `key:=json`) into
//! [`InputItem`] variants.

mod normalize;
mod parser;

use serde_json::Value as JsonValue;

pub use normalize::normalize;

/// A classified HTTPie request item
#[derive(Debug, Clone, PartialEq)]
pub enum InputItem {
    /// HTTP header: "Name:Value"
    Header { name: String, value: String },

    /// String data field: "key=value"
    DataField { key: String, value: String },

    /// Typed data field: "key:=json"
    /// Holds the parsed JSON, or the raw text as a string when it is not JSON
    JsonField { key: String, value: JsonValue },
}

impl InputItem {
    /// Parse one word of an HTTPie command; `None` if it is not an item
    pub fn parse(word: &str) -> Option<Self> {
        parser::parse(word)
    }

    /// Get the key/name for this item
    pub fn key(&self) -> &str {
        match self {
            InputItem::Header { name, .. } => name,
            InputItem::DataField { key, .. } => key,
            InputItem::JsonField { key, .. } => key,
        }
    }

    /// The value this item contributes to a JSON body
    pub fn json_value(&self) -> Option<JsonValue> {
        match self {
            InputItem::DataField { value, .. } => Some(JsonValue::String(value.clone())),
            InputItem::JsonField { value, .. } => Some(value.clone()),
            InputItem::Header { .. } => None,
        }
    }
}

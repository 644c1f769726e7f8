//! Collection+JSON model for the users resource.
//!
//! Rendering only consumes `items[].href` and the `nickname` field record.
//! The rest of the envelope (version, links, template, other field values)
//! is decoded leniently: a part with an unexpected shape falls back to its
//! default instead of failing the whole document.

mod lenient;
mod parse;

pub use parse::parse_collection;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the field record that supplies an item's display label.
pub const NICKNAME_FIELD: &str = "nickname";

/// Top-level response body: `{"collection": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub collection: Collection,
}

/// A group of addressable resources. `items` is required; order is the server's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub href: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::seq_skipping_invalid",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<Link>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub template: Option<Template>,
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub rel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Write template advertised by the server (what a new user needs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, deserialize_with = "lenient::seq_skipping_invalid")]
    pub data: Vec<TemplateField>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateField {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::value_as_text")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// One user resource: a locator plus its named field records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub href: String,
    /// Records without a `name` are dropped; `null` or a non-array is empty.
    #[serde(default, deserialize_with = "lenient::seq_skipping_invalid")]
    pub data: Vec<FieldRecord>,
    #[serde(
        default,
        deserialize_with = "lenient::seq_skipping_invalid",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    #[serde(default, deserialize_with = "lenient::value_as_text")]
    pub value: String,
}

impl FieldRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Returned by [`Item::require_nickname`] for items without a nickname record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("item {href} has no nickname field")]
pub struct MissingNickname {
    pub href: String,
}

impl Item {
    pub fn new(href: impl Into<String>, data: Vec<FieldRecord>) -> Self {
        Self {
            href: href.into(),
            data,
            links: Vec::new(),
        }
    }

    /// Value of the first field record called `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.value.as_str())
    }

    pub fn nickname(&self) -> Option<&str> {
        self.field(NICKNAME_FIELD)
    }

    /// Like [`Item::nickname`] but names the failure.
    pub fn require_nickname(&self) -> Result<&str, MissingNickname> {
        self.nickname().ok_or_else(|| MissingNickname {
            href: self.href.clone(),
        })
    }
}

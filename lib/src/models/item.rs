//! Typed views over the entries of an Arc sidebar item list.
//!
//! Every view borrows from the parsed `serde_json::Value` tree. Fields with
//! an unexpected JSON type are treated exactly like missing fields.

use super::bookmark::Bookmark;
use serde_json::{Map, Value};

/// Scalar id of an item list entry
///
/// Numbers are keyed by their `f64` value so `1` and `1.0` name the same
/// item. Arrays and objects have no `ItemId` and can never be referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemId<'a> {
    Text(&'a str),
    Number(u64),
    Bool(bool),
    Null,
}

impl<'a> ItemId<'a> {
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(ItemId::Text(s.as_str())),
            Value::Number(n) => n.as_f64().map(|f| {
                // -0.0 == 0.0
                let f = if f == 0.0 { 0.0 } else { f };
                ItemId::Number(f.to_bits())
            }),
            Value::Bool(b) => Some(ItemId::Bool(*b)),
            Value::Null => Some(ItemId::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// Payload half of an `(id, payload)` pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemPayload<'a> {
    /// `{"value": {...}}` indirection
    Wrapped(&'a Value),
    Bare(&'a Map<String, Value>),
}

impl<'a> ItemPayload<'a> {
    /// Returns `None` for anything that is not a JSON object
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let object = value.as_object()?;
        match object.get("value") {
            Some(inner) if !inner.is_null() => Some(ItemPayload::Wrapped(inner)),
            _ => Some(ItemPayload::Bare(object)),
        }
    }

    pub fn resolve(&self) -> ResolvedValue<'a> {
        match *self {
            ItemPayload::Wrapped(inner) => inner
                .as_object()
                .map(ResolvedValue::from_object)
                .unwrap_or_default(),
            ItemPayload::Bare(object) => ResolvedValue::from_object(object),
        }
    }
}

/// The fields of an unwrapped payload that matter for extraction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedValue<'a> {
    /// Present when the entry is a saved tab (`data.tab`)
    pub tab: Option<TabData<'a>>,
    pub created_at: Timestamp,
    /// Present when the entry is a folder (`childrenIds`)
    pub children_ids: Option<&'a [Value]>,
}

impl<'a> ResolvedValue<'a> {
    pub fn from_object(object: &'a Map<String, Value>) -> Self {
        let tab = object
            .get("data")
            .and_then(Value::as_object)
            .and_then(|data| data.get("tab"))
            .and_then(Value::as_object)
            .map(TabData::from_object);

        let children_ids = object
            .get("childrenIds")
            .and_then(Value::as_array)
            .map(Vec::as_slice);

        Self {
            tab,
            created_at: Timestamp::from_value(object.get("createdAt")),
            children_ids,
        }
    }

    /// Build a bookmark from the tab data, if this entry carries a usable URL
    ///
    /// `now` is the epoch second used when `createdAt` is not numeric.
    pub fn bookmark(&self, now: i64) -> Option<Bookmark> {
        let tab = self.tab.as_ref()?;
        let url = tab.url();
        if url.is_empty() {
            return None;
        }
        Some(Bookmark::new(tab.title(), url, self.created_at.to_epoch(now)))
    }
}

/// Saved title and URL of a tab entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabData<'a> {
    pub saved_title: Option<&'a str>,
    pub saved_url: Option<&'a str>,
}

impl<'a> TabData<'a> {
    pub fn from_object(object: &'a Map<String, Value>) -> Self {
        Self {
            saved_title: object.get("savedTitle").and_then(Value::as_str),
            saved_url: object.get("savedURL").and_then(Value::as_str),
        }
    }

    pub fn url(&self) -> &'a str {
        self.saved_url.unwrap_or("")
    }

    /// Saved title, falling back to the URL when the title is missing or empty
    pub fn title(&self) -> &'a str {
        self.saved_title
            .filter(|title| !title.is_empty())
            .or(self.saved_url)
            .unwrap_or("")
    }
}

/// Raw `createdAt` value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Timestamp {
    Numeric(f64),
    #[default]
    Missing,
}

impl Timestamp {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_f64) {
            Some(seconds) => Timestamp::Numeric(seconds),
            None => Timestamp::Missing,
        }
    }

    /// Floor to whole epoch seconds, or `now` when the value was not numeric
    pub fn to_epoch(self, now: i64) -> i64 {
        match self {
            Timestamp::Numeric(seconds) => seconds.floor() as i64,
            Timestamp::Missing => now,
        }
    }
}

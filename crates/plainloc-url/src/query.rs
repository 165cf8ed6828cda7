//! Query String Codec
//!
//! Ordered query mapping with a present-marker for bare keys, so `?a` and
//! `?a=` stay distinguishable through a decode/encode round-trip.

use crate::encode::{encode_query_token, percent_decode_query};

/// Value side of a query entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Key appeared with an explicit `=value` (possibly empty).
    Text(String),
    /// Present-marker: key appeared with no `=` at all.
    Flag,
}

impl QueryValue {
    /// Text content, if this entry carries one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            QueryValue::Text(s) => Some(s),
            QueryValue::Flag => None,
        }
    }

    /// True for the bare-key present-marker.
    pub fn is_flag(&self) -> bool {
        matches!(self, QueryValue::Flag)
    }
}

/// Ordered mapping of decoded query keys to values.
///
/// Insertion order is preserved; setting an existing key updates its value
/// in place without moving the key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Set a value, keeping the key's original position if it exists.
    pub fn set(&mut self, key: &str, value: QueryValue) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    /// Remove a key.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    /// Check if a key is present (flag or text).
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate over entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Decode a raw query string (without the leading `?`) into a `QueryMap`.
///
/// Segments split on `&`; empty segments from `&&` or leading/trailing `&`
/// are skipped silently. Each segment splits on the first `=`: the key is
/// always decoded, the value is decoded when present, and a bare key stores
/// the present-marker. Never errors on malformed input.
pub fn decode_query_string(raw: &str) -> QueryMap {
    let mut map = QueryMap::new();

    for segment in raw.split('&') {
        if segment.is_empty() {
            continue;
        }
        match segment.split_once('=') {
            Some((key, value)) => {
                map.set(&percent_decode_query(key), QueryValue::Text(percent_decode_query(value)));
            }
            None => {
                map.set(&percent_decode_query(segment), QueryValue::Flag);
            }
        }
    }

    map
}

/// Encode a `QueryMap` back into a query string (without the leading `?`).
///
/// Flag entries emit the encoded key alone; text entries emit `key=value`.
/// Entries join with `&` in insertion order; an empty map yields an empty
/// string.
pub fn encode_query_string(map: &QueryMap) -> String {
    let parts: Vec<String> = map
        .entries()
        .map(|(key, value)| match value {
            QueryValue::Flag => encode_query_token(key, false),
            QueryValue::Text(text) => format!(
                "{}={}",
                encode_query_token(key, false),
                encode_query_token(text, false)
            ),
        })
        .collect();

    parts.join("&")
}

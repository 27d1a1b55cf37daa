//! Style values and ordered style maps
//!
//! A [`StyleMap`] is the unit every preset is made of: attribute name to
//! [`StyleValue`]. Maps keep the order their entries were declared in, which
//! is the order custom properties and classes are projected onto elements.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single style attribute value
///
/// Untagged on the wire, so `"64px"`, `700`, `1.6`, `true`, `["a", "b"]` and
/// nested tables all deserialize into the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<StyleValue>),
    Map(StyleMap),
}

impl StyleValue {
    /// Borrow the text content, if this is a text value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the nested map, if this is a grouped value
    pub fn as_map(&self) -> Option<&StyleMap> {
        match self {
            StyleValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

/// Display form used when a value is written onto an element.
///
/// Lists join with `,` and maps render as `key: value` declarations joined
/// by `; `.
impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Integer(n) => write!(f, "{}", n),
            StyleValue::Float(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            StyleValue::Map(map) => {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Integer(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Integer(n.into())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Float(n)
    }
}

impl From<bool> for StyleValue {
    fn from(b: bool) -> Self {
        StyleValue::Bool(b)
    }
}

impl From<StyleMap> for StyleValue {
    fn from(m: StyleMap) -> Self {
        StyleValue::Map(m)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(items: Vec<T>) -> Self {
        StyleValue::List(items.into_iter().map(Into::into).collect())
    }
}

/// Ordered mapping from attribute name to [`StyleValue`]
///
/// Equality ignores order: two maps are equal when they hold the same
/// entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(IndexMap<String, StyleValue>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an attribute, returning the value it replaced.
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Option<StyleValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Builder form of [`StyleMap::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.0.get(key)
    }

    /// Text value of `key`, if present and textual
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(StyleValue::as_str)
    }

    /// Nested map under `key`, if present and grouped
    pub fn get_map(&self, key: &str) -> Option<&StyleMap> {
        self.get(key).and_then(StyleValue::as_map)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &StyleValue> {
        self.0.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Shallow merge: a fresh map holding `self` with every entry of
    /// `overrides` written on top.
    ///
    /// Keys present in `overrides` replace the base value wholesale, nested
    /// maps included. Keys only in `self` keep their position; new keys are
    /// appended.
    pub fn merged(&self, overrides: &StyleMap) -> StyleMap {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = indexmap::map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Build a [`StyleMap`] from `key => value` pairs, in order.
///
/// ```rust
/// use preset_forge::style_map;
///
/// let header = style_map! { "height" => "64px", "position" => "fixed" };
/// assert_eq!(header.get_str("height"), Some("64px"));
/// ```
#[macro_export]
macro_rules! style_map {
    () => {
        $crate::StyleMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::StyleMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}

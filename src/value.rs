//! Parsed values and the ordered, string-keyed map that holds them.
//!
//! Every strategy produces a [`ResultMap`] whose values are [`ResultValue`]s.
//! Keys are always plain strings; every accessor takes `impl AsRef<str>` so
//! callers can look fields up with `&str`, `String` or anything that derefs
//! to one without caring how the key was spelled when it was inserted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

static NULL: ResultValue = ResultValue::Null;

/// A single parsed value.
///
/// Serializes to plain JSON: `null`, a number, a string, an array or an
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// Absent or empty
    #[default]
    Null,
    /// Page numbers, page sizes and offsets
    Integer(u64),
    /// A single string
    Scalar(String),
    /// An ordered list of strings
    List(Vec<String>),
    /// An ordered list of mixed values (join paths are strings or maps)
    Nested(Vec<ResultValue>),
    /// A nested mapping
    Map(ResultMap),
}

impl ResultValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_nested(&self) -> Option<&[ResultValue]> {
        match self {
            Self::Nested(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&ResultMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The first string carried by this value, if any.
    #[must_use]
    pub fn first_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            Self::List(items) => items.first().map(String::as_str),
            _ => None,
        }
    }

    /// Wrap the value into a list of strings.
    ///
    /// `Null` becomes an empty list, a scalar becomes a one-element list and
    /// integers are rendered in decimal. Nested lists and maps carry no flat
    /// strings and also become empty.
    #[must_use]
    pub fn to_strings(&self) -> Vec<String> {
        match self {
            Self::Scalar(s) => vec![s.clone()],
            Self::List(items) => items.clone(),
            Self::Integer(n) => vec![n.to_string()],
            Self::Null | Self::Nested(_) | Self::Map(_) => Vec::new(),
        }
    }

    /// Drop repeated list entries, keeping the first occurrence of each.
    ///
    /// Only list values are affected.
    pub fn dedup(&mut self) {
        if let Self::List(items) = self {
            dedup_in_place(items);
        }
    }
}

/// Order-preserving, first-occurrence deduplication.
pub(crate) fn dedup_in_place(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::with_capacity(items.len());
    items.retain(|item| seen.insert(item.clone()));
}

impl From<&str> for ResultValue {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for ResultValue {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

impl From<u64> for ResultValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<String>> for ResultValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for ResultValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<ResultMap> for ResultValue {
    fn from(value: ResultMap) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<ResultValue>> From<Option<T>> for ResultValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl PartialEq<str> for ResultValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for ResultValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<u64> for ResultValue {
    fn eq(&self, other: &u64) -> bool {
        self.as_u64() == Some(*other)
    }
}

/// Matches a `List`, or a `Nested` whose elements are all scalars.
impl PartialEq<Vec<&str>> for ResultValue {
    fn eq(&self, other: &Vec<&str>) -> bool {
        match self {
            Self::List(items) => items.iter().map(String::as_str).eq(other.iter().copied()),
            Self::Nested(items) => items
                .iter()
                .map(ResultValue::as_str)
                .eq(other.iter().copied().map(Some)),
            _ => false,
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
            Self::Nested(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Map(map) => write!(f, "{map}"),
        }
    }
}

impl Index<&str> for ResultValue {
    type Output = ResultValue;

    /// Look up a key in a map value. Anything else, or a missing key,
    /// yields `Null`.
    fn index(&self, key: &str) -> &Self::Output {
        self.as_map().and_then(|map| map.get(key)).unwrap_or(&NULL)
    }
}

impl Index<usize> for ResultValue {
    type Output = ResultValue;

    fn index(&self, index: usize) -> &Self::Output {
        self.as_nested().and_then(|items| items.get(index)).unwrap_or(&NULL)
    }
}

/// Insertion-ordered map from field name to [`ResultValue`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultMap(IndexMap<String, ResultValue>);

impl ResultMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&ResultValue> {
        self.0.get(key.as_ref())
    }

    pub fn get_mut(&mut self, key: impl AsRef<str>) -> Option<&mut ResultValue> {
        self.0.get_mut(key.as_ref())
    }

    #[must_use]
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.0.contains_key(key.as_ref())
    }

    /// Insert a value. An existing key keeps its position and the old
    /// value is returned.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ResultValue>,
    ) -> Option<ResultValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<ResultValue> {
        self.0.shift_remove(key.as_ref())
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &mut ResultValue) -> bool) {
        self.0.retain(|key, value| keep(key, value));
    }

    /// Copy every entry of `other` into `self`; later keys win.
    pub fn extend(&mut self, other: ResultMap) {
        self.0.extend(other.0);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut ResultValue> {
        self.0.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<ResultValue>> FromIterator<(K, V)> for ResultMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for ResultMap {
    type Item = (String, ResultValue);
    type IntoIter = indexmap::map::IntoIter<String, ResultValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Index<&str> for ResultMap {
    type Output = ResultValue;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&NULL)
    }
}

impl fmt::Display for ResultMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_position_of_existing_key() {
        let mut map = ResultMap::new();
        map.insert("a", "1");
        map.insert("b", "2");
        let old = map.insert("a", "3");

        assert_eq!(old, Some(ResultValue::from("1")));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map["a"], "3");
    }

    #[test]
    fn test_lookup_accepts_owned_and_borrowed_keys() {
        let map: ResultMap = [("where", "id:1")].into_iter().collect();
        let owned = String::from("where");

        assert_eq!(map.get("where"), map.get(&owned));
        assert!(map.contains_key(owned));
    }

    #[test]
    fn test_index_missing_key_is_null() {
        let map = ResultMap::new();
        assert!(map["missing"].is_null());
        assert!(ResultValue::from("x")["nested"].is_null());
        assert!(ResultValue::from("x")[0].is_null());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut map: ResultMap = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        map.remove("a");
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let mut value = ResultValue::from(vec!["2", "1", "2", "3", "1"]);
        value.dedup();
        assert_eq!(value, vec!["2", "1", "3"]);
    }

    #[test]
    fn test_dedup_ignores_scalars() {
        let mut value = ResultValue::from("1");
        value.dedup();
        assert_eq!(value, "1");
    }

    #[test]
    fn test_to_strings_wraps_scalars() {
        assert_eq!(ResultValue::from("a").to_strings(), vec!["a"]);
        assert_eq!(ResultValue::Null.to_strings(), Vec::<String>::new());
        assert_eq!(ResultValue::Integer(5).to_strings(), vec!["5"]);
    }

    #[test]
    fn test_option_conversion() {
        assert!(ResultValue::from(None::<u64>).is_null());
        assert_eq!(ResultValue::from(Some(10u64)), 10u64);
    }

    #[test]
    fn test_display() {
        let mut inner = ResultMap::new();
        inner.insert("country", "name");
        let value = ResultValue::Nested(vec!["author".into(), inner.into()]);
        assert_eq!(value.to_string(), "author,{country: name}");
    }

    #[test]
    fn test_nested_scalars_equal_string_vec() {
        let value = ResultValue::Nested(vec!["a".into(), "b".into()]);
        assert_eq!(value, vec!["a", "b"]);
        assert_ne!(value, vec!["b", "a"]);
        assert_ne!(value, vec!["a"]);
    }

    #[test]
    fn test_nested_with_map_not_equal_string_vec() {
        let mut inner = ResultMap::new();
        inner.insert("author", "country");
        let value = ResultValue::Nested(vec!["a".into(), inner.into()]);
        assert_ne!(value, vec!["a", "author"]);
    }
}

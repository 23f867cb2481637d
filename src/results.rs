//! # Parsed Results
//!
//! [`QueryResults`] is what every strategy returns: an ordered map from field
//! name to [`ResultValue`] with a few helpers on top.
//!
//! ## Lookup
//!
//! ```rust,ignore
//! let results = FilterExpressionStrategy::default().parse("where=id:1|2");
//!
//! results["where"]["id"];          // List(["1", "2"]), Null when absent
//! results.get("where");            // Option<&ResultValue>
//! results.fetch("where")?;         // Err(KeyNotFound) when absent
//! results.fetch_or("page", 1u64);  // default when absent
//! ```
//!
//! `fetch` is the only lookup that fails, and only when the key is missing:
//! a key that is present with a `Null` value is returned as `Ok(&Null)`.
//!
//! ## Post-parse filtering
//!
//! Values can be narrowed after parsing with [`ValueFilter`]:
//!
//! ```rust,ignore
//! results.filter("select", &ValueFilter::only(["id", "name"]))?;
//! results.filter("select", &ValueFilter::except("created_at"))?;
//! ```
//!
//! Filters can also be registered with [`QueryResults::add_filter`] and
//! applied together with [`QueryResults::filtered`].

use indexmap::IndexMap;
use serde::Serialize;
use std::ops::Index;

use crate::errors::QueryError;
use crate::value::{ResultMap, ResultValue};

/// Post-parse narrowing of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueFilter {
    /// Keep only the listed values.
    ///
    /// A scalar argument returns that scalar when the field contains it
    /// and `Null` otherwise. A list argument returns the intersection, in
    /// the field's order.
    Only(ResultValue),
    /// Remove the listed values.
    ///
    /// A list field loses every excluded entry. A scalar field becomes
    /// `Null` when excluded and is returned unchanged otherwise.
    Except(ResultValue),
    /// Plain lookup, with an optional default for a missing key.
    Fetch(Option<ResultValue>),
}

impl ValueFilter {
    pub fn only(values: impl Into<ResultValue>) -> Self {
        Self::Only(values.into())
    }

    pub fn except(values: impl Into<ResultValue>) -> Self {
        Self::Except(values.into())
    }

    pub fn fetch_or(default: impl Into<ResultValue>) -> Self {
        Self::Fetch(Some(default.into()))
    }
}

/// Output of a strategy.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QueryResults {
    data: ResultMap,
    #[serde(skip)]
    filters: IndexMap<String, ValueFilter>,
}

impl QueryResults {
    #[must_use]
    pub fn new(data: ResultMap) -> Self {
        Self {
            data,
            filters: IndexMap::new(),
        }
    }

    #[must_use]
    pub const fn data(&self) -> &ResultMap {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> ResultMap {
        self.data
    }

    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&ResultValue> {
        self.data.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
        self.data.contains_key(key)
    }

    /// Look up a field that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::KeyNotFound`] if the field is absent.
    pub fn fetch(&self, key: impl AsRef<str>) -> Result<&ResultValue, QueryError> {
        let key = key.as_ref();
        self.data.get(key).ok_or_else(|| QueryError::key_not_found(key))
    }

    /// Look up a field, falling back to `default` when it is absent.
    #[must_use]
    pub fn fetch_or(&self, key: impl AsRef<str>, default: impl Into<ResultValue>) -> ResultValue {
        self.data.get(key).cloned().unwrap_or_else(|| default.into())
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ResultValue>,
    ) -> Option<ResultValue> {
        self.data.insert(key, value)
    }

    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<ResultValue> {
        self.data.remove(key)
    }

    /// Merge another result into this one. Keys already present keep their
    /// position and take the incoming value.
    pub fn merge(&mut self, other: QueryResults) {
        self.data.extend(other.data);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResultValue)> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Apply a filter to one field.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::KeyNotFound`] for [`ValueFilter::Fetch`] without
    /// a default when the field is absent.
    pub fn filter(
        &self,
        key: impl AsRef<str>,
        filter: &ValueFilter,
    ) -> Result<ResultValue, QueryError> {
        let key = key.as_ref();
        match filter {
            ValueFilter::Only(allowed) => Ok(self.filter_only(key, allowed)),
            ValueFilter::Except(excluded) => Ok(self.filter_except(key, excluded)),
            ValueFilter::Fetch(Some(default)) => Ok(self.fetch_or(key, default.clone())),
            ValueFilter::Fetch(None) => self.fetch(key).cloned(),
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &IndexMap<String, ValueFilter> {
        &self.filters
    }

    /// Register a filter for [`filtered`](Self::filtered).
    pub fn add_filter(&mut self, key: impl Into<String>, filter: ValueFilter) {
        self.filters.insert(key.into(), filter);
    }

    /// Apply every registered filter, returning only the filtered fields.
    ///
    /// Without registered filters this is a plain copy.
    ///
    /// # Errors
    ///
    /// Propagates the first [`QueryError::KeyNotFound`] from a
    /// [`ValueFilter::Fetch`] without default.
    pub fn filtered(&self) -> Result<QueryResults, QueryError> {
        if self.filters.is_empty() {
            return Ok(self.clone());
        }

        let mut data = ResultMap::new();
        for (key, filter) in &self.filters {
            data.insert(key.clone(), self.filter(key, filter)?);
        }
        Ok(QueryResults::new(data))
    }

    fn filter_only(&self, key: &str, allowed: &ResultValue) -> ResultValue {
        let values = self.data[key].to_strings();

        match allowed {
            ResultValue::List(allowed) => {
                let mut kept: Vec<String> = values
                    .into_iter()
                    .filter(|value| allowed.contains(value))
                    .collect();
                crate::value::dedup_in_place(&mut kept);
                ResultValue::List(kept)
            }
            single => {
                let single = single.to_strings();
                if let [one] = single.as_slice()
                    && values.contains(one)
                {
                    ResultValue::Scalar(one.clone())
                } else {
                    ResultValue::Null
                }
            }
        }
    }

    fn filter_except(&self, key: &str, excluded: &ResultValue) -> ResultValue {
        let excluded = excluded.to_strings();

        match &self.data[key] {
            ResultValue::List(values) => ResultValue::List(
                values
                    .iter()
                    .filter(|value| !excluded.contains(value))
                    .cloned()
                    .collect(),
            ),
            value => {
                let values = value.to_strings();
                if values.len() == 1 && excluded.contains(&values[0]) {
                    ResultValue::Null
                } else {
                    value.clone()
                }
            }
        }
    }
}

impl From<ResultMap> for QueryResults {
    fn from(data: ResultMap) -> Self {
        Self::new(data)
    }
}

impl Index<&str> for QueryResults {
    type Output = ResultValue;

    fn index(&self, key: &str) -> &Self::Output {
        &self.data[key]
    }
}

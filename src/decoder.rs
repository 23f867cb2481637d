//! Raw query-string decoding.
//!
//! Turns `a=1&b=2&a=3` into an ordered map where a field seen once holds a
//! scalar and a field seen several times holds every value in the order it
//! appeared:
//!
//! ```text
//! a=1&b=2&a=3  →  { "a": ["1", "3"], "b": "2" }
//! ```
//!
//! Decoding is permissive. `+` is a space and percent escapes are decoded.
//! A `%` not followed by two hex digits passes through literally, and bytes
//! that do not form valid UTF-8 become U+FFFD. Neither fails the request.

use url::form_urlencoded;

use crate::value::{ResultMap, ResultValue};

/// Decode a raw query string into a multi-valued field map.
///
/// A leading `?` is ignored. Pairs without `=` decode to an empty value.
#[must_use]
pub fn decode(query_string: &str) -> ResultMap {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    let mut fields = ResultMap::new();

    for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
        let value = value.into_owned();
        match fields.get_mut(&*key) {
            None => {
                fields.insert(key.into_owned(), value);
            }
            Some(existing) => append(existing, value),
        }
    }

    fields
}

/// Promote a scalar to a list on its second occurrence.
fn append(existing: &mut ResultValue, value: String) {
    match existing {
        ResultValue::List(items) => items.push(value),
        ResultValue::Scalar(first) => {
            let first = std::mem::take(first);
            *existing = ResultValue::List(vec![first, value]);
        }
        other => *other = ResultValue::Scalar(value),
    }
}

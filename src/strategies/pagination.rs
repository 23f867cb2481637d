use crate::decoder::decode;
use crate::models::StrategyOptions;
use crate::results::QueryResults;
use crate::selector::FieldSelector;
use crate::traits::ParseStrategy;
use crate::value::{ResultMap, ResultValue};

/// Page size used when neither the request nor the configuration supply one.
pub const DEFAULT_PAGE_SIZE: u64 = 30;

/// A resolved page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: u64,
    pub per_page: u64,
}

impl Page {
    #[must_use]
    pub const fn limit(self) -> u64 {
        self.per_page
    }

    /// `(page - 1) * per_page`, or `None` for the first page.
    #[must_use]
    pub const fn offset(self) -> Option<u64> {
        match self.page.saturating_sub(1).saturating_mul(self.per_page) {
            0 => None,
            offset => Some(offset),
        }
    }
}

/// Page/offset math from `page` and `per_page` (or `page_size`).
///
/// ```text
/// page=3&per_page=5  →  {"pagination": {"page": 3, "per_page": 5}, "limit": 5, "offset": 10}
/// (empty)            →  {"pagination": {"page": 1, "per_page": 30}, "limit": 30, "offset": null}
/// ```
///
/// Unparseable or non-positive inputs fall back to page 1 and the default
/// page size. Other query fields pass through untouched unless `fields`
/// restricts the output, typically to `["pagination", "limit", "offset"]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationStrategy {
    selector: FieldSelector,
    default_page_size: u64,
}

impl Default for PaginationStrategy {
    fn default() -> Self {
        Self::new(StrategyOptions::default())
    }
}

impl PaginationStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        let default_page_size = options
            .default_page_size
            .and_then(|size| u64::try_from(size).ok())
            .filter(|size| *size >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            selector: FieldSelector::new(options.fields),
            default_page_size,
        }
    }

    #[must_use]
    pub const fn default_page_size(&self) -> u64 {
        self.default_page_size
    }

    /// Resolve raw `page` and page-size values.
    #[must_use]
    pub fn page(&self, page: Option<&ResultValue>, per_page: Option<&ResultValue>) -> Page {
        Page {
            page: positive_integer(page).unwrap_or(1),
            per_page: positive_integer(per_page).unwrap_or(self.default_page_size),
        }
    }
}

impl ParseStrategy for PaginationStrategy {
    fn name(&self) -> &'static str {
        "pagination"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        let mut params = decode(query_string);
        let raw_page = params.remove("page");
        let raw_per_page = params
            .remove("per_page")
            .or_else(|| params.remove("page_size"));

        let page = self.page(raw_page.as_ref(), raw_per_page.as_ref());
        tracing::trace!(page = page.page, per_page = page.per_page, "Resolved page");

        let mut pagination = ResultMap::new();
        pagination.insert("page", page.page);
        pagination.insert("per_page", page.per_page);

        params.insert("pagination", pagination);
        params.insert("limit", page.limit());
        params.insert("offset", page.offset());

        let params = self.selector.select(params);
        tracing::debug!(strategy = self.name(), fields = params.len(), "Parsed query string");
        QueryResults::new(params)
    }
}

/// First value of `raw` read as a leading integer, if positive.
fn positive_integer(raw: Option<&ResultValue>) -> Option<u64> {
    raw.and_then(ResultValue::first_str)
        .map(leading_integer)
        .and_then(|value| u64::try_from(value).ok())
        .filter(|value| *value >= 1)
}

/// Parse an optional sign and the digits that follow, after leading
/// whitespace. Anything else ends the number; no digits reads as 0.
fn leading_integer(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

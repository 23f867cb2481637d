use std::sync::Arc;

use crate::results::QueryResults;

/// A strategy shared between requests, as stored in middleware state.
pub type SharedStrategy = Arc<dyn ParseStrategy>;

/// A configured query-string parser.
///
/// Implementations hold only immutable configuration, so one instance can
/// serve any number of concurrent requests. `parse` is a pure function of
/// that configuration and the input: it never fails, and malformed input
/// degrades to defaults.
pub trait ParseStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Parse `query_string`, the part of a URL after `?`.
    fn parse(&self, query_string: &str) -> QueryResults;

    /// Box the strategy for sharing across requests.
    fn into_shared(self) -> SharedStrategy
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<T: ParseStrategy + ?Sized> ParseStrategy for Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        (**self).parse(query_string)
    }
}

impl<T: ParseStrategy + ?Sized> ParseStrategy for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        (**self).parse(query_string)
    }
}

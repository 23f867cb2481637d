use std::fmt;
use std::sync::Arc;

use crate::results::QueryResults;
use crate::traits::{ParseStrategy, SharedStrategy};

/// Several strategies applied to the same query string, merged in order.
///
/// Later strategies overwrite keys produced by earlier ones.
#[derive(Clone, Default)]
pub struct StrategyChain {
    strategies: Vec<SharedStrategy>,
}

impl StrategyChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, strategy: impl ParseStrategy + 'static) -> Self {
        self.strategies.push(Arc::new(strategy));
        self
    }

    #[must_use]
    pub fn with_shared(mut self, strategy: SharedStrategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|strategy| strategy.name()))
            .finish()
    }
}

impl ParseStrategy for StrategyChain {
    fn name(&self) -> &'static str {
        "chain"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        self.strategies
            .iter()
            .fold(QueryResults::default(), |mut results, strategy| {
                results.merge(strategy.parse(query_string));
                results
            })
    }
}

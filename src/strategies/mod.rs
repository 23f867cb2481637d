//! # Parsing Strategies
//!
//! Each strategy applies one micro-grammar to a raw query string. They all
//! implement [`ParseStrategy`](crate::ParseStrategy) and are built from
//! [`StrategyOptions`](crate::StrategyOptions) once, up front.
//!
//! ## Strategies
//!
//! | Strategy | Input | Output |
//! |----------|-------|--------|
//! | [`FlatStrategy`] | `a=1&a=2,3` | `{"a": ["1", "2", "3"]}` |
//! | [`FilterExpressionStrategy`] | `where=id:1\|2&where=name:Bob` | `{"where": {"id": ["1", "2"], "name": "Bob"}}` |
//! | [`SortExpressionStrategy`] | `order=id:desc,name` | `{"order": ["id desc", "name asc"]}` |
//! | [`JoinsExpressionStrategy`] | `joins=author.country.name` | `{"joins": [{"author": {"country": "name"}}]}` |
//! | [`PaginationStrategy`] | `page=3&per_page=5` | `{"pagination": {"page": 3, "per_page": 5}, "limit": 5, "offset": 10}` |
//! | [`RelationStrategy`] | all of the above | `select`, `order`, `limit`, `offset`, `where`, `joins`, `includes`, `pagination` |
//!
//! ## Composition
//!
//! The expression strategies own a [`FlatStrategy`] and delegate decoding and
//! field selection to it before applying their own grammar. Several
//! strategies can run over the same query string with [`StrategyChain`]:
//!
//! ```rust,ignore
//! use querycrate::{StrategyChain, FlatStrategy, SortExpressionStrategy, StrategyOptions};
//!
//! let chain = StrategyChain::new()
//!     .with(FlatStrategy::new(StrategyOptions::default().with_field("name")))
//!     .with(SortExpressionStrategy::new(StrategyOptions::default().with_field("order")));
//!
//! let results = chain.parse("name=bob&order=id:desc");
//! ```
//!
//! ## Field restriction
//!
//! Every strategy honours `fields`. Expression strategies restrict the raw
//! fields they parse; pagination restricts the keys it outputs.

pub mod chain;
pub mod filter_expression;
pub mod flat;
pub mod joins_expression;
pub mod pagination;
pub mod relation;
pub mod sort_expression;

pub use chain::StrategyChain;
pub use filter_expression::FilterExpressionStrategy;
pub use flat::FlatStrategy;
pub use joins_expression::JoinsExpressionStrategy;
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PaginationStrategy};
pub use relation::RelationStrategy;
pub use sort_expression::{SortDirection, SortExpressionStrategy};

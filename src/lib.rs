//! Composable strategies that turn HTTP query strings into filter, sort,
//! join and pagination arguments for a query builder.
//!
//! ```rust,ignore
//! use querycrate::{ParseStrategy, RelationStrategy};
//!
//! let results = RelationStrategy::default()
//!     .parse("select=id,name&where=name:foop&order=id:desc&page=3&page_size=5");
//!
//! assert_eq!(results["where"]["name"], "foop");
//! assert_eq!(results["offset"], 10u64);
//! ```

pub mod decoder;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod results;
pub mod selector;
pub mod separator;
pub mod splitter;
pub mod strategies;
pub mod traits;
pub mod value;

pub use decoder::decode;
pub use errors::QueryError;
pub use middleware::{ParsedQuery, parse_query};
pub use models::StrategyOptions;
pub use results::{QueryResults, ValueFilter};
pub use selector::FieldSelector;
pub use separator::Separator;
pub use splitter::ValueSplitter;
pub use strategies::{
    FilterExpressionStrategy, FlatStrategy, JoinsExpressionStrategy, PaginationStrategy,
    RelationStrategy, SortDirection, SortExpressionStrategy, StrategyChain,
};
pub use traits::{ParseStrategy, SharedStrategy};
pub use value::{ResultMap, ResultValue};

use crate::models::StrategyOptions;
use crate::results::QueryResults;
use crate::strategies::filter_expression::FilterExpressionStrategy;
use crate::strategies::flat::FlatStrategy;
use crate::strategies::joins_expression::JoinsExpressionStrategy;
use crate::strategies::pagination::PaginationStrategy;
use crate::strategies::sort_expression::SortExpressionStrategy;
use crate::traits::ParseStrategy;
use crate::value::{ResultMap, ResultValue};

const SELECT: &str = "select";
const ORDER: &str = "order";
const WHERE: &str = "where";
const JOINS: &str = "joins";

/// Everything a relational query builder needs, from one query string.
///
/// ```text
/// select=id,name&where=name:foop&order=id:desc&page=3&page_size=5
///
/// {
///   "select": ["id", "name"],
///   "order": ["id desc"],
///   "limit": 5,
///   "offset": 10,
///   "where": {"name": "foop"},
///   "joins": {},
///   "includes": {},
///   "pagination": {"page": 3, "per_page": 5}
/// }
/// ```
///
/// `select` and `order` are always lists. `where`, `joins` and `includes`
/// default to an empty map; `includes` mirrors `joins`. Only
/// `default_page_size` and `unique_values` are taken from the options.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationStrategy {
    select: FlatStrategy,
    order: SortExpressionStrategy,
    pagination: PaginationStrategy,
    filter: FilterExpressionStrategy,
    joins: JoinsExpressionStrategy,
}

impl Default for RelationStrategy {
    fn default() -> Self {
        Self::new(StrategyOptions::default())
    }
}

impl RelationStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        let base = StrategyOptions::default().with_unique_values(options.unique_values);
        let mut pagination = base
            .clone()
            .with_fields(["pagination", "limit", "offset"]);
        pagination.default_page_size = options.default_page_size;

        Self {
            select: FlatStrategy::new(base.clone().with_field(SELECT)),
            order: SortExpressionStrategy::new(base.clone().with_field(ORDER)),
            pagination: PaginationStrategy::new(pagination),
            filter: FilterExpressionStrategy::new(base.clone().with_field(WHERE)),
            joins: JoinsExpressionStrategy::new(base.with_field(JOINS)),
        }
    }
}

fn list(value: Option<ResultValue>) -> ResultValue {
    ResultValue::List(value.map(|value| value.to_strings()).unwrap_or_default())
}

fn map_or_empty(value: Option<ResultValue>) -> ResultValue {
    value.unwrap_or_else(|| ResultValue::Map(ResultMap::new()))
}

impl ParseStrategy for RelationStrategy {
    fn name(&self) -> &'static str {
        "relation"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        let mut pagination = self.pagination.parse(query_string);
        let joins = map_or_empty(self.joins.parse(query_string).remove(JOINS));

        let mut data = ResultMap::new();
        data.insert(SELECT, list(self.select.parse(query_string).remove(SELECT)));
        data.insert(ORDER, list(self.order.parse(query_string).remove(ORDER)));
        data.insert("limit", pagination.remove("limit"));
        data.insert("offset", pagination.remove("offset"));
        data.insert(
            WHERE,
            map_or_empty(self.filter.parse(query_string).remove(WHERE)),
        );
        data.insert(JOINS, joins.clone());
        data.insert("includes", joins);
        data.insert("pagination", pagination.remove("pagination"));

        tracing::debug!(strategy = self.name(), "Parsed query string");
        QueryResults::new(data)
    }
}

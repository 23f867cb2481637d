use crate::models::StrategyOptions;
use crate::results::QueryResults;
use crate::separator::Separator;
use crate::strategies::flat::FlatStrategy;
use crate::traits::ParseStrategy;
use crate::value::{ResultMap, ResultValue};

/// Dotted association paths turned into nested maps.
///
/// ```text
/// joins=author                       →  {"joins": ["author"]}
/// joins=author.country.name,comments →  {"joins": [{"author": {"country": "name"}}, "comments"]}
/// ```
///
/// The output is always a list, one entry per expression, in input order.
/// With `unique_values` on, only the first occurrence of a repeated field is
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinsExpressionStrategy {
    base: FlatStrategy,
    expression_separator: Separator,
    field_separator: Separator,
    unique: bool,
}

impl Default for JoinsExpressionStrategy {
    fn default() -> Self {
        Self::new(StrategyOptions::default())
    }
}

impl JoinsExpressionStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        Self {
            base: FlatStrategy::new(StrategyOptions::default().with_fields(options.fields)),
            expression_separator: options
                .expression_separator
                .unwrap_or_else(Separator::comma),
            field_separator: options
                .field_separator
                .unwrap_or_else(|| Separator::literal(".")),
            unique: options.unique_values,
        }
    }

    /// Fold one dotted path into a chain of single-key maps.
    ///
    /// Returns `None` when the path has no segments.
    #[must_use]
    pub fn nest(&self, expression: &str) -> Option<ResultValue> {
        let mut segments = self.field_separator.split(expression);
        let leaf = segments.pop()?;

        Some(
            segments
                .into_iter()
                .rev()
                .fold(ResultValue::from(leaf), |inner, segment| {
                    let mut map = ResultMap::new();
                    map.insert(segment, inner);
                    ResultValue::Map(map)
                }),
        )
    }

    fn parse_joins(&self, value: &ResultValue) -> ResultValue {
        let sources: Vec<String> = match value {
            ResultValue::List(items) if self.unique => items.iter().take(1).cloned().collect(),
            other => other.to_strings(),
        };

        let joins = sources
            .iter()
            .flat_map(|source| self.expression_separator.split(source))
            .filter(|expression| !expression.is_empty())
            .filter_map(|expression| self.nest(expression))
            .collect::<Vec<_>>();

        tracing::trace!(joins = joins.len(), "Split join expressions");
        ResultValue::Nested(joins)
    }
}

impl ParseStrategy for JoinsExpressionStrategy {
    fn name(&self) -> &'static str {
        "joins_expression"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        let mut fields = self.base.selected_fields(query_string);
        for value in fields.values_mut() {
            *value = self.parse_joins(value);
        }

        tracing::debug!(strategy = self.name(), fields = fields.len(), "Parsed query string");
        QueryResults::new(fields)
    }
}

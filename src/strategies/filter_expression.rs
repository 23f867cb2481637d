use crate::models::StrategyOptions;
use crate::results::QueryResults;
use crate::separator::Separator;
use crate::splitter::ValueSplitter;
use crate::strategies::flat::FlatStrategy;
use crate::traits::ParseStrategy;
use crate::value::{ResultMap, ResultValue};

/// `name:value` filter expressions.
///
/// ```text
/// where=id:1|2&where=name:Bob  →  {"where": {"id": ["1", "2"], "name": "Bob"}}
/// ```
///
/// | Option | Default | Splits |
/// |--------|---------|--------|
/// | `expression_separator` | `,\s*` | expressions within one value |
/// | `field_separator` | `:` | name from value, first occurrence only |
/// | `value_separator` | `\|` | alternative values |
///
/// Repeated names merge into one list. An expression without a field
/// separator yields the name with a `Null` value; merging it with a real
/// value keeps only the real value. Empty expressions are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterExpressionStrategy {
    base: FlatStrategy,
    expression_separator: Separator,
    field_separator: Separator,
    value_splitter: ValueSplitter,
    unique: bool,
}

impl Default for FilterExpressionStrategy {
    fn default() -> Self {
        Self::new(StrategyOptions::default())
    }
}

impl FilterExpressionStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        let value_separator = options
            .value_separator
            .unwrap_or_else(|| Separator::literal("|"));

        Self {
            base: FlatStrategy::new(StrategyOptions::default().with_fields(options.fields)),
            expression_separator: options
                .expression_separator
                .unwrap_or_else(Separator::comma),
            field_separator: options
                .field_separator
                .unwrap_or_else(|| Separator::literal(":")),
            value_splitter: ValueSplitter::new(Some(value_separator), false),
            unique: options.unique_values,
        }
    }

    fn parse_expressions(&self, value: &ResultValue) -> ResultValue {
        let mut filters = ResultMap::new();

        for source in value.to_strings() {
            for expression in self.expression_separator.split(&source) {
                if expression.is_empty() {
                    continue;
                }

                let (name, raw) = self.field_separator.split_once(expression);
                let parsed = self
                    .value_splitter
                    .split(raw.map_or(ResultValue::Null, ResultValue::from));

                match filters.get_mut(name) {
                    Some(existing) => merge_values(existing, &parsed),
                    None => {
                        filters.insert(name, parsed);
                    }
                }

                if self.unique
                    && let Some(stored) = filters.get_mut(name)
                {
                    stored.dedup();
                }
            }
        }

        tracing::trace!(filters = filters.len(), "Split filter expressions");
        ResultValue::Map(filters)
    }
}

/// A `Null` side contributes no values; when it leaves a single value, that
/// value stays a scalar.
fn merge_values(existing: &mut ResultValue, incoming: &ResultValue) {
    let null_involved = existing.is_null() || incoming.is_null();
    let mut merged = existing.to_strings();
    merged.extend(incoming.to_strings());

    *existing = match (merged.len(), null_involved) {
        (0, _) => ResultValue::Null,
        (1, true) => merged.pop().map_or(ResultValue::Null, ResultValue::Scalar),
        _ => ResultValue::List(merged),
    };
}

impl ParseStrategy for FilterExpressionStrategy {
    fn name(&self) -> &'static str {
        "filter_expression"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        let mut fields = self.base.selected_fields(query_string);
        for value in fields.values_mut() {
            *value = self.parse_expressions(value);
        }

        tracing::debug!(strategy = self.name(), fields = fields.len(), "Parsed query string");
        QueryResults::new(fields)
    }
}

use std::fmt;

use crate::models::StrategyOptions;
use crate::results::QueryResults;
use crate::separator::Separator;
use crate::strategies::flat::FlatStrategy;
use crate::traits::ParseStrategy;
use crate::value::ResultValue;

/// Sort direction of one clause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `Desc` for any token starting with `desc` in any case, `Asc` otherwise.
    #[must_use]
    pub fn from_token(token: Option<&str>) -> Self {
        match token.and_then(|token| token.get(..4)) {
            Some(prefix) if prefix.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `name:direction` sort clauses, normalised to `"name asc"` / `"name desc"`.
///
/// ```text
/// order=id:desc,name     →  {"order": ["id desc", "name asc"]}
/// order=created_at:DESC  →  {"order": "created_at desc"}
/// ```
///
/// Clauses are separated like flat values (`,\s*` unless `expression_separator`
/// or `value_separator` says otherwise) and deduplicated when `unique_values`
/// is on. A single clause stays a scalar.
#[derive(Debug, Clone, PartialEq)]
pub struct SortExpressionStrategy {
    base: FlatStrategy,
    field_separator: Separator,
}

impl Default for SortExpressionStrategy {
    fn default() -> Self {
        Self::new(StrategyOptions::default())
    }
}

impl SortExpressionStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        let field_separator = options
            .field_separator
            .unwrap_or_else(|| Separator::literal(":"));

        let mut flat_options = StrategyOptions::default()
            .with_fields(options.fields)
            .with_unique_values(options.unique_values)
            .with_csv(options.csv);
        flat_options.value_separator = options.expression_separator.or(options.value_separator);

        Self {
            base: FlatStrategy::new(flat_options),
            field_separator,
        }
    }

    /// Normalise one clause.
    #[must_use]
    pub fn clause(&self, expression: &str) -> String {
        let (name, direction) = self.field_separator.split_once(expression);
        format!("{name} {}", SortDirection::from_token(direction))
    }

    fn parse_clauses(&self, value: &ResultValue) -> ResultValue {
        let mut clauses: Vec<String> = value
            .to_strings()
            .iter()
            .map(|expression| self.clause(expression))
            .collect();

        match clauses.len() {
            0 => ResultValue::Null,
            1 => ResultValue::Scalar(clauses.remove(0)),
            _ => ResultValue::List(clauses),
        }
    }
}

impl ParseStrategy for SortExpressionStrategy {
    fn name(&self) -> &'static str {
        "sort_expression"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        let mut fields = self.base.split_fields(query_string);
        for value in fields.values_mut() {
            *value = self.parse_clauses(value);
        }

        tracing::debug!(strategy = self.name(), fields = fields.len(), "Parsed query string");
        QueryResults::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_token() {
        assert_eq!(SortDirection::from_token(None), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(Some("desc")), SortDirection::Desc);
        assert_eq!(SortDirection::from_token(Some("DESCENDING")), SortDirection::Desc);
        assert_eq!(SortDirection::from_token(Some("des")), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(Some("up")), SortDirection::Asc);
        assert_eq!(SortDirection::from_token(Some("dés")), SortDirection::Asc);
    }

    #[test]
    fn test_single_clause_is_scalar() {
        let results = SortExpressionStrategy::default().parse("order=id:desc");
        assert_eq!(results["order"], "id desc");
    }

    #[test]
    fn test_default_direction() {
        let results = SortExpressionStrategy::default().parse("order=name");
        assert_eq!(results["order"], "name asc");
    }

    #[test]
    fn test_multiple_clauses_keep_order() {
        let results = SortExpressionStrategy::default().parse("order=id:desc,name&order=age:ASC");
        assert_eq!(results["order"], vec!["id desc", "name asc", "age asc"]);
    }

    #[test]
    fn test_empty_value() {
        let results = SortExpressionStrategy::default().parse("order=");
        assert_eq!(results["order"], " asc");
    }

    #[test]
    fn test_custom_field_separator() {
        let strategy =
            SortExpressionStrategy::new(StrategyOptions::default().with_field_separator(" "));
        assert_eq!(strategy.parse("order=id+desc")["order"], "id desc");
    }
}

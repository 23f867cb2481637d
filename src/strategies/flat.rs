use crate::decoder::decode;
use crate::models::StrategyOptions;
use crate::results::QueryResults;
use crate::selector::FieldSelector;
use crate::separator::Separator;
use crate::splitter::ValueSplitter;
use crate::traits::ParseStrategy;
use crate::value::ResultMap;

/// Field/value extraction with comma splitting.
///
/// ```text
/// a=1&b=2          →  {"a": "1", "b": "2"}
/// a=1&a=2,3&a=1    →  {"a": ["1", "2", "3"]}
/// ```
///
/// Values split on `value_separator` (default `,\s*`). Set it to `""` to turn
/// splitting off. With `csv` enabled, values are additionally split on
/// `,\s*` after the configured separator.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatStrategy {
    selector: FieldSelector,
    splitter: ValueSplitter,
}

impl Default for FlatStrategy {
    fn default() -> Self {
        Self::new(StrategyOptions::default())
    }
}

impl FlatStrategy {
    #[must_use]
    pub fn new(options: StrategyOptions) -> Self {
        let mut separators = vec![options.value_separator.unwrap_or_else(Separator::comma)];
        if options.csv && separators[0] != Separator::comma() {
            separators.push(Separator::comma());
        }

        Self {
            selector: FieldSelector::new(options.fields),
            splitter: ValueSplitter::with_separators(separators, options.unique_values),
        }
    }

    #[must_use]
    pub const fn selector(&self) -> &FieldSelector {
        &self.selector
    }

    #[must_use]
    pub const fn splitter(&self) -> &ValueSplitter {
        &self.splitter
    }

    /// Decoded, allow-listed fields with raw values.
    #[must_use]
    pub fn selected_fields(&self, query_string: &str) -> ResultMap {
        self.selector.select(decode(query_string))
    }

    /// Decoded, allow-listed fields with split values.
    #[must_use]
    pub fn split_fields(&self, query_string: &str) -> ResultMap {
        let mut fields = self.selected_fields(query_string);
        for value in fields.values_mut() {
            *value = self.splitter.split(std::mem::take(value));
        }
        fields
    }
}

impl ParseStrategy for FlatStrategy {
    fn name(&self) -> &'static str {
        "flat"
    }

    fn parse(&self, query_string: &str) -> QueryResults {
        let fields = self.split_fields(query_string);
        tracing::debug!(strategy = self.name(), fields = fields.len(), "Parsed query string");
        QueryResults::new(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_string() {
        assert!(FlatStrategy::default().parse("").is_empty());
    }

    #[test]
    fn test_splits_on_comma_by_default() {
        let results = FlatStrategy::default().parse("a=1,%20 2&b=x");
        assert_eq!(results["a"], vec!["1", "2"]);
        assert_eq!(results["b"], "x");
    }

    #[test]
    fn test_empty_value_separator_disables_splitting() {
        let strategy = FlatStrategy::new(StrategyOptions::default().with_value_separator(""));
        assert_eq!(strategy.parse("a=1,2")["a"], "1,2");
    }

    #[test]
    fn test_csv_adds_comma_split() {
        let options = StrategyOptions::default()
            .with_value_separator("|")
            .with_csv(true);
        let strategy = FlatStrategy::new(options);

        assert_eq!(strategy.splitter().separators().len(), 2);
        assert_eq!(strategy.parse("a=1|2,3")["a"], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_csv_with_default_separator_does_not_split_twice() {
        let strategy = FlatStrategy::new(StrategyOptions::default().with_csv(true));
        assert_eq!(strategy.splitter().separators().len(), 1);
    }

    #[test]
    fn test_selected_fields_keep_raw_values() {
        let strategy = FlatStrategy::new(StrategyOptions::default().with_field("a"));
        let fields = strategy.selected_fields("a=1,2&a=1,2&b=3");
        assert_eq!(fields["a"], vec!["1,2", "1,2"]);
        assert!(!fields.contains_key("b"));
    }
}

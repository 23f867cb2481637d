use serde_json::json;

use querycrate::{JoinsExpressionStrategy, ParseStrategy, Separator, StrategyOptions};

mod common;
use common::to_json;

fn strategy(options: StrategyOptions) -> JoinsExpressionStrategy {
    JoinsExpressionStrategy::new(options)
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_empty_query_string_returns_empty_results() {
    assert_eq!(to_json(&JoinsExpressionStrategy::default().parse("")), json!({}));
}

#[test]
fn test_plain_and_nested_joins() {
    let results = JoinsExpressionStrategy::default().parse("joins=author,author.foop");
    assert_eq!(to_json(&results), json!({"joins": ["author", {"author": "foop"}]}));
}

#[test]
fn test_positional_lookup() {
    let results = JoinsExpressionStrategy::default().parse("joins=author,activity");
    assert_eq!(results["joins"][0], "author");
    assert_eq!(results["joins"][1], "activity");
    assert!(results["joins"][2].is_null());
}

#[test]
fn test_deep_path() {
    let results = JoinsExpressionStrategy::default().parse("joins=author.country.name,activity.rule");
    assert_eq!(
        to_json(&results),
        json!({"joins": [{"author": {"country": "name"}}, {"activity": "rule"}]})
    );
}

#[test]
fn test_discards_non_unique_values() {
    let results = JoinsExpressionStrategy::default().parse("joins=author&joins=author");
    assert_eq!(to_json(&results), json!({"joins": ["author"]}));
}

#[test]
fn test_skips_empty_expressions() {
    let results = JoinsExpressionStrategy::default().parse("joins=,author,");
    assert_eq!(to_json(&results), json!({"joins": ["author"]}));
}

#[test]
fn test_empty_field_gives_empty_list() {
    let results = JoinsExpressionStrategy::default().parse("joins=");
    assert_eq!(to_json(&results), json!({"joins": []}));
}

// ============================================================================
// Expression separator
// ============================================================================

#[test]
fn test_pattern_expression_separator() {
    let strategy = strategy(
        StrategyOptions::default().with_expression_separator(Separator::pattern(r"\|\s*").unwrap()),
    );
    assert_eq!(
        to_json(&strategy.parse("joins=author|activity")),
        json!({"joins": ["author", "activity"]})
    );
    assert_eq!(
        to_json(&strategy.parse("joins=author|%20  activity")),
        json!({"joins": ["author", "activity"]})
    );
}

#[test]
fn test_literal_expression_separator() {
    let results = strategy(StrategyOptions::default().with_expression_separator("|"))
        .parse("joins=author|activity|rule");
    assert_eq!(to_json(&results), json!({"joins": ["author", "activity", "rule"]}));
}

// ============================================================================
// Field separator
// ============================================================================

#[test]
fn test_pattern_field_separator() {
    let strategy = strategy(
        StrategyOptions::default().with_field_separator(Separator::pattern(r"\s*:\s*").unwrap()),
    );
    assert_eq!(
        to_json(&strategy.parse("joins=author:country:name")),
        json!({"joins": [{"author": {"country": "name"}}]})
    );
    assert_eq!(
        to_json(&strategy.parse("joins=author : country")),
        json!({"joins": [{"author": "country"}]})
    );
}

#[test]
fn test_literal_field_separator() {
    let results = strategy(StrategyOptions::default().with_field_separator(":"))
        .parse("joins=author:country");
    assert_eq!(to_json(&results), json!({"joins": [{"author": "country"}]}));
}

// ============================================================================
// Field restriction
// ============================================================================

#[test]
fn test_single_field() {
    let results = strategy(StrategyOptions::default().with_field("includes"))
        .parse("includes=author&joins=activity");
    assert_eq!(to_json(&results), json!({"includes": ["author"]}));
}

#[test]
fn test_field_list() {
    let results = strategy(StrategyOptions::default().with_fields(["includes", "joins"]))
        .parse("joins=author&includes=activity");
    assert_eq!(
        to_json(&results),
        json!({"joins": ["author"], "includes": ["activity"]})
    );
}

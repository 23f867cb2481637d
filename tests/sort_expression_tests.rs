use serde_json::json;

use querycrate::{ParseStrategy, SortDirection, SortExpressionStrategy, StrategyOptions};

mod common;
use common::to_json;

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_empty_query_string_returns_empty_results() {
    assert_eq!(to_json(&SortExpressionStrategy::default().parse("")), json!({}));
}

#[test]
fn test_every_field_is_a_sort() {
    let results = SortExpressionStrategy::default().parse("sort=id&order=name");
    assert_eq!(to_json(&results), json!({"sort": "id asc", "order": "name asc"}));
}

#[test]
fn test_combines_repeated_keys() {
    let results = SortExpressionStrategy::default().parse("sort=id&sort=name");
    assert_eq!(to_json(&results), json!({"sort": ["id asc", "name asc"]}));
}

#[test]
fn test_comma_separated_with_directions() {
    let results = SortExpressionStrategy::default().parse("sort=id:asc,name:desc");
    assert_eq!(to_json(&results), json!({"sort": ["id asc", "name desc"]}));
}

#[test]
fn test_comma_separated_without_directions() {
    let results = SortExpressionStrategy::default().parse("sort=id,name");
    assert_eq!(to_json(&results), json!({"sort": ["id asc", "name asc"]}));
}

#[test]
fn test_discards_non_unique_values() {
    let results = SortExpressionStrategy::default().parse("sort=id&sort=name&sort=id");
    assert_eq!(to_json(&results), json!({"sort": ["id asc", "name asc"]}));
}

// ============================================================================
// Direction
// ============================================================================

#[test]
fn test_direction_tokens() {
    let strategy = SortExpressionStrategy::default();
    for (query, expected) in [
        ("sort=id:asc", "id asc"),
        ("sort=id:desc", "id desc"),
        ("sort=id:ascending", "id asc"),
        ("sort=id:descending", "id desc"),
        ("sort=id:DESC", "id desc"),
        ("sort=id:sideways", "id asc"),
    ] {
        assert_eq!(strategy.parse(query)["sort"], expected, "query: {query}");
    }
}

#[test]
fn test_direction_display() {
    assert_eq!(SortDirection::Asc.to_string(), "asc");
    assert_eq!(SortDirection::Desc.to_string(), "desc");
    assert_eq!(SortDirection::default(), SortDirection::Asc);
}

#[test]
fn test_clause() {
    let strategy = SortExpressionStrategy::default();
    assert_eq!(strategy.clause("created_at:Descending"), "created_at desc");
    assert_eq!(strategy.clause("name"), "name asc");
}

// ============================================================================
// Field restriction
// ============================================================================

#[test]
fn test_single_field() {
    let strategy = SortExpressionStrategy::new(StrategyOptions::default().with_field("sort"));
    assert_eq!(to_json(&strategy.parse("sort=id&order=name")), json!({"sort": "id asc"}));
}

#[test]
fn test_field_list() {
    let strategy =
        SortExpressionStrategy::new(StrategyOptions::default().with_fields(["sort", "order"]));
    assert_eq!(
        to_json(&strategy.parse("sort=id&order=name&direction=place")),
        json!({"sort": "id asc", "order": "name asc"})
    );
}

#[test]
fn test_custom_expression_separator() {
    let strategy = SortExpressionStrategy::new(
        StrategyOptions::default()
            .with_field("sort")
            .with_expression_separator(";"),
    );
    assert_eq!(
        to_json(&strategy.parse("sort=id:desc;name")),
        json!({"sort": ["id desc", "name asc"]})
    );
}

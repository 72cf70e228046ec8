use crate::request::normalization::tests::test_helpers::{expect_accept, expect_rewrite, pairs};
use crate::request::normalization::{
    QueryInput, RewriteReason, normalize_query, parse_qsl, parse_qsl_strict,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn assert_accept_query(raw: &str, expected: &[(&str, &str)]) {
    // Arrange
    let input = QueryInput::Text(raw);

    // Act
    let outcome = normalize_query(input);

    // Assert
    assert_eq!(expect_accept(outcome), pairs(expected));
}

#[test]
fn plain_query_string_is_split_into_pairs() {
    assert_accept_query("foo=bar&baz=qux", &[("foo", "bar"), ("baz", "qux")]);
}

#[test]
fn leading_question_mark_is_dropped() {
    assert_accept_query("?foo=bar", &[("foo", "bar")]);
}

#[test]
fn blank_values_are_kept() {
    assert_accept_query("a=&b", &[("a", ""), ("b", "")]);
}

#[test]
fn semicolons_separate_fields() {
    assert_accept_query("a=1;b=2", &[("a", "1"), ("b", "2")]);
}

#[test]
fn plus_and_percent_escapes_are_decoded() {
    assert_accept_query("q=hello+world&x=%C3%A9%2B", &[("q", "hello world"), ("x", "é+")]);
}

#[test]
fn undecodable_escapes_are_replaced() {
    assert_accept_query("a=%FF", &[("a", "\u{FFFD}")]);
}

#[test]
fn repeated_keys_keep_order() {
    assert_accept_query("a=1&a=2&b=3", &[("a", "1"), ("a", "2"), ("b", "3")]);
}

#[test]
fn trailing_ellipsis_is_repaired() {
    // Arrange
    let input = QueryInput::Text("a=1&b=lo\u{2026}");

    // Act
    let outcome = normalize_query(input);

    // Assert
    let value = expect_rewrite(outcome, RewriteReason::EllipsisRepair);
    assert_eq!(value, pairs(&[("a", "1"), ("b", "lo...")]));
}

#[test]
fn mapping_keeps_insertion_order_and_stringifies_values() {
    // Arrange
    let raw = json!({"z": "1", "a": 2, "m": null});

    // Act
    let outcome = normalize_query(QueryInput::from(&raw));

    // Assert
    assert_eq!(
        expect_accept(outcome),
        pairs(&[("z", "1"), ("a", "2"), ("m", "null")])
    );
}

#[test]
fn list_keeps_only_two_element_pairs() {
    // Arrange
    let raw = json!([["a", "1"], ["b"], "c", ["d", 4], ["e", "5", "6"]]);

    // Act
    let outcome = normalize_query(QueryInput::from(&raw));

    // Assert
    let value = expect_rewrite(outcome, RewriteReason::QueryPairsDropped);
    assert_eq!(value, pairs(&[("a", "1"), ("d", "4")]));
}

#[test]
fn well_formed_list_is_accepted() {
    let raw = json!([["a", "1"], ["b", "2"]]);
    assert_eq!(
        expect_accept(normalize_query(QueryInput::from(&raw))),
        pairs(&[("a", "1"), ("b", "2")])
    );
}

#[test]
fn scalar_query_is_unsupported() {
    let raw = json!(42);
    let value = expect_rewrite(
        normalize_query(QueryInput::from(&raw)),
        RewriteReason::QueryShapeUnsupported,
    );
    assert!(value.is_empty());
}

#[test]
fn strict_parse_requires_equals_in_every_field() {
    assert_eq!(parse_qsl_strict("a=1&b=2"), Some(pairs(&[("a", "1"), ("b", "2")])));
    assert_eq!(parse_qsl_strict("a=1&b"), None);
    assert_eq!(parse_qsl_strict("hello world"), None);
    assert_eq!(parse_qsl_strict(""), None);
}

#[test]
fn empty_fields_are_skipped() {
    assert_eq!(parse_qsl("&&a=1&"), pairs(&[("a", "1")]));
}

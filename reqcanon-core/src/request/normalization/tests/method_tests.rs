use crate::request::normalization::tests::test_helpers::{
    expect_accept, expect_reject, expect_rewrite,
};
use crate::request::normalization::{RejectReason, RewriteReason, normalize_method};
use pretty_assertions::assert_eq;

#[test]
fn common_methods_are_accepted_as_is() {
    for method in ["GET", "POST", "PUT", "DELETE", "PROPFIND", "M-SEARCH", "X_CUSTOM"] {
        assert_eq!(expect_accept(normalize_method(method)), method);
    }
}

#[test]
fn lowercase_methods_are_uppercased() {
    // Arrange
    let raw = "m-search";

    // Act
    let outcome = normalize_method(raw);

    // Assert
    let method = expect_rewrite(outcome, RewriteReason::MethodCase);
    assert_eq!(method, "M-SEARCH");
}

#[test]
fn get_fast_path_still_reports_case_change() {
    let method = expect_rewrite(normalize_method("get"), RewriteReason::MethodCase);
    assert_eq!(method, "GET");
}

#[test]
fn malformed_methods_are_rejected() {
    let too_long = "A".repeat(33);
    for method in ["GE", "GET1", "GET /", "", too_long.as_str()] {
        expect_reject(normalize_method(method), RejectReason::InvalidMethod);
    }
}

#[test]
fn longest_allowed_method_is_accepted() {
    let method = "A".repeat(32);
    assert_eq!(expect_accept(normalize_method(&method)), method);
}

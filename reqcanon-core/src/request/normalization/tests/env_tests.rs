use crate::collab::StdIpValidator;
use crate::request::normalization::tests::test_helpers::{
    RejectAllIps, expect_accept, expect_rewrite,
};
use crate::request::normalization::{REMOTE_ADDR, RewriteReason, scrub_remote_addr};
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

fn env(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn valid_addresses_are_kept() {
    for addr in ["127.0.0.1", "::1", "2001:db8::ff00:42:8329"] {
        let scrubbed = expect_accept(scrub_remote_addr(
            env(json!({ REMOTE_ADDR: addr })),
            &StdIpValidator,
        ));
        assert_eq!(scrubbed.get(REMOTE_ADDR), Some(&json!(addr)));
    }
}

#[test]
fn invalid_address_is_removed_and_order_kept() {
    // Arrange
    let raw = env(json!({"A": 1, REMOTE_ADDR: "not an ip", "B": 2}));

    // Act
    let outcome = scrub_remote_addr(raw, &StdIpValidator);

    // Assert
    let scrubbed = expect_rewrite(outcome, RewriteReason::RemoteAddrRemoved);
    assert_eq!(Value::Object(scrubbed), json!({"A": 1, "B": 2}));
}

#[test]
fn non_string_address_is_validated_as_text() {
    let outcome = scrub_remote_addr(env(json!({ REMOTE_ADDR: 12 })), &StdIpValidator);
    let scrubbed = expect_rewrite(outcome, RewriteReason::RemoteAddrRemoved);
    assert!(scrubbed.is_empty());
}

#[test]
fn empty_or_missing_address_is_left_alone() {
    for raw in [json!({ REMOTE_ADDR: "" }), json!({ REMOTE_ADDR: null }), json!({"A": 1})] {
        let expected = raw.clone();
        let scrubbed = expect_accept(scrub_remote_addr(env(raw), &RejectAllIps));
        assert_eq!(Value::Object(scrubbed), expected);
    }
}

#[test]
fn validator_decides_what_is_valid() {
    let outcome = scrub_remote_addr(env(json!({ REMOTE_ADDR: "127.0.0.1" })), &RejectAllIps);
    let scrubbed = expect_rewrite(outcome, RewriteReason::RemoteAddrRemoved);
    assert!(scrubbed.is_empty());
}

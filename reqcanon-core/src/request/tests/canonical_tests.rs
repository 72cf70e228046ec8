use crate::request::normalization::Body;
use crate::request::normalization::tests::test_helpers::pairs;
use crate::request::{CanonicalRequest, HttpNormalizer, PairStore, ValidationError};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[test]
fn stored_record_reads_back_unchanged() {
    // Arrange
    let request = HttpNormalizer::default()
        .assemble(&json!({
            "method": "PUT",
            "url": "http://h/items/1?v=2",
            "headers": {"Content-Type": "application/json"},
            "data": "[1, 2, 3]",
            "env": {"REMOTE_ADDR": "::1"},
        }))
        .unwrap();

    // Act
    let restored = CanonicalRequest::from_stored(&request.to_json()).unwrap();

    // Assert
    assert_eq!(restored, request);
    assert_eq!(restored.body(), Some(&Body::Structured(json!([1, 2, 3]))));
}

#[test]
fn legacy_mapping_headers_are_kept_as_a_mapping() {
    // Arrange
    let stored = json!({"url": "http://h/", "headers": {"b": "2", "a": "1"}});

    // Act
    let request = CanonicalRequest::from_stored(&stored).unwrap();

    // Assert
    assert!(matches!(request.headers(), PairStore::Mapping(_)));
    assert_eq!(request.to_json(), stored);
    assert_eq!(
        request.api_context(false)["headers"],
        json!([["a", "1"], ["b", "2"]])
    );
}

#[test]
fn stored_pairs_skip_malformed_entries() {
    let request = CanonicalRequest::from_stored(&json!({
        "query_string": [["a", "1"], ["bad"]],
        "cookies": [["c", "d"], 5],
    }))
    .unwrap();

    assert_eq!(request.query_pairs(), pairs(&[("a", "1")]).as_slice());
    assert_eq!(request.cookies(), &PairStore::Pairs(pairs(&[("c", "d")])));
}

#[test]
fn stored_record_must_be_an_object() {
    let err = CanonicalRequest::from_stored(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidInterface { .. }));
}

#[test]
fn pair_store_converts_to_value_pairs() {
    let mut map = serde_json::Map::new();
    map.insert("z".to_string(), json!(1));
    map.insert("a".to_string(), json!("x"));

    assert_eq!(
        PairStore::Mapping(map).to_pair_values(),
        vec![("a".to_string(), json!("x")), ("z".to_string(), json!(1))]
    );
    assert_eq!(
        PairStore::Pairs(pairs(&[("k", "v")])).to_pair_values(),
        vec![("k".to_string(), Value::String("v".to_string()))]
    );
    assert!(PairStore::default().is_empty());
}

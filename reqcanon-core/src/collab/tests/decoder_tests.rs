use crate::collab::{FORM_CONTENT_TYPE, HeuristicBodyDecoder, JSON_CONTENT_TYPE, SniffingBodyDecoder};
use crate::request::normalization::Body;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn missing_body_passes_through() {
    let (body, ct) = SniffingBodyDecoder.decode(None, Some("text/plain"));
    assert_eq!(body, None);
    assert_eq!(ct.as_deref(), Some("text/plain"));
}

#[test]
fn structured_body_passes_through() {
    let input = Some(Body::Structured(json!({"a": 1})));
    let (body, ct) = SniffingBodyDecoder.decode(input.clone(), None);
    assert_eq!(body, input);
    assert_eq!(ct, None);
}

#[test]
fn json_array_is_decoded() {
    let (body, ct) = SniffingBodyDecoder.decode(Some(Body::Text("[1, 2]".to_string())), None);
    assert_eq!(body, Some(Body::Structured(json!([1, 2]))));
    assert_eq!(ct.as_deref(), Some(JSON_CONTENT_TYPE));
}

#[test]
fn repeated_form_keys_keep_the_last_value() {
    let (body, ct) = SniffingBodyDecoder.decode(Some(Body::Text("a=1&a=2".to_string())), None);
    assert_eq!(body, Some(Body::Structured(json!({"a": "2"}))));
    assert_eq!(ct.as_deref(), Some(FORM_CONTENT_TYPE));
}

#[test]
fn partial_form_is_not_decoded() {
    let input = Some(Body::Text("a=1&oops".to_string()));
    let (body, ct) = SniffingBodyDecoder.decode(input.clone(), Some(FORM_CONTENT_TYPE));
    assert_eq!(body, input);
    assert_eq!(ct.as_deref(), Some(FORM_CONTENT_TYPE));
}

#[test]
fn json_scalar_stays_text() {
    // Arrange
    let input = Some(Body::Text("123".to_string()));

    // Act
    let (body, ct) = SniffingBodyDecoder.decode(input.clone(), Some(JSON_CONTENT_TYPE));

    // Assert
    assert_eq!(body, input);
    assert_eq!(ct.as_deref(), Some(JSON_CONTENT_TYPE));
}

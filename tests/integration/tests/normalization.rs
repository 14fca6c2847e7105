//! Audience normalization across the shapes populators produce.

use std::borrow::Cow;

use pk_integration_tests::init_tracing;
use pk_model::AttributeValue;
use pk_profile::{keys, normalize_multi_valued, BasicProfile, HasAudience, JwtProfile};

fn profile_with_audience(value: impl Into<AttributeValue>) -> JwtProfile {
    JwtProfile::from(
        BasicProfile::new("sub")
            .unwrap()
            .with_attribute(keys::AUDIENCE, value),
    )
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn single_string_audience() {
    init_tracing();
    let profile = profile_with_audience("en-US");
    assert_eq!(profile.audience(), Some(Cow::Owned(owned(&["en-US"]))));
}

#[test]
fn array_audience_keeps_order() {
    init_tracing();
    let profile = profile_with_audience(["aud1".to_string(), "aud2".to_string()]);
    assert_eq!(profile.audience().as_deref(), Some(owned(&["aud1", "aud2"]).as_slice()));
}

#[test]
fn list_audience_is_unchanged() {
    init_tracing();
    let profile = profile_with_audience(owned(&["a", "b", "c"]));
    assert_eq!(profile.audience().as_deref(), Some(owned(&["a", "b", "c"]).as_slice()));
}

#[test]
fn unsupported_audience_is_absent() {
    init_tracing();
    assert_eq!(profile_with_audience(42_i64).audience(), None);
    assert_eq!(profile_with_audience(true).audience(), None);
    assert_eq!(
        profile_with_audience(serde_json::json!(["a", "b"])).audience(),
        None
    );
}

#[test]
fn missing_audience_is_absent_not_empty() {
    init_tracing();
    let missing = JwtProfile::from(BasicProfile::new("sub").unwrap());
    let empty = profile_with_audience(Vec::<String>::new());

    assert_eq!(missing.audience(), None);
    let empty_audience = empty.audience().expect("empty list is still present");
    assert!(empty_audience.is_empty());
}

#[test]
fn null_audience_is_absent() {
    init_tracing();
    assert_eq!(profile_with_audience(AttributeValue::Null).audience(), None);
}

#[test]
fn normalization_is_idempotent() {
    init_tracing();
    let value = AttributeValue::from(owned(&["x", "y"]));
    let first = normalize_multi_valued(Some(&value));
    let second = normalize_multi_valued(Some(&value));
    assert_eq!(first, second);
}

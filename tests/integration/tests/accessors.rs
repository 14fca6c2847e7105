//! Scalar, structured and gender accessors.

use pk_integration_tests::{init_tracing, social_login_profile};
use pk_model::{AttributeValue, Gender, Locale};
use pk_profile::{keys, BasicProfile, CommonProfile, HasCommonAttributes, HasGender, Profile};

#[test]
fn populated_profile_exposes_every_common_field() {
    init_tracing();
    let profile = CommonProfile::from(social_login_profile());

    assert_eq!(profile.email(), Some("grace@example.com"));
    assert_eq!(profile.first_name(), Some("Grace"));
    assert_eq!(profile.family_name(), Some("Hopper"));
    assert_eq!(profile.display_name(), Some("Grace Hopper"));
    assert_eq!(profile.username(), Some("ghopper"));
    assert_eq!(profile.location(), Some("Arlington, VA"));
    assert_eq!(profile.gender(), Gender::Female);
    assert_eq!(profile.locale().map(Locale::as_str), Some("en-US"));
    assert_eq!(
        profile.picture_url().map(url::Url::as_str),
        Some("https://avatars.example.com/ghopper.png")
    );
    assert_eq!(
        profile.profile_url().map(url::Url::as_str),
        Some("https://social.example.com/ghopper")
    );
}

#[test]
fn empty_profile_reads_as_absent_everywhere() {
    init_tracing();
    let profile = CommonProfile::from(BasicProfile::new("anonymous").unwrap());

    assert_eq!(profile.email(), None);
    assert_eq!(profile.first_name(), None);
    assert_eq!(profile.family_name(), None);
    assert_eq!(profile.display_name(), None);
    assert_eq!(profile.username(), None);
    assert_eq!(profile.location(), None);
    assert_eq!(profile.locale(), None);
    assert_eq!(profile.picture_url(), None);
    assert_eq!(profile.profile_url(), None);
    assert_eq!(profile.gender(), Gender::Unspecified);
}

#[test]
fn explicit_null_gender_is_unspecified() {
    init_tracing();
    let profile = CommonProfile::from(
        BasicProfile::new("u")
            .unwrap()
            .with_attribute(keys::GENDER, AttributeValue::Null),
    );

    assert!(profile.basic().contains_attribute(keys::GENDER));
    assert_eq!(profile.gender(), Gender::Unspecified);
}

#[test]
fn male_and_female_round_trip() {
    for gender in [Gender::Male, Gender::Female] {
        let profile = CommonProfile::from(
            BasicProfile::new("u")
                .unwrap()
                .with_attribute(keys::GENDER, gender),
        );
        assert_eq!(profile.gender(), gender);
    }
}

#[test]
fn accessors_are_idempotent() {
    init_tracing();
    let profile = CommonProfile::from(social_login_profile());

    assert_eq!(profile.email(), profile.email());
    assert_eq!(profile.gender(), profile.gender());
    assert_eq!(profile.locale(), profile.locale());
    assert_eq!(profile.picture_url(), profile.picture_url());
}

#[test]
fn overwritten_attribute_is_read_back() {
    init_tracing();
    let mut basic = social_login_profile();
    basic.add_attribute(keys::EMAIL, "grace@navy.example.mil");
    basic.remove_attribute(keys::LOCATION);
    let profile = CommonProfile::from(basic);

    assert_eq!(profile.email(), Some("grace@navy.example.mil"));
    assert_eq!(profile.location(), None);
}

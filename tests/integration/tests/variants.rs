//! Profile variants, typed ids and token expiry.

use std::sync::Arc;
use std::thread;

use chrono::{Duration, Utc};
use pk_core::Config;
use pk_integration_tests::{id_token_profile, init_tracing, social_login_profile};
use pk_model::Gender;
use pk_profile::{
    CommonProfile, HasAudience, HasCommonAttributes, HasGender, HasJwtClaims, HasOidcClaims,
    JwtProfile, OidcProfile, Profile,
};

#[test]
fn oidc_profile_reads_every_claim_group() {
    init_tracing();
    let issued_at = Utc::now();
    let profile = OidcProfile::from(id_token_profile(issued_at));

    assert_eq!(profile.subject(), Some("248289761001"));
    assert_eq!(profile.issuer(), Some("https://server.example.com"));
    assert_eq!(profile.audience().as_deref().map(<[String]>::len), Some(2));
    assert_eq!(
        profile.issued_at().map(|t| t.timestamp()),
        Some(issued_at.timestamp())
    );
    assert_eq!(profile.email(), Some("janedoe@example.com"));
    assert_eq!(profile.email_verified(), Some(true));
    assert_eq!(profile.preferred_username(), Some("j.doe"));
    assert_eq!(profile.gender(), Gender::Unspecified);
    assert_eq!(profile.basic().client_name(), Some("OidcClient"));
}

#[test]
fn token_profiles_expire_after_exp() {
    init_tracing();
    let issued_at = Utc::now() - Duration::minutes(10);
    let jwt = JwtProfile::from(id_token_profile(issued_at));
    let oidc = OidcProfile::from(id_token_profile(issued_at));

    assert!(jwt.is_expired(Utc::now()));
    assert!(oidc.is_expired(Utc::now()));
    assert!(!jwt.is_expired(issued_at));
}

#[test]
fn common_profile_ignores_token_expiry() {
    init_tracing();
    let issued_at = Utc::now() - Duration::hours(1);
    let profile = CommonProfile::from(id_token_profile(issued_at));
    assert!(!profile.is_expired(Utc::now()));
}

#[test]
fn typed_id_uses_configuration() {
    let config = Config::from_lookup(|key| {
        (key == pk_core::config::TYPED_ID_SEPARATOR_VAR).then(|| "|".to_string())
    })
    .unwrap();
    let profile = CommonProfile::from(social_login_profile());

    assert_eq!(profile.typed_id(), "CommonProfile#1234567");
    assert_eq!(profile.typed_id_with(&config.profile), "CommonProfile|1234567");
}

#[test]
fn shared_profile_reads_without_locking() {
    init_tracing();
    let profile = Arc::new(OidcProfile::from(id_token_profile(Utc::now())));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let profile = Arc::clone(&profile);
            thread::spawn(move || {
                (
                    profile.email().map(str::to_owned),
                    profile.audience().map(|aud| aud.into_owned()),
                )
            })
        })
        .collect();

    for handle in handles {
        let (email, audience) = handle.join().unwrap();
        assert_eq!(email.as_deref(), Some("janedoe@example.com"));
        assert_eq!(
            audience,
            Some(vec!["s6BhdRkqt3".to_string(), "admin-console".to_string()])
        );
    }
}

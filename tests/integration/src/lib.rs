//! Shared fixtures for the profilekit integration tests.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::sync::Once;

use chrono::{DateTime, Utc};
use pk_core::config::LoggingConfig;
use pk_model::{Gender, Locale};
use pk_profile::{keys, BasicProfile};
use url::Url;

static TRACING: Once = Once::new();

/// Initializes tracing once for the whole test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = pk_core::logging::init(&LoggingConfig {
            filter: "pk_profile=debug,pk_model=trace".to_string(),
        });
    });
}

/// Builds a profile the way a social-login populator would.
///
/// # Panics
///
/// Panics if the fixture data is invalid, which is a bug in the fixture.
#[must_use]
pub fn social_login_profile() -> BasicProfile {
    BasicProfile::new("1234567")
        .expect("fixture id")
        .with_attribute(keys::EMAIL, "grace@example.com")
        .with_attribute(keys::FIRST_NAME, "Grace")
        .with_attribute(keys::FAMILY_NAME, "Hopper")
        .with_attribute(keys::DISPLAY_NAME, "Grace Hopper")
        .with_attribute(keys::USERNAME, "ghopper")
        .with_attribute(keys::GENDER, Gender::Female)
        .with_attribute(keys::LOCALE, Locale::new("en-US").expect("fixture locale"))
        .with_attribute(
            keys::PICTURE_URL,
            Url::parse("https://avatars.example.com/ghopper.png").expect("fixture url"),
        )
        .with_attribute(
            keys::PROFILE_URL,
            Url::parse("https://social.example.com/ghopper").expect("fixture url"),
        )
        .with_attribute(keys::LOCATION, "Arlington, VA")
        .with_client_name("SocialClient")
}

/// Builds the claims of an ID token issued at `issued_at` for five minutes.
///
/// # Panics
///
/// Panics if the fixture data is invalid, which is a bug in the fixture.
#[must_use]
pub fn id_token_profile(issued_at: DateTime<Utc>) -> BasicProfile {
    BasicProfile::new("248289761001")
        .expect("fixture id")
        .with_attribute(keys::SUBJECT, "248289761001")
        .with_attribute(keys::ISSUER, "https://server.example.com")
        .with_attribute(keys::AUDIENCE, ["s6BhdRkqt3".to_string(), "admin-console".to_string()])
        .with_attribute(keys::ISSUED_AT, issued_at.timestamp())
        .with_attribute(keys::EXPIRATION, issued_at.timestamp() + 300)
        .with_attribute(keys::EMAIL, "janedoe@example.com")
        .with_attribute(keys::EMAIL_VERIFIED, true)
        .with_attribute(keys::PREFERRED_USERNAME, "j.doe")
        .with_role("user")
        .with_client_name("OidcClient")
}

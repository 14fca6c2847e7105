//! Typed accessors, grouped into capability traits.
//!
//! Every accessor looks up one well-known key and matches the stored
//! variant it expects. A missing attribute, an explicit null, or a value of
//! another representation all read as absence; nothing here fails.
//!
//! Profile variants opt into the groups they support:
//!
//! ```rust,ignore
//! impl HasCommonAttributes for MyProfile {}
//! impl HasGender for MyProfile {}
//! ```

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use pk_model::{AttributeStore, AttributeValue, Gender, Locale};
use url::Url;

use crate::basic::BasicProfile;
use crate::keys;
use crate::normalize::normalize_multi_valued;

/// Anything backed by an attribute store.
pub trait AttributeHolder {
    /// Gets the attribute store.
    fn attributes(&self) -> &AttributeStore;
}

impl AttributeHolder for BasicProfile {
    fn attributes(&self) -> &AttributeStore {
        BasicProfile::attributes(self)
    }
}

impl AttributeHolder for AttributeStore {
    fn attributes(&self) -> &AttributeStore {
        self
    }
}

/// Attributes most identity sources provide.
pub trait HasCommonAttributes: AttributeHolder {
    /// Gets the email address.
    fn email(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::EMAIL)
    }

    /// Gets the first name.
    fn first_name(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::FIRST_NAME)
    }

    /// Gets the family name.
    fn family_name(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::FAMILY_NAME)
    }

    /// Gets the display name: the username, or first and family names.
    fn display_name(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::DISPLAY_NAME)
    }

    /// Gets the username: a login or a source-specific handle.
    fn username(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::USERNAME)
    }

    /// Gets the preferred locale.
    fn locale(&self) -> Option<&Locale> {
        match present(self.attributes(), keys::LOCALE)? {
            AttributeValue::Locale(locale) => Some(locale),
            other => mismatch(keys::LOCALE, "locale", other),
        }
    }

    /// Gets the URL of the user's picture.
    fn picture_url(&self) -> Option<&Url> {
        uri_attribute(self.attributes(), keys::PICTURE_URL)
    }

    /// Gets the URL of the user's profile page.
    fn profile_url(&self) -> Option<&Url> {
        uri_attribute(self.attributes(), keys::PROFILE_URL)
    }

    /// Gets the location.
    fn location(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::LOCATION)
    }
}

/// Gender, with [`Gender::Unspecified`] standing in for "not provided".
pub trait HasGender: AttributeHolder {
    /// Gets the gender.
    ///
    /// Never absent: a missing, null, or mistyped attribute reads as
    /// [`Gender::Unspecified`].
    fn gender(&self) -> Gender {
        match present(self.attributes(), keys::GENDER) {
            Some(AttributeValue::Gender(gender)) => *gender,
            Some(other) => mismatch(keys::GENDER, "gender", other).unwrap_or_default(),
            None => Gender::Unspecified,
        }
    }
}

/// Audience of a token-backed profile.
pub trait HasAudience: AttributeHolder {
    /// Gets the audience as one ordered sequence.
    ///
    /// See [`normalize_multi_valued`] for the accepted representations.
    fn audience(&self) -> Option<Cow<'_, [String]>> {
        normalize_multi_valued(self.attributes().get(keys::AUDIENCE))
    }
}

/// Registered JWT claims.
pub trait HasJwtClaims: AttributeHolder {
    /// Gets the subject.
    fn subject(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::SUBJECT)
    }

    /// Gets the issuer.
    fn issuer(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::ISSUER)
    }

    /// Gets the expiration time.
    fn expiration(&self) -> Option<DateTime<Utc>> {
        instant_attribute(self.attributes(), keys::EXPIRATION)
    }

    /// Gets the time the token was issued.
    fn issued_at(&self) -> Option<DateTime<Utc>> {
        instant_attribute(self.attributes(), keys::ISSUED_AT)
    }

    /// Gets the time before which the token must not be accepted.
    fn not_before(&self) -> Option<DateTime<Utc>> {
        instant_attribute(self.attributes(), keys::NOT_BEFORE)
    }
}

/// `OpenID` Connect standard claims beyond the common attributes.
pub trait HasOidcClaims: AttributeHolder {
    /// Gets whether the provider verified the email address.
    fn email_verified(&self) -> Option<bool> {
        match present(self.attributes(), keys::EMAIL_VERIFIED)? {
            AttributeValue::Boolean(verified) => Some(*verified),
            other => mismatch(keys::EMAIL_VERIFIED, "boolean", other),
        }
    }

    /// Gets the preferred username.
    fn preferred_username(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::PREFERRED_USERNAME)
    }

    /// Gets the nickname.
    fn nickname(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::NICKNAME)
    }

    /// Gets the middle name.
    fn middle_name(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::MIDDLE_NAME)
    }

    /// Gets the phone number.
    fn phone_number(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::PHONE_NUMBER)
    }

    /// Gets the time zone name (e.g. `Europe/Paris`).
    fn zoneinfo(&self) -> Option<&str> {
        string_attribute(self.attributes(), keys::ZONEINFO)
    }

    /// Gets the user's website.
    fn website(&self) -> Option<&Url> {
        uri_attribute(self.attributes(), keys::WEBSITE)
    }
}

/// Looks up `key`, folding an explicit null into absence.
fn present<'a>(store: &'a AttributeStore, key: &str) -> Option<&'a AttributeValue> {
    store.get(key).filter(|value| !value.is_null())
}

fn mismatch<T>(key: &str, expected: &'static str, found: &AttributeValue) -> Option<T> {
    tracing::debug!(
        attribute = key,
        expected,
        found = found.kind(),
        "attribute has unexpected representation"
    );
    None
}

fn string_attribute<'a>(store: &'a AttributeStore, key: &str) -> Option<&'a str> {
    match present(store, key)? {
        AttributeValue::String(s) => Some(s),
        other => mismatch(key, "string", other),
    }
}

fn uri_attribute<'a>(store: &'a AttributeStore, key: &str) -> Option<&'a Url> {
    match present(store, key)? {
        AttributeValue::Uri(uri) => Some(uri),
        other => mismatch(key, "uri", other),
    }
}

/// Accepts either a stored instant or Unix seconds, as JWT claims carry.
fn instant_attribute(store: &AttributeStore, key: &str) -> Option<DateTime<Utc>> {
    match present(store, key)? {
        AttributeValue::DateTime(at) => Some(*at),
        AttributeValue::Integer(secs) => DateTime::from_timestamp(*secs, 0),
        other => mismatch(key, "datetime", other),
    }
}

//! Well-known attribute names.
//!
//! Populating collaborators must store recognised fields under these keys
//! for the typed accessors to find them.

// Common profile attributes
/// Email address.
pub const EMAIL: &str = "email";
/// First (given) name.
pub const FIRST_NAME: &str = "first_name";
/// Family (last) name.
pub const FAMILY_NAME: &str = "family_name";
/// Display name.
pub const DISPLAY_NAME: &str = "display_name";
/// Login or specific username.
pub const USERNAME: &str = "username";
/// Gender.
pub const GENDER: &str = "gender";
/// Preferred locale.
pub const LOCALE: &str = "locale";
/// Picture URL.
pub const PICTURE_URL: &str = "picture_url";
/// Profile page URL.
pub const PROFILE_URL: &str = "profile_url";
/// Free-form location.
pub const LOCATION: &str = "location";
/// Audience (single or multi-valued).
pub const AUDIENCE: &str = "aud";

// JWT registered claims
/// Subject.
pub const SUBJECT: &str = "sub";
/// Issuer.
pub const ISSUER: &str = "iss";
/// Expiration time.
pub const EXPIRATION: &str = "exp";
/// Issued at time.
pub const ISSUED_AT: &str = "iat";
/// Not before time.
pub const NOT_BEFORE: &str = "nbf";

// OIDC standard claims
/// Email verified flag.
pub const EMAIL_VERIFIED: &str = "email_verified";
/// Preferred username.
pub const PREFERRED_USERNAME: &str = "preferred_username";
/// Nickname.
pub const NICKNAME: &str = "nickname";
/// Middle name.
pub const MIDDLE_NAME: &str = "middle_name";
/// Phone number.
pub const PHONE_NUMBER: &str = "phone_number";
/// Time zone.
pub const ZONEINFO: &str = "zoneinfo";
/// Website.
pub const WEBSITE: &str = "website";

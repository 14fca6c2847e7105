//! Profile variants.
//!
//! Each variant wraps a [`BasicProfile`] and opts into the accessor groups
//! its identity source can fill:
//!
//! | variant           | common | gender | audience | JWT | OIDC |
//! |-------------------|:------:|:------:|:--------:|:---:|:----:|
//! | [`CommonProfile`] |   ✓    |   ✓    |          |     |      |
//! | [`JwtProfile`]    |   ✓    |   ✓    |    ✓     |  ✓  |      |
//! | [`OidcProfile`]   |   ✓    |   ✓    |    ✓     |  ✓  |  ✓   |

use chrono::{DateTime, Utc};
use pk_core::config::ProfileConfig;
use pk_model::AttributeStore;

use crate::accessors::{
    AttributeHolder, HasAudience, HasCommonAttributes, HasGender, HasJwtClaims, HasOidcClaims,
};
use crate::basic::BasicProfile;

/// Behaviour shared by all profile variants.
pub trait Profile: AttributeHolder + Send + Sync {
    /// Returns the variant name used in typed ids.
    fn profile_type(&self) -> &'static str;

    /// Gets the underlying profile data.
    fn basic(&self) -> &BasicProfile;

    /// Gets the underlying profile data for population.
    fn basic_mut(&mut self) -> &mut BasicProfile;

    /// Gets the profile identifier.
    fn id(&self) -> &str {
        self.basic().id()
    }

    /// Returns `"<profile type>#<id>"`.
    fn typed_id(&self) -> String {
        self.typed_id_with(&ProfileConfig::default())
    }

    /// Returns the typed id using the configured separator.
    fn typed_id_with(&self, config: &ProfileConfig) -> String {
        format!(
            "{}{}{}",
            self.profile_type(),
            config.typed_id_separator,
            self.id()
        )
    }

    /// Checks whether the profile is no longer valid at `now`.
    fn is_expired(&self, _now: DateTime<Utc>) -> bool {
        false
    }
}

/// Profile with the attributes most identity sources provide.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonProfile {
    basic: BasicProfile,
}

impl CommonProfile {
    /// Variant name used in typed ids.
    pub const PROFILE_TYPE: &'static str = "CommonProfile";

    /// Wraps populated profile data.
    #[must_use]
    pub const fn new(basic: BasicProfile) -> Self {
        Self { basic }
    }

    /// Unwraps the profile data.
    #[must_use]
    pub fn into_basic(self) -> BasicProfile {
        self.basic
    }
}

impl From<BasicProfile> for CommonProfile {
    fn from(basic: BasicProfile) -> Self {
        Self::new(basic)
    }
}

impl AttributeHolder for CommonProfile {
    fn attributes(&self) -> &AttributeStore {
        self.basic.attributes()
    }
}

impl Profile for CommonProfile {
    fn profile_type(&self) -> &'static str {
        Self::PROFILE_TYPE
    }

    fn basic(&self) -> &BasicProfile {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicProfile {
        &mut self.basic
    }
}

impl HasCommonAttributes for CommonProfile {}
impl HasGender for CommonProfile {}

/// Profile built from the claims of a JSON Web Token.
#[derive(Debug, Clone, PartialEq)]
pub struct JwtProfile {
    basic: BasicProfile,
}

impl JwtProfile {
    /// Variant name used in typed ids.
    pub const PROFILE_TYPE: &'static str = "JwtProfile";

    /// Wraps populated profile data.
    #[must_use]
    pub const fn new(basic: BasicProfile) -> Self {
        Self { basic }
    }

    /// Unwraps the profile data.
    #[must_use]
    pub fn into_basic(self) -> BasicProfile {
        self.basic
    }
}

impl From<BasicProfile> for JwtProfile {
    fn from(basic: BasicProfile) -> Self {
        Self::new(basic)
    }
}

impl AttributeHolder for JwtProfile {
    fn attributes(&self) -> &AttributeStore {
        self.basic.attributes()
    }
}

impl Profile for JwtProfile {
    fn profile_type(&self) -> &'static str {
        Self::PROFILE_TYPE
    }

    fn basic(&self) -> &BasicProfile {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicProfile {
        &mut self.basic
    }

    /// Expired once `exp` has been reached; a token without `exp` never expires.
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        token_expired(self, now)
    }
}

impl HasCommonAttributes for JwtProfile {}
impl HasGender for JwtProfile {}
impl HasAudience for JwtProfile {}
impl HasJwtClaims for JwtProfile {}

/// Profile built from an `OpenID` Connect ID token and userinfo.
#[derive(Debug, Clone, PartialEq)]
pub struct OidcProfile {
    basic: BasicProfile,
}

impl OidcProfile {
    /// Variant name used in typed ids.
    pub const PROFILE_TYPE: &'static str = "OidcProfile";

    /// Wraps populated profile data.
    #[must_use]
    pub const fn new(basic: BasicProfile) -> Self {
        Self { basic }
    }

    /// Unwraps the profile data.
    #[must_use]
    pub fn into_basic(self) -> BasicProfile {
        self.basic
    }
}

impl From<BasicProfile> for OidcProfile {
    fn from(basic: BasicProfile) -> Self {
        Self::new(basic)
    }
}

impl AttributeHolder for OidcProfile {
    fn attributes(&self) -> &AttributeStore {
        self.basic.attributes()
    }
}

impl Profile for OidcProfile {
    fn profile_type(&self) -> &'static str {
        Self::PROFILE_TYPE
    }

    fn basic(&self) -> &BasicProfile {
        &self.basic
    }

    fn basic_mut(&mut self) -> &mut BasicProfile {
        &mut self.basic
    }

    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        token_expired(self, now)
    }
}

impl HasCommonAttributes for OidcProfile {}
impl HasGender for OidcProfile {}
impl HasAudience for OidcProfile {}
impl HasJwtClaims for OidcProfile {}
impl HasOidcClaims for OidcProfile {}

fn token_expired<P: HasJwtClaims>(profile: &P, now: DateTime<Utc>) -> bool {
    profile.expiration().is_some_and(|exp| exp <= now)
}

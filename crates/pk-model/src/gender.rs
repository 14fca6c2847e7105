//! Gender of a user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Gender of a user, as reported by the identity source.
///
/// `Unspecified` is the default: a profile without a gender attribute is
/// indistinguishable from one whose source declined to state it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
    /// Not stated or unknown.
    #[default]
    Unspecified,
}

impl Gender {
    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Unspecified => "UNSPECIFIED",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

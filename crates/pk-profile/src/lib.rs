//! # pk-profile
//!
//! Typed profile accessors for profilekit.
//!
//! A profile's attribute store is untyped; this crate exposes its
//! well-known fields as typed values:
//!
//! - [`keys`] - the attribute names populators must use
//! - [`accessors`] - capability traits (`HasCommonAttributes`, `HasGender`, ...)
//! - [`normalize`] - folding single/array/list values into one sequence
//! - [`profile`] - the `CommonProfile`, `JwtProfile` and `OidcProfile` variants
//!
//! ## Example
//!
//! ```rust
//! use pk_model::Gender;
//! use pk_profile::{keys, BasicProfile, HasAudience, HasCommonAttributes, HasGender, JwtProfile};
//!
//! let basic = BasicProfile::new("248289761001")?
//!     .with_attribute(keys::EMAIL, "jane@example.com")
//!     .with_attribute(keys::AUDIENCE, "my-client");
//! let profile = JwtProfile::from(basic);
//!
//! assert_eq!(profile.email(), Some("jane@example.com"));
//! assert_eq!(profile.gender(), Gender::Unspecified);
//! assert_eq!(profile.audience().as_deref(), Some(&["my-client".to_string()][..]));
//! # Ok::<(), pk_core::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod accessors;
pub mod basic;
pub mod keys;
pub mod normalize;
pub mod profile;

pub use accessors::{
    AttributeHolder, HasAudience, HasCommonAttributes, HasGender, HasJwtClaims, HasOidcClaims,
};
pub use basic::BasicProfile;
pub use normalize::normalize_multi_valued;
pub use profile::{CommonProfile, JwtProfile, OidcProfile, Profile};

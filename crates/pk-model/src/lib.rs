//! # pk-model
//!
//! Attribute model for profilekit.
//!
//! A profile's data lives in an [`AttributeStore`]: a mapping from attribute
//! name to an [`AttributeValue`]. The store never interprets what it holds;
//! typed reading is layered on top in `pk-profile`.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod gender;
pub mod locale;
pub mod store;
pub mod value;

pub use gender::Gender;
pub use locale::Locale;
pub use store::AttributeStore;
pub use value::AttributeValue;

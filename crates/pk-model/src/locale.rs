//! Locale value object.
//!
//! A locale is a BCP 47 style language tag such as `en`, `en-US` or
//! `zh-Hant-TW`. Only the shape of the tag is checked; whether a subtag is
//! registered is left to whoever produced it.

use std::fmt;
use std::str::FromStr;

use pk_core::{Error, Result};
use serde::{Deserialize, Serialize};

const MAX_SUBTAG_LEN: usize = 8;

/// A language tag identifying the user's preferred locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Parses a language tag, normalising the case of each subtag.
    ///
    /// Script and region casing only applies before the first singleton;
    /// extension and private-use subtags (`-u-...`, `-x-...`) are lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLocale`] when the tag is empty, uses a
    /// separator other than `-`, contains a malformed subtag, or ends with
    /// a singleton.
    pub fn new(tag: &str) -> Result<Self> {
        let mut subtags = tag.split('-');
        let language = subtags.next().unwrap_or_default();
        if !(2..=MAX_SUBTAG_LEN).contains(&language.len())
            || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(Error::invalid_locale(tag));
        }

        let mut canonical = language.to_ascii_lowercase();
        let mut script_slot = true;
        let mut region_slot = true;
        let mut extension = false;
        let mut last_len = language.len();
        for subtag in subtags {
            if subtag.is_empty()
                || subtag.len() > MAX_SUBTAG_LEN
                || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(Error::invalid_locale(tag));
            }
            extension |= subtag.len() == 1;

            canonical.push('-');
            if !extension && script_slot && is_script(subtag) {
                script_slot = false;
                canonical.push_str(&title_case(subtag));
            } else if !extension && region_slot && is_region(subtag) {
                script_slot = false;
                region_slot = false;
                canonical.push_str(&subtag.to_ascii_uppercase());
            } else {
                script_slot = false;
                region_slot = false;
                canonical.push_str(&subtag.to_ascii_lowercase());
            }
            last_len = subtag.len();
        }
        if last_len == 1 {
            return Err(Error::invalid_locale(tag));
        }

        Ok(Self { tag: canonical })
    }

    /// Returns the primary language subtag (e.g. `en`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.tag.split('-').next().unwrap_or(&self.tag)
    }

    /// Returns the region subtag (e.g. `US` or `419`), if any.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        let mut subtags = self.tag.split('-').skip(1);
        let mut candidate = subtags.next()?;
        if is_script(candidate) {
            candidate = subtags.next()?;
        }
        is_region(candidate).then_some(candidate)
    }

    /// Returns the normalised tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }
}

fn is_region(subtag: &str) -> bool {
    (subtag.len() == 2 && subtag.bytes().all(|b| b.is_ascii_alphabetic()))
        || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit()))
}

fn is_script(subtag: &str) -> bool {
    subtag.len() == 4 && subtag.bytes().all(|b| b.is_ascii_alphabetic())
}

fn title_case(subtag: &str) -> String {
    let lower = subtag.to_ascii_lowercase();
    let mut titled = lower[..1].to_ascii_uppercase();
    titled.push_str(&lower[1..]);
    titled
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

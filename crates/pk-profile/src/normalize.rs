//! Multi-valued attribute normalization.
//!
//! Upstream populators store logically multi-valued fields (the audience
//! being the usual suspect) as a single string, a fixed array, or a list.
//! [`normalize_multi_valued`] folds those shapes into one ordered sequence
//! so readers never see the difference.

use std::borrow::Cow;

use pk_model::AttributeValue;

/// Normalizes a possibly multi-valued attribute into an ordered sequence.
///
/// | stored shape                    | result                         |
/// |---------------------------------|--------------------------------|
/// | `String(s)`                     | `Some([s])`                    |
/// | `StringArray(a)`                | `Some(a)`, same order          |
/// | `StringList(l)`                 | `Some(l)`, unchanged           |
/// | missing or any other variant    | `None`                         |
///
/// An empty list stays an empty sequence: "field present but empty" is not
/// the same as "no field". Arrays and lists are borrowed, not copied.
#[must_use]
pub fn normalize_multi_valued(value: Option<&AttributeValue>) -> Option<Cow<'_, [String]>> {
    match value? {
        AttributeValue::String(single) => Some(Cow::Owned(vec![single.clone()])),
        AttributeValue::StringArray(array) => Some(Cow::Borrowed(&array[..])),
        AttributeValue::StringList(list) => Some(Cow::Borrowed(list.as_slice())),
        other => {
            tracing::debug!(
                kind = other.kind(),
                "unsupported representation for multi-valued attribute"
            );
            None
        }
    }
}

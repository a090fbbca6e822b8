//! Required-field validation for signup submissions.
//!
//! A field counts as missing when the key was absent from the request body,
//! was JSON `null`, or held an empty string. Whitespace-only values are
//! accepted; only truly empty values are rejected. Fields are checked in
//! their declared order and the first offender wins, so error messages are
//! deterministic for a given submission.

/// Return the wire name of the first missing-or-empty field, if any.
///
/// `fields` pairs each wire-level field name with the submitted value.
pub fn first_missing<'a>(fields: &[(&'a str, Option<&String>)]) -> Option<&'a str> {
    fields
        .iter()
        .find(|(_, value)| value.is_none_or(String::is_empty))
        .map(|(name, _)| *name)
}

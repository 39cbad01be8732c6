//! Identifier validity, shared by variable names and label names.

/// Returns `true` if `text` is a valid identifier.
///
/// The first character must be a letter; every following character must be
/// a letter or a digit. Nothing else is allowed, so `_`, `-` and the empty
/// string are all rejected.
pub fn is_valid_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() => chars.all(char::is_alphanumeric),
        _ => false,
    }
}

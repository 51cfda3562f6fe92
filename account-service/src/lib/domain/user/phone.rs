/// Strip every character outside `[A-Za-z0-9 ]` from a phone number.
///
/// The result is the canonical key used for storage and lookup. Applying it
/// twice yields the same string as applying it once.
pub fn normalize_phone_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}

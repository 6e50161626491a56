//! Special character section.

/// The exact set of punctuation that counts as "special".
///
/// Quote, apostrophe, tilde, backtick, slash and backslash are not in it.
pub const SPECIAL_CHARACTERS: &str = "-!@#$%^&*()_+=[]{}|;:,.<>?";

/// Checks for at least one character from [`SPECIAL_CHARACTERS`].
pub fn special_character_section(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

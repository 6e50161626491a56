//! Length section - checks password minimum length.

/// Minimum number of UTF-16 code units for the length criterion.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets the minimum length.
///
/// Length is measured in UTF-16 code units, so a character outside the
/// Basic Multilingual Plane counts twice.
pub fn length_section(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_LENGTH
}

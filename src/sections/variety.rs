//! Character variety sections - ASCII lowercase, uppercase and digits.
//!
//! Only ASCII ranges count: `é` is not lowercase and `٣` is not a digit here.

/// Checks for at least one character in `a`..=`z`.
pub fn lowercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks for at least one character in `A`..=`Z`.
pub fn uppercase_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// Checks for at least one character in `0`..=`9`.
pub fn digit_section(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

//! Master-password strength scoring and random password generation.
//!
//! Both are pure functions so the auth page and the entry form share one
//! definition, and tests can pin behavior with a seeded RNG.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

use rand::{CryptoRng, Rng};

/// Highest score `password_strength` can return.
pub const MAX_STRENGTH: u8 = 4;

/// Minimum master-password length accepted at setup.
pub const MIN_MASTER_LEN: usize = 8;

/// Length of generated passwords.
pub const GENERATED_LEN: usize = 20;

/// Printable ASCII without space: letters, digits, and the 32 punctuation
/// symbols.
pub const PASSWORD_ALPHABET: &[u8; 94] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Score a password from 0 to 4.
///
/// One point each for: at least 8 characters, at least 12 characters, both
/// ASCII upper and lower case letters, both an ASCII digit and a character
/// outside `[A-Za-z0-9]`.
pub fn password_strength(password: &str) -> u8 {
    let len = password.chars().count();
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    [len >= 8, len >= 12, has_upper && has_lower, has_digit && has_symbol]
        .into_iter()
        .map(u8::from)
        .sum()
}

/// Label for a strength score. Out-of-range scores map to `""`.
pub fn strength_text(score: u8) -> &'static str {
    match score {
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "",
    }
}

/// Meter color class for a strength score.
pub fn strength_color(score: u8) -> &'static str {
    match score {
        1 => "bg-red-500",
        2 => "bg-yellow-500",
        3 => "bg-vault-400",
        4 => "bg-vault-500",
        _ => "",
    }
}

/// Length check applied at setup, in characters.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_MASTER_LEN
}

/// Generate a `GENERATED_LEN`-character password, each character drawn
/// uniformly from `PASSWORD_ALPHABET`.
pub fn generate_password<R: Rng + CryptoRng + ?Sized>(rng: &mut R) -> String {
    (0..GENERATED_LEN)
        .map(|_| char::from(PASSWORD_ALPHABET[rng.random_range(0..PASSWORD_ALPHABET.len())]))
        .collect()
}

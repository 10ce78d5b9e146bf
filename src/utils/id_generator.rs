//! Short identifier generation.
//!
//! Produces fixed-length random identifiers from a URL-safe alphabet.
//! Uniqueness is not guaranteed here; collision handling belongs to the
//! caller (see [`crate::application::services::LinkService`]).

/// Number of characters in a generated identifier.
pub const ID_LENGTH: usize = 6;

/// 64-symbol URL-safe alphabet: letters, digits, underscore, hyphen.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generates a random 6-character identifier.
///
/// Uses `getrandom` for entropy and maps each byte onto the URL-safe
/// alphabet. With 64 symbols per position the mapping is unbiased.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_id();
/// assert_eq!(id.len(), 6);
/// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_id() -> String {
    let mut buffer = [0u8; ID_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}

//! Short code generation.

use rand::Rng;

/// Characters a short code is drawn from.
pub const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 7;

/// Generates a random short code.
///
/// Every character is drawn independently and uniformly from [`CODE_ALPHABET`]
/// using the thread-local CSPRNG, which is seeded from the OS. The generator
/// does not check for uniqueness; callers handle collisions.
///
/// # Examples
///
/// ```
/// use mem_shortener::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

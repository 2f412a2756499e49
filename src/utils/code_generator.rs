//! Short code generation.
//!
//! Codes are drawn uniformly from the base62 alphabet, which keeps them
//! URL-safe without any escaping.

use rand::Rng;

/// Base62 alphabet used for short codes.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Number of characters in a generated code (~59 bits of entropy).
pub const CODE_LENGTH: usize = 10;

/// Generates a random short code.
///
/// The result does not depend on the URL being shortened. Uniqueness is
/// probabilistic; the store's unique constraint is the final arbiter.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 10);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

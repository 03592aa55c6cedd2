use rand::{rngs::OsRng, Rng};

use crate::auth::application::domain::token::{TokenPlaintext, TOKEN_LENGTH};

/// RFC 4648 base32 alphabet.
const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

pub fn generate_plaintext() -> TokenPlaintext {
    let mut rng = OsRng;
    let value: String = (0..TOKEN_LENGTH)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    TokenPlaintext::new(value)
}

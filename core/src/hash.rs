use std::{fmt::Display, str::FromStr};

use md5::{Digest as _, Md5};

use crate::error::{PwcrackError, PwcrackResult};

/// The length of a digest once rendered as hexadecimal.
pub const DIGEST_HEX_LENGTH: usize = 32;

/// An MD5 digest, stored as lowercase hexadecimal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Digest(String);

impl Digest {
    /// Returns the lowercase hexadecimal representation of the digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Digest {
    type Err = PwcrackError;

    /// Parses a digest from hexadecimal, in any case.
    fn from_str(s: &str) -> PwcrackResult<Self> {
        let s = s.trim();
        let invalid = || PwcrackError::InvalidDigest {
            digest: s.to_owned(),
            expected: DIGEST_HEX_LENGTH,
        };

        if s.len() != DIGEST_HEX_LENGTH {
            return Err(invalid());
        }
        hex::decode(s).map_err(|_| invalid())?;

        Ok(Digest(s.to_ascii_lowercase()))
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hashes a password.
/// Characters that are not ASCII are silently dropped before hashing.
pub fn encode(password: &str) -> Digest {
    let ascii = password
        .chars()
        .filter(char::is_ascii)
        .map(|c| c as u8)
        .collect::<Vec<_>>();

    encode_bytes(&ascii)
}

/// Hashes a password that is already a byte string.
#[inline]
pub fn encode_bytes(password: &[u8]) -> Digest {
    Digest(hex::encode(Md5::digest(password)))
}

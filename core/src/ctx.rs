use crate::{
    complexity::Complexity,
    error::{PwcrackError, PwcrackResult},
    estimate::search_space,
    DEFAULT_MAX_PASSWORD_LENGTH,
};

/// A builder for a brute-force context.
#[derive(Clone, Debug)]
pub struct BruteForceCtxBuilder {
    charset: Vec<u8>,
    max_password_length: u32,
}

impl Default for BruteForceCtxBuilder {
    fn default() -> Self {
        Self {
            charset: Complexity::default().charset().to_owned(),
            max_password_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

impl BruteForceCtxBuilder {
    /// Creates a new BruteForceCtxBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the charset of a complexity.
    pub fn complexity(mut self, complexity: Complexity) -> Self {
        self.charset = complexity.charset().to_owned();

        self
    }

    /// Sets a custom charset.
    /// The characters are tried in the given order.
    pub fn charset(mut self, charset: &[u8]) -> Self {
        self.charset = charset.to_owned();

        self
    }

    /// Sets the maximum password length of the context.
    /// A length of 0 is allowed and results in an empty search.
    pub fn max_password_length(mut self, max_password_length: u32) -> Self {
        self.max_password_length = max_password_length;

        self
    }

    /// Builds a BruteForceCtx with the specified parameters.
    pub fn build(self) -> PwcrackResult<BruteForceCtx> {
        if self.charset.is_empty() {
            return Err(PwcrackError::EmptyCharset);
        }

        if !self.charset.is_ascii() {
            return Err(PwcrackError::NonAsciiCharset);
        }

        let mut seen = [false; 128];
        for &c in &self.charset {
            if seen[c as usize] {
                return Err(PwcrackError::DuplicateCharacter(c as char));
            }
            seen[c as usize] = true;
        }

        Ok(BruteForceCtx {
            charset: self.charset,
            max_password_length: self.max_password_length,
        })
    }
}

/// Context holding the parameters of a brute-force search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BruteForceCtx {
    /// The charset used, in enumeration order.
    pub charset: Vec<u8>,
    /// The maximum password length.
    pub max_password_length: u32,
}

impl BruteForceCtx {
    /// Returns the number of passwords to try to exhaust the search,
    /// or `None` if it doesn't fit in a u128.
    pub fn search_space(&self) -> Option<u128> {
        search_space(self.charset.len(), self.max_password_length)
    }
}

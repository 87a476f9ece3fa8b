use thiserror::Error;

pub type PwcrackResult<T> = std::result::Result<T, PwcrackError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PwcrackError {
    #[error("Unknown complexity \"{0}\", expected one of: numbers, letters, letters_numbers")]
    UnknownComplexity(String),

    #[error("The charset can't be empty")]
    EmptyCharset,

    #[error("The charset can only contain ASCII characters")]
    NonAsciiCharset,

    #[error("The character '{0}' appears more than once in the charset")]
    DuplicateCharacter(char),

    #[error("The maximum password length should be at least 1")]
    InvalidMaxPasswordLength,

    #[error("The expected number of passwords per second should be a positive number")]
    InvalidPerformance,

    #[error("The search space is too large to be counted (more than 2^128 passwords)")]
    SearchSpaceTooLarge,

    #[error("The digest should be {expected} hexadecimal characters, got \"{digest}\"")]
    InvalidDigest { digest: String, expected: usize },
}

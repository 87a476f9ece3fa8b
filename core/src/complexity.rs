use std::{fmt::Display, str::FromStr};

use crate::error::{PwcrackError, PwcrackResult};

const DIGITS: &[u8] = b"0123456789";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const LOWERCASE_DIGITS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// The password complexities, each one mapping to a fixed charset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Complexity {
    /// Digits only.
    #[default]
    Numbers,
    /// Lowercase ASCII letters only.
    Letters,
    /// Lowercase ASCII letters followed by digits.
    LettersNumbers,
}

impl Complexity {
    /// All the complexities, from the smallest charset to the largest.
    pub const ALL: [Complexity; 3] = [
        Complexity::Numbers,
        Complexity::Letters,
        Complexity::LettersNumbers,
    ];

    /// Returns the charset used to build candidate passwords.
    /// The order of the characters is the enumeration order.
    pub fn charset(&self) -> &'static [u8] {
        match self {
            Self::Numbers => DIGITS,
            Self::Letters => LOWERCASE,
            Self::LettersNumbers => LOWERCASE_DIGITS,
        }
    }

    /// Returns the name of the complexity, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Letters => "letters",
            Self::LettersNumbers => "letters_numbers",
        }
    }
}

impl FromStr for Complexity {
    type Err = PwcrackError;

    fn from_str(s: &str) -> PwcrackResult<Self> {
        Self::ALL
            .into_iter()
            .find(|complexity| complexity.name() == s)
            .ok_or_else(|| PwcrackError::UnknownComplexity(s.to_owned()))
    }
}

impl Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Complexity, PwcrackError};

    #[test]
    fn test_charset_sizes() {
        assert_eq!(10, Complexity::Numbers.charset().len());
        assert_eq!(26, Complexity::Letters.charset().len());
        assert_eq!(36, Complexity::LettersNumbers.charset().len());
    }

    #[test]
    fn test_charset_no_duplicates() {
        for complexity in Complexity::ALL {
            let charset = complexity.charset();
            let unique = charset.iter().collect::<HashSet<_>>();
            assert_eq!(charset.len(), unique.len(), "{complexity}");
        }
    }

    #[test]
    fn test_letters_before_digits() {
        let charset = Complexity::LettersNumbers.charset();
        assert_eq!(b'a', charset[0]);
        assert_eq!(b'z', charset[25]);
        assert_eq!(b'0', charset[26]);
        assert_eq!(b'9', charset[35]);
    }

    #[test]
    fn test_from_str() {
        for complexity in Complexity::ALL {
            assert_eq!(Ok(complexity), complexity.to_string().parse());
        }

        assert_eq!(
            Err(PwcrackError::UnknownComplexity("symbols".to_owned())),
            "symbols".parse::<Complexity>()
        );
    }
}

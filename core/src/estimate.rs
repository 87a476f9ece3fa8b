use crate::error::{PwcrackError, PwcrackResult};

/// Returns the number of passwords of 1 to `max_password_length` characters
/// that can be made from a charset of `charset_len` characters.
/// Returns `None` if the count doesn't fit in a u128.
pub fn search_space(charset_len: usize, max_password_length: u32) -> Option<u128> {
    let charset_len = charset_len as u128;
    let mut combinations: u128 = 0;
    let mut length_space: u128 = 1;

    for _ in 0..max_password_length {
        length_space = length_space.checked_mul(charset_len)?;
        combinations = combinations.checked_add(length_space)?;
    }

    Some(combinations)
}

/// An estimation of the time needed to exhaust a search space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimate {
    /// The number of characters in the charset.
    pub charset_len: usize,
    /// The expected number of passwords hashed per second.
    pub performance: f64,
    /// The number of potential passwords.
    pub combinations: u128,
    /// The time to try all the potential passwords, in seconds.
    pub seconds: f64,
}

impl Estimate {
    /// Estimates the time to try all the passwords of 1 to `max_password_length` characters.
    pub fn new(
        charset_len: usize,
        max_password_length: u32,
        performance: f64,
    ) -> PwcrackResult<Self> {
        if charset_len == 0 {
            return Err(PwcrackError::EmptyCharset);
        }

        if max_password_length == 0 {
            return Err(PwcrackError::InvalidMaxPasswordLength);
        }

        if !performance.is_finite() || performance <= 0. {
            return Err(PwcrackError::InvalidPerformance);
        }

        let combinations = search_space(charset_len, max_password_length)
            .ok_or(PwcrackError::SearchSpaceTooLarge)?;

        Ok(Estimate {
            charset_len,
            performance,
            combinations,
            seconds: combinations as f64 / performance,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{search_space, Complexity, Estimate, PwcrackError, DEFAULT_PERFORMANCE};

    #[test]
    fn test_search_space() {
        assert_eq!(Some(0), search_space(10, 0));
        assert_eq!(Some(10), search_space(10, 1));
        assert_eq!(Some(110), search_space(10, 2));
        assert_eq!(Some(18_278), search_space(26, 3));
        assert_eq!(None, search_space(36, 30));
    }

    #[test]
    fn test_estimate() {
        let charset_len = Complexity::LettersNumbers.charset().len();
        let estimate = Estimate::new(charset_len, 4, DEFAULT_PERFORMANCE).unwrap();

        assert_eq!(1_727_604, estimate.combinations);
        assert!((estimate.seconds - 2.468).abs() < 1e-3);
        assert_eq!(36, estimate.charset_len);
        assert_eq!(DEFAULT_PERFORMANCE, estimate.performance);
    }

    #[test]
    fn test_estimate_wide_space() {
        let estimate = Estimate::new(36, 20, DEFAULT_PERFORMANCE).unwrap();

        // 36 + 36^2 + ... + 36^20 = (36^21 - 36) / 35
        let expected = (36u128.pow(21) - 36) / 35;
        assert_eq!(expected, estimate.combinations);
    }

    #[test]
    fn test_estimate_invalid_config() {
        assert_eq!(
            Err(PwcrackError::InvalidMaxPasswordLength),
            Estimate::new(10, 0, DEFAULT_PERFORMANCE)
        );
        assert_eq!(
            Err(PwcrackError::EmptyCharset),
            Estimate::new(0, 3, DEFAULT_PERFORMANCE)
        );
        assert_eq!(
            Err(PwcrackError::InvalidPerformance),
            Estimate::new(10, 3, 0.)
        );
        assert_eq!(
            Err(PwcrackError::InvalidPerformance),
            Estimate::new(10, 3, -5.)
        );
        assert_eq!(
            Err(PwcrackError::SearchSpaceTooLarge),
            Estimate::new(36, 30, DEFAULT_PERFORMANCE)
        );
    }
}

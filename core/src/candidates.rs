use std::iter::FusedIterator;

/// A lazy iterator over all the passwords of a given length made from a charset.
///
/// Each position ranges over the whole charset, so there are `charset.len() ^ length`
/// candidates. They are yielded in the order induced by the charset, the leftmost
/// character varying the slowest.
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    charset: &'a [u8],
    /// Index in the charset of each character of the next candidate.
    indices: Vec<usize>,
    /// Number of candidates left, `None` if it doesn't fit in a u128.
    remaining: Option<u128>,
    exhausted: bool,
}

impl<'a> Candidates<'a> {
    /// Creates a new iterator over the candidates of `length` characters.
    /// Nothing is yielded if the length is 0 or the charset is empty.
    pub fn new(charset: &'a [u8], length: u32) -> Self {
        let exhausted = length == 0 || charset.is_empty();
        let remaining = if exhausted {
            Some(0)
        } else {
            (charset.len() as u128).checked_pow(length)
        };

        Candidates {
            charset,
            indices: vec![0; length as usize],
            remaining,
            exhausted,
        }
    }

    /// Moves the indices to the next candidate, like an odometer.
    fn advance(&mut self) {
        for index in self.indices.iter_mut().rev() {
            *index += 1;
            if *index < self.charset.len() {
                return;
            }
            *index = 0;
        }

        // every position wrapped around
        self.exhausted = true;
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let candidate = self
            .indices
            .iter()
            .map(|&i| self.charset[i] as char)
            .collect();

        self.advance();
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }

        Some(candidate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining.map(usize::try_from) {
            Some(Ok(remaining)) => (remaining, Some(remaining)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Candidates<'_> {}

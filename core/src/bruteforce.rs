use tracing::{debug, info};

use crate::{
    candidates::Candidates,
    ctx::BruteForceCtx,
    event::{Event, EventSink},
    hash::{encode_bytes, Digest},
};

/// The outcome of a brute-force search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guess {
    /// A password hashing to the target digest.
    Found(String),
    /// Every password of the search space was tried without success.
    NotFound,
}

impl Guess {
    /// Returns the password found, if any.
    pub fn password(&self) -> Option<&str> {
        match self {
            Self::Found(password) => Some(password.as_str()),
            Self::NotFound => None,
        }
    }
}

/// Finds the password producing a digest by trying all the candidates of a context,
/// shortest passwords first.
#[derive(Clone, Debug)]
pub struct BruteForce {
    target: Digest,
    ctx: BruteForceCtx,
}

impl BruteForce {
    /// Creates a new search for the password of `target`.
    pub fn new(target: Digest, ctx: BruteForceCtx) -> Self {
        Self { target, ctx }
    }

    /// Returns the context of the search.
    pub fn ctx(&self) -> &BruteForceCtx {
        &self.ctx
    }

    /// Searches for the password, without reporting progress.
    pub fn guess(&self) -> Guess {
        self.guess_with_events(&mut ())
    }

    /// Searches for the password, sending progress events to `sink`.
    /// The search stops at the first password matching the target.
    pub fn guess_with_events(&self, sink: &mut impl EventSink) -> Guess {
        for length in 1..=self.ctx.max_password_length {
            info!("Attempting to guess password of length {length}");

            if let Some(password) = self.guess_for_length(length, sink) {
                info!("Guessed password: {password}");
                return Guess::Found(password);
            }
        }

        debug!(
            "Could not guess password of at most {} characters",
            self.ctx.max_password_length
        );
        Guess::NotFound
    }

    /// Tries all the passwords of exactly `length` characters.
    pub fn guess_for_length(&self, length: u32, sink: &mut impl EventSink) -> Option<String> {
        let candidates = Candidates::new(&self.ctx.charset, length);

        sink.send(Event::Length {
            length,
            candidates: (self.ctx.charset.len() as u128).checked_pow(length),
        });

        for candidate in candidates {
            sink.send(Event::Attempt {
                candidate: &candidate,
            });

            if encode_bytes(candidate.as_bytes()) == self.target {
                return Some(candidate);
            }
        }

        None
    }
}

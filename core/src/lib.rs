//! Brute-force password guessing over small charsets, and estimation of the
//! time needed to exhaust a search space.

mod bruteforce;
mod candidates;
mod complexity;
mod ctx;
mod error;
mod estimate;
mod event;
mod hash;

pub use bruteforce::{BruteForce, Guess};
pub use candidates::Candidates;
pub use complexity::Complexity;
pub use ctx::{BruteForceCtx, BruteForceCtxBuilder};
pub use error::{PwcrackError, PwcrackResult};
pub use estimate::{search_space, Estimate};
pub use event::{Event, EventSink};
pub use hash::{encode, encode_bytes, Digest, DIGEST_HEX_LENGTH};

/// The default maximum password length.
pub const DEFAULT_MAX_PASSWORD_LENGTH: u32 = 10;

/// The default number of passwords hashed per second, used for estimations.
pub const DEFAULT_PERFORMANCE: f64 = 700_000.;

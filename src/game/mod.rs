//! Round state machine
//!
//! [`RoundState`] holds the state of one round; [`RoundEngine`] owns the
//! active round and enforces the guess protocol.

mod engine;
mod round;

pub use engine::{DisplaySnapshot, RoundEngine};
pub use round::{GuessOutcome, MAX_ATTEMPTS, PLACEHOLDER, RejectReason, RoundState, RoundStatus};

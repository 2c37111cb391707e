//! Markov-chain word generation library.
//!
//! This crate synthesizes plausible novel words (place-name-like
//! strings) from a training corpus, using a character-level order-K
//! Markov model with sequential back-off:
//! - Alphabet extraction with a reserved sentinel symbol
//! - Independent per-order context frequency tables
//! - Weighted random sampling with an explicitly seedable source
//! - Length-bounded word assembly and batch generation
//! - Learned-state export/import through inert snapshots
//!
//! The model layer owns no file or network surface; persistence bytes
//! and transports are left to callers, with helpers in `io`.

/// Core model types and generation logic.
pub mod model;

/// Caller-side helpers: corpus files and snapshot bytes.
pub mod io;

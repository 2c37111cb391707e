//! Top-level module for the Markov word generation system.
//!
//! This crate provides a character-level, order-K Markov generator with
//! sequential back-off, including:
//! - Sorted symbol set with a reserved sentinel (`Alphabet`)
//! - Per-order context frequency tables (`ChainTable`)
//! - The back-off model with weighted sampling (`Model`)
//! - Word assembly and batch generation (`WordGenerator`)
//! - Inert learned-state transfer (`Snapshot`)

/// Ordered symbol set shared by all chain tables of a model.
///
/// Weight-vector positions are indexed by alphabet position, so the
/// ordering is part of the learned state.
pub mod alphabet;

/// Context → weight-vector frequency table for one context length.
///
/// Built independently per order from sentinel-padded training words.
pub mod chain;

/// The order-K back-off model.
///
/// Owns alphabet, chain tables, smoothing prior and a seedable random
/// source; samples next symbols and transfers state via snapshots.
pub mod markov_model;

/// High-level word assembly over a single model.
///
/// Length-bounded retries, sentinel stripping, optional batch
/// deduplication.
pub mod generator;

/// Plain value copy of a model's learned state.
pub mod snapshot;

//! Shared helpers for the behaviour-driven suites.
//!
//! `step` parses quoted step parameters so scenarios can pass locale codes,
//! keys, and templates containing spaces, punctuation, or apostrophes.
pub mod step;

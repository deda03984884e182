//! Match Scoring Engine
//!
//! One transition per point: [`apply_point`] composes the three sub-steps
//! over an immutable input snapshot and returns the next match state.
//!
//! | Step | Module | Responsibility |
//! |------|--------|----------------|
//! | 1 | `statistics` | Per-category counters for the scoring player |
//! | 2 | `rally` | Synthetic trajectory + player placement |
//! | 3 | `scoring` | Game/set/match score, server swap, serve speed |
//!
//! Randomness (trajectory jitter, serve speed) flows through a caller-
//! provided `rand::Rng`; production paths seed a `ChaCha8Rng` from a `u64`
//! so the whole transition is reproducible.

mod rally;
mod scoring;
mod statistics;

pub use scoring::apply_point;

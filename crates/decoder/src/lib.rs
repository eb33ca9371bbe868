//! # Decoder
//!
//! Frame validation and per-kind sentence parsing.
//!
//! One entry point: [`decode`] turns a raw [`contracts::Frame`] into a
//! [`contracts::DecodeOutcome`]. The decoder owns every per-frame
//! decision: text validation, kind recognition, checksum verification and
//! field extraction. It never fails the stream; stream-level errors are
//! the frame reader's business.
//!
//! Kind recognition is deliberately the *first* content check: sentences
//! of unconsumed kinds are skipped without looking at their checksum, so
//! a corrupt sentence nobody consumes never produces a warning.

mod fields;
mod gga;
mod gsa;
mod rmc;
mod sentence;

pub use sentence::decode;

//! # Ingestion
//!
//! Byte-stream framing stage.
//!
//! Responsibilities:
//! - Pull bytes from an async source (serial device, file, pipe)
//! - Cut the stream into newline-terminated [`contracts::Frame`]s
//! - Surface stream-level failures as fatal [`contracts::StreamError`]s
//!
//! Framing knows nothing about the protocol inside a frame; torn frames
//! at end of stream are a *stream* error, not a decode error.

mod frame_reader;

pub use frame_reader::FrameReader;

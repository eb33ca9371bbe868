//! Newline framing over an async byte source

use bytes::Bytes;
use contracts::{Frame, StreamError};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tracing::trace;

/// Frame reader
///
/// Buffers an async byte source and yields one [`Frame`] per `\n`-terminated
/// line, terminator included. The reader never resynchronizes mid-line: a
/// source that ends without a final terminator yields
/// [`StreamError::TruncatedFrame`] and the stream is considered dead.
pub struct FrameReader<R> {
    /// Buffered source
    inner: BufReader<R>,

    /// Line buffer, reused across frames
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    /// Wrap an async byte source
    pub fn new(source: R) -> Self {
        Self {
            inner: BufReader::new(source),
            buf: Vec::with_capacity(128),
        }
    }

    /// Read the next complete frame
    ///
    /// Blocks until a full line arrives; a quiet source simply keeps the
    /// caller waiting. There is no timeout and no length cap.
    ///
    /// # Errors
    /// - [`StreamError::Exhausted`] on end of stream at a frame boundary
    /// - [`StreamError::TruncatedFrame`] on end of stream mid-frame
    /// - [`StreamError::Io`] on read failure
    pub async fn next_frame(&mut self) -> Result<Frame, StreamError> {
        self.buf.clear();
        let read = self.inner.read_until(b'\n', &mut self.buf).await?;

        if read == 0 {
            return Err(StreamError::Exhausted);
        }
        if self.buf.last() != Some(&b'\n') {
            return Err(StreamError::TruncatedFrame { bytes: read });
        }

        trace!(bytes = read, "frame read");
        Ok(Frame::new(Bytes::copy_from_slice(&self.buf)))
    }
}

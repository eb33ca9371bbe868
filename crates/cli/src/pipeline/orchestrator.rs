//! Ingestion loop - pulls frames, decodes them, writes gauges.

use contracts::{DecodeOutcome, MetricSink, StreamError};
use ingestion::FrameReader;
use tokio::io::AsyncRead;
use tracing::warn;

use super::IngestStats;

/// Frames between progress log lines
const PROGRESS_EVERY: u64 = 1000;

/// The ingestion half of the exporter
///
/// Owns the frame reader and a write handle to the gauge state. The
/// exporter endpoint reads the same state concurrently from its own
/// task; nothing here ever blocks on a scrape.
pub struct IngestLoop<R, S> {
    reader: FrameReader<R>,
    sink: S,
    stats: IngestStats,
}

impl<R, S> IngestLoop<R, S>
where
    R: AsyncRead + Unpin,
    S: MetricSink,
{
    /// Create a loop over `reader`, writing gauge updates into `sink`
    pub fn new(reader: FrameReader<R>, sink: S) -> Self {
        Self {
            reader,
            sink,
            stats: IngestStats::default(),
        }
    }

    /// Run until the byte source fails
    ///
    /// There is no Ok exit: a healthy source blocks in `next_frame`
    /// between sentences and this future simply stays pending. Malformed
    /// frames are logged and dropped; only stream errors end the loop.
    /// The returned stats cover everything consumed up to the failure.
    pub async fn run(mut self) -> (IngestStats, StreamError) {
        loop {
            let frame = match self.reader.next_frame().await {
                Ok(frame) => frame,
                Err(e) => return (self.stats, e),
            };

            let outcome = decoder::decode(&frame);
            self.stats.record(&outcome);

            match outcome {
                DecodeOutcome::Decoded(record) => dispatcher::apply(&record, &self.sink),
                // 未消费的语句种类静默跳过
                DecodeOutcome::UnknownKind => {}
                DecodeOutcome::Malformed(cause) => {
                    warn!(error = %cause, "Dropping malformed frame");
                }
            }

            if self.stats.frames_read % PROGRESS_EVERY == 0 {
                self.stats.log_progress();
            }
        }
    }
}

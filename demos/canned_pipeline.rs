//! Canned Pipeline Demo
//!
//! Drives a short recorded NMEA burst through framing, decoding and
//! dispatch, then prints the resulting text exposition. Runs without a
//! receiver; pass a capture file to replay your own session.
//!
//! Run with: cargo run -p canned_pipeline -- [capture.nmea]

use contracts::{DecodeOutcome, MetricSink, StreamError};
use ingestion::FrameReader;
use observability::GaugeStore;
use tokio::io::AsyncRead;

const CANNED_SESSION: &[u8] = b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47\r\n\
                                $GPGSA,A,3,04,05,09,12,24,25,29,,,,,,1.2,0.9,0.8*31\r\n\
                                $GPGSV,2,1,08,01,40,083,46,02,17,308,41,12,07,344,39,14,22,228,45*75\r\n\
                                $GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A\r\n\
                                $GPGLL,4916.45,N,12311.12,W,225444,A*31\r\n";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Canned Pipeline Demo");

    // ==== Stage 1: Gauge state ====
    let store = GaugeStore::new();
    dispatcher::register_gauges(&store);

    // ==== Stage 2: Replay the byte source ====
    let (decoded, err) = if let Some(path) = std::env::args().nth(1) {
        tracing::info!(path = %path, "Replaying capture file");
        let file = tokio::fs::File::open(&path).await?;
        drive(file, &store).await
    } else {
        tracing::info!("Replaying built-in canned session");
        drive(CANNED_SESSION, &store).await
    };

    match err {
        StreamError::Exhausted => tracing::info!(decoded, "Session replayed"),
        other => tracing::warn!(error = %other, decoded, "Session ended early"),
    }

    // ==== Stage 3: Render the exposition ====
    let text = observability::render(
        &store.snapshot(),
        dispatcher::gauges::NAMESPACE,
        &dispatcher::gauges::CATALOG,
    );
    println!("{text}");

    Ok(())
}

/// Pump frames from `source` until the stream ends
async fn drive<R: AsyncRead + Unpin>(source: R, store: &GaugeStore) -> (u64, StreamError) {
    let mut reader = FrameReader::new(source);
    let mut decoded = 0u64;

    loop {
        match reader.next_frame().await {
            Ok(frame) => match decoder::decode(&frame) {
                DecodeOutcome::Decoded(record) => {
                    decoded += 1;
                    tracing::debug!(kind = %record.kind(), "Record dispatched");
                    dispatcher::apply(&record, store);
                }
                DecodeOutcome::UnknownKind => {}
                DecodeOutcome::Malformed(cause) => {
                    tracing::warn!(error = %cause, "Dropping malformed frame");
                }
            },
            Err(e) => return (decoded, e),
        }
    }
}

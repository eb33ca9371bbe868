//! Ingestion statistics.

use contracts::{DecodeOutcome, SentenceKind};
use tracing::info;

/// Counters accumulated over the life of the ingestion loop
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestStats {
    /// Total frames pulled from the byte source
    pub frames_read: u64,

    /// Decoded GGA sentences (altitude)
    pub fix_records: u64,

    /// Decoded GSA sentences (satellites / DOP)
    pub satellite_records: u64,

    /// Decoded RMC sentences (position / velocity)
    pub position_records: u64,

    /// Frames carrying a sentence kind the exporter does not consume
    pub unknown_kinds: u64,

    /// Frames dropped because they failed to decode
    pub malformed_frames: u64,
}

impl IngestStats {
    /// Account for one decode outcome
    pub fn record(&mut self, outcome: &DecodeOutcome) {
        self.frames_read += 1;

        match outcome {
            DecodeOutcome::Decoded(record) => match record.kind() {
                SentenceKind::Gga => self.fix_records += 1,
                SentenceKind::Gsa => self.satellite_records += 1,
                SentenceKind::Rmc => self.position_records += 1,
            },
            DecodeOutcome::UnknownKind => self.unknown_kinds += 1,
            DecodeOutcome::Malformed(_) => self.malformed_frames += 1,
        }
    }

    /// Total frames that produced a record
    pub fn decoded(&self) -> u64 {
        self.fix_records + self.satellite_records + self.position_records
    }

    /// Periodic progress line
    pub fn log_progress(&self) {
        info!(
            frames_read = self.frames_read,
            decoded = self.decoded(),
            unknown = self.unknown_kinds,
            malformed = self.malformed_frames,
            "Ingestion progress"
        );
    }

    /// Final accounting, emitted once when the loop halts
    pub fn log_summary(&self) {
        info!(
            frames_read = self.frames_read,
            fix_records = self.fix_records,
            satellite_records = self.satellite_records,
            position_records = self.position_records,
            unknown_kinds = self.unknown_kinds,
            malformed_frames = self.malformed_frames,
            "Ingestion loop finished"
        );
    }
}

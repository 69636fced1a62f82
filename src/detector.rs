//! Detection engine - translate an input source into a [`DetectionResult`].
//!
//! Reads a bounded window of leading bytes, walks the catalog in descending
//! priority order, and returns the first signature whose primary and
//! secondary tests all pass. No best-match search: priority order *is* the
//! disambiguation.
//!
//! # Design
//!
//! - **Bounded window**: caller limit or the process default (4096), raised
//!   to the index's `max_bytes_needed` so no signature is starved
//! - **Side-effect free**: seekable streams are restored to their original
//!   position on every exit path
//! - **Unknown is a value**: empty input, truncated reads and unmatched
//!   buffers all yield the canonical unknown result, never an error
//! - **Cancellation**: the async variants suspend only at the read; dropping
//!   the future there aborts before any matching work happens

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeek, AsyncSeekExt};

use crate::category::Category;
use crate::config::default_read_limit;
use crate::error::DetectError;
use crate::index::SignatureIndex;
use crate::matcher;
use crate::signature::Signature;

/// MIME type reported when nothing matches.
pub const GENERIC_BINARY: &str = "application/octet-stream";

/// Outcome of one detection attempt. Immutable; carries copies of catalog
/// data only, so it is `'static` and freely cloneable.
#[derive(Debug, Clone, Serialize)]
pub struct DetectionResult {
    pub is_detected: bool,
    pub mime_type: &'static str,
    pub category: Category,
    /// Canonical extension of the matched format, absent when undetected.
    pub extension: Option<&'static str>,
    pub alternative_extensions: &'static [&'static str],
    pub description: &'static str,
    /// Heuristic 0-100 specificity score. Not a calibrated probability.
    pub confidence: u8,
    /// The matched catalog entry, absent when undetected.
    #[serde(skip)]
    pub signature: Option<Signature>,
}

impl DetectionResult {
    /// The canonical undetected result: generic binary MIME type, unknown
    /// category, confidence 0.
    pub const fn unknown() -> Self {
        Self {
            is_detected: false,
            mime_type: GENERIC_BINARY,
            category: Category::UNKNOWN,
            extension: None,
            alternative_extensions: &[],
            description: "unknown binary data",
            confidence: 0,
            signature: None,
        }
    }

    fn matched(sig: Signature) -> Self {
        Self {
            is_detected: true,
            mime_type: sig.mime_type,
            category: sig.category,
            extension: Some(sig.extension),
            alternative_extensions: sig.alternative_extensions,
            description: sig.description,
            confidence: confidence_for(&sig),
            signature: Some(sig),
        }
    }
}

/// Heuristic specificity score for a matched signature.
///
/// Fixed bonuses summed and capped at 100; consumers depend on the exact
/// thresholds, so the formula is frozen.
fn confidence_for(sig: &Signature) -> u8 {
    let mut score = 50usize;
    score += (sig.magic.len() * 5).min(30);
    score += sig.checks.len() * 10;
    if sig.offset > 0 {
        score += 5;
    }
    if sig.priority > 50 {
        score += 5;
    }
    score.min(100) as u8
}

/// The detection engine. Borrows an index; stateless and reentrant, safe to
/// share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'a> {
    index: &'a SignatureIndex,
}

impl Default for Detector<'static> {
    /// Detector over the process-wide built-in catalog.
    fn default() -> Self {
        Detector::new(SignatureIndex::global())
    }
}

impl<'a> Detector<'a> {
    pub fn new(index: &'a SignatureIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &'a SignatureIndex {
        self.index
    }

    /// Detect from an in-memory buffer. Pure and infallible: an empty or
    /// unrecognized buffer yields the unknown result.
    pub fn detect(&self, bytes: &[u8]) -> DetectionResult {
        if bytes.is_empty() {
            return DetectionResult::unknown();
        }
        for sig in self.index.ordered() {
            if matcher::matches(sig, bytes) {
                let result = DetectionResult::matched(*sig);
                tracing::debug!(
                    mime_type = sig.mime_type,
                    priority = sig.priority,
                    confidence = result.confidence,
                    "Signature matched"
                );
                return result;
            }
        }
        tracing::debug!(len = bytes.len(), "No signature matched");
        DetectionResult::unknown()
    }

    /// Detect from a seekable reader, restoring its position on every exit
    /// path. `limit` overrides the process-wide default read limit; either
    /// is raised to the index's `max_bytes_needed`.
    pub fn detect_reader<R>(
        &self,
        reader: &mut R,
        limit: Option<usize>,
    ) -> Result<DetectionResult, DetectError>
    where
        R: Read + Seek,
    {
        let limit = self.effective_limit(limit);
        let start = reader.stream_position().map_err(DetectError::Read)?;

        let mut buf = Vec::new();
        let read = (&mut *reader).take(limit as u64).read_to_end(&mut buf);
        // Restore before inspecting the read outcome so a failed read still
        // leaves the cursor where it was.
        let restore = reader.seek(SeekFrom::Start(start));

        read.map_err(DetectError::Read)?;
        restore.map_err(DetectError::Restore)?;
        Ok(self.detect(&buf))
    }

    /// Async counterpart of [`detect_reader`](Self::detect_reader) with
    /// identical semantics. The awaited read is the cooperative cancellation
    /// point: dropping the future there aborts before any matching.
    pub async fn detect_reader_async<R>(
        &self,
        reader: &mut R,
        limit: Option<usize>,
    ) -> Result<DetectionResult, DetectError>
    where
        R: AsyncRead + AsyncSeek + Unpin,
    {
        let limit = self.effective_limit(limit);
        let start = reader.stream_position().await.map_err(DetectError::Read)?;

        let mut buf = Vec::new();
        let read = (&mut *reader)
            .take(limit as u64)
            .read_to_end(&mut buf)
            .await;
        let restore = reader.seek(SeekFrom::Start(start)).await;

        read.map_err(DetectError::Read)?;
        restore.map_err(DetectError::Restore)?;
        Ok(self.detect(&buf))
    }

    /// Detect from a file. Opens read-only with shared access, delegates to
    /// the reader variant, closes on return.
    pub fn detect_file(
        &self,
        path: impl AsRef<Path>,
        limit: Option<usize>,
    ) -> Result<DetectionResult, DetectError> {
        let path = path.as_ref();
        let mut file = std::fs::File::open(path).map_err(|source| DetectError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        self.detect_reader(&mut file, limit)
    }

    /// Async counterpart of [`detect_file`](Self::detect_file).
    pub async fn detect_file_async(
        &self,
        path: impl AsRef<Path>,
        limit: Option<usize>,
    ) -> Result<DetectionResult, DetectError> {
        let path = path.as_ref();
        let mut file = tokio::fs::File::open(path)
            .await
            .map_err(|source| DetectError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        self.detect_reader_async(&mut file, limit).await
    }

    fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or_else(default_read_limit)
            .max(self.index.max_bytes_needed())
    }
}

/// Detect from a buffer using the process-wide catalog.
pub fn detect(bytes: &[u8]) -> DetectionResult {
    Detector::default().detect(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn find(mime: &str) -> Signature {
        **SignatureIndex::global()
            .signatures_for_mime_type(mime)
            .first()
            .expect("cataloged")
    }

    #[test]
    fn empty_buffer_is_unknown() {
        let result = detect(&[]);
        assert!(!result.is_detected);
        assert_eq!(result.mime_type, GENERIC_BINARY);
        assert_eq!(result.category, Category::UNKNOWN);
        assert_eq!(result.confidence, 0);
        assert!(result.signature.is_none());
    }

    #[test]
    fn confidence_formula_is_exact() {
        // PDF: 50 + min(5*5,30)=25 + 0 checks + offset 0 + priority 60 -> 80
        assert_eq!(confidence_for(&find("application/pdf")), 80);
        // JSON: 50 + 5, nothing else -> 55
        assert_eq!(confidence_for(&find("application/json")), 55);
        // SQLite: 50 + capped 30 + priority 90 -> 85
        assert_eq!(confidence_for(&find("application/vnd.sqlite3")), 85);
        // DOCX: 50 + 20 + one check (10) + priority 60 -> 85
        let docx = find("application/vnd.openxmlformats-officedocument.wordprocessingml.document");
        assert_eq!(confidence_for(&docx), 85);
    }

    #[test]
    fn confidence_never_exceeds_100() {
        for sig in SignatureIndex::global().ordered() {
            let c = confidence_for(sig);
            assert!((1..=100).contains(&(c as usize)), "{}: {c}", sig.description);
        }
    }

    #[test]
    fn reader_position_is_restored() {
        let mut data = b"%PDF-1.7 trailing".to_vec();
        data.resize(8192, 0);
        let mut cursor = Cursor::new(data);
        cursor.set_position(3);

        let detector = Detector::default();
        let result = detector.detect_reader(&mut cursor, None).unwrap();
        assert_eq!(cursor.position(), 3);
        // Window starts at the current position, not at zero.
        assert!(!result.is_detected || result.mime_type != "application/pdf");

        cursor.set_position(0);
        let result = detector.detect_reader(&mut cursor, None).unwrap();
        assert_eq!(result.mime_type, "application/pdf");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn limit_is_raised_to_index_needs() {
        let detector = Detector::default();
        let needed = detector.index().max_bytes_needed();
        assert!(detector.effective_limit(Some(16)) >= needed);
        assert!(detector.effective_limit(None) >= needed);
    }
}

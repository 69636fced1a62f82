//! Signature data model.
//!
//! A [`Signature`] describes one recognizable byte pattern for one format
//! variant: the magic bytes, where they sit, an optional per-byte mask for
//! don't-care bits, and zero or more secondary checks that disambiguate
//! container formats sharing a primary header (ZIP-based office files,
//! RIFF-based media, OLE compound files).

use crate::category::Category;

/// A secondary byte test applied after the primary magic-byte match.
///
/// Every check on a signature must pass for the signature to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionalCheck {
    /// Exact bytes at a fixed offset in the buffer.
    At {
        offset: usize,
        bytes: &'static [u8],
    },
    /// Bytes found anywhere within the first `limit` bytes of the buffer
    /// (raw substring search, not text-aware).
    Within {
        limit: usize,
        bytes: &'static [u8],
    },
}

impl AdditionalCheck {
    /// How many leading buffer bytes this check can possibly inspect.
    pub fn reach(&self) -> usize {
        match self {
            AdditionalCheck::At { offset, bytes } => offset + bytes.len(),
            AdditionalCheck::Within { limit, .. } => *limit,
        }
    }
}

/// One catalog entry for a recognizable file format variant.
///
/// All data is `&'static`: the catalog is compiled in and never mutated,
/// so results can hold plain references into it.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    /// MIME type. Not unique across signatures (format families share one).
    pub mime_type: &'static str,
    /// Category bit (a single bit for every cataloged signature).
    pub category: Category,
    /// Expected bytes at `offset`. Never empty.
    pub magic: &'static [u8],
    /// Byte position where `magic` must begin (usually 0).
    pub offset: usize,
    /// Optional per-byte mask: compare `(actual & m) == (expected & m)`.
    /// If shorter than `magic`, the unmasked tail is compared exactly;
    /// mask bytes past the end of `magic` are ignored.
    pub mask: Option<&'static [u8]>,
    /// Canonical extension, with leading dot.
    pub extension: &'static str,
    /// Alternate extensions, with leading dots.
    pub alternative_extensions: &'static [&'static str],
    /// Human-readable label.
    pub description: &'static str,
    /// Higher evaluates earlier. Negative deprioritizes generic patterns.
    pub priority: i32,
    /// Secondary tests; all must pass. Empty for most signatures.
    pub checks: &'static [AdditionalCheck],
}

impl Signature {
    /// Primary extension followed by every alternate. No deduplication at
    /// this level; the index deduplicates across signatures.
    pub fn all_extensions(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.extension).chain(self.alternative_extensions.iter().copied())
    }

    /// Furthest buffer byte this signature can inspect, primary or secondary.
    pub fn bytes_needed(&self) -> usize {
        let primary = self.offset + self.magic.len();
        self.checks
            .iter()
            .map(AdditionalCheck::reach)
            .fold(primary, usize::max)
    }
}

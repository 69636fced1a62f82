//! Signature index - derived lookups built once over the catalog.
//!
//! Holds the priority-sorted signature list plus maps by MIME type,
//! normalized extension, and category bits, and the largest byte window any
//! signature can inspect. Built exactly once per process for the built-in
//! catalog (`SignatureIndex::global`) and shared immutably; tests build
//! private indexes from custom signature lists.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::catalog::all_signatures;
use crate::category::Category;
use crate::config::MIN_INDEX_BYTES;
use crate::signature::Signature;

static GLOBAL: OnceLock<SignatureIndex> = OnceLock::new();

/// Read-only lookup structures over a signature list.
#[derive(Debug)]
pub struct SignatureIndex {
    /// Signatures in evaluation order: descending priority, catalog order
    /// breaking ties (stable sort).
    ordered: Vec<Signature>,
    by_mime: HashMap<String, Vec<usize>>,
    by_extension: HashMap<String, Vec<usize>>,
    by_category: HashMap<u16, Vec<usize>>,
    max_bytes_needed: usize,
}

impl SignatureIndex {
    /// The process-wide index over the built-in catalog. Built on first
    /// access, immutable afterward; concurrent first callers race on the
    /// build and all observe the same winner.
    pub fn global() -> &'static SignatureIndex {
        GLOBAL.get_or_init(|| SignatureIndex::from_signatures(all_signatures()))
    }

    /// Build an index from an explicit signature list.
    ///
    /// Panics on malformed signatures (empty magic): the catalog is fixed
    /// source data, so this is a startup invariant, not a recoverable
    /// condition. Mask length is unconstrained; the matcher compares only
    /// the first `min(len(mask), len(magic))` bytes masked and ignores any
    /// excess mask bytes.
    pub fn from_signatures(mut signatures: Vec<Signature>) -> Self {
        for sig in &signatures {
            assert!(!sig.magic.is_empty(), "signature '{}' has empty magic bytes", sig.description);
        }

        signatures.sort_by_key(|s| std::cmp::Reverse(s.priority));

        let mut by_mime: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_extension: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_category: HashMap<u16, Vec<usize>> = HashMap::new();
        let mut max_bytes_needed = MIN_INDEX_BYTES;

        for (i, sig) in signatures.iter().enumerate() {
            by_mime.entry(sig.mime_type.to_ascii_lowercase()).or_default().push(i);
            for ext in sig.all_extensions() {
                let key = normalize_extension(ext);
                let slot = by_extension.entry(key).or_default();
                // Dedup here: one signature may list an extension twice.
                if slot.last() != Some(&i) {
                    slot.push(i);
                }
            }
            by_category.entry(sig.category.bits()).or_default().push(i);
            max_bytes_needed = max_bytes_needed.max(sig.bytes_needed());
        }

        tracing::debug!(
            signatures = signatures.len(),
            mime_types = by_mime.len(),
            extensions = by_extension.len(),
            max_bytes_needed,
            "Signature index built"
        );

        Self {
            ordered: signatures,
            by_mime,
            by_extension,
            by_category,
            max_bytes_needed,
        }
    }

    /// Signatures in evaluation order (descending priority).
    pub fn ordered(&self) -> &[Signature] {
        &self.ordered
    }

    /// Largest byte window any signature can inspect, floored at 512.
    pub fn max_bytes_needed(&self) -> usize {
        self.max_bytes_needed
    }

    /// Signatures claiming a MIME type, case-insensitive. Empty when none.
    pub fn signatures_for_mime_type(&self, mime_type: &str) -> Vec<&Signature> {
        self.by_mime
            .get(&mime_type.to_ascii_lowercase())
            .map(|idxs| idxs.iter().map(|&i| &self.ordered[i]).collect())
            .unwrap_or_default()
    }

    /// Signatures claiming an extension; case-insensitive, leading dot
    /// optional. Empty when none.
    pub fn signatures_for_extension(&self, extension: &str) -> Vec<&Signature> {
        self.by_extension
            .get(&normalize_extension(extension))
            .map(|idxs| idxs.iter().map(|&i| &self.ordered[i]).collect())
            .unwrap_or_default()
    }

    /// Signatures in a category. Composite queries (`IMAGE | VIDEO`) that
    /// were never registered as an exact key fall back to an intersection
    /// scan. Empty when none.
    pub fn signatures_for_category(&self, category: Category) -> Vec<&Signature> {
        if let Some(idxs) = self.by_category.get(&category.bits()) {
            return idxs.iter().map(|&i| &self.ordered[i]).collect();
        }
        self.ordered
            .iter()
            .filter(|s| s.category.intersects(category))
            .collect()
    }

    /// Every known extension, deduplicated and sorted.
    pub fn all_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.by_extension.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }

    /// Every known MIME type, deduplicated and sorted.
    pub fn all_mime_types(&self) -> Vec<&str> {
        let mut mimes: Vec<&str> = self.by_mime.keys().map(String::as_str).collect();
        mimes.sort_unstable();
        mimes
    }
}

impl Default for SignatureIndex {
    fn default() -> Self {
        SignatureIndex::from_signatures(all_signatures())
    }
}

/// Lower-case, leading dot enforced: `PDF` and `.pdf` hit the same bucket.
fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim_start_matches('.');
    format!(".{}", trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn priority_order_is_descending_and_stable() {
        let idx = SignatureIndex::global();
        let priorities: Vec<i32> = idx.ordered().iter().map(|s| s.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort_by_key(|&p| std::cmp::Reverse(p));
        assert_eq!(priorities, sorted);
    }

    #[test]
    fn mime_lookup_is_case_insensitive() {
        let idx = SignatureIndex::global();
        assert!(!idx.signatures_for_mime_type("Application/PDF").is_empty());
        assert!(idx.signatures_for_mime_type("application/no-such-type").is_empty());
    }

    #[test]
    fn extension_lookup_normalizes_dot_and_case() {
        let idx = SignatureIndex::global();
        let with_dot = idx.signatures_for_extension(".png");
        let bare_upper = idx.signatures_for_extension("PNG");
        assert!(!with_dot.is_empty());
        assert_eq!(with_dot.len(), bare_upper.len());
    }

    #[test]
    fn composite_category_query_falls_back_to_scan() {
        let idx = SignatureIndex::global();
        let media = idx.signatures_for_category(Category::IMAGE | Category::VIDEO);
        let images = idx.signatures_for_category(Category::IMAGE);
        let videos = idx.signatures_for_category(Category::VIDEO);
        assert_eq!(media.len(), images.len() + videos.len());
        assert!(idx.signatures_for_category(Category::UNKNOWN).is_empty());
    }

    #[test]
    fn max_bytes_is_floored() {
        let idx = SignatureIndex::from_signatures(vec![Signature {
            mime_type: "image/png",
            category: Category::IMAGE,
            magic: &[0x89, 0x50],
            offset: 0,
            mask: None,
            extension: ".png",
            alternative_extensions: &[],
            description: "tiny",
            priority: 0,
            checks: &[],
        }]);
        assert_eq!(idx.max_bytes_needed(), MIN_INDEX_BYTES);
    }

    #[test]
    fn max_bytes_tracks_free_search_limits() {
        let idx = SignatureIndex::global();
        // The OOXML free-search checks reach 2000 bytes into the buffer.
        assert!(idx.max_bytes_needed() >= 2000);
    }

    #[test]
    #[should_panic(expected = "empty magic")]
    fn empty_magic_is_fatal_at_build() {
        SignatureIndex::from_signatures(vec![Signature {
            mime_type: "application/x-broken",
            category: Category::ARCHIVE,
            magic: &[],
            offset: 0,
            mask: None,
            extension: ".bad",
            alternative_extensions: &[],
            description: "broken",
            priority: 0,
            checks: &[],
        }]);
    }

    #[test]
    fn all_extensions_are_normalized_and_sorted() {
        let idx = SignatureIndex::global();
        let exts = idx.all_extensions();
        assert!(exts.contains(&".pdf"));
        assert!(exts.windows(2).all(|w| w[0] <= w[1]));
        assert!(exts.iter().all(|e| e.starts_with('.')));
    }
}

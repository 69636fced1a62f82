//! File category bit-set.
//!
//! Each category is an independent bit so a single value can act either as
//! one file's category (a single bit in practice) or as a combined filter
//! set like `IMAGE | VIDEO` tested via bitwise AND. The same underlying type
//! covers both uses; the asymmetry is by convention, not by type.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Coarse file-format classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Category: u16 {
        const IMAGE      = 1 << 0;
        const DOCUMENT   = 1 << 1;
        const ARCHIVE    = 1 << 2;
        const AUDIO      = 1 << 3;
        const VIDEO      = 1 << 4;
        const EXECUTABLE = 1 << 5;
        const FONT       = 1 << 6;
        const TEXT       = 1 << 7;
        const DATABASE   = 1 << 8;
        /// Undetected content. Only the canonical unknown result carries it.
        const UNKNOWN    = 1 << 9;
    }
}

impl Category {
    /// Human-readable label for the lowest set bit.
    pub fn label(&self) -> &'static str {
        if self.contains(Category::IMAGE) {
            "image"
        } else if self.contains(Category::DOCUMENT) {
            "document"
        } else if self.contains(Category::ARCHIVE) {
            "archive"
        } else if self.contains(Category::AUDIO) {
            "audio"
        } else if self.contains(Category::VIDEO) {
            "video"
        } else if self.contains(Category::EXECUTABLE) {
            "executable"
        } else if self.contains(Category::FONT) {
            "font"
        } else if self.contains(Category::TEXT) {
            "text"
        } else if self.contains(Category::DATABASE) {
            "database"
        } else {
            "unknown"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_set_membership() {
        let media = Category::IMAGE | Category::VIDEO;
        assert!(media.intersects(Category::IMAGE));
        assert!(media.intersects(Category::VIDEO));
        assert!(!media.intersects(Category::AUDIO));
    }

    #[test]
    fn labels() {
        assert_eq!(Category::ARCHIVE.label(), "archive");
        assert_eq!(Category::UNKNOWN.label(), "unknown");
        assert_eq!((Category::IMAGE | Category::VIDEO).label(), "image");
    }
}

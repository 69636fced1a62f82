//! Signature matching - decide whether a byte window matches one signature.
//!
//! Primary test: bounds check, then byte-by-byte compare at the signature's
//! offset, masked where a mask byte exists. Secondary tests run only after
//! the primary passes, and all of them must succeed.
//!
//! Mask shorter than magic: the unmasked tail is compared exactly. This
//! asymmetry is load-bearing for ambiguous signatures and must not change.

use crate::signature::{AdditionalCheck, Signature};

/// Full match test: primary magic bytes plus every additional check.
pub fn matches(sig: &Signature, buf: &[u8]) -> bool {
    if !matches_primary(sig, buf) {
        return false;
    }
    sig.checks.iter().all(|check| check_passes(check, buf))
}

/// Primary magic-byte test only.
pub fn matches_primary(sig: &Signature, buf: &[u8]) -> bool {
    let end = sig.offset + sig.magic.len();
    if buf.len() < end {
        return false;
    }
    let window = &buf[sig.offset..end];
    let mask = sig.mask.unwrap_or(&[]);
    sig.magic.iter().enumerate().all(|(i, &expected)| {
        let actual = window[i];
        match mask.get(i) {
            Some(&m) => actual & m == expected & m,
            None => actual == expected,
        }
    })
}

/// One secondary test against the buffer.
pub fn check_passes(check: &AdditionalCheck, buf: &[u8]) -> bool {
    match *check {
        AdditionalCheck::At { offset, bytes } => {
            buf.len() >= offset + bytes.len() && &buf[offset..offset + bytes.len()] == bytes
        }
        AdditionalCheck::Within { limit, bytes } => {
            let window = &buf[..buf.len().min(limit)];
            !bytes.is_empty()
                && window.len() >= bytes.len()
                && window.windows(bytes.len()).any(|w| w == bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    fn sig(magic: &'static [u8], offset: usize, mask: Option<&'static [u8]>) -> Signature {
        Signature {
            mime_type: "application/x-test",
            category: Category::ARCHIVE,
            magic,
            offset,
            mask,
            extension: ".tst",
            alternative_extensions: &[],
            description: "test",
            priority: 0,
            checks: &[],
        }
    }

    #[test]
    fn exact_match_at_zero() {
        let s = sig(b"%PDF", 0, None);
        assert!(matches(&s, b"%PDF-1.7"));
        assert!(!matches(&s, b"%PDX-1.7"));
    }

    #[test]
    fn offset_requires_enough_bytes() {
        let s = sig(b"ustar\x0000", 257, None);
        assert!(!matches(&s, &[0u8; 264]), "264 bytes can never fit offset 257 + 8");
        let mut buf = vec![0u8; 265];
        buf[257..265].copy_from_slice(b"ustar\x0000");
        assert!(matches(&s, &buf));
    }

    #[test]
    fn masked_bits_are_dont_care() {
        // Frame-sync style: care about the top 11 bits only.
        let s = sig(&[0xFF, 0xE0], 0, Some(&[0xFF, 0xE0]));
        assert!(matches(&s, &[0xFF, 0xFB, 0x90]), "bits under the mask hole may vary");
        assert!(matches(&s, &[0xFF, 0xE2]));
        assert!(!matches(&s, &[0xFF, 0x1B]), "flipped care bit must fail");
        assert!(!matches(&s, &[0xFE, 0xFB]));
    }

    #[test]
    fn short_mask_falls_back_to_exact_for_tail() {
        let s = sig(&[0xAB, 0xCD], 0, Some(&[0xF0]));
        // First byte masked: only the high nibble matters.
        assert!(matches(&s, &[0xAF, 0xCD]));
        // Second byte has no mask entry: exact compare.
        assert!(!matches(&s, &[0xAB, 0xCE]));
    }

    #[test]
    fn mask_longer_than_magic_ignores_excess() {
        // Only the first min(len(mask), len(magic)) bytes are masked; mask
        // bytes past the magic have no effect.
        let s = sig(&[0xAB, 0xCD], 0, Some(&[0xF0, 0xFF, 0x00, 0x00]));
        assert!(matches(&s, &[0xAF, 0xCD]));
        assert!(!matches(&s, &[0xAB, 0xCF]));
        // The excess 0x00 mask bytes do not turn trailing buffer bytes into
        // don't-cares for anything; extra buffer content is never compared.
        assert!(matches(&s, &[0xA0, 0xCD, 0x99, 0x99]));
    }

    #[test]
    fn fixed_offset_check() {
        let check = AdditionalCheck::At {
            offset: 8,
            bytes: b"WAVE",
        };
        assert!(check_passes(&check, b"RIFF\x24\x00\x00\x00WAVEfmt "));
        assert!(!check_passes(&check, b"RIFF\x24\x00\x00\x00AVI fmt "));
        assert!(!check_passes(&check, b"RIFF\x24\x00"), "truncated buffer fails the check");
    }

    #[test]
    fn free_search_respects_limit() {
        let check = AdditionalCheck::Within {
            limit: 16,
            bytes: b"word/",
        };
        assert!(check_passes(&check, b"PK\x03\x04....word/doc"));
        let mut late = vec![b'.'; 32];
        late.extend_from_slice(b"word/");
        assert!(!check_passes(&check, &late), "marker beyond the limit does not count");
    }

    #[test]
    fn all_checks_must_pass() {
        static CHECKS: [AdditionalCheck; 2] = [
            AdditionalCheck::At {
                offset: 4,
                bytes: b"AA",
            },
            AdditionalCheck::Within {
                limit: 32,
                bytes: b"BB",
            },
        ];
        let mut s = sig(b"HD", 0, None);
        s.checks = &CHECKS;
        assert!(matches(&s, b"HD..AA..BB"));
        assert!(!matches(&s, b"HD..AA...."), "one failing check fails the signature");
    }
}

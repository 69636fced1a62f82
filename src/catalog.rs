//! Static signature catalog.
//!
//! Pure data: per-category tables concatenated by [`all_signatures`] at index
//! build time. Load order across categories is irrelevant because the index
//! stable-sorts by descending priority; among equal priorities the
//! concatenation order here is the tie-break (first registered wins).
//!
//! Priority conventions:
//! - 60+  container formats disambiguated by additional checks, and long
//!   unambiguous magics
//! - 40-50 ordinary format headers
//! - 10-30 short or shared headers
//! - negative: generic patterns that should only win by elimination
//!   (bare ZIP, MP3 frame sync, bare `{` for JSON)

use crate::category::Category;
use crate::signature::{AdditionalCheck, Signature};

/// All cataloged signatures, categories concatenated. The index sorts these
/// by priority; the order within this function is only the tie-break.
pub fn all_signatures() -> Vec<Signature> {
    let mut sigs = Vec::new();
    sigs.extend_from_slice(IMAGE);
    sigs.extend_from_slice(DOCUMENT);
    sigs.extend_from_slice(ARCHIVE);
    sigs.extend_from_slice(AUDIO);
    sigs.extend_from_slice(VIDEO);
    sigs.extend_from_slice(EXECUTABLE);
    sigs.extend_from_slice(FONT);
    sigs.extend_from_slice(TEXT);
    sigs.extend_from_slice(DATABASE);
    sigs
}

pub const IMAGE: &[Signature] = &[
    Signature {
        mime_type: "image/png",
        category: Category::IMAGE,
        magic: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
        offset: 0,
        mask: None,
        extension: ".png",
        alternative_extensions: &[],
        description: "PNG image",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "image/jpeg",
        category: Category::IMAGE,
        magic: &[0xFF, 0xD8, 0xFF],
        offset: 0,
        mask: None,
        extension: ".jpg",
        alternative_extensions: &[".jpeg", ".jfif"],
        description: "JPEG image",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "image/gif",
        category: Category::IMAGE,
        magic: b"GIF87a",
        offset: 0,
        mask: None,
        extension: ".gif",
        alternative_extensions: &[],
        description: "GIF image (87a)",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "image/gif",
        category: Category::IMAGE,
        magic: b"GIF89a",
        offset: 0,
        mask: None,
        extension: ".gif",
        alternative_extensions: &[],
        description: "GIF image (89a)",
        priority: 50,
        checks: &[],
    },
    // Canon CR2 extends the TIFF-LE header, must outrank it
    Signature {
        mime_type: "image/x-canon-cr2",
        category: Category::IMAGE,
        magic: &[0x49, 0x49, 0x2A, 0x00, 0x10, 0x00, 0x00, 0x00, 0x43, 0x52],
        offset: 0,
        mask: None,
        extension: ".cr2",
        alternative_extensions: &[],
        description: "Canon RAW v2",
        priority: 70,
        checks: &[],
    },
    Signature {
        mime_type: "image/tiff",
        category: Category::IMAGE,
        magic: &[0x49, 0x49, 0x2A, 0x00],
        offset: 0,
        mask: None,
        extension: ".tiff",
        alternative_extensions: &[".tif"],
        description: "TIFF image (little-endian)",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "image/tiff",
        category: Category::IMAGE,
        magic: &[0x4D, 0x4D, 0x00, 0x2A],
        offset: 0,
        mask: None,
        extension: ".tiff",
        alternative_extensions: &[".tif"],
        description: "TIFF image (big-endian)",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "image/webp",
        category: Category::IMAGE,
        magic: b"RIFF",
        offset: 0,
        mask: None,
        extension: ".webp",
        alternative_extensions: &[],
        description: "WebP image",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 8,
            bytes: b"WEBP",
        }],
    },
    Signature {
        mime_type: "image/heic",
        category: Category::IMAGE,
        magic: b"ftypheic",
        offset: 4,
        mask: None,
        extension: ".heic",
        alternative_extensions: &[".heif"],
        description: "HEIC image",
        priority: 60,
        checks: &[],
    },
    Signature {
        mime_type: "image/bmp",
        category: Category::IMAGE,
        magic: &[0x42, 0x4D],
        offset: 0,
        mask: None,
        extension: ".bmp",
        alternative_extensions: &[],
        description: "Windows bitmap",
        priority: 20,
        checks: &[],
    },
    Signature {
        mime_type: "image/x-icon",
        category: Category::IMAGE,
        magic: &[0x00, 0x00, 0x01, 0x00],
        offset: 0,
        mask: None,
        extension: ".ico",
        alternative_extensions: &[],
        description: "Windows icon",
        priority: 10,
        checks: &[],
    },
    Signature {
        mime_type: "image/vnd.adobe.photoshop",
        category: Category::IMAGE,
        magic: b"8BPS",
        offset: 0,
        mask: None,
        extension: ".psd",
        alternative_extensions: &[],
        description: "Photoshop document",
        priority: 40,
        checks: &[],
    },
];

pub const DOCUMENT: &[Signature] = &[
    Signature {
        mime_type: "application/pdf",
        category: Category::DOCUMENT,
        magic: b"%PDF-",
        offset: 0,
        mask: None,
        extension: ".pdf",
        alternative_extensions: &[],
        description: "PDF document",
        priority: 60,
        checks: &[],
    },
    // ZIP-based office formats: mimetype entry first, inner directory second.
    // All must outrank the generic ZIP signature.
    Signature {
        mime_type: "application/epub+zip",
        category: Category::DOCUMENT,
        magic: &[0x50, 0x4B, 0x03, 0x04],
        offset: 0,
        mask: None,
        extension: ".epub",
        alternative_extensions: &[],
        description: "EPUB ebook",
        priority: 65,
        checks: &[AdditionalCheck::Within {
            limit: 100,
            bytes: b"mimetypeapplication/epub+zip",
        }],
    },
    Signature {
        mime_type: "application/vnd.oasis.opendocument.text",
        category: Category::DOCUMENT,
        magic: &[0x50, 0x4B, 0x03, 0x04],
        offset: 0,
        mask: None,
        extension: ".odt",
        alternative_extensions: &[],
        description: "OpenDocument text",
        priority: 65,
        checks: &[AdditionalCheck::Within {
            limit: 100,
            bytes: b"mimetypeapplication/vnd.oasis.opendocument.text",
        }],
    },
    Signature {
        mime_type: "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        category: Category::DOCUMENT,
        magic: &[0x50, 0x4B, 0x03, 0x04],
        offset: 0,
        mask: None,
        extension: ".docx",
        alternative_extensions: &[],
        description: "Word document (OOXML)",
        priority: 60,
        checks: &[AdditionalCheck::Within {
            limit: 2000,
            bytes: b"word/",
        }],
    },
    Signature {
        mime_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        category: Category::DOCUMENT,
        magic: &[0x50, 0x4B, 0x03, 0x04],
        offset: 0,
        mask: None,
        extension: ".xlsx",
        alternative_extensions: &[],
        description: "Excel workbook (OOXML)",
        priority: 60,
        checks: &[AdditionalCheck::Within {
            limit: 2000,
            bytes: b"xl/",
        }],
    },
    Signature {
        mime_type: "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        category: Category::DOCUMENT,
        magic: &[0x50, 0x4B, 0x03, 0x04],
        offset: 0,
        mask: None,
        extension: ".pptx",
        alternative_extensions: &[],
        description: "PowerPoint presentation (OOXML)",
        priority: 60,
        checks: &[AdditionalCheck::Within {
            limit: 2000,
            bytes: b"ppt/",
        }],
    },
    // OLE compound file sub-formats: the FIB/BOF marker sits at the first
    // sector boundary (512) in practice.
    Signature {
        mime_type: "application/msword",
        category: Category::DOCUMENT,
        magic: &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
        offset: 0,
        mask: None,
        extension: ".doc",
        alternative_extensions: &[],
        description: "Word document (OLE)",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 512,
            bytes: &[0xEC, 0xA5, 0xC1, 0x00],
        }],
    },
    Signature {
        mime_type: "application/vnd.ms-excel",
        category: Category::DOCUMENT,
        magic: &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
        offset: 0,
        mask: None,
        extension: ".xls",
        alternative_extensions: &[],
        description: "Excel workbook (OLE)",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 512,
            bytes: &[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00],
        }],
    },
    Signature {
        mime_type: "application/x-ole-storage",
        category: Category::DOCUMENT,
        magic: &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1],
        offset: 0,
        mask: None,
        extension: ".doc",
        alternative_extensions: &[".xls", ".ppt", ".msi"],
        description: "OLE compound file (DOC/XLS/PPT family)",
        priority: 30,
        checks: &[],
    },
    Signature {
        mime_type: "application/rtf",
        category: Category::DOCUMENT,
        magic: b"{\\rtf",
        offset: 0,
        mask: None,
        extension: ".rtf",
        alternative_extensions: &[],
        description: "Rich Text Format",
        priority: 50,
        checks: &[],
    },
];

pub const ARCHIVE: &[Signature] = &[
    Signature {
        mime_type: "application/vnd.rar",
        category: Category::ARCHIVE,
        magic: &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x01, 0x00],
        offset: 0,
        mask: None,
        extension: ".rar",
        alternative_extensions: &[],
        description: "RAR archive (v5)",
        priority: 55,
        checks: &[],
    },
    Signature {
        mime_type: "application/vnd.rar",
        category: Category::ARCHIVE,
        magic: &[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00],
        offset: 0,
        mask: None,
        extension: ".rar",
        alternative_extensions: &[],
        description: "RAR archive (v4)",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-7z-compressed",
        category: Category::ARCHIVE,
        magic: &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C],
        offset: 0,
        mask: None,
        extension: ".7z",
        alternative_extensions: &[],
        description: "7-Zip archive",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/gzip",
        category: Category::ARCHIVE,
        magic: &[0x1F, 0x8B],
        offset: 0,
        mask: None,
        extension: ".gz",
        alternative_extensions: &[".tgz"],
        description: "Gzip compressed data",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-xz",
        category: Category::ARCHIVE,
        magic: &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00],
        offset: 0,
        mask: None,
        extension: ".xz",
        alternative_extensions: &[],
        description: "XZ compressed data",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-bzip2",
        category: Category::ARCHIVE,
        magic: b"BZh",
        offset: 0,
        mask: None,
        extension: ".bz2",
        alternative_extensions: &[],
        description: "Bzip2 compressed data",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "application/zstd",
        category: Category::ARCHIVE,
        magic: &[0x28, 0xB5, 0x2F, 0xFD],
        offset: 0,
        mask: None,
        extension: ".zst",
        alternative_extensions: &[],
        description: "Zstandard compressed data",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-lz4",
        category: Category::ARCHIVE,
        magic: &[0x04, 0x22, 0x4D, 0x18],
        offset: 0,
        mask: None,
        extension: ".lz4",
        alternative_extensions: &[],
        description: "LZ4 frame",
        priority: 50,
        checks: &[],
    },
    // ustar magic + version at the 257-byte header field: "ustar\0" "00"
    // for POSIX, "ustar " " \0" for old GNU.
    Signature {
        mime_type: "application/x-tar",
        category: Category::ARCHIVE,
        magic: b"ustar\x0000",
        offset: 257,
        mask: None,
        extension: ".tar",
        alternative_extensions: &[],
        description: "POSIX tar archive",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-tar",
        category: Category::ARCHIVE,
        magic: b"ustar  \x00",
        offset: 257,
        mask: None,
        extension: ".tar",
        alternative_extensions: &[],
        description: "GNU tar archive",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/vnd.ms-cab-compressed",
        category: Category::ARCHIVE,
        magic: b"MSCF",
        offset: 0,
        mask: None,
        extension: ".cab",
        alternative_extensions: &[],
        description: "Microsoft cabinet",
        priority: 40,
        checks: &[],
    },
    // Generic ZIP only wins when no ZIP-based container signature claims
    // the buffer first.
    Signature {
        mime_type: "application/zip",
        category: Category::ARCHIVE,
        magic: &[0x50, 0x4B, 0x03, 0x04],
        offset: 0,
        mask: None,
        extension: ".zip",
        alternative_extensions: &[],
        description: "ZIP archive",
        priority: -10,
        checks: &[],
    },
    Signature {
        mime_type: "application/zip",
        category: Category::ARCHIVE,
        magic: &[0x50, 0x4B, 0x05, 0x06],
        offset: 0,
        mask: None,
        extension: ".zip",
        alternative_extensions: &[],
        description: "ZIP archive (empty)",
        priority: -10,
        checks: &[],
    },
];

pub const AUDIO: &[Signature] = &[
    Signature {
        mime_type: "audio/mpeg",
        category: Category::AUDIO,
        magic: b"ID3",
        offset: 0,
        mask: None,
        extension: ".mp3",
        alternative_extensions: &[],
        description: "MP3 audio (ID3 tag)",
        priority: 40,
        checks: &[],
    },
    // Bare MPEG frame sync: 11 set bits, the rest don't-care. Far too
    // generic to outrank anything.
    Signature {
        mime_type: "audio/mpeg",
        category: Category::AUDIO,
        magic: &[0xFF, 0xE0],
        offset: 0,
        mask: Some(&[0xFF, 0xE0]),
        extension: ".mp3",
        alternative_extensions: &[],
        description: "MP3 audio (frame sync)",
        priority: -20,
        checks: &[],
    },
    Signature {
        mime_type: "audio/wav",
        category: Category::AUDIO,
        magic: b"RIFF",
        offset: 0,
        mask: None,
        extension: ".wav",
        alternative_extensions: &[],
        description: "WAV audio",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 8,
            bytes: b"WAVE",
        }],
    },
    Signature {
        mime_type: "audio/flac",
        category: Category::AUDIO,
        magic: b"fLaC",
        offset: 0,
        mask: None,
        extension: ".flac",
        alternative_extensions: &[],
        description: "FLAC audio",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "audio/opus",
        category: Category::AUDIO,
        magic: b"OggS",
        offset: 0,
        mask: None,
        extension: ".opus",
        alternative_extensions: &[],
        description: "Opus audio in Ogg",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 28,
            bytes: b"OpusHead",
        }],
    },
    Signature {
        mime_type: "audio/ogg",
        category: Category::AUDIO,
        magic: b"OggS",
        offset: 0,
        mask: None,
        extension: ".ogg",
        alternative_extensions: &[".oga"],
        description: "Ogg container",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "audio/mp4",
        category: Category::AUDIO,
        magic: b"ftypM4A ",
        offset: 4,
        mask: None,
        extension: ".m4a",
        alternative_extensions: &[".m4b"],
        description: "MPEG-4 audio",
        priority: 60,
        checks: &[],
    },
    Signature {
        mime_type: "audio/midi",
        category: Category::AUDIO,
        magic: b"MThd",
        offset: 0,
        mask: None,
        extension: ".mid",
        alternative_extensions: &[".midi"],
        description: "Standard MIDI",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "audio/aiff",
        category: Category::AUDIO,
        magic: b"FORM",
        offset: 0,
        mask: None,
        extension: ".aiff",
        alternative_extensions: &[".aif"],
        description: "AIFF audio",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 8,
            bytes: b"AIFF",
        }],
    },
];

pub const VIDEO: &[Signature] = &[
    Signature {
        mime_type: "video/quicktime",
        category: Category::VIDEO,
        magic: b"ftypqt  ",
        offset: 4,
        mask: None,
        extension: ".mov",
        alternative_extensions: &[],
        description: "QuickTime movie",
        priority: 60,
        checks: &[],
    },
    // Generic ftyp box: any ISO base-media brand not claimed above.
    Signature {
        mime_type: "video/mp4",
        category: Category::VIDEO,
        magic: b"ftyp",
        offset: 4,
        mask: None,
        extension: ".mp4",
        alternative_extensions: &[".m4v"],
        description: "MPEG-4 container",
        priority: 30,
        checks: &[],
    },
    Signature {
        mime_type: "video/webm",
        category: Category::VIDEO,
        magic: &[0x1A, 0x45, 0xDF, 0xA3],
        offset: 0,
        mask: None,
        extension: ".webm",
        alternative_extensions: &[],
        description: "WebM video",
        priority: 60,
        checks: &[AdditionalCheck::Within {
            limit: 64,
            bytes: b"webm",
        }],
    },
    Signature {
        mime_type: "video/x-matroska",
        category: Category::VIDEO,
        magic: &[0x1A, 0x45, 0xDF, 0xA3],
        offset: 0,
        mask: None,
        extension: ".mkv",
        alternative_extensions: &[],
        description: "Matroska video",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "video/x-msvideo",
        category: Category::VIDEO,
        magic: b"RIFF",
        offset: 0,
        mask: None,
        extension: ".avi",
        alternative_extensions: &[],
        description: "AVI video",
        priority: 60,
        checks: &[AdditionalCheck::At {
            offset: 8,
            bytes: b"AVI ",
        }],
    },
    Signature {
        mime_type: "video/x-flv",
        category: Category::VIDEO,
        magic: b"FLV\x01",
        offset: 0,
        mask: None,
        extension: ".flv",
        alternative_extensions: &[],
        description: "Flash video",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "video/mpeg",
        category: Category::VIDEO,
        magic: &[0x00, 0x00, 0x01, 0xBA],
        offset: 0,
        mask: None,
        extension: ".mpg",
        alternative_extensions: &[".mpeg"],
        description: "MPEG program stream",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "video/x-ms-asf",
        category: Category::VIDEO,
        magic: &[0x30, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11],
        offset: 0,
        mask: None,
        extension: ".wmv",
        alternative_extensions: &[".asf", ".wma"],
        description: "ASF container (WMV/WMA)",
        priority: 50,
        checks: &[],
    },
];

pub const EXECUTABLE: &[Signature] = &[
    Signature {
        mime_type: "application/x-executable",
        category: Category::EXECUTABLE,
        magic: &[0x7F, 0x45, 0x4C, 0x46],
        offset: 0,
        mask: None,
        extension: ".elf",
        alternative_extensions: &[".so", ".o"],
        description: "ELF executable",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-msdownload",
        category: Category::EXECUTABLE,
        magic: &[0x4D, 0x5A],
        offset: 0,
        mask: None,
        extension: ".exe",
        alternative_extensions: &[".dll"],
        description: "PE executable",
        priority: 10,
        checks: &[],
    },
    // CAFEBABE is shared with Mach-O fat binaries; class files are far more
    // common, so they win the tie by priority.
    Signature {
        mime_type: "application/java-vm",
        category: Category::EXECUTABLE,
        magic: &[0xCA, 0xFE, 0xBA, 0xBE],
        offset: 0,
        mask: None,
        extension: ".class",
        alternative_extensions: &[],
        description: "Java class file",
        priority: 40,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-mach-binary",
        category: Category::EXECUTABLE,
        magic: &[0xCA, 0xFE, 0xBA, 0xBE],
        offset: 0,
        mask: None,
        extension: ".macho",
        alternative_extensions: &[],
        description: "Mach-O universal binary",
        priority: 30,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-mach-binary",
        category: Category::EXECUTABLE,
        magic: &[0xFE, 0xED, 0xFA, 0xCF],
        offset: 0,
        mask: None,
        extension: ".macho",
        alternative_extensions: &[],
        description: "Mach-O 64-bit",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/x-mach-binary",
        category: Category::EXECUTABLE,
        magic: &[0xFE, 0xED, 0xFA, 0xCE],
        offset: 0,
        mask: None,
        extension: ".macho",
        alternative_extensions: &[],
        description: "Mach-O 32-bit",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "application/wasm",
        category: Category::EXECUTABLE,
        magic: &[0x00, 0x61, 0x73, 0x6D],
        offset: 0,
        mask: None,
        extension: ".wasm",
        alternative_extensions: &[],
        description: "WebAssembly module",
        priority: 60,
        checks: &[],
    },
    Signature {
        mime_type: "application/vnd.android.dex",
        category: Category::EXECUTABLE,
        magic: b"dex\n",
        offset: 0,
        mask: None,
        extension: ".dex",
        alternative_extensions: &[],
        description: "Dalvik executable",
        priority: 50,
        checks: &[],
    },
];

pub const FONT: &[Signature] = &[
    Signature {
        mime_type: "font/ttf",
        category: Category::FONT,
        magic: &[0x00, 0x01, 0x00, 0x00, 0x00],
        offset: 0,
        mask: None,
        extension: ".ttf",
        alternative_extensions: &[],
        description: "TrueType font",
        priority: 20,
        checks: &[],
    },
    Signature {
        mime_type: "font/otf",
        category: Category::FONT,
        magic: b"OTTO",
        offset: 0,
        mask: None,
        extension: ".otf",
        alternative_extensions: &[],
        description: "OpenType font",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "font/woff",
        category: Category::FONT,
        magic: b"wOFF",
        offset: 0,
        mask: None,
        extension: ".woff",
        alternative_extensions: &[],
        description: "WOFF font",
        priority: 50,
        checks: &[],
    },
    Signature {
        mime_type: "font/woff2",
        category: Category::FONT,
        magic: b"wOF2",
        offset: 0,
        mask: None,
        extension: ".woff2",
        alternative_extensions: &[],
        description: "WOFF2 font",
        priority: 50,
        checks: &[],
    },
];

pub const TEXT: &[Signature] = &[
    Signature {
        mime_type: "text/html",
        category: Category::TEXT,
        magic: b"<!DOCTYPE html",
        offset: 0,
        mask: None,
        extension: ".html",
        alternative_extensions: &[".htm"],
        description: "HTML document",
        priority: 10,
        checks: &[],
    },
    Signature {
        mime_type: "text/html",
        category: Category::TEXT,
        magic: b"<html",
        offset: 0,
        mask: None,
        extension: ".html",
        alternative_extensions: &[".htm"],
        description: "HTML document (bare tag)",
        priority: 5,
        checks: &[],
    },
    Signature {
        mime_type: "application/xml",
        category: Category::TEXT,
        magic: b"<?xml",
        offset: 0,
        mask: None,
        extension: ".xml",
        alternative_extensions: &[],
        description: "XML document",
        priority: 0,
        checks: &[],
    },
    Signature {
        mime_type: "text/x-shellscript",
        category: Category::TEXT,
        magic: b"#!",
        offset: 0,
        mask: None,
        extension: ".sh",
        alternative_extensions: &[],
        description: "Shebang script",
        priority: -30,
        checks: &[],
    },
    Signature {
        mime_type: "text/plain",
        category: Category::TEXT,
        magic: &[0xEF, 0xBB, 0xBF],
        offset: 0,
        mask: None,
        extension: ".txt",
        alternative_extensions: &[],
        description: "UTF-8 text with BOM",
        priority: -50,
        checks: &[],
    },
    // A lone `{` is barely a signature at all; it exists so JSON uploads
    // resolve to something when nothing else claims the bytes.
    Signature {
        mime_type: "application/json",
        category: Category::TEXT,
        magic: b"{",
        offset: 0,
        mask: None,
        extension: ".json",
        alternative_extensions: &[],
        description: "JSON document",
        priority: -100,
        checks: &[],
    },
];

pub const DATABASE: &[Signature] = &[
    Signature {
        mime_type: "application/vnd.sqlite3",
        category: Category::DATABASE,
        magic: b"SQLite format 3\x00",
        offset: 0,
        mask: None,
        extension: ".sqlite",
        alternative_extensions: &[".db", ".sqlite3"],
        description: "SQLite 3 database",
        priority: 90,
        checks: &[],
    },
];

//! Filesig Library
//!
//! Identifies the true content type of a binary blob by matching its leading
//! bytes against a static catalog of file-format signatures (magic bytes),
//! instead of trusting a file extension or a client-supplied content-type
//! header.
//!
//! # Features
//!
//! - **Masked matching**: per-byte bit masks for don't-care bits
//! - **Container disambiguation**: secondary checks tell DOCX from ZIP,
//!   WAV from AVI, DOC from XLS inside an OLE compound file
//! - **Priority ordering**: first match in descending priority wins;
//!   generic patterns carry negative priority and win only by elimination
//! - **Confidence scoring**: heuristic 0-100 specificity score per match
//! - **Side-effect free**: stream detection restores the cursor position
//!   on every exit path
//!
//! # Example
//!
//! ```
//! use filesig::detect;
//!
//! let result = detect(b"%PDF-1.7\n...");
//! assert!(result.is_detected);
//! assert_eq!(result.mime_type, "application/pdf");
//! assert_eq!(result.extension, Some(".pdf"));
//! assert!(result.confidence >= 50);
//! ```

pub mod catalog;
pub mod category;
pub mod config;
pub mod detector;
pub mod error;
pub mod index;
pub mod matcher;
pub mod signature;

// Re-export commonly used types
pub use category::Category;
pub use config::{default_read_limit, set_default_read_limit, DEFAULT_READ_LIMIT};
pub use detector::{detect, DetectionResult, Detector, GENERIC_BINARY};
pub use error::DetectError;
pub use index::SignatureIndex;
pub use signature::{AdditionalCheck, Signature};

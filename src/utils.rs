//! Small pure helpers shared by registration.
//!
//! - File-extension classification for `.css` detection
//! - Internal-path normalization
//! - Name suffixes for bulk registration

use sha2::{Digest, Sha256};
use std::path::Path;

/// Hex length of the per-path suffix appended during bulk registration.
const BULK_SUFFIX_LEN: usize = 8;

/// Whether a source path carries a `.css` extension (case-insensitive).
pub fn has_css_extension(source: &str) -> bool {
    Path::new(source)
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("css"))
        .unwrap_or(false)
}

/// Strip redundant leading slashes from an internal path.
///
/// Protocol-relative sources (`//cdn.example.com/...`) are left alone so
/// they still resolve against the page scheme.
pub fn normalize_source(source: &str) -> &str {
    if source.starts_with("//") {
        source
    } else {
        source.trim_start_matches('/')
    }
}

/// Derive a unique registry name for one path of a bulk registration.
///
/// Each path hashes to a stable short suffix under the caller's logical
/// name, so a list of files registers without collisions.
pub fn bulk_name(name: &str, path: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(path.as_bytes());
    let digest = hex::encode(hasher.finalize());
    format!("{}-{}", name, &digest[..BULK_SUFFIX_LEN])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Byte Order Mark (BOM) utilities.
//!
//! Provides detection and stripping helpers for the Unicode encodings a
//! delimited text file is realistically saved in.

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // No need to check for empty BOMs
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Detects a BOM at the start of `bytes`.
pub fn detect_bom(bytes: &[u8]) -> Option<BomKind> {
    if bytes.starts_with(&UTF8_BOM) {
        Some(BomKind::Utf8)
    } else if bytes.starts_with(&UTF16_LE_BOM) {
        Some(BomKind::Utf16Le)
    } else if bytes.starts_with(&UTF16_BE_BOM) {
        Some(BomKind::Utf16Be)
    } else {
        None
    }
}

/// Splits a leading BOM off `bytes`.
///
/// Returns the detected kind (if any) together with the remaining payload.
pub fn strip_bom(bytes: &[u8]) -> (Option<BomKind>, &[u8]) {
    match detect_bom(bytes) {
        Some(kind) => (Some(kind), &bytes[kind.len()..]),
        None => (None, bytes),
    }
}

/// Strips a decoded U+FEFF from the start of already-decoded text.
#[inline]
pub fn strip_bom_str(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_and_strip() {
        let data = [0xEF, 0xBB, 0xBF, b'a', b',', b'b'];
        let (kind, rest) = strip_bom(&data);
        assert_eq!(kind, Some(BomKind::Utf8));
        assert_eq!(rest, b"a,b");

        let (kind, rest) = strip_bom(b"a,b");
        assert_eq!(kind, None);
        assert_eq!(rest, b"a,b");

        assert_eq!(detect_bom(&[0xFF, 0xFE, b'a', 0]), Some(BomKind::Utf16Le));
        assert_eq!(detect_bom(&[0xFE, 0xFF, 0, b'a']), Some(BomKind::Utf16Be));
    }

    #[test]
    fn test_strip_bom_str() {
        assert_eq!(strip_bom_str("\u{FEFF}name,age"), "name,age");
        assert_eq!(strip_bom_str("name,age"), "name,age");
    }
}

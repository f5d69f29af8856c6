//! Decoding of raw file bytes into text.
//!
//! Delimited files arrive as bytes from the source boundary. UTF-8 is assumed
//! unless a UTF-16 BOM says otherwise; invalid sequences are replaced rather
//! than rejected so a single bad byte never blocks a load.

use super::bom::{BomKind, strip_bom};
use encoding_rs::Encoding;

/// Map a detected BOM to the `encoding_rs` encoding that decodes its payload.
#[inline]
pub fn bom_to_encoding(kind: BomKind) -> &'static Encoding {
    match kind {
        BomKind::Utf8 => encoding_rs::UTF_8,
        BomKind::Utf16Le => encoding_rs::UTF_16LE,
        BomKind::Utf16Be => encoding_rs::UTF_16BE,
    }
}

/// Decode raw bytes into an owned string, honouring a leading BOM.
///
/// # Examples
/// ```
/// use tablescope::common::encoding::decode_text;
///
/// assert_eq!(decode_text(b"\xEF\xBB\xBFname,age"), "name,age");
/// assert_eq!(decode_text(b"name,age"), "name,age");
/// ```
pub fn decode_text(bytes: &[u8]) -> String {
    let (bom, payload) = strip_bom(bytes);
    let encoding = bom.map(bom_to_encoding).unwrap_or(encoding_rs::UTF_8);

    let (text, had_errors) = encoding.decode_without_bom_handling(payload);
    if had_errors {
        tracing::warn!(
            encoding = encoding.name(),
            "input contained malformed sequences; replaced with U+FFFD"
        );
    }
    text.into_owned()
}

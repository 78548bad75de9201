//! Input decoding.

use std::borrow::Cow;

/// Decode raw export bytes to a string.
///
/// Tries UTF-8 first (BOM handled by encoding_rs), then falls back to
/// Windows-1252, which older Kindle desktop exports use. Returns a
/// `Cow<str>` to avoid allocation for the common valid-UTF-8 case.
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

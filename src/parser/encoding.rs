//! Input text decoding: UTF-8, Latin-1, or auto-detection

use std::borrow::Cow;
use std::path::Path;

use crate::config::Encoding;
use crate::error::CompareError;

/// Decode raw file bytes according to the configured encoding
///
/// Auto mode probes strict UTF-8 first and falls back to Latin-1, so both of
/// the historical input flavors load without mojibake. Explicit UTF-8 rejects
/// invalid sequences instead of silently misreading them.
pub fn decode<'a>(bytes: &'a [u8], encoding: Encoding, path: &Path) -> Result<Cow<'a, str>, CompareError> {
    match encoding {
        Encoding::Utf8 => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(e) => Err(CompareError::parse(
                path,
                format!("invalid UTF-8 at byte {}", e.valid_up_to()),
            )),
        },
        Encoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes)),
        Encoding::Auto => match std::str::from_utf8(bytes) {
            Ok(text) => Ok(Cow::Borrowed(text)),
            Err(_) => Ok(encoding_rs::mem::decode_latin1(bytes)),
        },
    }
}

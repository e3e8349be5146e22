use ::base64::Engine;
use ::base64::alphabet;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::Result;

/// Standard alphabet; decoding accepts input with or without `=` padding.
const STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes the UTF-8 bytes of `text` as padded standard Base64.
#[must_use]
pub fn encode_base64(text: &str) -> String {
    STANDARD.encode(text)
}

/// Decodes standard Base64 into UTF-8 text.
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`crate::Error::Base64`] if `input` is not valid Base64.
/// - [`crate::Error::Utf8`] if the decoded bytes are not UTF-8.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
pub fn decode_base64(input: &str) -> Result<String> {
    let bytes = STANDARD.decode(input.trim())?;
    Ok(String::from_utf8(bytes)?)
}

use ::base64::Engine;
use ::base64::alphabet;
use ::base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::Value;
#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{Error, Result};

/// URL-safe alphabet; JWT segments are normally unpadded but padding is
/// tolerated.
const URL_SAFE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The decoded header and payload of a JSON Web Token.
///
/// The signature is neither decoded nor verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JwtParts {
    pub header: Value,
    pub payload: Value,
}

impl JwtParts {
    /// The header as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn header_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.header)?)
    }

    /// The payload as JSON indented by two spaces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn payload_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.payload)?)
    }
}

/// Splits a compact JWT and decodes its header and payload.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the token does not have exactly three
/// dot-separated segments, or if the header or payload is not base64url
/// encoded UTF-8 JSON.
///
/// # Example
/// ```
/// use toolsmith::codec::decode_jwt;
///
/// let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
///              eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IkpvaG4gRG9lIiwiaWF0IjoxNTE2MjM5MDIyfQ.\
///              SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";
/// let parts = decode_jwt(token).unwrap();
/// assert_eq!(parts.header["alg"], "HS256");
/// assert_eq!(parts.payload["name"], "John Doe");
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
pub fn decode_jwt(token: &str) -> Result<JwtParts> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    let [header, payload, _signature] = segments.as_slice() else {
        return Err(Error::validation(format!(
            "JWT must have 3 dot-separated parts, got {}",
            segments.len()
        )));
    };
    Ok(JwtParts {
        header: decode_segment(header, "header")?,
        payload: decode_segment(payload, "payload")?,
    })
}

fn decode_segment(segment: &str, label: &str) -> Result<Value> {
    let bytes = URL_SAFE
        .decode(segment)
        .map_err(|e| Error::validation(format!("JWT {label} is not valid base64url: {e}")))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| Error::validation(format!("JWT {label} is not valid JSON: {e}")))
}

use crate::base32::Base32Error;

/// A result type defaulting to the crate-wide [`Error`].
///
/// Most `toolsmith` engines are infallible. Only name-based UUID generation,
/// parsing of textual identifiers, and the text decoders can fail.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All errors that `toolsmith` can produce.
///
/// Errors are never recovered internally; they surface directly to the caller,
/// which owns any user-facing messaging.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input failed validation before any work was done.
    ///
    /// Raised for a malformed namespace or an empty name during v5 generation,
    /// for strings that are not canonical `8-4-4-4-12` UUIDs, and for
    /// malformed JWTs.
    #[error("validation failed: {reason}")]
    Validation {
        /// Human-readable description of the rejected input.
        reason: String,
    },

    /// A Crockford Base32 string could not be decoded.
    #[error(transparent)]
    Base32(#[from] Base32Error),

    /// The input text was not valid JSON.
    ///
    /// Produced by [`crate::schema::convert_str`] and the JSON formatters; the
    /// converter itself operates on already parsed values and cannot fail.
    #[cfg(any(feature = "schema", feature = "codec"))]
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// The input text was not valid Base64.
    #[cfg(feature = "codec")]
    #[error("invalid Base64 input: {0}")]
    Base64(#[from] ::base64::DecodeError),

    /// Decoded bytes were not valid UTF-8 text.
    #[cfg(feature = "codec")]
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    #[cfg_attr(not(any(feature = "uuid", feature = "codec")), allow(dead_code))]
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }
}

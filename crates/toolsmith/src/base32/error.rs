/// Errors produced while decoding Crockford Base32 text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Base32Error {
    /// The input length does not match the expected encoded width.
    #[error("invalid length: {len}")]
    InvalidLength {
        /// Length of the rejected input, in bytes.
        len: usize,
    },

    /// The input contains a byte outside the Crockford alphabet.
    #[error("invalid ascii byte {byte:#04x} at index {index}")]
    InvalidAscii {
        /// The offending byte.
        byte: u8,
        /// Its position in the input.
        index: usize,
    },

    /// The decoded value does not fit in the target integer.
    #[error("decoded value overflows the target width")]
    Overflow,
}

use super::Base32Error;

const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
const NO_VALUE: u8 = 255;
const BITS_PER_CHAR: usize = 5;
const MASK: u16 = 0x1F;

/// Widest fixed-width string that can still decode into a `u128`:
/// `ceil(128 / 5)`.
pub const MAX_FIXED_WIDTH: usize = 26;

/// Lookup table for Crockford base32 decoding
const LOOKUP: [u8; 256] = {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0_u8;
    // Main alphabet, allow lower-case
    while i < 32 {
        let c = ALPHABET[i as usize];
        lut[c as usize] = i;
        if c.is_ascii_uppercase() {
            lut[(c + 32) as usize] = i; // lowercase letter
        }
        i += 1;
    }
    // Crockford-specific aliases
    lut[b'O' as usize] = 0;
    lut[b'o' as usize] = 0;
    lut[b'I' as usize] = 1;
    lut[b'i' as usize] = 1;
    lut[b'L' as usize] = 1;
    lut[b'l' as usize] = 1;
    lut
};

#[inline]
fn symbol(value: u16) -> char {
    char::from(ALPHABET[usize::from(value & MASK)])
}

#[inline]
fn lookup(byte: u8, index: usize) -> Result<u8, Base32Error> {
    match LOOKUP[usize::from(byte)] {
        NO_VALUE => Err(Base32Error::InvalidAscii { byte, index }),
        val => Ok(val),
    }
}

/// Encodes `value` as exactly `width` Crockford Base32 digits, most
/// significant digit first.
///
/// Each step takes `value % 32` as the next digit and divides by 32, so bits
/// above `width * 5` are silently discarded rather than reported.
///
/// # Example
///
/// ```
/// use toolsmith::base32::encode_fixed_width;
///
/// assert_eq!(encode_fixed_width(1_469_922_850_259, 10), "01ARZ3NDEK");
/// assert_eq!(encode_fixed_width(32, 2), "10");
/// // Overflowing digits are dropped.
/// assert_eq!(encode_fixed_width(32, 1), "0");
/// ```
#[must_use]
pub fn encode_fixed_width(value: u128, width: usize) -> String {
    let mut digits = vec![b'0'; width];
    let mut rest = value;
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(rest % 32) as usize];
        rest /= 32;
    }
    digits.into_iter().map(char::from).collect()
}

/// Encodes a byte buffer as a stream of 5-bit groups, most significant bits
/// first.
///
/// When the bit count is not a multiple of five, the leftover bits are
/// shifted into the high end of one final symbol, padded with zero bits below.
/// The output length is always `ceil(bytes.len() * 8 / 5)`.
///
/// # Example
///
/// ```
/// use toolsmith::base32::encode_bits;
///
/// // 0xFF = 11111 111(00)
/// assert_eq!(encode_bits(&[0xFF]), "ZW");
/// assert_eq!(encode_bits(&[]), "");
/// ```
#[must_use]
pub fn encode_bits(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(BITS_PER_CHAR));
    let mut acc = 0_u16;
    let mut bits = 0_usize;

    for &b in bytes {
        acc = (acc << 8) | u16::from(b);
        bits += 8;
        while bits >= BITS_PER_CHAR {
            bits -= BITS_PER_CHAR;
            out.push(symbol(acc >> bits));
        }
    }
    if bits > 0 {
        out.push(symbol(acc << (BITS_PER_CHAR - bits)));
    }
    out
}

/// Decodes a fixed-width Crockford Base32 string into an integer.
///
/// This is the inverse of [`encode_fixed_width`]: each digit contributes
/// `digit * 32^position`. Lowercase letters and the Crockford aliases are
/// accepted.
///
/// # Errors
///
/// - [`Base32Error::InvalidLength`] if `encoded` is empty or longer than
///   [`MAX_FIXED_WIDTH`]
/// - [`Base32Error::InvalidAscii`] for a byte outside the alphabet
/// - [`Base32Error::Overflow`] if the value does not fit in a `u128`
pub fn decode_fixed_width(encoded: &str) -> Result<u128, Base32Error> {
    if encoded.is_empty() || encoded.len() > MAX_FIXED_WIDTH {
        return Err(Base32Error::InvalidLength { len: encoded.len() });
    }
    encoded
        .bytes()
        .enumerate()
        .try_fold(0_u128, |acc, (index, byte)| {
            let val = lookup(byte, index)?;
            acc.checked_mul(32)
                .and_then(|acc| acc.checked_add(u128::from(val)))
                .ok_or(Base32Error::Overflow)
        })
}

/// Decodes a bit-stream encoding produced by [`encode_bits`] back into
/// `byte_len` bytes.
///
/// The zero padding in the low bits of the final symbol is discarded.
///
/// # Errors
///
/// - [`Base32Error::InvalidLength`] unless `encoded` has exactly
///   `ceil(byte_len * 8 / 5)` characters
/// - [`Base32Error::InvalidAscii`] for a byte outside the alphabet
pub fn decode_bits(encoded: &str, byte_len: usize) -> Result<Vec<u8>, Base32Error> {
    if encoded.len() != (byte_len * 8).div_ceil(BITS_PER_CHAR) {
        return Err(Base32Error::InvalidLength { len: encoded.len() });
    }
    let mut out = Vec::with_capacity(byte_len);
    let mut acc = 0_u16;
    let mut bits = 0_usize;

    for (index, byte) in encoded.bytes().enumerate() {
        acc = (acc << BITS_PER_CHAR) | u16::from(lookup(byte, index)?);
        bits += BITS_PER_CHAR;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fixed_width_matches_known_ulid_timestamp() {
        assert_eq!(encode_fixed_width(1_469_922_850_259, 10), "01ARZ3NDEK");
        assert_eq!(encode_fixed_width(1_611_559_180_765, 10), "01EWW6K6EX");
    }

    #[test]
    fn fixed_width_pads_with_zero_symbol() {
        assert_eq!(encode_fixed_width(0, 10), "0000000000");
        assert_eq!(encode_fixed_width(31, 4), "000Z");
        assert_eq!(encode_fixed_width(0, 0), "");
    }

    #[test]
    fn fixed_width_truncates_overflowing_digits() {
        let max_48 = (1_u128 << 48) - 1;
        assert_eq!(encode_fixed_width(max_48, 10), "7ZZZZZZZZZ");
        // Bit 50 does not fit into 10 digits and is dropped.
        assert_eq!(encode_fixed_width(1 << 50, 10), "0000000000");
        assert_eq!(encode_fixed_width(u128::MAX, 26), "7ZZZZZZZZZZZZZZZZZZZZZZZZZ");
    }

    #[test]
    fn bits_pack_most_significant_first() {
        // 0x00 0x01 = 00000 00000 00000 1(0000)
        assert_eq!(encode_bits(&[0x00, 0x01]), "000G");
        assert_eq!(encode_bits(&[0xFF; 5]), "ZZZZZZZZ");
        assert_eq!(encode_bits(&[0x80]), "G0");
    }

    #[test]
    fn bits_output_length_is_ceil_of_bit_count() {
        for len in 0..=20 {
            let bytes = vec![0xA5; len];
            assert_eq!(encode_bits(&bytes).len(), (len * 8).div_ceil(5), "len={len}");
        }
    }

    #[test]
    fn bits_agree_with_fixed_width_on_80_bit_values() {
        let random: u128 = 1_012_768_647_078_601_740_696_923;
        let bytes = random.to_be_bytes();
        assert_eq!(encode_bits(&bytes[6..]), "TSV4RRFFQ69G5FAV");
        assert_eq!(encode_fixed_width(random, 16), "TSV4RRFFQ69G5FAV");
    }

    #[test]
    fn decode_accepts_lowercase_and_aliases() {
        let upper = decode_fixed_width("01ARZ3NDEK").unwrap();
        assert_eq!(decode_fixed_width("01arz3ndek").unwrap(), upper);
        assert_eq!(decode_fixed_width("OIARZ3NDEK").unwrap(), decode_fixed_width("01ARZ3NDEK").unwrap());
        assert_eq!(decode_fixed_width("l").unwrap(), 1);
    }

    #[test]
    fn decode_returns_error_for_invalid_character() {
        assert_eq!(
            decode_fixed_width("ZZZZZZ!").unwrap_err(),
            Base32Error::InvalidAscii {
                byte: b'!',
                index: 6,
            }
        );
        assert_eq!(
            decode_fixed_width("U").unwrap_err(),
            Base32Error::InvalidAscii { byte: b'U', index: 0 }
        );
    }

    #[test]
    fn decode_rejects_bad_lengths_and_overflow() {
        assert_eq!(
            decode_fixed_width("").unwrap_err(),
            Base32Error::InvalidLength { len: 0 }
        );
        assert_eq!(
            decode_fixed_width(&"0".repeat(27)).unwrap_err(),
            Base32Error::InvalidLength { len: 27 }
        );
        assert_eq!(
            decode_fixed_width("8ZZZZZZZZZZZZZZZZZZZZZZZZZ").unwrap_err(),
            Base32Error::Overflow
        );
        assert_eq!(
            decode_fixed_width("7ZZZZZZZZZZZZZZZZZZZZZZZZZ").unwrap(),
            u128::MAX
        );
    }

    #[test]
    fn decode_bits_discards_padding() {
        assert_eq!(decode_bits("ZW", 1).unwrap(), vec![0xFF]);
        // Non-zero padding bits are ignored as well.
        assert_eq!(decode_bits("ZZ", 1).unwrap(), vec![0xFF]);
        assert_eq!(
            decode_bits("ZZZ", 1).unwrap_err(),
            Base32Error::InvalidLength { len: 3 }
        );
    }

    proptest! {
        #[test]
        fn fixed_width_roundtrips_48_bit_timestamps(t in 0_u64..(1 << 48)) {
            let encoded = encode_fixed_width(u128::from(t), 10);
            prop_assert_eq!(encoded.len(), 10);
            prop_assert_eq!(decode_fixed_width(&encoded).unwrap(), u128::from(t));
        }

        #[test]
        fn bits_roundtrip_80_bit_buffers(bytes in proptest::array::uniform10(any::<u8>())) {
            let encoded = encode_bits(&bytes);
            prop_assert_eq!(encoded.len(), 16);
            prop_assert_eq!(decode_bits(&encoded, 10).unwrap(), bytes.to_vec());
        }

        #[test]
        fn bits_roundtrip_arbitrary_lengths(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
            let encoded = encode_bits(&bytes);
            prop_assert_eq!(decode_bits(&encoded, bytes.len()).unwrap(), bytes);
        }

        #[test]
        fn fixed_width_preserves_numeric_order(a in 0_u64..(1 << 48), b in 0_u64..(1 << 48)) {
            let ea = encode_fixed_width(u128::from(a), 10);
            let eb = encode_fixed_width(u128::from(b), 10);
            prop_assert_eq!(a.cmp(&b), ea.cmp(&eb));
        }
    }
}

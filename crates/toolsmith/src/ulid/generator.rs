#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{RANDOM_BYTES, RANDOM_LEN, TIMESTAMP_LEN};
use crate::{
    base32::{encode_bits, encode_fixed_width},
    rand::RandSource,
    time::TimeSource,
};

/// Encodes a timestamp and a random buffer into a ULID string.
///
/// The random part is the bit-stream encoding of `random`, truncated or
/// right-padded with `'0'` to exactly 16 characters. With the usual 10 random
/// bytes no padding or truncation takes place.
///
/// # Example
/// ```
/// use toolsmith::ulid::encode;
///
/// let random = 1_012_768_647_078_601_740_696_923_u128.to_be_bytes();
/// assert_eq!(encode(1_469_922_850_259, &random[6..]), "01ARZ3NDEKTSV4RRFFQ69G5FAV");
/// ```
#[must_use]
pub fn encode(timestamp_millis: u64, random: &[u8]) -> String {
    let mut id = encode_fixed_width(u128::from(timestamp_millis), TIMESTAMP_LEN);
    let mut random_part = encode_bits(random);
    // Crockford output is ASCII, so truncation lands on a char boundary.
    random_part.truncate(RANDOM_LEN);
    while random_part.len() < RANDOM_LEN {
        random_part.push('0');
    }
    id.push_str(&random_part);
    id
}

/// A *non-monotonic* ULID generator.
///
/// Each call reads the clock once and draws 80 fresh random bits. Nothing is
/// carried over between calls, so ULIDs created within the same millisecond
/// are ordered by their random component only.
///
/// ## Features
/// - ✅ Thread-safe (with thread-safe time and random sources)
/// - ✅ Probabilistically unique (no coordination required)
/// - ✅ Time-ordered across milliseconds
pub struct UlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl<T, R> UlidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`UlidGenerator`] with the provided time source and RNG.
    ///
    /// # Example
    /// ```
    /// use toolsmith::{SystemClock, ThreadRandom, UlidGenerator};
    ///
    /// let generator = UlidGenerator::new(SystemClock, ThreadRandom);
    /// let id = generator.generate();
    /// assert_eq!(id.len(), 26);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a ULID for the current time.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> String {
        self.generate_at(self.time.current_millis())
    }

    /// Generates a ULID for the given timestamp in milliseconds since the Unix
    /// epoch.
    ///
    /// Timestamps wider than 48 bits are truncated by the encoder.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_at(&self, now_millis: u64) -> String {
        let random: [u8; RANDOM_BYTES] = self.rng.bytes();
        encode(now_millis, &random)
    }

    /// Generates `count` ULIDs, reading the clock for each one.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn generate_batch(&self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate()).collect()
    }
}

#[cfg(feature = "std")]
impl Default for UlidGenerator<crate::SystemClock, crate::ThreadRandom> {
    fn default() -> Self {
        Self::new(crate::SystemClock, crate::ThreadRandom)
    }
}

/// Generates a ULID from the system clock and the thread-local RNG.
///
/// This convenience function keeps no state. Prefer [`UlidGenerator`] when
/// you need to control the time or random source.
#[cfg(feature = "std")]
#[must_use]
pub fn generate() -> String {
    UlidGenerator::default().generate()
}

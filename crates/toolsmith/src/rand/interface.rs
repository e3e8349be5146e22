/// A trait for random sources that fill buffers with random bytes.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Production implementations must be
/// cryptographically secure and must never reuse or cache output: every call
/// yields fresh bytes.
///
/// # Example
/// ```
/// use toolsmith::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill_bytes(&self, buf: &mut [u8]) {
///         buf.fill(0xAB);
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.bytes::<2>(), [0xAB, 0xAB]);
/// ```
pub trait RandSource {
    /// Fills `buf` entirely with random bytes.
    fn fill_bytes(&self, buf: &mut [u8]);

    /// Returns `N` fresh random bytes.
    fn bytes<const N: usize>(&self) -> [u8; N]
    where
        Self: Sized,
    {
        let mut buf = [0_u8; N];
        self.fill_bytes(&mut buf);
        buf
    }
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn fill_bytes(&self, buf: &mut [u8]) {
        (**self).fill_bytes(buf);
    }
}

//! Signed 64-bit integer to decimal text.
//!
//! Digits are rendered right-aligned into a fixed stack buffer, so no
//! allocation happens per conversion. The buffer holds 19 digits plus a sign,
//! which is exactly `i64::MIN` (`-9223372036854775808`).

/// Longest possible rendering of an `i64`.
pub const MAX_DECIMAL_LEN: usize = 20;

/// Decimal text of one integer, stored inline.
#[derive(Clone, Copy)]
pub struct DecimalBuf {
    bytes: [u8; MAX_DECIMAL_LEN],
    start: usize,
}

impl DecimalBuf {
    /// The rendered text, most-significant digit first.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[self.start..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        MAX_DECIMAL_LEN - self.start
    }

    /// Always false; every integer renders to at least one byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == MAX_DECIMAL_LEN
    }
}

impl AsRef<[u8]> for DecimalBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl std::fmt::Debug for DecimalBuf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DecimalBuf")
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}

/// Render `value` in base 10.
#[must_use]
pub fn to_decimal(value: i64) -> DecimalBuf {
    let mut bytes = [0u8; MAX_DECIMAL_LEN];
    let mut pos = MAX_DECIMAL_LEN;

    if value == 0 {
        pos -= 1;
        bytes[pos] = b'0';
        return DecimalBuf { bytes, start: pos };
    }

    // `unsigned_abs` keeps i64::MIN in range; plain negation would overflow.
    let mut magnitude = value.unsigned_abs();
    while magnitude > 0 {
        pos -= 1;
        bytes[pos] = b'0' + (magnitude % 10) as u8;
        magnitude /= 10;
    }
    if value < 0 {
        pos -= 1;
        bytes[pos] = b'-';
    }
    DecimalBuf { bytes, start: pos }
}

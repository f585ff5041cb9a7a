//! Variable-length unsigned integer codec
//!
//! MQTT-style "variable byte integer": each output byte carries 7 value bits in
//! its low bits, the high bit flags that another byte follows, and the 7-bit
//! groups run from least to most significant. The encoding is self-delimiting
//! and independent of platform byte order, so no swapping is ever involved.
//!
//! Only unsigned integers are supported. Signed callers must map to an unsigned
//! representation first (e.g. zig-zag); the type bound rejects signed integers
//! at compile time.

use tracing::trace;

use crate::error::{CodecError, Result};
use crate::sealed;

/// Unsigned integer encodable as a variable-length wire integer.
///
/// Implemented for `u8`, `u16`, `u32`, `u64`. The accumulator side works in
/// `u128`, wide enough that no 7-bit group of any supported type can shift bits
/// off the top before the range check runs.
pub trait VarUint: sealed::Sealed + Copy + Eq {
    /// Bit width of the type.
    const BITS: u32;

    /// Maximum encoded length in bytes: `ceil(BITS / 7)`.
    ///
    /// 2 for `u8`, 3 for `u16`, 5 for `u32`, 10 for `u64`.
    const MAX_ENCODED_LEN: usize;

    /// `Self::MAX`, widened to the accumulator type.
    const MAX_WIDE: u128;

    /// Widen to the accumulator type.
    fn widen(self) -> u128;

    /// Narrow from the accumulator type. `wide` must fit in `Self`.
    fn narrow(wide: u128) -> Self;
}

macro_rules! impl_var_uint {
    ($($ty:ty),* $(,)?) => {$(
        impl VarUint for $ty {
            const BITS: u32 = <$ty>::BITS;
            const MAX_ENCODED_LEN: usize = (<$ty>::BITS as usize).div_ceil(7);
            const MAX_WIDE: u128 = <$ty>::MAX as u128;

            fn widen(self) -> u128 {
                u128::from(self)
            }

            fn narrow(wide: u128) -> Self {
                debug_assert!(wide <= u128::from(<$ty>::MAX));
                wide as $ty
            }
        }
    )*};
}

impl_var_uint!(u8, u16, u32, u64);

/// Exact encoded length of `val` in bytes.
///
/// `max(1, ceil(bit_length(val) / 7))`; zero encodes to a single byte.
pub fn var_int_len<T: VarUint>(val: T) -> usize {
    let wide = val.widen();
    if wide == 0 {
        return 1;
    }
    let bits = 128 - wide.leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Encode `val` into the front of `buf`, returning the number of bytes written.
///
/// Capacity is checked before anything is written, so a `BufferTooSmall`
/// failure leaves `buf` untouched. A buffer of `T::MAX_ENCODED_LEN` bytes is
/// always large enough.
///
/// ```
/// use bytewire::append_var_int;
///
/// let mut buf = [0u8; 5];
/// assert_eq!(append_var_int(&mut buf, 0xCAFEu32).unwrap(), 3);
/// assert_eq!(&buf[..3], &[0xFE, 0x95, 0x03]);
/// ```
pub fn append_var_int<T: VarUint>(buf: &mut [u8], val: T) -> Result<usize> {
    let needed = var_int_len(val);
    if buf.len() < needed {
        return Err(CodecError::BufferTooSmall {
            needed,
            available: buf.len(),
        });
    }

    let mut rest = val.widen();
    let mut written = 0;
    // While more than 7 bits remain, emit a group with the continuation flag
    while rest > 0x7F {
        buf[written] = (rest as u8 & 0x7F) | 0x80;
        rest >>= 7;
        written += 1;
    }
    buf[written] = rest as u8;
    Ok(written + 1)
}

/// Decode a variable-length integer from the front of `buf`.
///
/// Returns the value and the number of bytes consumed. Fails loudly on bad
/// input:
/// - [`CodecError::TruncatedVarInt`] if `buf` ends while the continuation bit
///   is still set;
/// - [`CodecError::MalformedVarInt`] if no terminator appears within
///   `T::MAX_ENCODED_LEN` bytes;
/// - [`CodecError::VarIntRange`] if the terminated value does not fit in `T`.
///
/// For best-effort decoding of externally-bounded fields see
/// [`extract_var_int_partial`].
///
/// ```
/// use bytewire::extract_var_int;
///
/// assert_eq!(extract_var_int::<u32>(&[0x80, 0x01]).unwrap(), (128, 2));
/// ```
pub fn extract_var_int<T: VarUint>(buf: &[u8]) -> Result<(T, usize)> {
    let mut acc = 0u128;
    for (i, &byte) in buf.iter().enumerate() {
        if i >= T::MAX_ENCODED_LEN {
            return Err(CodecError::MalformedVarInt {
                max_len: T::MAX_ENCODED_LEN,
            });
        }
        acc |= u128::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            if acc > T::MAX_WIDE {
                return Err(CodecError::VarIntRange { bits: T::BITS });
            }
            return Ok((T::narrow(acc), i + 1));
        }
    }
    Err(CodecError::TruncatedVarInt { consumed: buf.len() })
}

/// Decode a variable-length integer, returning a best-effort partial value.
///
/// Accumulates 7-bit groups until a clear continuation bit, the end of `buf`,
/// or `T::MAX_ENCODED_LEN` groups, whichever comes first, and returns whatever
/// was accumulated (masked to `T`) along with the number of bytes consumed.
/// Intended for interop with peers that bound the field externally; a truncated
/// chain yields a partial value rather than an error, which is logged at trace
/// level.
pub fn extract_var_int_partial<T: VarUint>(buf: &[u8]) -> (T, usize) {
    let mut acc = 0u128;
    let mut consumed = 0;
    for (i, &byte) in buf.iter().take(T::MAX_ENCODED_LEN).enumerate() {
        acc |= u128::from(byte & 0x7F) << (7 * i);
        consumed = i + 1;
        if byte & 0x80 == 0 {
            return (T::narrow(acc & T::MAX_WIDE), consumed);
        }
    }
    trace!(
        consumed,
        max_len = T::MAX_ENCODED_LEN,
        "variable-length integer not terminated; returning partial value"
    );
    (T::narrow(acc & T::MAX_WIDE), consumed)
}

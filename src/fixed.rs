//! Fixed-width endian codec
//!
//! Extracts a scalar of known size from a byte buffer in a stated byte order,
//! or appends a scalar to a buffer in a stated byte order. The byte sequence is
//! reversed only when the requested order differs from the platform's native
//! order and the scalar is wider than one byte.
//!
//! Both operations bounds-check up front and fail without touching the buffer,
//! so a caller can retry with a larger buffer after `BufferTooSmall`.

use crate::byte_order::ByteOrder;
use crate::error::{CodecError, Result};
use crate::swap::WireScalar;

/// Extract a value from the front of `buf`, interpreting the bytes in `order`.
///
/// Reads exactly `T::SIZE` bytes and returns the value in native order. The
/// buffer is not modified. `T` cannot be deduced from the arguments, so it is
/// normally named at the call site:
///
/// ```
/// use bytewire::{extract_val, ByteOrder};
///
/// let buf = [0x12, 0x34, 0x56, 0x78];
/// let v: u32 = extract_val(ByteOrder::Big, &buf).unwrap();
/// assert_eq!(v, 0x1234_5678);
/// ```
pub fn extract_val<T: WireScalar>(order: ByteOrder, buf: &[u8]) -> Result<T> {
    let Some(src) = buf.get(..T::SIZE) else {
        return Err(CodecError::BufferTooSmall {
            needed: T::SIZE,
            available: buf.len(),
        });
    };
    let val = T::from_native(src);
    if !order.is_native() && T::SIZE > 1 {
        Ok(val.reverse_bytes())
    } else {
        Ok(val)
    }
}

/// Append a value to the front of `buf` in the requested byte order.
///
/// Writes exactly `T::SIZE` bytes and returns the count written, so callers
/// can advance a cursor:
///
/// ```
/// use bytewire::{append_val, ByteOrder};
///
/// let mut buf = [0u8; 8];
/// let mut pos = 0;
/// pos += append_val(ByteOrder::Big, &mut buf[pos..], 0xABCDu16).unwrap();
/// pos += append_val(ByteOrder::Big, &mut buf[pos..], 0x12u8).unwrap();
/// assert_eq!(pos, 3);
/// assert_eq!(&buf[..3], &[0xAB, 0xCD, 0x12]);
/// ```
pub fn append_val<T: WireScalar>(order: ByteOrder, buf: &mut [u8], val: T) -> Result<usize> {
    let Some(dst) = buf.get_mut(..T::SIZE) else {
        return Err(CodecError::BufferTooSmall {
            needed: T::SIZE,
            available: buf.len(),
        });
    };
    let out = if !order.is_native() && T::SIZE > 1 {
        val.reverse_bytes()
    } else {
        val
    };
    out.copy_to(dst);
    Ok(T::SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_single_value_big_endian() {
        let mut buf = [0u8; 4];
        assert_eq!(append_val(ByteOrder::Big, &mut buf, 0x0403_0201u32), Ok(4));
        assert_eq!(buf, [0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_append_single_value_little_endian() {
        let mut buf = [0u8; 4];
        assert_eq!(append_val(ByteOrder::Little, &mut buf, 0x0403_0201u32), Ok(4));
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_extract_both_orders() {
        let big = [0xDD, 0xCC, 0xBB, 0xAA];
        let little = [0xAA, 0xBB, 0xCC, 0xDD];
        assert_eq!(extract_val::<u32>(ByteOrder::Big, &big), Ok(0xDDCC_BBAA));
        assert_eq!(extract_val::<u32>(ByteOrder::Little, &little), Ok(0xDDCC_BBAA));
    }

    #[test]
    fn test_single_byte_has_no_order() {
        let buf = [0xEE];
        assert_eq!(extract_val::<u8>(ByteOrder::Big, &buf), Ok(0xEE));
        assert_eq!(extract_val::<u8>(ByteOrder::Little, &buf), Ok(0xEE));

        let mut out = [0u8; 1];
        assert_eq!(append_val(ByteOrder::Big, &mut out, 0xEEu8), Ok(1));
        assert_eq!(out, [0xEE]);
        assert_eq!(append_val(ByteOrder::Little, &mut out, 0xEEu8), Ok(1));
        assert_eq!(out, [0xEE]);
    }

    #[test]
    fn test_native_order_writes_native_repr() {
        let mut buf = [0u8; 4];
        let v = 0x1234_5678u32;
        append_val(ByteOrder::native(), &mut buf, v).unwrap();
        assert_eq!(buf, v.to_ne_bytes());
    }

    #[test]
    fn test_signed_values() {
        let mut buf = [0u8; 8];
        append_val(ByteOrder::Big, &mut buf, -2i64).unwrap();
        assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]);
        assert_eq!(extract_val::<i64>(ByteOrder::Big, &buf), Ok(-2));
    }

    #[test]
    fn test_round_trip_all_widths() {
        let mut buf = [0u8; 16];
        for order in [ByteOrder::Big, ByteOrder::Little] {
            assert_eq!(append_val(order, &mut buf, 0xABu8), Ok(1));
            assert_eq!(extract_val::<u8>(order, &buf), Ok(0xAB));

            assert_eq!(append_val(order, &mut buf, 0x01FFi16), Ok(2));
            assert_eq!(extract_val::<i16>(order, &buf), Ok(0x01FF));

            assert_eq!(append_val(order, &mut buf, 0xDEAD_BEEFu32), Ok(4));
            assert_eq!(extract_val::<u32>(order, &buf), Ok(0xDEAD_BEEF));

            assert_eq!(append_val(order, &mut buf, u64::MAX - 7), Ok(8));
            assert_eq!(extract_val::<u64>(order, &buf), Ok(u64::MAX - 7));

            let wide = 0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10u128;
            assert_eq!(append_val(order, &mut buf, wide), Ok(16));
            assert_eq!(extract_val::<u128>(order, &buf), Ok(wide));
        }
    }

    #[test]
    fn test_buffer_too_small() {
        let mut buf = [0u8; 3];
        assert_eq!(
            append_val(ByteOrder::Big, &mut buf, 0x1234_5678u32),
            Err(CodecError::BufferTooSmall {
                needed: 4,
                available: 3
            })
        );
        // Nothing written on failure
        assert_eq!(buf, [0, 0, 0]);

        assert_eq!(
            extract_val::<u32>(ByteOrder::Big, &buf),
            Err(CodecError::BufferTooSmall {
                needed: 4,
                available: 3
            })
        );
    }
}

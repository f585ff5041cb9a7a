//! Byte-sequence reversal for fixed-width wire scalars
//!
//! The reversal is a pure bit-level transformation: the value is viewed as its
//! ordered byte representation, the representation is reversed, and the result
//! is reinterpreted as the original type. No arithmetic is performed on the
//! logical value, so it applies equally to signed and unsigned integers.
//!
//! Floating-point types are intentionally not supported: a byte-swapped float
//! bit pattern may be a signalling NaN, which can trap or be silently rewritten
//! by the FPU when passed by value. Integral bit patterns are always valid.

use crate::sealed;

/// Fixed-width scalar that can appear on the wire.
///
/// Implemented for the padding-free integral types only (`u8` through `i128`);
/// every bit of the representation is semantically meaningful, so reversing the
/// byte sequence is always a lossless, involutive transform. Attempting to use
/// a floating-point type fails to compile.
pub trait WireScalar: sealed::Sealed + Copy {
    /// Number of bytes the value occupies on the wire, `size_of::<Self>()`.
    const SIZE: usize;

    /// The value with its byte sequence exactly reversed.
    ///
    /// Identity for single-byte types; involutive for all types:
    /// `x.reverse_bytes().reverse_bytes() == x`.
    #[must_use]
    fn reverse_bytes(self) -> Self;

    /// Copy the native-order byte representation into the front of `dst`.
    ///
    /// `dst` must be at least `SIZE` bytes; callers in this crate check first.
    fn copy_to(self, dst: &mut [u8]);

    /// Rebuild a value from `SIZE` native-order bytes at the front of `src`.
    ///
    /// `src` must be at least `SIZE` bytes; callers in this crate check first.
    fn from_native(src: &[u8]) -> Self;
}

macro_rules! impl_wire_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl WireScalar for $ty {
            const SIZE: usize = std::mem::size_of::<$ty>();

            fn reverse_bytes(self) -> Self {
                let mut repr = self.to_ne_bytes();
                repr.reverse();
                Self::from_ne_bytes(repr)
            }

            fn copy_to(self, dst: &mut [u8]) {
                dst[..Self::SIZE].copy_from_slice(&self.to_ne_bytes());
            }

            fn from_native(src: &[u8]) -> Self {
                let mut repr = [0u8; Self::SIZE];
                repr.copy_from_slice(&src[..Self::SIZE]);
                Self::from_ne_bytes(repr)
            }
        }
    )*};
}

impl_wire_scalar!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128);

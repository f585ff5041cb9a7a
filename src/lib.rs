//! Bytewire Binary Codec Library
//!
//! Low-level primitives for moving fixed-width scalars and variable-length
//! integers between native memory representation and an explicit wire byte
//! order. This is the bottom layer of a serialization stack: the next layer up
//! owns buffer management and message framing.
//!
//! # Components
//!
//! - **Byte reversal**: [`WireScalar::reverse_bytes`], a pure bit-level flip of
//!   a scalar's byte sequence
//! - **Fixed-width codec**: [`extract_val`] / [`append_val`], parameterized by
//!   [`ByteOrder`], swapping only when the requested order differs from native
//! - **Variable-length integer codec**: [`append_var_int`] /
//!   [`extract_var_int`], the MQTT-style 7-bits-per-byte continuation scheme
//!
//! # Design Principles
//!
//! - **Caller-owned buffers**: no allocation, no copies beyond the value being
//!   moved, no ownership transfer
//! - **Type-safe**: integral types only; floating point and signed varints are
//!   rejected at compile time by the trait bounds
//! - **Checked**: every operation bounds-checks up front and fails atomically
//!   with a structured [`CodecError`]
//! - **Stateless**: every call is a self-contained pure function, trivially
//!   safe to use from multiple threads on disjoint buffers

pub mod byte_order;
pub mod error;
pub mod fixed;
pub mod swap;
pub mod varint;

// Re-export core types
pub use byte_order::ByteOrder;
pub use error::{CodecError, Result};
pub use fixed::{append_val, extract_val};
pub use swap::WireScalar;
pub use varint::{
    append_var_int, extract_var_int, extract_var_int_partial, var_int_len, VarUint,
};

/// Seals [`WireScalar`] and [`VarUint`] to the integral types defined here.
mod sealed {
    pub trait Sealed {}
}

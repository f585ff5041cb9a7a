//! Byte order representation for wire-format conversion
//!
//! Provides a type-safe enum naming the order in which the most significant
//! byte of a multi-byte value appears in a buffer, plus the platform's native
//! order as a compile-time constant.

use serde::{Deserialize, Serialize};

/// Byte order of a multi-byte value in a buffer
///
/// # Terminology
/// - **Big-endian**: most significant byte first (network byte order)
/// - **Little-endian**: least significant byte first (x86 native order)
///
/// For the 32-bit value `0x12345678`:
/// - `Big`: [0x12, 0x34, 0x56, 0x78]
/// - `Little`: [0x78, 0x56, 0x34, 0x12]
///
/// Single-byte values have no order; both variants lay them out identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Big-endian: most significant byte first
    ///
    /// Network byte order, used in most protocols.
    /// Example: 0x12345678 → [0x12, 0x34, 0x56, 0x78]
    Big,

    /// Little-endian: least significant byte first
    ///
    /// Intel x86 native byte order.
    /// Example: 0x12345678 → [0x78, 0x56, 0x34, 0x12]
    Little,
}

impl ByteOrder {
    /// Byte order of the host platform
    ///
    /// Resolved at compile time; process-wide and read-only.
    pub const fn native() -> Self {
        #[cfg(target_endian = "big")]
        {
            Self::Big
        }
        #[cfg(target_endian = "little")]
        {
            Self::Little
        }
    }

    /// Convert from legacy string formats
    ///
    /// Supports common string representations found in device point tables:
    /// - "BE", "BIG", "BIG_ENDIAN", "ABCD", "NETWORK" → Big
    /// - "LE", "LITTLE", "LITTLE_ENDIAN", "DCBA" → Little
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.to_uppercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "BE" | "BIG" | "BIGENDIAN" | "ABCD" | "NETWORK" => Some(Self::Big),
            "LE" | "LITTLE" | "LITTLEENDIAN" | "DCBA" => Some(Self::Little),
            _ => None,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Big => "big-endian",
            Self::Little => "little-endian",
        }
    }

    /// Check if this order matches the host platform's native order
    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }

    /// Check if this is big-endian
    pub fn is_big_endian(&self) -> bool {
        matches!(self, Self::Big)
    }

    /// Check if this is little-endian
    pub fn is_little_endian(&self) -> bool {
        matches!(self, Self::Little)
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ByteOrder {
    /// Default to big-endian (network byte order)
    fn default() -> Self {
        Self::Big
    }
}

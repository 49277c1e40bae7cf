//! lz78 - adaptive LZ78 dictionary compression over bit-granular streams
//!
//! This crate implements an LZ78-family dictionary coder together with the
//! two primitives it is built on: a big-endian bit-stream writer/reader
//! pair and a generic associative array with a prime growth schedule that
//! serves as the adaptive codebook. Codes are variable width - both sides
//! widen the code field by one bit as the codebook grows past each
//! power-of-two size - and the stream carries no length prefix; it ends at
//! a terminal code with no trailing literal.
//!
//! # Features
//!
//! - Byte-mode encoding for arbitrary binary data
//! - Two-symbol mode packing {'A','B'} literals into single bits
//! - Diagnostic '0'/'1' bit-string rendering of any encoding
//! - Reusable [`BitWriter`]/[`BitReader`] and [`AssocArray`] primitives
//!
//! # Example - Round trip
//!
//! ```
//! use lz78::{decode_bytes, encode_bytes, LiteralCoding};
//!
//! let data = b"TOBEORNOTTOBEORTOBEORNOT";
//! let packed = encode_bytes(data, LiteralCoding::Byte)?;
//! let restored = decode_bytes(&packed, LiteralCoding::Byte)?;
//! assert_eq!(restored, data);
//! # Ok::<(), lz78::Lz78Error>(())
//! ```
//!
//! # Example - Two-symbol mode
//!
//! ```
//! use lz78::{decode_bytes, encode_bytes, LiteralCoding};
//!
//! let packed = encode_bytes(b"AABABBBABAABABBBABBABB", LiteralCoding::TwoSymbol)?;
//! assert_eq!(packed.len(), 4);
//! let restored = decode_bytes(&packed, LiteralCoding::TwoSymbol)?;
//! assert_eq!(restored, b"AABABBBABAABABBBABBABB");
//! # Ok::<(), lz78::Lz78Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

// Public modules
pub mod assoc;
pub mod bits;
pub mod codec;
pub mod common;
pub mod error;

// Re-export commonly used types
pub use assoc::AssocArray;
pub use bits::{BitReader, BitWriter};
pub use common::{LiteralCoding, Lz78Error, Result, GROWTH_FACTOR, PRIME_CAPACITIES};

// Convenience functions

/// Compress a byte buffer into a packed LZ78 bitstream.
///
/// # Arguments
/// * `data` - The bytes to encode
/// * `literals` - How innovation literals are packed; [`LiteralCoding::TwoSymbol`]
///   is only meaningful for data over the {'A','B'} alphabet
///
/// # Returns
/// The packed stream, zero-padded to a whole number of bytes
pub fn encode_bytes(data: &[u8], literals: LiteralCoding) -> Result<Vec<u8>> {
    codec::encode_bytes(data, literals)
}

/// Decompress a packed LZ78 bitstream back into its original bytes.
///
/// # Arguments
/// * `data` - The packed stream
/// * `literals` - The literal coding the stream was encoded with; the
///   format is not self-describing, so both sides must agree out of band
///
/// # Returns
/// The reconstructed byte buffer
pub fn decode_bytes(data: &[u8], literals: LiteralCoding) -> Result<Vec<u8>> {
    codec::decode_bytes(data, literals)
}

/// Encode `data` and render the stream as a '0'/'1' character string.
///
/// Diagnostic variant of [`encode_bytes`]: the same bits, one character
/// each, without the final byte's zero padding.
pub fn encode_to_bit_string(data: &[u8], literals: LiteralCoding) -> Result<String> {
    codec::encode_to_bit_string(data, literals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports() {
        let _ = LiteralCoding::Byte;
        let _: AssocArray<u32, u32> = AssocArray::new();
        let _ = BitWriter::new();
        let _ = BitReader::new(&[]);
        assert_eq!(PRIME_CAPACITIES[0], 53);
        assert_eq!(GROWTH_FACTOR, 3);
    }

    #[test]
    fn test_convenience_round_trip() {
        let data = b"abracadabra abracadabra";
        let packed = encode_bytes(data, LiteralCoding::Byte).unwrap();
        assert_eq!(decode_bytes(&packed, LiteralCoding::Byte).unwrap(), data);
    }
}

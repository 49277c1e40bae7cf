//! LZ78 phrase codec
//!
//! This module turns a raw byte buffer into a packed bitstream of
//! variable-width (code, innovation) pairs and back. Both directions build
//! an adaptive codebook as they go: the encoder maps phrases to codes, the
//! decoder maps codes back to phrases, and each side widens its code field
//! by one bit as the codebook crosses each power-of-two size. The stream
//! ends with one terminal code that carries no innovation; there is no
//! length prefix, magic number, or version tag.

mod decode;
mod encode;

use crate::bits::BitWriter;
use crate::common::{LiteralCoding, Lz78Error, Result};

/// Width in bits of the first code of a stream.
pub const INITIAL_CODE_WIDTH: u32 = 1;

/// Codebook size at which the code width first grows; doubles after each
/// growth step.
pub const INITIAL_WIDTH_TRANSITION: usize = 2;

/// The byte a 0 innovation bit stands for in two-symbol mode.
pub const TWO_SYMBOL_ZERO: u8 = b'A';

/// The byte a 1 innovation bit stands for in two-symbol mode.
pub const TWO_SYMBOL_ONE: u8 = b'B';

/// Convenience function to compress a buffer in memory.
pub fn encode_bytes(data: &[u8], literals: LiteralCoding) -> Result<Vec<u8>> {
    Ok(encode::encode(data, literals, false)?.into_bytes())
}

/// Convenience function to decompress a buffer in memory.
///
/// `literals` must match the mode the stream was encoded with; the stream
/// itself carries no marker for it.
pub fn decode_bytes(data: &[u8], literals: LiteralCoding) -> Result<Vec<u8>> {
    decode::decode(data, literals)
}

/// Run the encoder with its bit trace enabled and return the stream as a
/// human-readable string of '0'/'1' characters, one per data bit.
///
/// Diagnostic counterpart of [`encode_bytes`]; the packed form is
/// discarded. Flush padding does not appear in the trace.
pub fn encode_to_bit_string(data: &[u8], literals: LiteralCoding) -> Result<String> {
    let writer: BitWriter = encode::encode(data, literals, true)?;
    writer
        .into_bit_trace()
        .ok_or_else(|| Lz78Error::InvalidData("bit trace missing from tracing writer".to_string()))
}

//! LZ78 decoding
//!
//! Replays the encoder's codebook construction from the stream itself:
//! each (code, innovation) pair reconstructs a phrase, appends it to the
//! output, and registers it under the next sequential code. A code whose
//! innovation cannot be read is the encoder's terminal code; its phrase is
//! appended verbatim and the stream ends. A code with no codebook entry is
//! corruption and fails, never silently.

use crate::assoc::AssocArray;
use crate::bits::BitReader;
use crate::common::{LiteralCoding, Lz78Error, Result};

use super::{INITIAL_CODE_WIDTH, INITIAL_WIDTH_TRANSITION, TWO_SYMBOL_ONE, TWO_SYMBOL_ZERO};

/// Decode a packed stream produced with the same literal coding mode.
pub(crate) fn decode(bytes: &[u8], literals: LiteralCoding) -> Result<Vec<u8>> {
    let mut phrases: AssocArray<u32, Vec<u8>> = AssocArray::new();
    phrases.set(0, Vec::new())?;

    let mut reader = BitReader::new(bytes);
    let mut out = Vec::new();
    let mut code_width = INITIAL_CODE_WIDTH;
    let mut transition = INITIAL_WIDTH_TRANSITION;

    while !drained(&reader, literals) {
        let code = reader.read_bits(code_width)?;
        let phrase: Vec<u8> = phrases
            .get(&code)
            .ok_or(Lz78Error::UnknownCode(code))?
            .clone();

        match read_innovation(&mut reader, literals)? {
            Some(byte) => {
                let mut grown = phrase;
                grown.push(byte);
                out.extend_from_slice(&grown);

                let next_code = phrases.len() as u32;
                phrases.set(next_code, grown)?;
                // width bump after registering, once the size has exceeded
                // the transition; the encoder bumps one phrase earlier on
                // "reached" and both sides stay in lockstep
                if phrases.len() > transition {
                    transition *= 2;
                    code_width += 1;
                }
            }
            None => {
                // terminal code: the final phrase has no innovation
                out.extend_from_slice(&phrase);
                break;
            }
        }
    }

    Ok(out)
}

/// True once nothing decodable is left in the stream.
///
/// Byte mode needs no help: the terminal code is always followed by fewer
/// than 8 bits of flush padding, so its innovation read fails on its own.
/// In two-symbol mode a 1-bit innovation read would happily consume
/// padding, so an all-zero tail shorter than one byte counts as drained.
/// An all-zero run of 8 or more bits cannot be padding and still holds
/// genuine empty-phrase codes or 'A' innovations.
fn drained(reader: &BitReader<'_>, literals: LiteralCoding) -> bool {
    match literals {
        LiteralCoding::Byte => reader.is_done(),
        LiteralCoding::TwoSymbol => {
            reader.remaining_bits() < 8 && reader.only_zero_bits_remain()
        }
    }
}

/// The literal byte following a code, or `None` at the terminal code.
///
/// Either reader exhaustion flavor ends the stream here; every other error
/// propagates.
fn read_innovation(reader: &mut BitReader<'_>, literals: LiteralCoding) -> Result<Option<u8>> {
    match literals {
        LiteralCoding::Byte => match reader.read_byte() {
            Ok(byte) => Ok(Some(byte)),
            Err(Lz78Error::StreamExhausted) | Err(Lz78Error::UnexpectedEof { .. }) => Ok(None),
            Err(e) => Err(e),
        },
        LiteralCoding::TwoSymbol => {
            if drained(reader, literals) {
                return Ok(None);
            }
            let bit = reader.read_bit()?;
            Ok(Some(if bit { TWO_SYMBOL_ONE } else { TWO_SYMBOL_ZERO }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::encode_bytes;
    use super::*;

    #[test]
    fn test_empty_stream_decodes_to_empty() {
        assert_eq!(decode(&[], LiteralCoding::Byte).unwrap(), b"");
        assert_eq!(decode(&[0x00], LiteralCoding::Byte).unwrap(), b"");
        assert_eq!(decode(&[0x00], LiteralCoding::TwoSymbol).unwrap(), b"");
    }

    #[test]
    fn test_unknown_code_is_corruption() {
        // first code is 1 at width 1, but only code 0 exists yet
        let err = decode(&[0xFF, 0xFF], LiteralCoding::Byte).unwrap_err();
        assert!(matches!(err, Lz78Error::UnknownCode(1)));
    }

    #[test]
    fn test_truncated_code_is_an_error_not_a_clean_end() {
        // grow the stream, then cut it mid-code
        let packed = encode_bytes(b"ABCDEFGHIJKLMNOP", LiteralCoding::Byte).unwrap();
        let cut = &packed[..packed.len() - 2];
        // depending on where the cut lands this is either a truncated
        // value or a code with no entry; it must never pass as success
        assert!(decode(cut, LiteralCoding::Byte).is_err());
    }

    #[test]
    fn test_nul_innovations_survive() {
        for data in [&b"\x00"[..], &b"\x00\x00\x00"[..], &b"a\x00b\x00"[..]] {
            let packed = encode_bytes(data, LiteralCoding::Byte).unwrap();
            assert_eq!(decode(&packed, LiteralCoding::Byte).unwrap(), data);
        }
    }

    #[test]
    fn test_two_symbol_zero_tail_longer_than_padding_is_decoded() {
        // "ABBA" ends in a fresh phrase "BA" plus a zero terminal; the
        // all-zero tail spans 8+ bits and must not be mistaken for padding
        let packed = encode_bytes(b"ABBA", LiteralCoding::TwoSymbol).unwrap();
        assert_eq!(decode(&packed, LiteralCoding::TwoSymbol).unwrap(), b"ABBA");
    }
}

//! LZ78 encoding
//!
//! Scans the input left to right, keeping the longest phrase that is still
//! in the codebook. Each time the phrase plus the next byte is new, the
//! encoder emits the phrase's code at the current width followed by the
//! literal next byte, registers the extended phrase under the next
//! sequential code, and restarts the match after it. The final, possibly
//! empty, phrase is emitted as a bare terminal code.

use crate::assoc::AssocArray;
use crate::bits::BitWriter;
use crate::common::{LiteralCoding, Lz78Error, Result};

use super::{INITIAL_CODE_WIDTH, INITIAL_WIDTH_TRANSITION, TWO_SYMBOL_ZERO};

/// Encode `bytes` into a finished [`BitWriter`], optionally with the
/// '0'/'1' trace enabled.
pub(crate) fn encode(
    bytes: &[u8],
    literals: LiteralCoding,
    keep_bit_trace: bool,
) -> Result<BitWriter> {
    let mut codebook: AssocArray<Vec<u8>, u32> = AssocArray::new();
    // the empty phrase is always code 0
    codebook.set(Vec::new(), 0)?;

    let mut out = if keep_bit_trace {
        BitWriter::with_bit_trace()
    } else {
        BitWriter::new()
    };

    let mut start = 0;
    let mut code_width = INITIAL_CODE_WIDTH;
    let mut transition = INITIAL_WIDTH_TRANSITION;

    for i in 0..bytes.len() {
        let mut extended = bytes[start..i].to_vec();
        extended.push(bytes[i]);
        if codebook.contains(extended.as_slice()) {
            // keep extending the match
            continue;
        }

        let code = phrase_code(&codebook, &bytes[start..i])?;
        out.write_bits(code, code_width)?;
        match literals {
            LiteralCoding::Byte => out.write_byte(bytes[i]),
            LiteralCoding::TwoSymbol => out.write_bit(bytes[i] != TWO_SYMBOL_ZERO),
        }

        // Width bump checks the size before the insert; the decoder checks
        // after registering, one phrase later. The two schedules line up
        // exactly and both sides read/write each code at the same width.
        if codebook.len() == transition {
            transition *= 2;
            code_width += 1;
        }
        let next_code = codebook.len() as u32;
        codebook.set(extended, next_code)?;
        start = i + 1;
    }

    // terminal code for the unfinished phrase, no trailing literal
    let tail_code = phrase_code(&codebook, &bytes[start..])?;
    out.write_bits(tail_code, code_width)?;
    out.flush();
    Ok(out)
}

/// Code of a phrase that the scan guarantees is registered: either the
/// empty phrase or a previously matched prefix.
fn phrase_code(codebook: &AssocArray<Vec<u8>, u32>, phrase: &[u8]) -> Result<u32> {
    codebook
        .get(phrase)
        .copied()
        .ok_or_else(|| Lz78Error::InvalidData("matched phrase missing from codebook".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit_string(bytes: &[u8], literals: LiteralCoding) -> String {
        encode(bytes, literals, true)
            .unwrap()
            .into_bit_trace()
            .unwrap()
    }

    #[test]
    fn test_empty_input_is_one_terminal_code() {
        let packed = encode(b"", LiteralCoding::Byte, false).unwrap().into_bytes();
        assert_eq!(packed, vec![0x00]);
        assert_eq!(bit_string(b"", LiteralCoding::Byte), "0");
    }

    #[test]
    fn test_code_width_grows_at_powers_of_two() {
        // four distinct bytes force a fresh phrase per position; code
        // widths run 1,1,2,2 for the pairs and 3 for the terminal
        let trace = bit_string(b"ABCD", LiteralCoding::Byte);
        assert_eq!(
            trace,
            concat!(
                "0", "01000001", // code 0, 'A'
                "0", "01000010", // code 0, 'B'
                "00", "01000011", // code 0, 'C'
                "00", "01000100", // code 0, 'D'
                "000" // terminal: empty phrase at width 3
            )
        );
    }

    #[test]
    fn test_repeated_input_reuses_phrases() {
        // "AAAA": phrases "A" then "AA" are registered, the tail "A" is
        // terminal: (0,'A') then (1,'A') then code 1
        let trace = bit_string(b"AAAA", LiteralCoding::Byte);
        assert_eq!(trace, concat!("0", "01000001", "1", "01000001", "01"));
    }

    #[test]
    fn test_two_symbol_literals_are_single_bits() {
        // "AB": (0,A=0) (0,B=1) then terminal 0 at width 2
        assert_eq!(bit_string(b"AB", LiteralCoding::TwoSymbol), "000100");
    }
}

//! Bit-granular stream primitives
//!
//! This module provides the writer/reader pair the codec packs its output
//! with: [`BitWriter`] accumulates bits big-endian into a byte buffer, and
//! [`BitReader`] consumes fixed-width bit groups back out of one.

mod reader;
mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

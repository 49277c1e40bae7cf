//! Error handling for LZ78 operations
//!
//! This module re-exports the error types used throughout the crate. The
//! variants live in [`crate::common`] next to the types they describe.

pub use crate::common::Lz78Error;
pub use crate::common::Result;

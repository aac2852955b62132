//! # Persistence Formats
//!
//! Pure snapshot encoding for module collections. File and database I/O
//! live in the store layer, never here.

pub mod snapshot;

pub use snapshot::{decode_modules, encode_modules};

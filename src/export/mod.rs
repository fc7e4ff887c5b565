//! Camera path export
//!
//! Reads and writes recordings in the line-based text format consumed by
//! the playback side.

pub mod text;
pub mod types;

pub use text::{decode, encode, load_from_path, read_samples, save, save_to_path, write_samples};
pub use types::FormatError;

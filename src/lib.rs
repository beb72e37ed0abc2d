//! Line-oriented word cloud generator.
//!
//! Reads a text file one line per record, normalizes casing, tallies how
//! often each distinct line occurs, and renders the tally as a
//! frequency-weighted word cloud PNG, optionally shaped by a mask image.

pub mod config;
pub mod error;
pub mod mask;
pub mod pipeline;
pub mod render;
pub mod text;

//! Text normalization and counting
//!
//! The two pure stages of the pipeline: case transforms on individual lines
//! and the frequency tally that feeds the renderer.

pub mod count;
pub mod normalize;

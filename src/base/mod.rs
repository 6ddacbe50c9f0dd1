//! Foundation types for the analysis engine.
//!
//! This module provides the primitives everything else builds on:
//! - [`SourceText`] - immutable text snapshot with line addressing
//! - [`TextRange`], [`TextSize`] - byte offsets and ranges (re-exported
//!   from `text-size`)
//!
//! This module has NO dependencies on other phel modules.

mod source;

pub use source::SourceText;

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};

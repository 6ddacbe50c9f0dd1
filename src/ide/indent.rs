//! Indentation depth from bracket nesting.
//!
//! Sums per-line balance deltas up to the caret to produce a nesting
//! level, then converts the level into the whitespace to insert. The
//! insertion is a *relative* adjustment against the caret line's existing
//! leading whitespace, never a re-indentation of existing text.

use tracing::trace;

use crate::base::SourceText;

use super::balance::BalanceScanner;

/// Spaces per nesting level.
pub const INDENT_UNIT: usize = 2;

/// An indentation decision: the absolute nesting level at the caret and
/// the whitespace to insert on the caret line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indentation {
    pub level: u32,
    pub insertion: String,
}

/// Computes nesting depth at a caret position.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndentationCalculator {
    scanner: BalanceScanner,
}

impl IndentationCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A calculator using a custom bracket scanner.
    pub fn with_scanner(scanner: BalanceScanner) -> Self {
        Self { scanner }
    }

    /// Nesting level at the caret: the summed balance of every line
    /// strictly before `caret_line`, plus the balance of
    /// `text_before_caret` (the caret line's text up to the caret).
    /// Clamped at 0; unbalanced input never panics.
    pub fn level(
        &self,
        source: &SourceText<'_>,
        caret_line: usize,
        text_before_caret: &str,
    ) -> u32 {
        let mut nesting = 0i32;
        for line in 0..caret_line.min(source.line_count()) {
            nesting += self.scanner.scan(source.line_text(line));
        }
        nesting += self.scanner.scan(text_before_caret);

        let level = nesting.max(0) as u32;
        trace!(caret_line, level, "computed indentation level");
        level
    }

    /// Whitespace to insert at the start of the caret line so its leading
    /// indentation reaches `level`. Pads only the missing difference;
    /// lines already at or past the target get nothing.
    pub fn insertion_text(
        &self,
        source: &SourceText<'_>,
        caret_line: usize,
        text_before_caret: &str,
        current_line_text: &str,
    ) -> String {
        let level = self.level(source, caret_line, text_before_caret) as usize;
        let current_spaces = current_line_text
            .chars()
            .take_while(|c| c.is_whitespace())
            .count();
        let current_level = current_spaces / INDENT_UNIT;
        let missing = level.saturating_sub(current_level);
        " ".repeat(missing * INDENT_UNIT)
    }

    /// Both halves of the decision in one call.
    pub fn compute(
        &self,
        source: &SourceText<'_>,
        caret_line: usize,
        text_before_caret: &str,
        current_line_text: &str,
    ) -> Indentation {
        Indentation {
            level: self.level(source, caret_line, text_before_caret),
            insertion: self.insertion_text(source, caret_line, text_before_caret, current_line_text),
        }
    }
}

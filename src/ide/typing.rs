//! Delimiter and quote typing assistance.
//!
//! Decides, per typed character, whether the editor should skip over an
//! existing closer, insert a matching pair, or let the character through
//! unchanged. The decision is returned as plain data; applying it (text
//! mutation, caret movement) is the host's job.

use smol_str::SmolStr;

use super::string_context::is_inside_string;

/// What the host should do with the typed character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingAction {
    /// Consume the keystroke and move the caret past the existing
    /// character; insert nothing.
    Skip,
    /// Insert `inserted` at the offset and place the caret at `caret`.
    AutoClose,
    /// No opinion; the host performs its default insertion.
    PassThrough,
}

/// A typing decision: the action, the caret target after applying it, and
/// the text to insert (for [`TypingAction::AutoClose`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingDecision {
    pub action: TypingAction,
    pub caret: usize,
    pub inserted: Option<SmolStr>,
}

impl TypingDecision {
    fn skip(offset: usize) -> Self {
        Self {
            action: TypingAction::Skip,
            caret: offset + 1,
            inserted: None,
        }
    }

    fn auto_close(offset: usize, inserted: &str) -> Self {
        Self {
            action: TypingAction::AutoClose,
            caret: offset + 1,
            inserted: Some(SmolStr::new(inserted)),
        }
    }

    fn pass_through(offset: usize) -> Self {
        Self {
            action: TypingAction::PassThrough,
            caret: offset,
            inserted: None,
        }
    }
}

fn closing_for(opening: char) -> Option<char> {
    match opening {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        _ => None,
    }
}

fn is_closing(c: char) -> bool {
    matches!(c, ')' | ']' | '}')
}

fn char_at(text: &str, offset: usize) -> Option<char> {
    text.get(offset..).and_then(|rest| rest.chars().next())
}

/// Whether inserting an opening bracket at `offset` should auto-close.
///
/// Not inside a string, not directly before a quote, and not directly
/// before an identifier character (the pair would fuse into it).
fn should_auto_close(text: &str, offset: usize) -> bool {
    if is_inside_string(text, offset) {
        return false;
    }
    match char_at(text, offset) {
        Some('"') => false,
        Some(c) if c.is_alphanumeric() || c == '-' || c == '_' => false,
        _ => true,
    }
}

/// Decide what to do with `typed` at `offset` in `text`.
///
/// Offsets outside `[0, text.len()]` (or not on a character boundary)
/// yield [`TypingAction::PassThrough`].
pub fn on_char_typed(text: &str, offset: usize, typed: char) -> TypingDecision {
    if offset > text.len() || !text.is_char_boundary(offset) {
        return TypingDecision::pass_through(offset);
    }

    match typed {
        '"' => {
            if char_at(text, offset) == Some('"') {
                TypingDecision::skip(offset)
            } else if is_inside_string(text, offset) {
                TypingDecision::pass_through(offset)
            } else {
                TypingDecision::auto_close(offset, "\"\"")
            }
        }
        '(' | '[' | '{' => {
            if should_auto_close(text, offset) {
                let mut pair = String::with_capacity(2);
                pair.push(typed);
                // closing_for covers every opening bracket matched above
                pair.push(closing_for(typed).unwrap_or(typed));
                TypingDecision::auto_close(offset, &pair)
            } else {
                TypingDecision::pass_through(offset)
            }
        }
        c if is_closing(c) => {
            if char_at(text, offset) == Some(c) {
                TypingDecision::skip(offset)
            } else {
                TypingDecision::pass_through(offset)
            }
        }
        _ => TypingDecision::pass_through(offset),
    }
}

//! Analysis features — the decisions an editor front end consumes.
//!
//! Each submodule is one feature of the structural analysis engine:
//! bracket balance and indentation depth, datum-comment attribution,
//! foldable regions, and delimiter/quote typing assistance.
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take a text snapshot / tree reference in, return
//!    a decision out; no state survives a call
//! 2. **No host types**: results are plain data, converted at the host
//!    boundary
//! 3. **Total**: out-of-range offsets and unbalanced input yield neutral
//!    results, never panics

mod balance;
mod datum_comment;
pub mod folding;
mod indent;
pub mod keywords;
mod string_context;
mod typing;

pub use balance::{BalanceScanner, DEFAULT_COMMENT_START};
pub use datum_comment::{
    FxIndexSet, SiblingKind, SiblingToken, commented_indices, is_commented, marker_pairings,
    sibling_tokens,
};
pub use folding::{ContainerKind, FoldRegion, folding_ranges};
pub use indent::{INDENT_UNIT, Indentation, IndentationCalculator};
pub use string_context::is_inside_string;
pub use typing::{TypingAction, TypingDecision, on_char_typed};

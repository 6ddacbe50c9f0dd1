//! Foldable-region computation.
//!
//! Walks the syntax tree collecting candidate collapsible ranges with
//! placeholder text, validates them (minimum length, multi-line), and
//! removes candidates subsumed by a higher-priority enclosing candidate.
//!
//! The priority rule is asymmetric: a List swallows Vectors and Maps it
//! strictly contains (fold the `(let ...)`, not the binding vector inside
//! it), but a List inside a Vector or Map always survives, and Vector/Map
//! never subsume each other.

mod collect;
mod placeholder;
mod resolve;

use smol_str::SmolStr;
use tracing::debug;

use crate::base::{SourceText, TextRange};
use crate::syntax::SyntaxNode;

/// Ranges shorter than this are never worth folding.
pub const MIN_FOLD_LENGTH: u32 = 15;

/// What kind of container produced a fold candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    List,
    Vector,
    Map,
    CommentForm,
}

/// A validated candidate region, before conflict resolution.
#[derive(Debug, Clone)]
pub struct FoldCandidate {
    pub range: TextRange,
    pub kind: ContainerKind,
    pub placeholder: SmolStr,
    pub default_collapsed: bool,
    /// Whether a List candidate is headed by a binding form; makes the
    /// priority intent explicit during conflict resolution.
    pub binding_head: bool,
}

/// A surviving foldable region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldRegion {
    pub range: TextRange,
    pub placeholder: SmolStr,
    pub default_collapsed: bool,
}

impl From<FoldCandidate> for FoldRegion {
    fn from(candidate: FoldCandidate) -> Self {
        Self {
            range: candidate.range,
            placeholder: candidate.placeholder,
            default_collapsed: candidate.default_collapsed,
        }
    }
}

/// Whether `range` is worth folding: long enough and spanning multiple
/// lines.
pub(crate) fn is_foldable(range: TextRange, source: &SourceText<'_>) -> bool {
    u32::from(range.len()) >= MIN_FOLD_LENGTH && source.is_multi_line(range)
}

/// All foldable regions of the tree under `root`, conflict-resolved, in
/// discovery order.
pub fn folding_ranges(root: &SyntaxNode, source: &SourceText<'_>) -> Vec<FoldRegion> {
    let candidates = collect::collect_candidates(root, source);
    let collected = candidates.len();
    let surviving = resolve::resolve_conflicts(candidates);
    debug!(collected, surviving = surviving.len(), "computed fold regions");
    surviving.into_iter().map(FoldRegion::from).collect()
}

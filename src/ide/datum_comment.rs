//! Datum-comment attribution.
//!
//! The `#_` reader macro disables exactly the one form following it. This
//! module decides which forms of a sibling sequence are disabled, over the
//! real ordered child elements of a container — each already known to be a
//! marker or a form — never by re-scanning raw text.
//!
//! Attribution semantics: every marker consumes the next unconsumed form
//! in left-to-right order, so `[a #_ #_ b c]` disables `b` and `c` while
//! `a` is unaffected. A marker with nothing after it stays pending and has
//! no effect.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use tracing::trace;

use crate::base::TextRange;
use crate::syntax::{SyntaxElement, SyntaxKind, SyntaxNode, view};

/// Insertion-ordered set, so commented indices iterate in source order.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Classification of one sibling element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiblingKind {
    /// The `#_` marker itself.
    Marker,
    /// Anything else meaningful at the sibling level.
    Form,
}

/// One sibling element considered for attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiblingToken {
    pub kind: SiblingKind,
    pub range: TextRange,
}

impl SiblingToken {
    pub fn new(kind: SiblingKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

/// Indices of the forms in `tokens` disabled by preceding markers.
///
/// Markers accumulate as pending; each form consumes one pending marker.
/// Deterministic in source order and independent of query order.
pub fn commented_indices(tokens: &[SiblingToken]) -> FxIndexSet<usize> {
    let mut pending = 0usize;
    let mut commented = FxIndexSet::default();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            SiblingKind::Marker => pending += 1,
            SiblingKind::Form if pending > 0 => {
                commented.insert(i);
                pending -= 1;
            }
            SiblingKind::Form => {}
        }
    }
    commented
}

/// FIFO pairing of each marker with the form it consumes, as
/// `(marker_index, form_index)` pairs. Pending markers with no form to
/// consume produce no pair.
pub fn marker_pairings(tokens: &[SiblingToken]) -> Vec<(usize, usize)> {
    let mut waiting: Vec<usize> = Vec::new();
    let mut pairs = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            SiblingKind::Marker => waiting.push(i),
            SiblingKind::Form if !waiting.is_empty() => {
                pairs.push((waiting.remove(0), i));
            }
            SiblingKind::Form => {}
        }
    }
    pairs
}

/// The classified sibling sequence of `container`'s immediate children.
pub fn sibling_tokens(container: &SyntaxNode) -> Vec<SiblingToken> {
    view::sibling_elements(container)
        .map(|el| {
            let kind = if el.kind() == SyntaxKind::COMMENT_MARKER {
                SiblingKind::Marker
            } else {
                SiblingKind::Form
            };
            SiblingToken::new(kind, el.text_range())
        })
        .collect()
}

fn parent_of(element: &SyntaxElement) -> Option<SyntaxNode> {
    match element {
        SyntaxElement::Node(node) => node.parent(),
        SyntaxElement::Token(token) => token.parent(),
    }
}

/// Whether `element` is disabled by a datum comment.
///
/// True iff some ancestor is a `FORM_COMMENT` wrapper node, or at some
/// enclosing container level the sibling whose range contains the
/// element's start offset is attributed to a preceding marker.
pub fn is_commented(element: &SyntaxElement) -> bool {
    // Host grammars that wrap `#_ form` into one node: everything inside
    // the wrapper is disabled.
    let mut ancestor = parent_of(element);
    while let Some(node) = ancestor {
        if node.kind() == SyntaxKind::FORM_COMMENT {
            return true;
        }
        ancestor = node.parent();
    }

    // Standalone markers: attribute the sibling sequence at every
    // enclosing container and test the sibling containing this element.
    let mut current = element.clone();
    while let Some(parent) = parent_of(&current) {
        if parent.kind().is_container() {
            let tokens = sibling_tokens(&parent);
            let commented = commented_indices(&tokens);
            let offset = current.text_range().start();
            if let Some(index) = tokens.iter().position(|t| t.range.contains(offset)) {
                if commented.contains(&index) {
                    trace!(?offset, index, "element disabled by datum comment");
                    return true;
                }
            }
        }
        current = parent.into();
    }
    false
}

//! Capability view over the syntax tree.
//!
//! The analysis engine only ever needs a narrow set of questions answered
//! about the tree: which children of a container are forms, which are
//! datum-comment markers, and what the leading symbol of a form is. These
//! helpers answer them for any tree built through [`super::TreeBuilder`].

use smol_str::SmolStr;

use super::kind::{SyntaxElement, SyntaxKind, SyntaxNode};

/// Immediate children of `node` that are forms (trivia, punctuation, and
/// markers excluded), in source order.
pub fn form_elements(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> + use<> {
    node.children_with_tokens().filter(|el| el.kind().is_form())
}

/// Immediate children of `node` that take part in sibling-level comment
/// attribution: forms plus standalone `#_` markers, in source order.
pub fn sibling_elements(node: &SyntaxNode) -> impl Iterator<Item = SyntaxElement> + use<> {
    node.children_with_tokens()
        .filter(|el| el.kind().is_form() || el.kind() == SyntaxKind::COMMENT_MARKER)
}

/// The `n`-th form child of `node` (0-based).
pub fn nth_form(node: &SyntaxNode, n: usize) -> Option<SyntaxElement> {
    form_elements(node).nth(n)
}

/// The text of the first symbol within `element`, descending into
/// composite forms. For `(defn f ...)` the head form is the `defn` token
/// itself; for `((make-handler) ...)` it is found inside the nested list.
pub fn first_symbol_text(element: &SyntaxElement) -> Option<SmolStr> {
    match element {
        SyntaxElement::Token(token) => {
            (token.kind() == SyntaxKind::SYMBOL).then(|| SmolStr::new(token.text()))
        }
        SyntaxElement::Node(node) => node.descendants_with_tokens().find_map(|el| match el {
            SyntaxElement::Token(token) if token.kind() == SyntaxKind::SYMBOL => {
                Some(SmolStr::new(token.text()))
            }
            _ => None,
        }),
    }
}

/// The leading symbol of a container: the first symbol of its first form
/// child, if any.
pub fn head_symbol_text(node: &SyntaxNode) -> Option<SmolStr> {
    first_symbol_text(&nth_form(node, 0)?)
}

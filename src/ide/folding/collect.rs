//! Candidate collection.
//!
//! Recursive walk over the syntax tree. Every multi-line List, Vector,
//! Map, and commented form long enough to matter becomes a candidate;
//! conflicts are resolved afterwards, not here.

use smol_str::SmolStr;

use crate::base::{SourceText, TextRange};
use crate::ide::datum_comment::{marker_pairings, sibling_tokens};
use crate::ide::keywords;
use crate::syntax::{SyntaxKind, SyntaxNode, view};

use super::{ContainerKind, FoldCandidate, is_foldable, placeholder};

const COMMENT_PLACEHOLDER: &str = "#_...";

pub(crate) fn collect_candidates(
    root: &SyntaxNode,
    source: &SourceText<'_>,
) -> Vec<FoldCandidate> {
    let mut candidates = Vec::new();
    collect_recursive(root, source, &mut candidates);
    candidates
}

fn collect_recursive(node: &SyntaxNode, source: &SourceText<'_>, out: &mut Vec<FoldCandidate>) {
    match node.kind() {
        SyntaxKind::LIST => handle_list(node, source, out),
        SyntaxKind::VEC => handle_plain(node, source, ContainerKind::Vector, "[...]", out),
        SyntaxKind::MAP => handle_plain(node, source, ContainerKind::Map, "{...}", out),
        // A host grammar that wraps `#_ form` into one node.
        SyntaxKind::FORM_COMMENT => handle_comment_range(node.text_range(), source, out),
        _ => {}
    }

    // Standalone `#_` markers among this container's children.
    if node.kind().is_container() {
        collect_marker_regions(node, source, out);
    }

    for child in node.children() {
        collect_recursive(&child, source, out);
    }
}

fn handle_list(list: &SyntaxNode, source: &SourceText<'_>, out: &mut Vec<FoldCandidate>) {
    let range = list.text_range();
    if !is_foldable(range, source) {
        return;
    }

    let head = view::head_symbol_text(list);
    out.push(FoldCandidate {
        range,
        kind: ContainerKind::List,
        placeholder: placeholder::list_placeholder(list),
        default_collapsed: head.as_deref() == Some("ns"),
        binding_head: head
            .as_deref()
            .is_some_and(keywords::is_binding_form),
    });
}

fn handle_plain(
    node: &SyntaxNode,
    source: &SourceText<'_>,
    kind: ContainerKind,
    placeholder: &'static str,
    out: &mut Vec<FoldCandidate>,
) {
    let range = node.text_range();
    if !is_foldable(range, source) {
        return;
    }
    out.push(FoldCandidate {
        range,
        kind,
        placeholder: SmolStr::new_static(placeholder),
        default_collapsed: false,
        binding_head: false,
    });
}

fn handle_comment_range(range: TextRange, source: &SourceText<'_>, out: &mut Vec<FoldCandidate>) {
    // Only multi-line commented forms are folded.
    if !is_foldable(range, source) {
        return;
    }
    out.push(FoldCandidate {
        range,
        kind: ContainerKind::CommentForm,
        placeholder: SmolStr::new_static(COMMENT_PLACEHOLDER),
        default_collapsed: false,
        binding_head: false,
    });
}

/// Derive commented regions from standalone markers: each `#_` together
/// with the form it consumes, marker start to form end.
fn collect_marker_regions(
    container: &SyntaxNode,
    source: &SourceText<'_>,
    out: &mut Vec<FoldCandidate>,
) {
    let tokens = sibling_tokens(container);
    for (marker, form) in marker_pairings(&tokens) {
        let range = TextRange::new(tokens[marker].range.start(), tokens[form].range.end());
        handle_comment_range(range, source, out);
    }
}

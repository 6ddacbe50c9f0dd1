//! Checked tree construction for host adapters.
//!
//! `rowan`'s `GreenNodeBuilder` panics on unbalanced start/finish
//! sequences. Host adapters feed the engine from foreign parser output, so
//! [`TreeBuilder`] validates the sequence instead and reports a
//! [`TreeBuildError`] from [`TreeBuilder::finish`]. The first violation
//! poisons the builder; later calls become no-ops so the underlying
//! builder is never driven into a panicking state.

use rowan::GreenNodeBuilder;
use thiserror::Error;

use super::kind::{SyntaxKind, SyntaxNode};

/// A malformed `start_node`/`token`/`finish_node` sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeBuildError {
    /// `finish_node()` was called with no node open.
    #[error("finish_node() without a matching start_node()")]
    UnmatchedFinish,
    /// A token was pushed before any node was started.
    #[error("token pushed outside of any node")]
    TokenOutsideNode,
    /// A second top-level node was started; the tree needs a single root.
    #[error("a second root node was started")]
    MultipleRoots,
    /// `finish()` was called while nodes were still open.
    #[error("finish() with {0} unclosed node(s)")]
    UnclosedNodes(usize),
    /// `finish()` was called before any node was started.
    #[error("finish() before any node was started")]
    EmptyTree,
}

/// Builds a syntax tree from a host parser's event stream.
pub struct TreeBuilder {
    inner: GreenNodeBuilder<'static>,
    depth: usize,
    root_started: bool,
    poisoned: Option<TreeBuildError>,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            inner: GreenNodeBuilder::new(),
            depth: 0,
            root_started: false,
            poisoned: None,
        }
    }

    fn poison(&mut self, error: TreeBuildError) {
        if self.poisoned.is_none() {
            self.poisoned = Some(error);
        }
    }

    /// Open a node of `kind`. Children pushed until the matching
    /// [`finish_node`](Self::finish_node) belong to it.
    pub fn start_node(&mut self, kind: SyntaxKind) {
        if self.poisoned.is_some() {
            return;
        }
        if self.depth == 0 && self.root_started {
            self.poison(TreeBuildError::MultipleRoots);
            return;
        }
        self.root_started = true;
        self.depth += 1;
        self.inner.start_node(kind.into());
    }

    /// Push a leaf token with its exact source text. Token texts must
    /// concatenate to the document text for ranges to line up.
    pub fn token(&mut self, kind: SyntaxKind, text: &str) {
        if self.poisoned.is_some() {
            return;
        }
        if self.depth == 0 {
            self.poison(TreeBuildError::TokenOutsideNode);
            return;
        }
        self.inner.token(kind.into(), text);
    }

    /// Close the most recently opened node.
    pub fn finish_node(&mut self) {
        if self.poisoned.is_some() {
            return;
        }
        if self.depth == 0 {
            self.poison(TreeBuildError::UnmatchedFinish);
            return;
        }
        self.depth -= 1;
        self.inner.finish_node();
    }

    /// Finish building and return the root node.
    pub fn finish(self) -> Result<SyntaxNode, TreeBuildError> {
        if let Some(error) = self.poisoned {
            return Err(error);
        }
        if self.depth > 0 {
            return Err(TreeBuildError::UnclosedNodes(self.depth));
        }
        if !self.root_started {
            return Err(TreeBuildError::EmptyTree);
        }
        Ok(SyntaxNode::new_root(self.inner.finish()))
    }
}

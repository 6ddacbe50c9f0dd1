//! Syntax-tree surface for the analysis engine.
//!
//! The engine is defined against a narrow capability set — node kind, text
//! range, kind-filtered children, first symbol text — rather than any host
//! editor's tree API. The tree itself is a rowan CST:
//!
//! - [`SyntaxKind`] / [`PhelLanguage`] - the kind inventory and rowan glue
//! - [`TreeBuilder`] - checked construction for host adapters
//! - [`view`] - the capability helpers the ide layer consumes
//!
//! Producing the tree (lexing/parsing) is out of scope; one adapter per
//! host feeds its parser output through [`TreeBuilder`].

mod builder;
mod kind;
pub mod view;

pub use builder::{TreeBuilder, TreeBuildError};
pub use kind::{
    PhelLanguage, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxNodeChildren, SyntaxToken,
};

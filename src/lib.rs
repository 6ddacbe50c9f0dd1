//! # phel-base
//!
//! Core library for structural analysis of Phel source code.
//!
//! This crate is the text/tree engine behind a Phel editor extension:
//! bracket-depth indentation, datum-comment (`#_`) attribution, foldable
//! region computation, and delimiter/quote typing assistance. Every
//! operation is a pure function of an immutable text snapshot and/or a
//! syntax-tree reference — no component retains state between calls.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide       → analysis features (indentation, datum comments, folding, typing)
//!   ↓
//! syntax    → SyntaxKind, rowan-based tree, TreeBuilder, capability view
//!   ↓
//! base      → primitives (SourceText, TextRange)
//! ```
//!
//! The grammar/parser that produces the syntax tree is *not* part of this
//! crate; hosts adapt their parser output through [`syntax::TreeBuilder`].

// ============================================================================
// MODULES (dependency order: base → syntax → ide)
// ============================================================================

/// Foundation types: SourceText, TextRange
pub mod base;

/// Syntax: kinds, rowan tree, checked builder, capability view
pub mod syntax;

/// Analysis features: indentation, datum comments, folding, typing
pub mod ide;

// Re-export foundation types
pub use base::{SourceText, TextRange, TextSize};
pub use syntax::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

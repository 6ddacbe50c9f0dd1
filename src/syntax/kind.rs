//! Syntax kinds for the Phel CST.
//!
//! This enum defines all node and token kinds the analysis engine can see.
//! Tokens are leaf elements (symbols, literals, punctuation); nodes are
//! composite (lists, vectors, maps, commented forms).

/// All syntax kinds (tokens and nodes) in the Phel tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (preserved for exact text ranges, never semantically meaningful)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,

    // =========================================================================
    // LEAF FORMS
    // =========================================================================
    SYMBOL,   // defn, my\ns, +
    KEYWORD,  // :require
    STRING,   // "hello"
    NUMBER,   // 42, 3.14, 0xff

    // =========================================================================
    // PUNCTUATION AND MARKERS
    // =========================================================================
    L_PAREN,        // (
    R_PAREN,        // )
    L_BRACKET,      // [
    R_BRACKET,      // ]
    L_BRACE,        // {
    R_BRACE,        // }
    COMMENT_MARKER, // #_ (datum comment, disables the next form)
    ERROR,          // anything the host could not classify

    // =========================================================================
    // NODES
    // =========================================================================
    LIST,         // (...)
    VEC,          // [...]
    MAP,          // {...}
    FORM_COMMENT, // #_ together with the form it disables, when the host wraps
    ROOT,         // top-level file node

    // Keep last for the raw-kind bounds check.
    __LAST,
}

impl SyntaxKind {
    /// Container nodes whose children form a sibling sequence.
    pub fn is_container(self) -> bool {
        matches!(self, Self::LIST | Self::VEC | Self::MAP | Self::ROOT)
    }

    /// Elements that count as forms at the sibling level.
    pub fn is_form(self) -> bool {
        matches!(
            self,
            Self::SYMBOL
                | Self::KEYWORD
                | Self::STRING
                | Self::NUMBER
                | Self::LIST
                | Self::VEC
                | Self::MAP
                | Self::FORM_COMMENT
        )
    }

    /// Whitespace and line comments.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE | Self::LINE_COMMENT)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhelLanguage {}

impl rowan::Language for PhelLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<PhelLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<PhelLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<PhelLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<PhelLanguage>;

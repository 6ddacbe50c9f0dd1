//! Keyword sets consulted by the editor features.
//!
//! Read-only, built once at process start and shared by reference; nothing
//! here mutates at runtime.

use std::sync::LazyLock;

use rustc_hash::FxHashSet;

/// Forms that define a named thing; folded lists headed by one of these
/// show the defined name in the placeholder.
pub static DEFINING_FORMS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "def",
        "def-",
        "defn",
        "defn-",
        "defmacro",
        "defmacro-",
        "defstruct",
        "definterface",
        "defexception",
        "declare",
    ]
    .into_iter()
    .collect()
});

/// Forms whose head introduces local bindings. Recorded on fold candidates
/// to make the priority intent explicit during conflict resolution.
pub static BINDING_FORMS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    ["let", "for", "loop", "dofor", "if-let", "when-let", "binding"]
        .into_iter()
        .collect()
});

/// Whether `symbol` heads a defining form.
pub fn is_defining_form(symbol: &str) -> bool {
    DEFINING_FORMS.contains(symbol)
}

/// Whether `symbol` heads a binding construct.
pub fn is_binding_form(symbol: &str) -> bool {
    BINDING_FORMS.contains(symbol)
}

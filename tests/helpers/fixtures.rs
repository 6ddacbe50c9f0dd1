//! Common Phel source fixtures for tests.

/// One multi-line function definition; the inner vector and call are too
/// short to fold.
pub const DEFN_MULTILINE: &str = "(defn f [x]\n  (+ x 1))";

/// Namespace declaration spanning two lines.
pub const NS_FORM: &str = "(ns app\\core\n  (:require app\\util))";

/// A let whose binding vector spans lines; the vector competes with the
/// enclosing list for folding.
pub const LET_WITH_BINDINGS: &str = "(let [x 1\n      y 2]\n  (+ x y))";

/// Sibling sequence with stacked datum comments: b and c are disabled.
pub const STACKED_DATUM_COMMENTS: &str = "(a #_ #_ b c)";

/// A datum comment disabling a multi-line form.
pub const COMMENTED_DEFN: &str = "#_(defn old [x]\n  (dead x))";

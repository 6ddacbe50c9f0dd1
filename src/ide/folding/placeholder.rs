//! Placeholder text for collapsed regions.

use smol_str::{SmolStr, format_smolstr};

use crate::ide::keywords;
use crate::syntax::{SyntaxElement, SyntaxNode, view};

/// Placeholder for a collapsed list.
///
/// Defining forms and `ns` show the defined name (`(defn f...`,
/// `(ns app\core...`); other lists show their head symbol (`(when...`);
/// a list with no head symbol collapses to `(...)`.
pub(crate) fn list_placeholder(list: &SyntaxNode) -> SmolStr {
    let mut forms = view::form_elements(list);
    let Some(head) = forms.next() else {
        return SmolStr::new_static("(...)");
    };
    let Some(head_text) = view::first_symbol_text(&head) else {
        return SmolStr::new_static("(...)");
    };
    let second = forms.next();

    match second {
        Some(name_form) if keywords::is_defining_form(&head_text) => {
            defining_placeholder(&head_text, &name_form)
        }
        Some(name_form) if head_text == "ns" => namespace_placeholder(&name_form),
        _ => format_smolstr!("({head_text}..."),
    }
}

fn defining_placeholder(keyword: &str, name_form: &SyntaxElement) -> SmolStr {
    match view::first_symbol_text(name_form) {
        Some(name) => format_smolstr!("({keyword} {name}..."),
        None => format_smolstr!("{keyword}..."),
    }
}

fn namespace_placeholder(name_form: &SyntaxElement) -> SmolStr {
    match view::first_symbol_text(name_form) {
        Some(name) => format_smolstr!("(ns {name}..."),
        None => SmolStr::new_static("ns..."),
    }
}

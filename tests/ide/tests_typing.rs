//! Typing assistant tests.

use phel::ide::{TypingAction, is_inside_string, on_char_typed};

#[test]
fn quote_on_an_existing_unescaped_quote_skips() {
    let text = r#"(def s "")"#;
    // Caret on the closing quote at offset 8.
    let decision = on_char_typed(text, 8, '"');
    assert_eq!(decision.action, TypingAction::Skip);
    assert_eq!(decision.caret, 9);
    assert_eq!(decision.inserted, None);
}

#[test]
fn quote_in_plain_code_auto_closes() {
    let text = "hello world";
    // `hello wor|ld` is not inside a string.
    assert!(!is_inside_string(text, 9));
    let decision = on_char_typed(text, 9, '"');
    assert_eq!(decision.action, TypingAction::AutoClose);
    assert_eq!(decision.inserted.as_deref(), Some("\"\""));
    assert_eq!(decision.caret, 10);
}

#[test]
fn quote_inside_a_string_passes_through() {
    let text = r#"(print "some text")"#;
    let decision = on_char_typed(text, 12, '"');
    assert_eq!(decision.action, TypingAction::PassThrough);
    assert_eq!(decision.inserted, None);
}

#[test]
fn brackets_auto_close_with_caret_between() {
    for (typed, pair) in [('(', "()"), ('[', "[]"), ('{', "{}")] {
        let decision = on_char_typed("x ", 2, typed);
        assert_eq!(decision.action, TypingAction::AutoClose);
        assert_eq!(decision.inserted.as_deref(), Some(pair));
        assert_eq!(decision.caret, 3);
    }
}

#[test]
fn brackets_never_fuse_into_an_identifier() {
    for blocked in ["name", "-private", "_tmp", "9lives"] {
        let decision = on_char_typed(blocked, 0, '(');
        assert_eq!(
            decision.action,
            TypingAction::PassThrough,
            "before {blocked:?}"
        );
    }
}

#[test]
fn brackets_do_not_auto_close_inside_strings_or_before_quotes() {
    let text = r#"(str "ab")"#;
    assert_eq!(on_char_typed(text, 7, '(').action, TypingAction::PassThrough);
    assert_eq!(on_char_typed(text, 5, '[').action, TypingAction::PassThrough);
}

#[test]
fn closing_bracket_skips_only_its_twin() {
    let text = "(vec [1 2])";
    assert_eq!(on_char_typed(text, 9, ']').action, TypingAction::Skip);
    assert_eq!(on_char_typed(text, 10, ')').action, TypingAction::Skip);
    assert_eq!(on_char_typed(text, 9, ')').action, TypingAction::PassThrough);
    assert_eq!(on_char_typed(text, 10, ']').action, TypingAction::PassThrough);
}

#[test]
fn ordinary_characters_are_left_alone() {
    let decision = on_char_typed("(def x 1)", 5, 'y');
    assert_eq!(decision.action, TypingAction::PassThrough);
    assert_eq!(decision.caret, 5);
    assert_eq!(decision.inserted, None);
}

#[test]
fn offsets_past_the_end_are_neutral() {
    for typed in ['"', '(', ')', 'a'] {
        let decision = on_char_typed("ab", 99, typed);
        assert_eq!(decision.action, TypingAction::PassThrough);
    }
}

#[test]
fn typing_at_the_very_end_of_the_document() {
    let decision = on_char_typed("(def x ", 7, '"');
    assert_eq!(decision.action, TypingAction::AutoClose);

    // At EOF inside an unterminated string the quote closes it by hand.
    let decision = on_char_typed("(def s \"abc", 11, '"');
    assert_eq!(decision.action, TypingAction::PassThrough);
}

//! Balance scanner tests over the documented properties.

use phel::ide::BalanceScanner;
use rstest::rstest;

#[rstest]
// Balanced outside strings/comments scans to zero.
#[case("(defn f [x] {:a 1})", 0)]
#[case("(map inc [1 2 3])", 0)]
#[case("", 0)]
// Net opens and closes, including negative balances.
#[case("(let [x 1", 2)]
#[case("(((", 3)]
#[case(")))", -3)]
#[case("] })", -3)]
// Brackets inside string literals never count.
#[case(r#"(foo "(" )"#, 0)]
#[case(r#"(foo ")))" )"#, 0)]
// An escaped quote does not terminate the string early; the trailing
// paren still closes the outer one.
#[case(r#"(foo "\"" )"#, 0)]
// Everything after a comment start is invisible.
#[case("(foo # ) ) )", 1)]
#[case("# (((", 0)]
// Reader forms starting with # are not comments.
#[case("(foo #_(bar", 2)]
#[case("#{:a :b", 1)]
fn scan_matches_expected(#[case] line: &str, #[case] expected: i32) {
    assert_eq!(BalanceScanner::new().scan(line), expected, "line: {line:?}");
}

#[test]
fn scanning_is_per_line_state_free() {
    // The scanner carries no state across calls: an unterminated string
    // on one line does not poison the next.
    let scanner = BalanceScanner::new();
    assert_eq!(scanner.scan(r#"(print "unterminated"#), 1);
    assert_eq!(scanner.scan("(+ 1 2)"), 0);
}

#[test]
fn alternate_comment_start() {
    let scanner = BalanceScanner::with_comment_start(';');
    assert_eq!(scanner.scan("(foo ; ("), 1);
    // The default marker exceptions do not apply to other comment chars.
    assert_eq!(scanner.scan("(foo ;_("), 1);
}

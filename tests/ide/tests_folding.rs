//! Folding range tests from source text to surviving regions.

use phel::base::SourceText;
use phel::ide::folding_ranges;

use crate::helpers::{fixtures, reader};

#[test]
fn defn_scenario_folds_exactly_the_whole_form() {
    let source_text = fixtures::DEFN_MULTILINE; // (defn f [x]\n  (+ x 1))
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);

    // The [x] vector is single-line/too short and never becomes a
    // candidate; only the whole defn survives.
    assert_eq!(regions.len(), 1);
    let region = &regions[0];
    assert_eq!(usize::from(region.range.start()), 0);
    assert_eq!(usize::from(region.range.end()), source_text.len());
    assert_eq!(region.placeholder, "(defn f...");
    assert!(!region.default_collapsed);
}

#[test]
fn namespace_form_collapses_by_default() {
    let source_text = fixtures::NS_FORM;
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);

    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].placeholder, r"(ns app\core...");
    assert!(regions[0].default_collapsed);
}

#[test]
fn binding_vector_loses_to_its_let() {
    let source_text = fixtures::LET_WITH_BINDINGS;
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);

    // The multi-line binding vector is collected but subsumed by the let.
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].placeholder, "(let...");
    assert!(!regions[0].default_collapsed);
}

#[test]
fn multi_line_map_folds_to_braces() {
    let source_text = "{:a 1\n :b 222222}";
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);
    assert_eq!(regions.len(), 1);
    assert_eq!(regions[0].placeholder, "{...}");
}

#[test]
fn commented_multi_line_form_gets_a_marker_region() {
    let source_text = fixtures::COMMENTED_DEFN; // #_(defn old [x]\n  (dead x))
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);

    // Both the commented region (marker through form end) and the defn
    // itself fold; neither subsumes the other.
    assert_eq!(regions.len(), 2);
    let placeholders: Vec<&str> = regions.iter().map(|r| r.placeholder.as_str()).collect();
    assert!(placeholders.contains(&"#_..."));
    assert!(placeholders.contains(&"(defn old..."));

    let marker_region = regions
        .iter()
        .find(|r| r.placeholder == "#_...")
        .unwrap();
    assert_eq!(usize::from(marker_region.range.start()), 0);
    assert_eq!(usize::from(marker_region.range.end()), source_text.len());
}

#[test]
fn single_line_source_folds_nothing() {
    let source_text = "(defn f [x] (+ x 1))";
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);
    assert!(folding_ranges(&root, &source).is_empty());
}

#[test]
fn empty_source_folds_nothing() {
    let root = reader::parse("");
    let source = SourceText::new("");
    assert!(folding_ranges(&root, &source).is_empty());
}

#[test]
fn list_inside_a_vector_still_folds() {
    // Asymmetry end-to-end: a vector containing a multi-line list keeps
    // both regions.
    let source_text = "[:handlers\n (fn [x]\n   (process x))]";
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);
    let placeholders: Vec<&str> = regions.iter().map(|r| r.placeholder.as_str()).collect();
    assert!(placeholders.contains(&"[...]"));
    assert!(placeholders.contains(&"(fn..."));
    assert_eq!(regions.len(), 2);
}

#[test]
fn sibling_forms_fold_independently() {
    let source_text = "(defn first-fn [a]\n  (inc a))\n\n(defn second-fn [b]\n  (dec b))";
    let root = reader::parse(source_text);
    let source = SourceText::new(source_text);

    let regions = folding_ranges(&root, &source);
    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].placeholder, "(defn first-fn...");
    assert_eq!(regions[1].placeholder, "(defn second-fn...");
}

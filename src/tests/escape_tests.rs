use crate::{escape, escape_class, regex};

#[test]
fn test_escape_metacharacters() {
    assert_eq!(escape(".*+?^${}()|[]\\"), r"\.\*\+\?\^\$\{\}\(\)\|\[\]\\");
}

#[test]
fn test_escape_passes_other_characters() {
    assert_eq!(escape(""), "");
    assert_eq!(escape("a-b c_1#@"), "a-b c_1#@");
    assert_eq!(escape("héllo"), "héllo");
}

#[test]
fn test_escape_class_keeps_ranges() {
    assert_eq!(escape_class("a-zA-Z0-9_"), "a-zA-Z0-9_");
    assert_eq!(escape_class("a]b"), r"a\]b");
    assert_eq!(escape_class("^-]"), r"\^-\]");
}

#[test]
fn test_literal_matches_itself_only() {
    for text in ["1+1=2", "(a|b)", "$5.00", "[x]", "a\\b", "{3}", "^?*"] {
        let exact = regex().start().literal(text).end();
        assert!(exact.test(text, "").unwrap(), "{text:?} should match {}", exact);

        let mutated = text.replace(|c: char| !c.is_alphanumeric(), "x");
        assert!(!exact.test(&mutated, "").unwrap(), "{mutated:?} should not match {}", exact);
    }
}

#[test]
fn test_literal_escaped_once() {
    let b = regex().literal("a.b");
    assert_eq!(b.pattern(), r"a\.b");
    assert_eq!(b.digit().literal("?").pattern(), r"a\.b\d\?");
}

#[test]
fn test_escape_class_breaks_set_operators() {
    assert_eq!(escape_class("a&&b"), r"a\&\&b");
    assert_eq!(escape_class("x~~y"), r"x\~\~y");
    assert_eq!(escape_class("--"), r"-\-");
    assert_eq!(escape_class("---"), r"-\-\-");
    assert_eq!(escape_class("a-z0-9"), "a-z0-9");
}

#[test]
fn test_class_set_operators_match_literally() {
    let and = regex().start().any_of("a&&b").end();
    assert!(and.test("&", "").unwrap());
    assert!(and.test("a", "").unwrap());
    assert!(and.test("b", "").unwrap());

    let tilde = regex().start().any_of("x~~y").end();
    assert!(tilde.test("~", "").unwrap());
    assert!(tilde.test("x", "").unwrap());

    let dashes = regex().start().any_of("--").end();
    assert!(dashes.test("-", "").unwrap());
    assert!(!dashes.test("a", "").unwrap());

    let not_and = regex().start().none_of("&&").end();
    assert!(!not_and.test("&", "").unwrap());
    assert!(not_and.test("a", "").unwrap());
}

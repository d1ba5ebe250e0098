use crate::{regex, Error, RegexBuilder};

#[test]
fn test_quantifier_suffixes() {
    let d = regex().digit();
    assert_eq!(d.maybe().unwrap().pattern(), r"\d?");
    assert_eq!(d.one_or_more().unwrap().pattern(), r"\d+");
    assert_eq!(d.zero_or_more().unwrap().pattern(), r"\d*");
    assert_eq!(d.repeat(4).unwrap().pattern(), r"\d{4}");
    assert_eq!(d.between(2, 5).unwrap().pattern(), r"\d{2,5}");
    assert_eq!(d.at_least(8).unwrap().pattern(), r"\d{8,}");
    assert_eq!(d.between(3, 3).unwrap().pattern(), r"\d{3,3}");
}

#[test]
fn test_quantifier_on_empty_sequence() {
    let empty = regex();
    assert_eq!(empty.maybe(), Err(Error::Sequence { op: "maybe" }));
    assert_eq!(empty.one_or_more(), Err(Error::Sequence { op: "one_or_more" }));
    assert_eq!(empty.zero_or_more(), Err(Error::Sequence { op: "zero_or_more" }));
    assert_eq!(empty.repeat(2), Err(Error::Sequence { op: "repeat" }));
    assert_eq!(empty.between(1, 2), Err(Error::Sequence { op: "between" }));
    assert_eq!(empty.at_least(1), Err(Error::Sequence { op: "at_least" }));
}

#[test]
fn test_word_one_or_more_is_redundant() {
    assert_eq!(regex().word().one_or_more(), Err(Error::RedundantQuantifier));
}

#[test]
fn test_word_relaxed_in_place() {
    assert_eq!(regex().word().zero_or_more().unwrap().pattern(), r"\w*");
    assert_eq!(regex().word().maybe().unwrap().pattern(), r"\w?");
    assert_eq!(
        regex().literal("-").word().zero_or_more().unwrap().fragments().len(),
        2
    );
}

#[test]
fn test_relaxed_word_is_quantified() {
    let relaxed = regex().word().zero_or_more().unwrap();
    assert!(matches!(relaxed.maybe(), Err(Error::DoubleQuantifier { op: "maybe", .. })));
    assert!(matches!(relaxed.zero_or_more(), Err(Error::DoubleQuantifier { .. })));
}

#[test]
fn test_word_counted_is_incompatible() {
    let word = regex().word();
    assert_eq!(word.repeat(2), Err(Error::IncompatibleQuantifier { op: "repeat" }));
    assert_eq!(word.between(1, 2), Err(Error::IncompatibleQuantifier { op: "between" }));
    assert_eq!(word.at_least(1), Err(Error::IncompatibleQuantifier { op: "at_least" }));
}

#[test]
fn test_double_quantifier() {
    let plus = regex().digit().one_or_more().unwrap();
    assert_eq!(
        plus.maybe(),
        Err(Error::DoubleQuantifier { op: "maybe", fragment: r"\d+".into() })
    );
    assert!(matches!(plus.one_or_more(), Err(Error::DoubleQuantifier { .. })));
    assert!(matches!(plus.zero_or_more(), Err(Error::DoubleQuantifier { .. })));
}

#[test]
fn test_counted_quantifier_cannot_stack() {
    let counted = regex().digits(3);
    assert!(matches!(counted.one_or_more(), Err(Error::DoubleQuantifier { .. })));
    assert!(matches!(counted.repeat(2), Err(Error::DoubleQuantifier { op: "repeat", .. })));
    assert!(matches!(
        regex().any().maybe().unwrap().at_least(2),
        Err(Error::DoubleQuantifier { op: "at_least", .. })
    ));
}

#[test]
fn test_escaped_quantifier_characters_can_be_quantified() {
    assert_eq!(regex().literal("?").maybe().unwrap().pattern(), r"\??");
    assert_eq!(regex().literal("a+").one_or_more().unwrap().pattern(), r"a\++");
    assert_eq!(regex().literal("{2}").repeat(2).unwrap().pattern(), r"\{2\}{2}");
}

#[test]
fn test_anchor_not_quantifiable() {
    assert_eq!(
        regex().start().maybe(),
        Err(Error::NotQuantifiable { op: "maybe", fragment: "^".into() })
    );
    assert!(matches!(regex().word_boundary().repeat(2), Err(Error::NotQuantifiable { .. })));
}

#[test]
fn test_between_bounds() {
    assert!(matches!(regex().digit().between(5, 2), Err(Error::Argument { op: "between", .. })));
}

#[test]
fn test_quantifier_applies_to_last_fragment_only() {
    let b = regex().literal("ab").digit().maybe().unwrap();
    assert_eq!(b.fragments().len(), 2);
    assert_eq!(b.fragments()[0].as_str(), "ab");
    assert_eq!(b.fragments()[1].as_str(), r"\d?");
}

#[test]
fn test_preloaded_fragments_follow_the_same_rules() {
    let word = RegexBuilder::with_fragments([r"\w+"]);
    assert_eq!(word.one_or_more(), Err(Error::RedundantQuantifier));
    assert_eq!(word.zero_or_more().unwrap().pattern(), r"\w*");

    let anchored = RegexBuilder::with_fragments(["^", "a"]);
    assert_eq!(anchored.one_or_more().unwrap().pattern(), "^a+");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::Sequence { op: "maybe" }.to_string(),
        "maybe() must follow a pattern part"
    );
    assert_eq!(
        Error::RedundantQuantifier.to_string(),
        "cannot apply one_or_more() after word(), it already includes +"
    );
}

#[test]
fn test_empty_fragment_not_quantifiable() {
    let empty = || -> crate::Result<RegexBuilder> {
        Err(Error::NotQuantifiable { op: "one_or_more", fragment: String::new() })
    };

    let stacked = regex().digit().one_or_more().unwrap().literal("");
    assert_eq!(stacked.one_or_more(), empty());
    assert!(matches!(
        regex().start().literal("").maybe(),
        Err(Error::NotQuantifiable { op: "maybe", .. })
    ));
    assert_eq!(regex().word().lookahead("").one_or_more(), empty());
    assert_eq!(
        regex().digit().lookahead_with(|r| r).unwrap().one_or_more(),
        empty()
    );
    assert_eq!(RegexBuilder::with_fragments([""]).one_or_more(), empty());
    assert!(matches!(regex().literal("").maybe(), Err(Error::NotQuantifiable { .. })));
    assert!(matches!(regex().literal("").repeat(2), Err(Error::NotQuantifiable { .. })));
}

use crate::error::{Error, Result};
use crate::escape::{escape, escape_class};
use crate::fragment::{Fragment, FragmentKind, WORD};

const LETTER: &str = "[a-zA-Z]";

/// The fixed vocabulary of atomic pattern pieces.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd)]
pub enum Atom {
    Start,
    End,
    Digit,
    Letter,
    Any,
    Space,
    Tab,
    WordBoundary,
    Word,
    Literal(String),
    Digits { min: u32, max: Option<u32> },
    Letters { min: u32, max: Option<u32> },
    AnyOf(String),
    NoneOf(String),
}

impl Atom {
    pub fn name(&self) -> &'static str {
        match self {
            Atom::Start => "start",
            Atom::End => "end",
            Atom::Digit => "digit",
            Atom::Letter => "letter",
            Atom::Any => "any",
            Atom::Space => "space",
            Atom::Tab => "tab",
            Atom::WordBoundary => "word_boundary",
            Atom::Word => "word",
            Atom::Literal(_) => "literal",
            Atom::Digits { .. } => "digits",
            Atom::Letters { .. } => "letters",
            Atom::AnyOf(_) => "any_of",
            Atom::NoneOf(_) => "none_of",
        }
    }

    /// Rejects repeat bounds with `max < min`.
    pub fn check(&self) -> Result<()> {
        match *self {
            Atom::Digits { min, max: Some(max) } | Atom::Letters { min, max: Some(max) } => {
                check_bounds(self.name(), min, max)
            }
            _ => Ok(()),
        }
    }

    pub fn fragment(&self) -> Fragment {
        match self {
            Atom::Start => Fragment::new("^", FragmentKind::Anchor),
            Atom::End => Fragment::new("$", FragmentKind::Anchor),
            Atom::WordBoundary => Fragment::new(r"\b", FragmentKind::Anchor),
            Atom::Word => Fragment::new(WORD, FragmentKind::Word),
            Atom::Digit => Fragment::atom(r"\d"),
            Atom::Letter => Fragment::atom(LETTER),
            Atom::Any => Fragment::atom("."),
            Atom::Space => Fragment::atom(" "),
            Atom::Tab => Fragment::atom(r"\t"),
            Atom::Literal(text) => Fragment::atom(escape(text)),
            Atom::Digits { min, max } => Fragment::atom(format!(r"\d{}", counted(*min, *max))),
            Atom::Letters { min, max } => Fragment::atom(format!("{LETTER}{}", counted(*min, *max))),
            Atom::AnyOf(chars) => Fragment::atom(format!("[{}]", escape_class(chars))),
            Atom::NoneOf(chars) => Fragment::atom(format!("[^{}]", escape_class(chars))),
        }
    }
}

pub(crate) fn check_bounds(op: &'static str, min: u32, max: u32) -> Result<()> {
    if max < min {
        return Err(Error::argument(
            op,
            format!("max must be >= min (got min {min}, max {max})"),
        ));
    }
    Ok(())
}

/// `{min}` or `{min,max}`.
pub(crate) fn counted(min: u32, max: Option<u32>) -> String {
    match max {
        None => format!("{{{min}}}"),
        Some(max) => format!("{{{min},{max}}}"),
    }
}

//! Parses method-chain text such as
//! `start().digits(3).literal("-").group(literal("a").or(literal("b")))`
//! into a [`Chain`].
//!
//! Operation names may be written in camelCase (`oneOrMore`) or snake_case
//! (`one_or_more`). A leading `regex()` call is optional.

use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use crate::builder::{regex, RegexBuilder};
use crate::error::{Error, Result};
use crate::op::{Chain, Op};
use crate::pattern::Atom;
use crate::quantifier::Quantifier;

pub fn parse_chain(s: &str) -> Result<Chain> {
    Chain::from_str(s)
}

impl FromStr for Chain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parser = Parser { src: s, chars: s.char_indices().peekable() };
        let chain = parser.chain()?;
        parser.skip_whitespace();
        if parser.chars.peek().is_some() {
            return Err(Error::Syntax { pos: parser.pos(), reason: "unexpected trailing input" });
        }
        Ok(chain)
    }
}

impl FromStr for RegexBuilder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Chain::from_str(s)?.apply_to(regex())
    }
}

#[derive(Debug)]
enum Arg {
    Int(i64),
    Number(String),
    Str(String),
    Chain(Chain),
}

impl Arg {
    fn describe(&self) -> String {
        match self {
            Arg::Int(n) => n.to_string(),
            Arg::Number(text) => text.clone(),
            Arg::Str(text) => format!("{text:?}"),
            Arg::Chain(_) => "a builder chain".into(),
        }
    }
}

struct Parser<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn pos(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.chars.next();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.chars.next();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, reason: &'static str) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(Error::Syntax { pos: self.pos(), reason })
        }
    }

    fn chain(&mut self) -> Result<Chain> {
        let mut ops = Vec::new();
        let mut first = true;
        loop {
            self.skip_whitespace();
            let (pos, name) = self.ident()?;
            self.expect('(', "expected '('")?;
            let args = self.args()?;
            if !(first && name == "regex" && args.is_empty()) {
                ops.push(resolve(pos, name, args)?);
            }
            first = false;
            if !self.eat('.') {
                return Ok(ops.into_iter().collect());
            }
        }
    }

    fn ident(&mut self) -> Result<(usize, &'a str)> {
        let start = self.pos();
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.chars.next();
        }
        let end = self.pos();
        if start == end {
            return Err(Error::Syntax { pos: start, reason: "expected an operation name" });
        }
        Ok((start, &self.src[start..end]))
    }

    // Called after the opening '('; consumes the closing ')'.
    fn args(&mut self) -> Result<Vec<Arg>> {
        let mut args = Vec::new();
        if self.eat(')') {
            return Ok(args);
        }
        loop {
            args.push(self.arg()?);
            if self.eat(')') {
                return Ok(args);
            }
            self.expect(',', "expected ',' or ')'")?;
        }
    }

    fn arg(&mut self) -> Result<Arg> {
        self.skip_whitespace();
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.chars.next();
                self.string(quote).map(Arg::Str)
            }
            Some(c) if c == '-' || c.is_ascii_digit() => self.number(),
            Some(c) if c.is_ascii_alphabetic() || c == '_' => self.chain().map(Arg::Chain),
            _ => Err(Error::Syntax { pos: self.pos(), reason: "expected an argument" }),
        }
    }

    // Called after the opening quote.
    fn string(&mut self, quote: char) -> Result<String> {
        let mut text = String::new();
        while let Some((pos, c)) = self.chars.next() {
            match c {
                '\\' => match self.chars.next() {
                    Some((_, 'n')) => text.push('\n'),
                    Some((_, 't')) => text.push('\t'),
                    Some((_, 'r')) => text.push('\r'),
                    Some((_, escaped)) => text.push(escaped),
                    None => return Err(Error::Syntax { pos, reason: "unterminated escape" }),
                },
                c if c == quote => return Ok(text),
                c => text.push(c),
            }
        }
        Err(Error::Syntax { pos: self.src.len(), reason: "unterminated string" })
    }

    fn number(&mut self) -> Result<Arg> {
        let start = self.pos();
        if self.peek() == Some('-') {
            self.chars.next();
        }
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.chars.next();
        }
        let text = &self.src[start..self.pos()];
        match text.parse::<i64>() {
            Ok(n) => Ok(Arg::Int(n)),
            Err(_) if text.parse::<f64>().is_ok() => Ok(Arg::Number(text.to_owned())),
            Err(_) => Err(Error::Syntax { pos: start, reason: "malformed number" }),
        }
    }
}

fn resolve(pos: usize, name: &str, args: Vec<Arg>) -> Result<Op> {
    match name {
        "start" => simple(Atom::Start, &args),
        "end" => simple(Atom::End, &args),
        "digit" => simple(Atom::Digit, &args),
        "letter" => simple(Atom::Letter, &args),
        "any" => simple(Atom::Any, &args),
        "space" => simple(Atom::Space, &args),
        "tab" => simple(Atom::Tab, &args),
        "word" => simple(Atom::Word, &args),
        "wordBoundary" | "word_boundary" => simple(Atom::WordBoundary, &args),
        "maybe" => bare(Quantifier::Maybe, &args),
        "oneOrMore" | "one_or_more" => bare(Quantifier::OneOrMore, &args),
        "zeroOrMore" | "zero_or_more" => bare(Quantifier::ZeroOrMore, &args),
        "literal" => Ok(Op::Atom(Atom::Literal(text("literal", args)?))),
        "anyOf" | "any_of" => Ok(Op::Atom(Atom::AnyOf(text("any_of", args)?))),
        "noneOf" | "none_of" => Ok(Op::Atom(Atom::NoneOf(text("none_of", args)?))),
        "digits" => {
            let (min, max) = bounds("digits", args)?;
            Ok(Op::Atom(Atom::Digits { min, max }))
        }
        "letters" => {
            let (min, max) = bounds("letters", args)?;
            Ok(Op::Atom(Atom::Letters { min, max }))
        }
        "repeat" => Ok(Quantifier::Repeat(single_count("repeat", args)?).into()),
        "atLeast" | "at_least" => Ok(Quantifier::AtLeast(single_count("at_least", args)?).into()),
        "between" => match <[Arg; 2]>::try_from(args) {
            Ok([min, max]) => Ok(Op::Quantify(Quantifier::Between {
                min: count("between", min)?,
                max: count("between", max)?,
            })),
            Err(args) => Err(arity("between", "two arguments", &args)),
        },
        "group" => Ok(Op::Group(callback("group", args)?)),
        "or" => Ok(Op::Or(callback("or", args)?)),
        "lookahead" => match one(args) {
            Ok(Arg::Str(text)) => Ok(Op::Lookahead(text)),
            Ok(Arg::Chain(chain)) => Ok(Op::LookaheadWith(chain)),
            Ok(other) => Err(Error::argument(
                "lookahead",
                format!("requires a string or builder chain, got {}", other.describe()),
            )),
            Err(args) => Err(arity("lookahead", "one argument", &args)),
        },
        unknown => {
            log::debug!("unknown operation {unknown:?} at {pos}");
            Err(Error::UnknownOperation(unknown.to_owned()))
        }
    }
}

fn arity(op: &'static str, expected: &str, args: &[Arg]) -> Error {
    Error::argument(op, format!("takes {expected}, got {}", args.len()))
}

fn no_args(op: &'static str, args: &[Arg]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        Err(arity(op, "no arguments", args))
    }
}

fn simple(atom: Atom, args: &[Arg]) -> Result<Op> {
    no_args(atom.name(), args)?;
    Ok(atom.into())
}

fn bare(quantifier: Quantifier, args: &[Arg]) -> Result<Op> {
    no_args(quantifier.name(), args)?;
    Ok(quantifier.into())
}

fn one(args: Vec<Arg>) -> std::result::Result<Arg, Vec<Arg>> {
    match <[Arg; 1]>::try_from(args) {
        Ok([arg]) => Ok(arg),
        Err(args) => Err(args),
    }
}

fn text(op: &'static str, args: Vec<Arg>) -> Result<String> {
    match one(args) {
        Ok(Arg::Str(text)) => Ok(text),
        Ok(other) => Err(Error::argument(op, format!("requires a string, got {}", other.describe()))),
        Err(args) => Err(arity(op, "one argument", &args)),
    }
}

fn callback(op: &'static str, args: Vec<Arg>) -> Result<Chain> {
    match one(args) {
        Ok(Arg::Chain(chain)) => Ok(chain),
        Ok(other) => Err(Error::argument(
            op,
            format!("requires a builder chain, got {}", other.describe()),
        )),
        Err(args) => Err(arity(op, "one argument", &args)),
    }
}

fn count(op: &'static str, arg: Arg) -> Result<u32> {
    let reason = || format!("requires a non-negative integer, got {}", arg.describe());
    match arg {
        Arg::Int(n) => u32::try_from(n).map_err(|_| Error::argument(op, reason())),
        _ => Err(Error::argument(op, reason())),
    }
}

fn single_count(op: &'static str, args: Vec<Arg>) -> Result<u32> {
    let arg = one(args).map_err(|args| arity(op, "one argument", &args))?;
    count(op, arg)
}

fn bounds(op: &'static str, args: Vec<Arg>) -> Result<(u32, Option<u32>)> {
    let mut args = args.into_iter();
    match (args.next(), args.next(), args.next()) {
        (Some(min), None, None) => Ok((count(op, min)?, None)),
        (Some(min), Some(max), None) => Ok((count(op, min)?, Some(count(op, max)?))),
        (None, ..) => Err(Error::argument(op, "takes one or two arguments, got 0")),
        _ => Err(Error::argument(op, format!("takes one or two arguments, got {}", 3 + args.len()))),
    }
}

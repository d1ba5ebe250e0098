use std::str::FromStr;

use crate::error::{Error, Result};

/// Matching options, parsed from a flag string such as `"im"`.
///
/// | flag | effect |
/// |------|--------|
/// | `i`  | case-insensitive |
/// | `m`  | `^` and `$` match at line boundaries |
/// | `s`  | `.` matches `\n` |
/// | `y`  | the match must begin at the start of the input |
/// | `g`, `u` | accepted, no effect |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Flags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub sticky: bool,
}

impl FromStr for Flags {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut flags = Flags::default();
        let mut seen = String::new();
        for c in s.chars() {
            if seen.contains(c) {
                return Err(Error::InvalidFlag(c));
            }
            seen.push(c);
            match c {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'y' => flags.sticky = true,
                'g' | 'u' => {}
                other => return Err(Error::InvalidFlag(other)),
            }
        }
        Ok(flags)
    }
}

impl Flags {
    /// The pattern text handed to the engine, with inline flags applied.
    pub fn source(&self, pattern: &str) -> String {
        let mut inline = String::new();
        if self.case_insensitive {
            inline.push('i');
        }
        if self.multi_line {
            inline.push('m');
        }
        if self.dot_matches_new_line {
            inline.push('s');
        }

        let mut source = String::with_capacity(pattern.len() + 12);
        if !inline.is_empty() {
            source.push_str(&format!("(?{inline})"));
        }
        if self.sticky {
            source.push_str(&format!(r"\A(?:{pattern})"));
        } else {
            source.push_str(pattern);
        }
        source
    }
}

/// A compiled pattern.
///
/// Patterns the `regex` crate accepts are compiled with it; anything it
/// rejects (lookahead, mostly) is retried with `fancy_regex`.
///
/// Both engines are Unicode-aware: `\d`, `\w` and `\b` (and so `digit()`,
/// `digits(..)`, `word()` and `word_boundary()`) match any Unicode digit or
/// word character, not just ASCII. `digits(3)` accepts `"١٢٣"`. Use
/// `any_of("0-9")` or `any_of("a-zA-Z0-9_")` where only ASCII is wanted.
#[derive(Debug)]
pub enum Matcher {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Matcher {
    #[tracing::instrument(level = "debug", err)]
    pub fn new(pattern: &str, flags: &str) -> Result<Self> {
        let source = flags.parse::<Flags>()?.source(pattern);
        match regex::Regex::new(&source) {
            Ok(regex) => Ok(Matcher::Basic(regex)),
            Err(err) => {
                log::debug!("regex rejected {source:?} ({err}), retrying with fancy_regex");
                fancy_regex::Regex::new(&source)
                    .map(Matcher::Fancy)
                    .map_err(|err| Error::Compile { pattern: source, message: err.to_string() })
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Basic(regex) => regex.as_str(),
            Matcher::Fancy(regex) => regex.as_str(),
        }
    }

    pub fn is_fancy(&self) -> bool {
        matches!(self, Matcher::Fancy(_))
    }

    #[tracing::instrument(level = "trace", skip(self), fields(pattern = self.as_str()), ret, err)]
    pub fn is_match(&self, input: &str) -> Result<bool> {
        match self {
            Matcher::Basic(regex) => Ok(regex.is_match(input)),
            Matcher::Fancy(regex) => regex.is_match(input).map_err(|err| Error::Match {
                pattern: regex.as_str().to_owned(),
                message: err.to_string(),
            }),
        }
    }
}

use std::fmt;

use crate::error::Result;
use crate::fragment::Fragment;
use crate::matcher::Matcher;
use crate::op::Op;
use crate::pattern::Atom;
use crate::quantifier::Quantifier;

/// Starts an empty pattern.
pub fn regex() -> RegexBuilder {
    RegexBuilder::default()
}

/// An immutable, chainable pattern under construction.
///
/// Every operation borrows the builder and returns a new one, so an
/// intermediate builder can be branched into several continuations:
///
/// ```
/// use fluent_regex::regex;
///
/// let base = regex().literal("a");
/// assert_eq!(base.literal("b").pattern(), "ab");
/// assert_eq!(base.literal("c").pattern(), "ac");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegexBuilder {
    fragments: Vec<Fragment>,
    // How many sub-builders deep this builder sits.
    depth: usize,
}

/// What a sub-builder callback may hand back.
pub trait IntoBuilder {
    fn into_builder(self) -> Result<RegexBuilder>;
}

impl IntoBuilder for RegexBuilder {
    fn into_builder(self) -> Result<RegexBuilder> {
        Ok(self)
    }
}

impl IntoBuilder for Result<RegexBuilder> {
    fn into_builder(self) -> Result<RegexBuilder> {
        self
    }
}

impl RegexBuilder {
    /// A root builder preloaded with `fragments`.
    pub fn with_fragments<I>(fragments: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        RegexBuilder {
            fragments: fragments.into_iter().map(Into::into).collect(),
            depth: 0,
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// The pattern rendered so far.
    pub fn pattern(&self) -> String {
        self.fragments.iter().map(Fragment::as_str).collect()
    }

    fn push(&self, fragment: Fragment) -> Self {
        log::trace!("push {fragment:?} at depth {}", self.depth);
        let mut fragments = Vec::with_capacity(self.fragments.len() + 1);
        fragments.extend_from_slice(&self.fragments);
        fragments.push(fragment);
        RegexBuilder { fragments, depth: self.depth }
    }

    fn atom(&self, atom: Atom) -> Result<Self> {
        atom.check()?;
        Ok(self.fixed(atom))
    }

    fn fixed(&self, atom: Atom) -> Self {
        self.push(atom.fragment())
    }

    fn quantify(&self, quantifier: Quantifier) -> Result<Self> {
        let replacement = quantifier.apply(&self.fragments)?;
        let mut fragments = self.fragments.clone();
        if let Some(last) = fragments.last_mut() {
            *last = replacement;
        }
        Ok(RegexBuilder { fragments, depth: self.depth })
    }

    /// Runs `build` on a fresh sub-builder and renders what it returns.
    fn nested<F, R>(&self, op: &'static str, build: F) -> Result<String>
    where
        F: FnOnce(RegexBuilder) -> R,
        R: IntoBuilder,
    {
        let child = RegexBuilder { fragments: Vec::new(), depth: self.depth + 1 };
        let rendered = build(child).into_builder()?.pattern();
        log::trace!("{op} rendered {rendered:?} at depth {}", self.depth + 1);
        Ok(rendered)
    }

    /// Applies one operation given as a value.
    pub fn apply(&self, op: &Op) -> Result<Self> {
        match op {
            Op::Atom(atom) => self.atom(atom.clone()),
            Op::Quantify(quantifier) => self.quantify(*quantifier),
            Op::Group(chain) => self.group(|r| chain.apply_to(r)),
            Op::Or(chain) => self.or(|r| chain.apply_to(r)),
            Op::Lookahead(text) => Ok(self.lookahead(text)),
            Op::LookaheadWith(chain) => self.lookahead_with(|r| chain.apply_to(r)),
        }
    }

    /// `^`
    pub fn start(&self) -> Self {
        self.fixed(Atom::Start)
    }

    /// `$`
    pub fn end(&self) -> Self {
        self.fixed(Atom::End)
    }

    pub fn digit(&self) -> Self {
        self.fixed(Atom::Digit)
    }

    /// Exactly `n` digits.
    pub fn digits(&self, n: u32) -> Self {
        self.fixed(Atom::Digits { min: n, max: None })
    }

    /// Between `min` and `max` digits, inclusive.
    pub fn digits_between(&self, min: u32, max: u32) -> Result<Self> {
        self.atom(Atom::Digits { min, max: Some(max) })
    }

    /// One ASCII letter.
    pub fn letter(&self) -> Self {
        self.fixed(Atom::Letter)
    }

    pub fn letters(&self, n: u32) -> Self {
        self.fixed(Atom::Letters { min: n, max: None })
    }

    pub fn letters_between(&self, min: u32, max: u32) -> Result<Self> {
        self.atom(Atom::Letters { min, max: Some(max) })
    }

    /// One or more word characters.
    ///
    /// The built-in `+` can be relaxed with [`zero_or_more`](Self::zero_or_more)
    /// or [`maybe`](Self::maybe), but not stacked or counted.
    pub fn word(&self) -> Self {
        self.fixed(Atom::Word)
    }

    pub fn any(&self) -> Self {
        self.fixed(Atom::Any)
    }

    /// `text`, matched literally.
    pub fn literal(&self, text: &str) -> Self {
        self.fixed(Atom::Literal(text.to_owned()))
    }

    /// Any one character of `chars`. Ranges such as `a-z` are kept.
    pub fn any_of(&self, chars: &str) -> Self {
        self.fixed(Atom::AnyOf(chars.to_owned()))
    }

    pub fn none_of(&self, chars: &str) -> Self {
        self.fixed(Atom::NoneOf(chars.to_owned()))
    }

    pub fn space(&self) -> Self {
        self.fixed(Atom::Space)
    }

    pub fn tab(&self) -> Self {
        self.fixed(Atom::Tab)
    }

    pub fn word_boundary(&self) -> Self {
        self.fixed(Atom::WordBoundary)
    }

    /// Makes the last fragment optional.
    pub fn maybe(&self) -> Result<Self> {
        self.quantify(Quantifier::Maybe)
    }

    pub fn one_or_more(&self) -> Result<Self> {
        self.quantify(Quantifier::OneOrMore)
    }

    pub fn zero_or_more(&self) -> Result<Self> {
        self.quantify(Quantifier::ZeroOrMore)
    }

    /// Repeats the last fragment exactly `n` times.
    pub fn repeat(&self, n: u32) -> Result<Self> {
        self.quantify(Quantifier::Repeat(n))
    }

    pub fn between(&self, min: u32, max: u32) -> Result<Self> {
        self.quantify(Quantifier::Between { min, max })
    }

    pub fn at_least(&self, min: u32) -> Result<Self> {
        self.quantify(Quantifier::AtLeast(min))
    }

    /// Appends what `build` produces as a capturing group.
    ///
    /// ```
    /// use fluent_regex::regex;
    ///
    /// let colors = regex()
    ///     .group(|r| r.literal("red").or(|r| r.literal("blue")))
    ///     .unwrap();
    /// assert_eq!(colors.pattern(), "(red|blue)");
    /// ```
    pub fn group<F, R>(&self, build: F) -> Result<Self>
    where
        F: FnOnce(RegexBuilder) -> R,
        R: IntoBuilder,
    {
        let inner = self.nested("group", build)?;
        Ok(self.push(Fragment::atom(format!("({inner})"))))
    }

    /// Appends `|` followed by what `build` produces.
    ///
    /// This only delimits the alternative properly inside a [`group`](Self::group);
    /// on a root builder the alternation spans the whole pattern.
    pub fn or<F, R>(&self, build: F) -> Result<Self>
    where
        F: FnOnce(RegexBuilder) -> R,
        R: IntoBuilder,
    {
        if self.depth == 0 {
            log::warn!("or() used outside of a group; the alternation spans the whole pattern");
        }
        let inner = self.nested("or", build)?;
        Ok(self.push(Fragment::atom(format!("|{inner}"))))
    }

    /// Appends `text` verbatim. The caller supplies the `(?=` ... `)` delimiters.
    pub fn lookahead(&self, text: &str) -> Self {
        self.push(Fragment::atom(text))
    }

    /// Appends what `build` produces, unescaped and without delimiters.
    pub fn lookahead_with<F, R>(&self, build: F) -> Result<Self>
    where
        F: FnOnce(RegexBuilder) -> R,
        R: IntoBuilder,
    {
        let inner = self.nested("lookahead", build)?;
        Ok(self.push(Fragment::atom(inner)))
    }

    /// Compiles the pattern with the host engine. See [`Matcher::new`] for `flags`.
    pub fn to_regex(&self, flags: &str) -> Result<Matcher> {
        Matcher::new(&self.pattern(), flags)
    }

    /// Compiles the pattern and tests it against `input`.
    pub fn test(&self, input: &str, flags: &str) -> Result<bool> {
        self.to_regex(flags)?.is_match(input)
    }
}

impl fmt::Display for RegexBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fragments.iter().try_for_each(|fragment| fmt::Display::fmt(fragment, f))
    }
}

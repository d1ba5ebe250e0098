use std::fmt;

/// The rendered form of the `word()` macro.
pub(crate) const WORD: &str = r"\w+";

/// What produced a [`Fragment`], as far as quantifier legality cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    /// A character, class, literal run, group or raw text.
    Atom,
    /// A zero-width anchor: `^`, `$` or `\b`.
    Anchor,
    /// The one-or-more word character macro with its built-in `+`.
    Word,
}

/// One concatenable unit of pattern text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fragment {
    text: String,
    kind: FragmentKind,
}

impl Fragment {
    pub(crate) fn new(text: impl Into<String>, kind: FragmentKind) -> Self {
        Fragment { text: text.into(), kind }
    }

    pub(crate) fn atom(text: impl Into<String>) -> Self {
        Self::new(text, FragmentKind::Atom)
    }

    /// Wraps already rendered pattern text, classifying it by its content.
    ///
    /// Used to preload a builder with fragments produced elsewhere.
    pub fn raw(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = match text.as_str() {
            WORD => FragmentKind::Word,
            "^" | "$" | r"\b" => FragmentKind::Anchor,
            _ => FragmentKind::Atom,
        };
        Fragment { text, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> FragmentKind {
        self.kind
    }

    /// Anchors and empty text have nothing of their own to repeat.
    pub fn is_quantifiable(&self) -> bool {
        self.kind != FragmentKind::Anchor && !self.text.is_empty()
    }

    /// Whether the text ends in an unescaped `?`, `+`, `*` or `{m}`, `{m,}`,
    /// `{m,n}` suffix.
    pub fn is_quantified(&self) -> bool {
        let text = self.text.as_str();
        let body = match text.chars().last() {
            Some('?' | '+' | '*') => &text[..text.len() - 1],
            Some('}') => match counted_suffix_start(text) {
                Some(open) => &text[..open],
                None => return false,
            },
            _ => return false,
        };
        !ends_in_escape(body)
    }

    pub(crate) fn with_suffix(&self, suffix: &str) -> Self {
        Fragment::atom(format!("{}{}", self.text, suffix))
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Fragment::raw(text)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Fragment::raw(text)
    }
}

/// Byte offset of the `{` opening a trailing counted repeat, if any.
fn counted_suffix_start(text: &str) -> Option<usize> {
    let inner_end = text.len() - 1;
    let open = text[..inner_end].rfind('{')?;
    let inner = &text[open + 1..inner_end];
    let (min, max) = match inner.split_once(',') {
        Some((min, max)) => (min, max),
        None => (inner, ""),
    };
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !min.is_empty() && digits(min) && digits(max) {
        Some(open)
    } else {
        None
    }
}

/// An odd run of trailing backslashes escapes whatever follows it.
fn ends_in_escape(text: &str) -> bool {
    text.bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

use crate::error::{Error, Result};
use crate::fragment::{Fragment, FragmentKind};
use crate::pattern::{check_bounds, counted};

/// A repetition suffix applied to the most recent fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum Quantifier {
    Maybe,
    OneOrMore,
    ZeroOrMore,
    Repeat(u32),
    Between { min: u32, max: u32 },
    AtLeast(u32),
}

impl Quantifier {
    pub fn name(&self) -> &'static str {
        match self {
            Quantifier::Maybe => "maybe",
            Quantifier::OneOrMore => "one_or_more",
            Quantifier::ZeroOrMore => "zero_or_more",
            Quantifier::Repeat(_) => "repeat",
            Quantifier::Between { .. } => "between",
            Quantifier::AtLeast(_) => "at_least",
        }
    }

    fn suffix(&self) -> String {
        match *self {
            Quantifier::Maybe => "?".into(),
            Quantifier::OneOrMore => "+".into(),
            Quantifier::ZeroOrMore => "*".into(),
            Quantifier::Repeat(n) => counted(n, None),
            Quantifier::Between { min, max } => counted(min, Some(max)),
            Quantifier::AtLeast(min) => format!("{{{min},}}"),
        }
    }

    /// Applies the quantifier to the last fragment of `fragments`, returning
    /// the replacement for that fragment.
    pub fn apply(&self, fragments: &[Fragment]) -> Result<Fragment> {
        let op = self.name();
        let last = fragments.last().ok_or(Error::Sequence { op })?;

        if last.kind() == FragmentKind::Word {
            return match self {
                Quantifier::OneOrMore => Err(Error::RedundantQuantifier),
                Quantifier::ZeroOrMore => Ok(Fragment::atom(r"\w*")),
                Quantifier::Maybe => Ok(Fragment::atom(r"\w?")),
                _ => Err(Error::IncompatibleQuantifier { op }),
            };
        }
        if !last.is_quantifiable() {
            return Err(Error::NotQuantifiable { op, fragment: last.to_string() });
        }
        if last.is_quantified() {
            return Err(Error::DoubleQuantifier { op, fragment: last.to_string() });
        }

        if let Quantifier::Between { min, max } = *self {
            check_bounds(op, min, max)?;
        }
        let suffix = self.suffix();
        log::trace!("{op}: {last} -> {last}{suffix}");
        Ok(last.with_suffix(&suffix))
    }
}

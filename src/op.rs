use crate::builder::RegexBuilder;
use crate::error::Result;
use crate::pattern::Atom;
use crate::quantifier::Quantifier;

/// A single builder operation, as a value.
///
/// Nested chains stand in for the callbacks taken by
/// [`RegexBuilder::group`], [`RegexBuilder::or`] and
/// [`RegexBuilder::lookahead_with`].
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub enum Op {
    Atom(Atom),
    Quantify(Quantifier),
    Group(Chain),
    Or(Chain),
    Lookahead(String),
    LookaheadWith(Chain),
}

/// An ordered list of operations, usually parsed from chain text.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Chain(pub Vec<Op>);

impl Chain {
    pub fn ops(&self) -> &[Op] {
        &self.0
    }

    /// Applies every operation in order on top of `base`.
    pub fn apply_to(&self, base: RegexBuilder) -> Result<RegexBuilder> {
        self.0.iter().try_fold(base, |builder, op| builder.apply(op))
    }
}

impl From<Atom> for Op {
    fn from(atom: Atom) -> Self {
        Op::Atom(atom)
    }
}

impl From<Quantifier> for Op {
    fn from(quantifier: Quantifier) -> Self {
        Op::Quantify(quantifier)
    }
}

impl FromIterator<Op> for Chain {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Chain(iter.into_iter().collect())
    }
}

//! A fluent builder for regular expressions.
//!
//! ```
//! use fluent_regex::regex;
//!
//! let ssn = regex()
//!     .start()
//!     .digits(3)
//!     .literal("-")
//!     .digits(2)
//!     .literal("-")
//!     .digits(4)
//!     .end();
//! assert_eq!(ssn.pattern(), r"^\d{3}-\d{2}-\d{4}$");
//! assert!(ssn.test("123-45-6789", "").unwrap());
//! ```

mod builder;
mod error;
mod escape;
mod fragment;
mod matcher;
mod op;
mod parser;
mod pattern;
mod quantifier;

pub use builder::{regex, IntoBuilder, RegexBuilder};
pub use error::{Error, Result};
pub use escape::{escape, escape_class};
pub use fragment::{Fragment, FragmentKind};
pub use matcher::{Flags, Matcher};
pub use op::{Chain, Op};
pub use parser::parse_chain;
pub use pattern::Atom;
pub use quantifier::Quantifier;

use std::env;
use std::io::{self, BufRead};

use anyhow::{bail, Context};

const USAGE: &str = "usage: fluent-regex -E <chain> [-f <flags>] | -p <chain>";

/// Command-line entry point.
///
/// `-p <chain>` prints the rendered pattern. `-E <chain> [-f <flags>]` tests
/// every line of stdin and reports whether any of them matched.
pub fn run() -> anyhow::Result<bool> {
    let mut args = env::args().skip(1);
    let mode = args.next().context(USAGE)?;
    let chain_str = args.next().context("No chain provided")?;
    log::debug!("Chain string: {:?}", chain_str);

    let builder: RegexBuilder = chain_str
        .parse()
        .with_context(|| format!("Invalid chain {chain_str:?}"))?;
    log::debug!("Built pattern: {:?}", builder.pattern());

    match mode.as_str() {
        "-p" => {
            println!("{builder}");
            Ok(true)
        }
        "-E" => {
            let flags = match (args.next().as_deref(), args.next()) {
                (None, _) => String::new(),
                (Some("-f"), Some(flags)) => flags,
                _ => bail!(USAGE),
            };
            let matcher = builder.to_regex(&flags)?;
            log::debug!("Compiled {:?} (fancy: {})", matcher.as_str(), matcher.is_fancy());

            let mut has_match = false;
            for line in io::stdin().lock().lines() {
                let line = line.context("Failed to read stdin")?;
                if matcher.is_match(&line)? {
                    log::debug!("Matched: {:?}", line);
                    has_match = true;
                }
            }
            if has_match {
                println!("Pattern matches!");
            } else {
                println!("Pattern does not match.");
            }
            Ok(has_match)
        }
        other => bail!("Unknown mode {other:?}; {USAGE}"),
    }
}

#[cfg(test)]
mod tests {
    mod builder_tests;
    mod escape_tests;
    mod fragment_tests;
    mod matcher_tests;
    mod parser_tests;
    mod quantifier_tests;
}

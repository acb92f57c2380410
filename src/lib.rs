//! `argot` is a small declarative option parsing engine.
//!
//! Unlike parsers that generate your whole command line program, `argot` does one
//! thing: given a set of declared options and the raw argument vector, it matches
//! tokens to options, binds values, enforces required options, and collects the
//! leftover positional tokens.  Everything else - exit codes, value conversion,
//! recovery - stays in your hands.  Specifically, `argot` prioritizes the
//! following design concerns:
//! * *Declaration first*:
//! The caller describes each option up front ([`Opt`]), gathers them into a
//! registry ([`OptSet`]), and inspects the same records after the parse call.
//! * *Zero-copy values*:
//! Bound values are string slices into the original argument vector; the engine
//! never copies or re-allocates the input tokens.
//! * *Two conventions*:
//! Token interpretation follows either the POSIX or the GNU convention
//! ([`Style`]), selected on the [`ParseContext`].
//! * *Structured failure*:
//! A parse either fully succeeds or stops at the first problem with a
//! [`ParseError`] describing what went wrong and for which token.
//!
//! # Usage
//! ```
//! use argot::{parse, Opt, OptSet, ParseContext};
//!
//! let args = vec!["demo", "--foo", "input.txt", "-qz", "north", "south"];
//! let mut opts = OptSet::new(vec![
//!     Opt::arg("foo", "f", true, "The input file.").unwrap(),
//!     Opt::flag("quiet", "q", "Suppress output.").unwrap(),
//!     Opt::flag("zip", "z", "Compress output.").unwrap(),
//! ])
//! .unwrap();
//! let mut context = ParseContext::new(&args).collect_remaining();
//!
//! parse(&mut opts, &mut context).unwrap();
//!
//! assert_eq!(opts.get("foo").unwrap().value(), Some("input.txt"));
//! assert!(opts.get("quiet").unwrap().is_set());
//! assert!(opts.get("zip").unwrap().is_set());
//! assert_eq!(context.remaining(), &["north", "south"]);
//! ```
//!
//! # Token Semantics
//! `argot` matches the argument vector against the declared options with the
//! following set of rules.
//!
//! * A token starting with `--` is a long option token.
//! The text after `--` (up to the first `=`, if any) must match a declared long
//! name.
//! * A long value option binds the text after `=` when present (`--foo=file`),
//! and otherwise consumes the next token whole (`--foo file`).
//! A long flag accepts no value; `--flag=x` is rejected.
//! * A token starting with a single `-` (and longer than one character) is a
//! short option token.
//! Its characters are read as a cluster: each character must match a declared
//! short name.
//! Flags set-and-continue (`-qz` sets both `q` and `z`).
//! A value option ends the cluster: any remaining characters are its value
//! verbatim (`-ffile`), otherwise the next token is consumed.
//! * Under [`Style::Gnu`], a short token whose entire body equals a declared
//! short name matches atomically, so short names longer than one character are
//! tolerated without cluster decomposition.
//! Single-character tokens behave identically under both styles.
//! * Any other token is positional.
//! By default the first positional token ends option scanning: it and every
//! subsequent token are collected verbatim, in order.
//! With [`ParseContext::mixed`], positional tokens are collected wherever they
//! appear and option scanning continues.
//! Positional tokens are rejected unless the context opted in via
//! [`ParseContext::collect_remaining`].
//! * After an error-free scan, every option declared as required must have been
//! set; the first unmet one (in declaration order) fails the parse.
//!
//! The parse stops at the first error.
//! Options matched strictly before the failing token keep their bound state;
//! there is no rollback.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug records from the help printer.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use model::*;
pub use parser::{parse, ConfigError, Console, ErrorKind, ParseError, Printer, UserInterface};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}

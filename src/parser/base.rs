use thiserror::Error;

use crate::api::{OptSet, ParseContext};
use crate::matcher::{scan, MatchError};

/// A declaration-time error: the option set cannot be parsed against as
/// configured (nameless option, required flag, duplicate names).
#[derive(Debug, Error)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// The class of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required option was never set.
    MissingRequired,
    /// A value option was matched without a value to bind.
    MissingArg,
    /// A token (or one of its cluster characters) matched nothing declared.
    UnknownOpt,
}

/// A parse-time error: the first problem encountered while scanning, or the
/// first unmet required option after an error-free scan.
///
/// The `Display` rendering maps the error onto a human-readable English
/// sentence; [`ParseError::kind`] and [`ParseError::subject`] expose the
/// structured pieces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The named required option was never set.
    #[error("Missing required option '{0}'.")]
    MissingRequired(String),

    /// The named value option had no inline value and no following token.
    #[error("Missing value for option '{0}'.")]
    MissingArg(String),

    /// The offending token matched nothing declared.
    #[error("Unknown option '{0}'.")]
    UnknownOpt(String),
}

impl ParseError {
    /// The class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MissingRequired(_) => ErrorKind::MissingRequired,
            ParseError::MissingArg(_) => ErrorKind::MissingArg,
            ParseError::UnknownOpt(_) => ErrorKind::UnknownOpt,
        }
    }

    /// The textual context: the offending token, or the option display name.
    pub fn subject(&self) -> &str {
        match self {
            ParseError::MissingRequired(subject)
            | ParseError::MissingArg(subject)
            | ParseError::UnknownOpt(subject) => subject,
        }
    }
}

impl From<MatchError> for ParseError {
    fn from(error: MatchError) -> Self {
        match error {
            MatchError::MissingValue(name) => ParseError::MissingArg(name),
            MatchError::UnknownOpt(token) => ParseError::UnknownOpt(token),
        }
    }
}

/// Run one parse call: scan the context's argument range against the
/// declared options, then enforce required options.
///
/// On success, matched options carry their state and the context's
/// remaining-args sink holds the positional tokens in original order.
/// On failure, scanning stopped at the first error and options matched
/// strictly before the failing token remain mutated - there is no rollback.
///
/// ### Example
/// ```
/// use argot::{parse, ErrorKind, Opt, OptSet, ParseContext};
///
/// let args = vec!["program", "-q"];
/// let mut opts = OptSet::new(vec![
///     Opt::arg("foo", "f", true, "The foo option.").unwrap(),
///     Opt::flag("quiet", "q", "The quiet flag.").unwrap(),
/// ])
/// .unwrap();
/// let mut context = ParseContext::new(&args);
///
/// let error = parse(&mut opts, &mut context).unwrap_err();
///
/// assert_eq!(error.kind(), ErrorKind::MissingRequired);
/// assert_eq!(error.subject(), "foo");
/// // The flag matched before the post-scan check stands.
/// assert!(opts.get("quiet").unwrap().is_set());
/// ```
pub fn parse<'a>(
    opts: &mut OptSet<'a>,
    context: &mut ParseContext<'a>,
) -> Result<(), ParseError> {
    scan(opts, context)?;

    // Runs only after an error-free scan, so argument order never affects
    // which required options count as satisfied.
    for opt in opts.iter() {
        if opt.is_required() && !opt.is_set() {
            return Err(ParseError::MissingRequired(opt.name().to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Opt;
    use rstest::rstest;

    fn required_registry<'a>() -> OptSet<'a> {
        OptSet::new(vec![
            Opt::arg("foo", "f", true, "").unwrap(),
            Opt::arg("bar", "b", true, "").unwrap(),
            Opt::flag("quiet", "q", "").unwrap(),
        ])
        .unwrap()
    }

    #[rstest]
    #[case(vec!["program", "--foo", "x", "--bar", "y"])]
    #[case(vec!["program", "--bar", "y", "--foo", "x"])]
    #[case(vec!["program", "-q", "--bar", "y", "-fx"])]
    fn required_satisfied(#[case] args: Vec<&str>) {
        // Setup
        let mut opts = required_registry();
        let mut context = ParseContext::new(&args);

        // Execute
        parse(&mut opts, &mut context).unwrap();

        // Verify
        assert!(opts.get("foo").unwrap().is_set());
        assert!(opts.get("bar").unwrap().is_set());
    }

    #[rstest]
    #[case(vec!["program"], "foo")]
    #[case(vec!["program", "-q"], "foo")]
    #[case(vec!["program", "--bar", "y"], "foo")]
    #[case(vec!["program", "--foo", "x"], "bar")]
    fn required_unmet(#[case] args: Vec<&str>, #[case] subject: &str) {
        // Setup
        let mut opts = required_registry();
        let mut context = ParseContext::new(&args);

        // Execute
        let error = parse(&mut opts, &mut context).unwrap_err();

        // Verify: the first unmet required option in declaration order wins.
        assert_eq!(error, ParseError::MissingRequired(subject.to_string()));
        assert_eq!(error.kind(), ErrorKind::MissingRequired);
        assert_eq!(error.subject(), subject);
    }

    #[test]
    fn required_display_name_uses_short() {
        let args = vec!["program"];
        let mut opts = OptSet::new(vec![Opt::arg("", "f", true, "").unwrap()]).unwrap();
        let mut context = ParseContext::new(&args);

        let error = parse(&mut opts, &mut context).unwrap_err();

        assert_eq!(error, ParseError::MissingRequired("f".to_string()));
    }

    #[test]
    fn scan_error_precedes_required_check() {
        // The scan stops at '--moot'; the unmet required 'foo' is never reached.
        let args = vec!["program", "--moot"];
        let mut opts = required_registry();
        let mut context = ParseContext::new(&args);

        let error = parse(&mut opts, &mut context).unwrap_err();

        assert_eq!(error, ParseError::UnknownOpt("--moot".to_string()));
    }

    #[test]
    fn trivial_success() {
        let args = vec!["program"];
        let mut opts = OptSet::new(vec![Opt::flag("quiet", "q", "").unwrap()]).unwrap();
        let mut context = ParseContext::new(&args).collect_remaining();

        parse(&mut opts, &mut context).unwrap();

        assert_eq!(context.remaining_len(), 0);
    }

    #[rstest]
    #[case(ParseError::MissingRequired("foo".to_string()), "Missing required option 'foo'.")]
    #[case(ParseError::MissingArg("foo".to_string()), "Missing value for option 'foo'.")]
    #[case(ParseError::UnknownOpt("--moot".to_string()), "Unknown option '--moot'.")]
    fn error_formatting(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn match_error_conversion() {
        assert_eq!(
            ParseError::from(MatchError::MissingValue("foo".to_string())),
            ParseError::MissingArg("foo".to_string())
        );
        assert_eq!(
            ParseError::from(MatchError::UnknownOpt("-x".to_string())),
            ParseError::UnknownOpt("-x".to_string())
        );
    }
}

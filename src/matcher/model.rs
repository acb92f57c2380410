/// The syntactic class of a single argument token.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A `--` prefixed token, carrying the text after the marker.
    Long(&'a str),
    /// A single `-` prefixed token longer than one character, carrying the
    /// text after the marker.
    Short(&'a str),
    /// Anything else, including `-` alone.
    Positional(&'a str),
}

impl<'a> Token<'a> {
    pub(crate) fn classify(raw: &'a str) -> Self {
        if let Some(body) = raw.strip_prefix("--") {
            Token::Long(body)
        } else if raw.len() > 1 {
            match raw.strip_prefix('-') {
                Some(body) => Token::Short(body),
                None => Token::Positional(raw),
            }
        } else {
            Token::Positional(raw)
        }
    }
}

pub(crate) fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}

use thiserror::Error;

use crate::api::{OptSet, ParseContext};
use crate::matcher::model::{split_equals_delimiter, Token};
use crate::model::Style;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum MatchError {
    #[error("Missing value for option '{0}'.")]
    MissingValue(String),

    #[error("Unknown option '{0}'.")]
    UnknownOpt(String),
}

/// Scan the context's argument range left to right, mutating the matched
/// options and the context's remaining-args sink.
///
/// Stops at the first error; options matched strictly before the failing
/// token keep their bound state.
pub(crate) fn scan<'a>(
    opts: &mut OptSet<'a>,
    context: &mut ParseContext<'a>,
) -> Result<(), MatchError> {
    let args = context.args;
    let style = context.style;
    let mixed = context.mixed;
    let mut cursor = context.offset;
    // Once trailing, every token is positional - even ones resembling options.
    let mut trailing = false;

    while cursor < args.len() {
        let token = args[cursor];
        cursor += 1;

        if trailing {
            push_positional(context, token)?;
            continue;
        }

        match Token::classify(token) {
            Token::Long(body) => scan_long(opts, body, token, args, &mut cursor)?,
            Token::Short(body) => scan_short(opts, style, body, token, args, &mut cursor)?,
            Token::Positional(token) => {
                push_positional(context, token)?;

                if !mixed {
                    trailing = true;
                }
            }
        }
    }

    Ok(())
}

fn push_positional<'a>(context: &mut ParseContext<'a>, token: &'a str) -> Result<(), MatchError> {
    if context.push_remaining(token) {
        Ok(())
    } else {
        // The caller declared no interest in positional tokens.
        Err(MatchError::UnknownOpt(token.to_string()))
    }
}

fn scan_long<'a>(
    opts: &mut OptSet<'a>,
    body: &'a str,
    token: &'a str,
    args: &'a [&'a str],
    cursor: &mut usize,
) -> Result<(), MatchError> {
    let (name, inline) = split_equals_delimiter(body);
    let index = match opts.resolve_long(name) {
        Some(index) => index,
        None => return Err(MatchError::UnknownOpt(token.to_string())),
    };

    if opts.at(index).is_flag() {
        if inline.is_some() {
            // Flags accept no value; '--flag=x' matches nothing declared.
            return Err(MatchError::UnknownOpt(token.to_string()));
        }

        opts.at_mut(index).mark();
    } else {
        let value = match inline {
            Some(value) => value,
            None => match next_token(args, cursor) {
                Some(value) => value,
                None => {
                    return Err(MatchError::MissingValue(opts.at(index).name().to_string()));
                }
            },
        };

        opts.at_mut(index).bind(value);
    }

    Ok(())
}

fn scan_short<'a>(
    opts: &mut OptSet<'a>,
    style: Style,
    body: &'a str,
    token: &'a str,
    args: &'a [&'a str],
    cursor: &mut usize,
) -> Result<(), MatchError> {
    // Gnu tolerates short names longer than one character, matched atomically
    // against the whole token body.
    if style == Style::Gnu {
        if let Some(index) = opts.resolve_short(body) {
            if opts.at(index).is_flag() {
                opts.at_mut(index).mark();
            } else {
                let value = match next_token(args, cursor) {
                    Some(value) => value,
                    None => {
                        return Err(MatchError::MissingValue(opts.at(index).name().to_string()));
                    }
                };

                opts.at_mut(index).bind(value);
            }

            return Ok(());
        }
    }

    for (at, single) in body.char_indices() {
        let end = at + single.len_utf8();
        let index = match opts.resolve_short(&body[at..end]) {
            Some(index) => index,
            None => return Err(MatchError::UnknownOpt(token.to_string())),
        };

        if opts.at(index).is_flag() {
            opts.at_mut(index).mark();
            continue;
        }

        // A value option ends the cluster: any remaining characters are its
        // inline value, otherwise the next token is consumed.
        let rest = &body[end..];
        let value = if rest.is_empty() {
            match next_token(args, cursor) {
                Some(value) => value,
                None => {
                    return Err(MatchError::MissingValue(opts.at(index).name().to_string()));
                }
            }
        } else {
            rest
        };

        opts.at_mut(index).bind(value);
        return Ok(());
    }

    Ok(())
}

fn next_token<'a>(args: &'a [&'a str], cursor: &mut usize) -> Option<&'a str> {
    if *cursor < args.len() {
        let token = args[*cursor];
        *cursor += 1;
        Some(token)
    } else {
        None
    }
}

mod base;
mod interface;
mod printer;

pub use base::{parse, ConfigError, ErrorKind, ParseError};
pub use interface::{Console, UserInterface};
pub use printer::Printer;

#[cfg(test)]
pub(crate) use interface::util;

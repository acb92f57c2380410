mod core;
mod model;

pub(crate) use self::core::{scan, MatchError};

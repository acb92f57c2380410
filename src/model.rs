/// The token interpretation convention used by the parse call.
///
/// Both styles agree on long options, single-character short options, and
/// positional handling.  They differ on short names longer than one character:
/// `Posix` always decomposes a short token into a cluster of single characters,
/// while `Gnu` first tries to match the whole token body against a declared
/// short name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    /// Short tokens are clusters of single-character short names.
    #[default]
    Posix,
    /// Short tokens matching a declared short name whole are taken atomically.
    Gnu,
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

use crate::model::Style;

/// The configuration and output state for one parse call.
///
/// The context borrows the argument slice; it never copies or mutates it.
/// Configuration is fixed once [`parse`](crate::parse) is invoked - the scan
/// itself only writes into the remaining-args sink.
///
/// ### Example
/// ```
/// use argot::{ParseContext, Style};
///
/// let args = vec!["program", "--foo", "x"];
/// let context = ParseContext::new(&args)
///     .style(Style::Gnu)
///     .mixed(true)
///     .collect_remaining();
/// assert_eq!(context.args_len(), 3);
/// assert_eq!(context.remaining_len(), 0);
/// ```
pub struct ParseContext<'a> {
    pub(crate) style: Style,
    pub(crate) args: &'a [&'a str],
    pub(crate) offset: usize,
    pub(crate) mixed: bool,
    pub(crate) remaining: Option<Vec<&'a str>>,
}

impl<'a> ParseContext<'a> {
    /// Create a context over the argument slice.
    ///
    /// Defaults: POSIX style, offset `1` (skipping the program name), mixed
    /// mode off, and no positional collection.
    pub fn new(args: &'a [&'a str]) -> Self {
        Self {
            style: Style::default(),
            args,
            offset: 1,
            mixed: false,
            remaining: None,
        }
    }

    /// Select the token interpretation convention.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the first index to scan.
    /// The default of `1` skips the program name.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Allow positional tokens anywhere in the argument vector.
    ///
    /// When off (the default), the first positional token ends option
    /// scanning and every subsequent token is collected verbatim.
    pub fn mixed(mut self, mixed: bool) -> Self {
        self.mixed = mixed;
        self
    }

    /// Collect positional tokens into the remaining-args sink.
    ///
    /// Without this, any positional token fails the parse.
    pub fn collect_remaining(mut self) -> Self {
        self.remaining.replace(Vec::default());
        self
    }

    /// The collected positional tokens, in their original order.
    /// Empty when collection was not enabled.
    pub fn remaining(&self) -> &[&'a str] {
        self.remaining.as_deref().unwrap_or(&[])
    }

    /// The number of collected positional tokens.
    pub fn remaining_len(&self) -> usize {
        self.remaining().len()
    }

    /// The length of the argument slice under scan.
    pub fn args_len(&self) -> usize {
        self.args.len()
    }

    // Returns false when the sink is absent (positional collection disabled).
    pub(crate) fn push_remaining(&mut self, token: &'a str) -> bool {
        match &mut self.remaining {
            Some(sink) => {
                sink.push(token);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_defaults() {
        let args = vec!["program", "a", "b"];
        let context = ParseContext::new(&args);

        assert_eq!(context.style, Style::Posix);
        assert_eq!(context.offset, 1);
        assert!(!context.mixed);
        assert_eq!(context.args_len(), 3);
        assert_eq!(context.remaining(), &[] as &[&str]);
        assert_eq!(context.remaining_len(), 0);
    }

    #[test]
    fn context_configure() {
        let args = vec!["a", "b"];
        let context = ParseContext::new(&args)
            .style(Style::Gnu)
            .offset(0)
            .mixed(true)
            .collect_remaining();

        assert_eq!(context.style, Style::Gnu);
        assert_eq!(context.offset, 0);
        assert!(context.mixed);
        assert!(context.remaining.is_some());
    }

    #[test]
    fn context_push_remaining() {
        // Setup
        let args = vec!["a"];
        let mut without_sink = ParseContext::new(&args);
        let mut with_sink = ParseContext::new(&args).collect_remaining();

        // Execute & verify
        assert!(!without_sink.push_remaining("x"));
        assert!(with_sink.push_remaining("x"));
        assert!(with_sink.push_remaining("y"));
        assert_eq!(with_sink.remaining(), &["x", "y"]);
        assert_eq!(with_sink.remaining_len(), 2);
    }
}

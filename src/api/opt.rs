use std::collections::HashMap;

use crate::constant::DEFAULT_ARG_NAME;
use crate::parser::ConfigError;

/// A single declared option: its identity, constraints, and parse state.
///
/// An `Opt` is declared before the parse call and mutated in place by it.
/// Afterwards, query [`Opt::is_set`] and [`Opt::value`] for the outcome.
/// The lifetime `'a` ties any bound value to the argument slice it points
/// into; the option itself owns no token text.
#[derive(Debug)]
pub struct Opt<'a> {
    long: String,
    short: String,
    flag: bool,
    required: bool,
    help: String,
    arg_name: String,
    value: Option<&'a str>,
    set: bool,
}

impl<'a> Opt<'a> {
    /// Declare an option from its full description.
    ///
    /// At least one of `long`/`short` must be non-empty, and a flag cannot be
    /// required - violating either is a declaration error.
    /// Prefer the [`Opt::arg`] and [`Opt::flag`] conveniences.
    ///
    /// ### Example
    /// ```
    /// use argot::Opt;
    ///
    /// let opt = Opt::new("foo", "f", false, true, "The foo option.").unwrap();
    /// assert!(!opt.is_set());
    /// assert_eq!(opt.value(), None);
    ///
    /// assert!(Opt::new("", "", false, false, "nameless").is_err());
    /// assert!(Opt::new("foo", "f", true, true, "required flag").is_err());
    /// ```
    pub fn new(
        long: impl Into<String>,
        short: impl Into<String>,
        flag: bool,
        required: bool,
        help: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let long = long.into();
        let short = short.into();

        if long.is_empty() && short.is_empty() {
            return Err(ConfigError(
                "An option must declare a long or a short name.".to_string(),
            ));
        }

        if flag && required {
            return Err(ConfigError(format!(
                "Cannot require the flag '{name}'; flags carry no value.",
                name = if long.is_empty() { &short } else { &long },
            )));
        }

        Ok(Self {
            long,
            short,
            flag,
            required,
            help: help.into(),
            arg_name: DEFAULT_ARG_NAME.to_string(),
            value: None,
            set: false,
        })
    }

    /// Declare a value-accepting option.
    pub fn arg(
        long: impl Into<String>,
        short: impl Into<String>,
        required: bool,
        help: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::new(long, short, false, required, help)
    }

    /// Declare a flag.
    /// Flags never carry a value and are never required.
    pub fn flag(
        long: impl Into<String>,
        short: impl Into<String>,
        help: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Self::new(long, short, true, false, help)
    }

    /// Whether this option was matched during the parse call.
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// Whether this option is a flag.
    pub fn is_flag(&self) -> bool {
        self.flag
    }

    /// Whether this option must be set by the end of a parse call.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The long name, possibly empty.
    pub fn long_name(&self) -> &str {
        &self.long
    }

    /// The short name, possibly empty.
    pub fn short_name(&self) -> &str {
        &self.short
    }

    /// The display name: the long name when present, the short name otherwise.
    /// Never empty.
    pub fn name(&self) -> &str {
        if self.long.is_empty() {
            &self.short
        } else {
            &self.long
        }
    }

    /// The bound value, or `None` when unset.
    /// Flags never carry a value.
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// The help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The value placeholder used in help output.
    pub fn arg_name(&self) -> &str {
        &self.arg_name
    }

    /// Override the value placeholder used in help output.
    pub fn set_arg_name(&mut self, name: impl Into<String>) {
        self.arg_name = name.into();
    }

    /// Clear the set state and any bound value.
    /// Idempotent.
    pub fn unset(&mut self) {
        self.set = false;
        self.value = None;
    }

    pub(crate) fn mark(&mut self) {
        self.set = true;
    }

    pub(crate) fn bind(&mut self, value: &'a str) {
        self.value = Some(value);
        self.set = true;
    }
}

/// The ordered registry of declared options handed to [`parse`](crate::parse).
///
/// The registry owns its records and pre-builds the name lookup, so matching
/// is linear in tokens plus options.  Declaration order is preserved: it
/// decides which unmet required option is reported first, and the row order
/// of help output.
#[derive(Debug)]
pub struct OptSet<'a> {
    opts: Vec<Opt<'a>>,
    longs: HashMap<String, usize>,
    shorts: HashMap<String, usize>,
}

impl<'a> OptSet<'a> {
    /// Build a registry from declared options.
    ///
    /// Duplicate long names and duplicate short names are declaration errors.
    ///
    /// ### Example
    /// ```
    /// use argot::{Opt, OptSet};
    ///
    /// let opts = OptSet::new(vec![
    ///     Opt::arg("foo", "f", false, "The foo option.").unwrap(),
    ///     Opt::flag("quiet", "q", "Suppress output.").unwrap(),
    /// ])
    /// .unwrap();
    /// assert_eq!(opts.len(), 2);
    /// assert_eq!(opts.get("q").unwrap().name(), "quiet");
    /// ```
    pub fn new(opts: Vec<Opt<'a>>) -> Result<Self, ConfigError> {
        let mut longs = HashMap::default();
        let mut shorts = HashMap::default();

        for (index, opt) in opts.iter().enumerate() {
            if !opt.long.is_empty() && longs.insert(opt.long.clone(), index).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the option '{name}'.",
                    name = opt.long
                )));
            }

            if !opt.short.is_empty() && shorts.insert(opt.short.clone(), index).is_some() {
                return Err(ConfigError(format!(
                    "Cannot duplicate the short option '{name}'.",
                    name = opt.short
                )));
            }
        }

        Ok(Self {
            opts,
            longs,
            shorts,
        })
    }

    /// Look up an option by long name, falling back to short name.
    pub fn get(&self, name: &str) -> Option<&Opt<'a>> {
        self.resolve_long(name)
            .or_else(|| self.resolve_short(name))
            .map(|index| &self.opts[index])
    }

    /// Look up an option mutably by long name, falling back to short name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Opt<'a>> {
        let index = self.resolve_long(name).or_else(|| self.resolve_short(name))?;
        Some(&mut self.opts[index])
    }

    /// Iterate the options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Opt<'a>> {
        self.opts.iter()
    }

    /// The number of declared options.
    pub fn len(&self) -> usize {
        self.opts.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.opts.is_empty()
    }

    pub(crate) fn resolve_long(&self, name: &str) -> Option<usize> {
        self.longs.get(name).copied()
    }

    pub(crate) fn resolve_short(&self, name: &str) -> Option<usize> {
        self.shorts.get(name).copied()
    }

    pub(crate) fn at(&self, index: usize) -> &Opt<'a> {
        &self.opts[index]
    }

    pub(crate) fn at_mut(&mut self, index: usize) -> &mut Opt<'a> {
        &mut self.opts[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opt_nameless() {
        let result = Opt::new("", "", false, false, "anonymous");
        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn opt_required_flag() {
        let result = Opt::new("verbose", "v", true, true, "a required flag");
        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn opt_display_name() {
        // Setup
        let both = Opt::arg("foo", "f", false, "").unwrap();
        let long_only = Opt::arg("foo", "", false, "").unwrap();
        let short_only = Opt::arg("", "f", false, "").unwrap();

        // Execute & verify
        assert_eq!(both.name(), "foo");
        assert_eq!(long_only.name(), "foo");
        assert_eq!(short_only.name(), "f");
    }

    #[test]
    fn opt_defaults() {
        let opt = Opt::arg("foo", "f", true, "the foo option").unwrap();

        assert!(!opt.is_set());
        assert!(!opt.is_flag());
        assert!(opt.is_required());
        assert_eq!(opt.value(), None);
        assert_eq!(opt.arg_name(), DEFAULT_ARG_NAME);
        assert_eq!(opt.help(), "the foo option");
    }

    #[test]
    fn opt_arg_name() {
        let mut opt = Opt::arg("foo", "f", false, "").unwrap();

        opt.set_arg_name("FILE");

        assert_eq!(opt.arg_name(), "FILE");
    }

    #[test]
    fn opt_unset_idempotent() {
        // Setup
        let mut opt = Opt::arg("foo", "f", false, "").unwrap();
        opt.bind("x");
        assert!(opt.is_set());
        assert_eq!(opt.value(), Some("x"));

        // Execute
        opt.unset();
        opt.unset();

        // Verify
        assert!(!opt.is_set());
        assert_eq!(opt.value(), None);
    }

    #[test]
    fn opt_set_duplicate_long() {
        let result = OptSet::new(vec![
            Opt::arg("foo", "f", false, "").unwrap(),
            Opt::flag("foo", "x", "").unwrap(),
        ]);
        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn opt_set_duplicate_short() {
        let result = OptSet::new(vec![
            Opt::arg("foo", "f", false, "").unwrap(),
            Opt::flag("bar", "f", "").unwrap(),
        ]);
        assert_matches!(result, Err(ConfigError(_)));
    }

    #[test]
    fn opt_set_lookup() {
        // Setup
        let opts = OptSet::new(vec![
            Opt::arg("foo", "f", false, "").unwrap(),
            Opt::flag("", "q", "").unwrap(),
        ])
        .unwrap();

        // Execute & verify
        assert_eq!(opts.get("foo").unwrap().name(), "foo");
        assert_eq!(opts.get("f").unwrap().name(), "foo");
        assert_eq!(opts.get("q").unwrap().name(), "q");
        assert!(opts.get("moot").is_none());
    }

    #[test]
    fn opt_set_lookup_prefers_long() {
        // A short name shadowed by another option's long name resolves to the long.
        let opts = OptSet::new(vec![
            Opt::arg("f", "", false, "").unwrap(),
            Opt::flag("", "f", "").unwrap(),
        ])
        .unwrap();

        assert!(!opts.get("f").unwrap().is_flag());
    }

    #[test]
    fn opt_set_order() {
        let opts = OptSet::new(vec![
            Opt::arg("foo", "f", false, "").unwrap(),
            Opt::arg("bar", "b", false, "").unwrap(),
            Opt::flag("baz", "z", "").unwrap(),
        ])
        .unwrap();

        let names: Vec<&str> = opts.iter().map(|opt| opt.name()).collect();
        assert_eq!(names, vec!["foo", "bar", "baz"]);
    }
}

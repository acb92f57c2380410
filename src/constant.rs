// The placeholder shown for a value option that never customized its arg name.
pub(crate) const DEFAULT_ARG_NAME: &str = "VALUE";

use terminal_size::{terminal_size, Width};

use crate::api::OptSet;
use crate::model::Style;
use crate::parser::interface::UserInterface;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Fallback when the terminal width cannot be determined (ex: piped output).
const DEFAULT_TOTAL_WIDTH: usize = 100;

// Let's assume the average word length is 5.
// Then 17 allows precisely 3 words with a space between them.
const MINIMUM_HELP_WIDTH: usize = 17;

// The indent before the flags column plus the gap after it.
const GUTTER_WIDTH: usize = 3;

/// Renders the usage/help text for a declared option set.
///
/// The layout carries no parsing logic; the style only changes how a value
/// placeholder is attached (`--foo FILE` under POSIX, `--foo=FILE` under GNU).
///
/// ### Example
/// ```
/// use argot::{Console, Opt, OptSet, Printer, Style};
///
/// let opts = OptSet::new(vec![
///     Opt::arg("foo", "f", true, "The foo option.").unwrap(),
///     Opt::flag("quiet", "q", "Suppress output.").unwrap(),
/// ])
/// .unwrap();
///
/// Printer::new(&opts, Style::Posix).print_help("program", &Console::default());
/// ```
pub struct Printer {
    summary: Vec<String>,
    rows: Vec<(String, String)>,
}

impl Printer {
    /// Lay out the option set under the given style, in declaration order.
    pub fn new(opts: &OptSet, style: Style) -> Self {
        let mut summary = Vec::default();
        let mut rows = Vec::default();

        for opt in opts.iter() {
            let placeholder = if opt.is_flag() {
                "".to_string()
            } else {
                match style {
                    Style::Posix => format!(" {arg}", arg = opt.arg_name()),
                    Style::Gnu => format!("={arg}", arg = opt.arg_name()),
                }
            };

            let flags = match (opt.long_name(), opt.short_name()) {
                (long, "") => format!("--{long}{placeholder}"),
                ("", short) => format!("-{short}{placeholder}"),
                (long, short) => format!("-{short}, --{long}{placeholder}"),
            };

            // The summary prefers the short spelling; required options are
            // not bracketed.
            let spelling = if opt.short_name().is_empty() {
                format!("--{long}{placeholder}", long = opt.long_name())
            } else {
                format!("-{short}{placeholder}", short = opt.short_name())
            };
            summary.push(if opt.is_required() {
                spelling
            } else {
                format!("[{spelling}]")
            });

            rows.push((flags, opt.help().to_string()));
        }

        Self { summary, rows }
    }

    /// Write the usage line and one aligned row per option.
    pub fn print_help(
        &self,
        program: impl Into<String>,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        let mut column_width = 0;

        for (flags, _) in &self.rows {
            if column_width < flags.len() {
                column_width = flags.len();
            }
        }

        let total_width = if let Some((Width(total_width), _)) = terminal_size() {
            total_width as usize
        } else {
            DEFAULT_TOTAL_WIDTH
        };
        let help_width = if column_width + GUTTER_WIDTH + MINIMUM_HELP_WIDTH <= total_width {
            total_width - column_width - GUTTER_WIDTH
        } else {
            MINIMUM_HELP_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        debug!("Selected help width {help_width} within terminal total {total_width}.");

        let program = program.into();

        if self.summary.is_empty() {
            user_interface.print(format!("usage: {program}"));
        } else {
            user_interface.print(format!(
                "usage: {program} {summary}",
                summary = self.summary.join(" ")
            ));
        }

        if self.rows.is_empty() {
            return;
        }

        user_interface.print("options:".to_string());

        for (flags, help) in &self.rows {
            if help.is_empty() {
                user_interface.print(format!(" {flags}"));
                continue;
            }

            for (i, part) in chunk(help, help_width).iter().enumerate() {
                if i == 0 {
                    user_interface.print(format!(" {flags:column_width$}  {part}"));
                } else {
                    user_interface.print(format!(" {:column_width$}  {part}", ""));
                }
            }
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + word.len() + 1 <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }

        // Hard-break a word that cannot fit a line on its own.
        while current.len() > width {
            // Snap to the nearest character boundary at or below the width.
            let mut boundary = width;

            while !current.is_char_boundary(boundary) {
                boundary -= 1;
            }

            if boundary == 0 {
                break;
            }

            let tail = current.split_off(boundary);
            lines.push(std::mem::replace(&mut current, tail));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

//! Error rendering for the command line, with color support.
//!
//! A run error is printed as `✖ Type: message`, optionally followed by
//! `  × detail` and `  help: suggestion`. Validation errors are printed as a
//! numbered list under an `Errors:` heading.

use std::io::{IsTerminal, Write};

use super::ColorMode;
use super::ansi;
use crate::error::AutoloadError;

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => Self::stderr_supports_color(),
            },
        }
    }

    /// Auto-detect color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        // Presence of NO_COLOR (any value) disables color, see https://no-color.org
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    pub fn print_error(&self, error: &AutoloadError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error);
    }

    pub fn print_validation_errors(&self, errors: &[AutoloadError]) {
        let mut stderr = std::io::stderr().lock();
        self.write_validation_errors(&mut stderr, errors);
    }

    /// Writes a run error to a writer.
    pub fn write_error<W: Write>(&self, w: &mut W, error: &AutoloadError) {
        // Nothing useful can be done if stderr itself is gone.
        let error_type = error.error_type();
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {error}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {error}");
        }

        if let Some(d) = error.detail() {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = error.suggestion() {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes the numbered list of configuration errors, followed by a blank line.
    pub fn write_validation_errors<W: Write>(&self, w: &mut W, errors: &[AutoloadError]) {
        if errors.is_empty() {
            return;
        }
        if self.use_colors {
            let _ = writeln!(w, "{}{}Errors:{}", ansi::BOLD, ansi::RED, ansi::RESET);
        } else {
            let _ = writeln!(w, "Errors:");
        }
        for (index, error) in errors.iter().enumerate() {
            let _ = writeln!(w, "  {index}. {error}");
        }
        let _ = writeln!(w);
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;

//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ClipTheme, UserInterface};

/// Terminal UI: results on stdout, status on stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ClipTheme,
    quiet: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// `quiet` suppresses success messages. Messages the user asked for
    /// (such as `--explain`), warnings, and errors are always shown.
    pub fn new(quiet: bool) -> Self {
        let theme = if should_use_colors() {
            ClipTheme::new()
        } else {
            ClipTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            quiet,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_message(msg)).ok();
    }

    fn success(&mut self, msg: &str) {
        if !self.quiet {
            writeln!(self.err, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

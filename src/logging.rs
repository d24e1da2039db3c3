use std::fmt::Display;

/// Verbosity-gated logger for command progress, writing to stderr so
/// result tables on stdout stay machine-readable.
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    /// Messages at or below this level are shown; quiet mode is level 0
    /// with info suppressed as well.
    level: u8,
    quiet: bool,
}

impl Logger {
    pub fn new(verbose: u8, quiet: bool) -> Self {
        Self {
            level: if quiet { 0 } else { verbose },
            quiet,
        }
    }

    /// Always shown unless quiet.
    pub fn info(&self, message: impl Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Shown at `-v` (level 1) and up.
    pub fn verbose(&self, level: u8, message: impl Display) {
        if !self.quiet && self.level >= level {
            eprintln!("{message}");
        }
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

//! Colored terminal output for user-facing progress and results.
//!
//! User-facing reporting goes through [`OutputManager`]; internal
//! diagnostics use `log`.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const SECTION_RULE: &str = "═══════════════════════════════════════";

/// Terminal output manager with colored status prefixes.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates a new output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    fn print_prefixed(&self, color: Color, prefix: &str, message: &str) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{prefix}")?;
        stdout.reset()?;
        writeln!(stdout, "{message}")
    }

    /// Print a plain informational line.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print an error line to stderr.
    pub fn error(&self, message: &str) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
        let _ = write!(stderr, "✗ ");
        let _ = stderr.reset();
        let _ = writeln!(stderr, "{message}");
    }

    /// Print a message only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.verbose && !self.quiet {
            println!("{message}");
        }
        Ok(())
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.print_prefixed(Color::Yellow, "⚠ ", message)
    }

    /// Print a success message.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.print_prefixed(Color::Green, "✓ ", message)
    }

    /// Print a progress message.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.print_prefixed(Color::Cyan, "→ ", message)
    }

    /// Print a section banner.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout)?;
        writeln!(stdout, "{SECTION_RULE}")?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "{title}")?;
        stdout.reset()?;
        writeln!(stdout, "{SECTION_RULE}")
    }

    /// Print an indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        println!("    {message}");
        Ok(())
    }
}

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

/// Narrowest `COLUMNS` value honored when fitting tables.
const MIN_TERM_WIDTH: usize = 40;

/// What the process learned about its terminal at startup.
#[derive(Clone, Copy, Debug, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub stderr_tty: bool,
    pub no_color: bool,
    pub columns: Option<usize>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            stderr_tty: std::io::stderr().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.parse::<usize>().ok()),
        }
    }
}

/// Rendering choices shared by the table printer and progress display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Color decisions in table output.
    pub table_color: bool,
    /// Draw audit bars and spinners on stderr.
    pub progress: bool,
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Decorations only appear for interactive table output; json and raw
    /// stay byte-clean for piping into other tools.
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, terminal: Terminal) -> Self {
        let table = flags.format == OutputFormat::Table && !flags.quiet;
        Self {
            table_color: table && terminal.stdout_tty && !terminal.no_color,
            progress: table && terminal.stderr_tty,
            term_width: terminal.columns.filter(|width| *width >= MIN_TERM_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, Terminal::detect()));
}

/// Preferences set by [`init`]; plain output when it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

//! Terminal detection.
//!
//! The console printer needs to know whether colors should be emitted and
//! how wide the terminal is. Both come from the process environment.

use std::io::IsTerminal;

struct EnvSettings {
    no_color: Option<String>,
    force_color: Option<String>,
    term: Option<String>,
}

fn read_env_settings() -> EnvSettings {
    EnvSettings {
        no_color: std::env::var("NO_COLOR").ok(),
        force_color: std::env::var("FORCE_COLOR").ok(),
        term: std::env::var("TERM").ok(),
    }
}

/// Get the terminal width in columns.
///
/// Returns a default of 80 if the width cannot be determined.
#[must_use]
pub fn get_terminal_width() -> usize {
    crossterm::terminal::size().map_or(80, |(w, _)| usize::from(w))
}

fn force_color_forces_terminal(force_color: Option<&str>) -> bool {
    let Some(force_color) = force_color else {
        return false;
    };
    let force_color = force_color.trim();
    // Treat empty / "0" as "unset" (no override).
    !force_color.is_empty() && force_color != "0"
}

fn is_dumb_term(term: Option<&str>) -> bool {
    term.is_some_and(|term| {
        let term = term.trim().to_lowercase();
        term == "dumb" || term == "unknown"
    })
}

/// Decide whether colored output should be written to stdout.
///
/// - `NO_COLOR` (non-empty): never
/// - `FORCE_COLOR` (non-empty, not `0`): always
/// - `TERM=dumb` or `TERM=unknown`: never
/// - Otherwise: when stdout is a terminal
#[must_use]
pub fn colors_enabled() -> bool {
    colors_enabled_with(&read_env_settings(), std::io::stdout().is_terminal())
}

fn colors_enabled_with(env: &EnvSettings, is_tty: bool) -> bool {
    // https://no-color.org/
    if env.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
        return false;
    }
    if force_color_forces_terminal(env.force_color.as_deref()) {
        return true;
    }
    if is_dumb_term(env.term.as_deref()) {
        return false;
    }
    is_tty
}

//! Terminal colour decisions, made once at start-up and passed to the
//! renderer.

use std::env;
use std::io::{self, IsTerminal};

use certlens_inventory::Status;
use nu_ansi_term::{Color, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    pub(crate) const PLAIN: ColorConfig = ColorConfig { enabled: false };

    /// Colour is used only on a terminal that supports it and when neither
    /// `--no-color` nor `NO_COLOR` asks otherwise.
    pub(crate) fn detect(no_color_flag: bool) -> Self {
        Self::decide(
            no_color_flag,
            env::var_os("NO_COLOR").is_some(),
            env::var("TERM").ok().as_deref(),
            io::stdout().is_terminal(),
        )
    }

    fn decide(no_color_flag: bool, no_color_env: bool, term: Option<&str>, tty: bool) -> Self {
        let capable_term = matches!(term, Some(term) if !term.is_empty() && term != "dumb");
        ColorConfig {
            enabled: !no_color_flag && !no_color_env && capable_term && tty,
        }
    }

    pub(crate) fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            style.paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}

pub(crate) fn header() -> Style {
    Color::Cyan.bold()
}

pub(crate) fn status(status: Status) -> Style {
    match status {
        Status::Valid => Color::Green.normal(),
        Status::ExpiringSoon => Color::Yellow.normal(),
        Status::Expired => Color::Red.normal(),
    }
}

pub(crate) fn quantum_safe(is_quantum_safe: bool) -> Style {
    if is_quantum_safe {
        Color::Green.normal()
    } else {
        Color::Yellow.normal()
    }
}

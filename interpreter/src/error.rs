// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::Display;

use colored::{Color, ColoredString, Colorize};
use flux::{FileRange, SourceCode};
use strum::AsRefStr;

/// Renders a message together with the offending source line, a caret under
/// the range and the surrounding lines for context.
pub struct ErrorPrinter {
    source_code: SourceCode,
    range: FileRange,
    message: String,
    hint: Option<String>,

    color: Color,
    line_number: ColoredString,
}

impl ErrorPrinter {
    #[must_use = "Use the `print` method to actually print"]
    pub fn new(source_code: &SourceCode, range: FileRange, message: impl Display) -> Self {
        Self {
            source_code: source_code.clone(),
            range,
            message: message.to_string(),
            hint: None,

            color: Color::Red,
            line_number: format!("{}", range.start().line() + 1).blue().bold(),
        }
    }

    #[must_use]
    pub fn hint(self, hint: impl Into<Option<String>>) -> Self {
        Self {
            hint: hint.into(),
            ..self
        }
    }

    pub fn print(self) {
        self.print_prelude();

        self.print_lines();

        self.print_postlude();
    }

    fn print_prelude(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message.bold());

        eprintln!();
    }

    fn print_lines(&self) {
        let line = self.range.start().line();
        let mut lines = self.source_code.lines();

        if line > 0 {
            if let Some(previous) = lines.nth(line - 1) {
                if !previous.trim().is_empty() {
                    self.print_line(false, previous);
                }
            }
        }

        self.print_line(true, lines.next().unwrap_or_default());

        self.print_error_indicator();

        if let Some(next) = lines.next() {
            if !next.trim().is_empty() {
                self.print_line(false, next);
            }
        }
    }

    fn print_line(&self, is_primary: bool, line: &str) {
        self.print_line_prefix(is_primary);
        eprintln!("{line}");
    }

    fn print_error_indicator(&self) {
        let spaces = " ".repeat(self.range.start().column());
        let caret = "^".color(self.color).bold();
        let tildes = "~".repeat(self.range.len().saturating_sub(1)).color(self.color);

        let hint = match &self.hint {
            Some(hint) => format!("sugerencia: {hint}").color(self.color).bold(),
            None => "".bold(),
        };

        self.print_line_prefix(false);
        eprintln!("{spaces}{caret}{tildes} {hint}");
    }

    fn print_line_prefix(&self, is_primary: bool) {
        let separator = " | ".blue().bold();

        if is_primary {
            eprint!("{} {separator}", self.line_number);
        } else {
            eprint!("{} {separator}", " ".repeat(self.line_number.len()));
        }
    }

    fn print_postlude(&self) {
        eprintln!();

        let path = self.source_code.path().display();
        let line = self.range.start().line() + 1;
        let column = self.range.start().column() + 1;

        eprintln!("En {path}:{line}:{column}\n");
    }
}

/// Faults raised while running a program. They carry no source position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, AsRefStr)]
pub enum RuntimeError {
    #[error("no se pudo evaluar el valor de la declaración")]
    DeclarationValue { name: String },

    #[error("no se pudo evaluar el valor de la asignación")]
    AssignmentValue { name: String },

    #[error("los valores de 'desde' y 'hasta' deben ser enteros")]
    RepeatBounds { from: &'static str, to: &'static str },
}

impl RuntimeError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

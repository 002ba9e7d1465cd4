// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum Punctuator {
    #[strum(serialize = "coma")]
    Comma,
    #[strum(serialize = "paréntesis de apertura")]
    LeftParenthesis,
    #[strum(serialize = "paréntesis de cierre")]
    RightParenthesis,
    #[strum(serialize = "llave de apertura")]
    LeftCurlyBracket,
    #[strum(serialize = "llave de cierre")]
    RightCurlyBracket,
    #[strum(serialize = "punto medio")]
    MiddleDot,
    #[strum(serialize = "suma")]
    PlusSign,
    #[strum(serialize = "asignación")]
    Assignment,
    #[strum(serialize = "comparación")]
    Equals,
    #[strum(serialize = "resta")]
    HyphenMinus,
    #[strum(serialize = "división")]
    Solidus,
    #[strum(serialize = "multiplicación")]
    Asterisk,
    #[strum(serialize = "módulo")]
    PercentageSign,
    #[strum(serialize = "menor-que")]
    LessThan,
    #[strum(serialize = "menor-o-igual-que")]
    LessThanOrEqual,
    #[strum(serialize = "mayor-que")]
    GreaterThan,
    #[strum(serialize = "mayor-o-igual-que")]
    GreaterThanOrEqual,
    #[strum(serialize = "y-lógico")]
    LogicalAnd,
    #[strum(serialize = "o-lógico")]
    LogicalOr,
    #[strum(serialize = "negación")]
    Not,
    #[strum(serialize = "distinto-de")]
    NotEquals,
}

impl Punctuator {
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Comma => ",",
            Self::LeftParenthesis => "(",
            Self::RightParenthesis => ")",
            Self::LeftCurlyBracket => "{",
            Self::RightCurlyBracket => "}",
            Self::MiddleDot => "·",
            Self::PlusSign => "+",
            Self::Assignment => "=",
            Self::Equals => "==",
            Self::HyphenMinus => "-",
            Self::Solidus => "/",
            Self::Asterisk => "*",
            Self::PercentageSign => "%",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Not => "!",
            Self::NotEquals => "!=",
        }
    }

    /// The operator a symbolic Unicode character stands for.
    #[must_use]
    pub const fn from_unicode_alias(c: char) -> Option<Self> {
        Some(match c {
            '↔' => Self::Equals,
            '≠' => Self::NotEquals,
            '≤' => Self::LessThanOrEqual,
            '≥' => Self::GreaterThanOrEqual,
            '∧' => Self::LogicalAnd,
            '∨' => Self::LogicalOr,
            '¬' => Self::Not,
            _ => return None,
        })
    }
}

impl Display for Punctuator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

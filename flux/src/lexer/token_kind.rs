// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use super::{Keyword, Punctuator};

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Keyword(Keyword),

    Identifier(String),

    /// Raw text, including the surrounding quotes.
    StringLiteral(String),
    Integer(i64),
    Decimal(f64),

    Punctuator(Punctuator),
    EndOfFile,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword(..) => "palabra clave",

            Self::Identifier(..) => "identificador",
            Self::StringLiteral(..) => "cadena",
            Self::Integer(..) => "entero",
            Self::Decimal(..) => "decimal",

            Self::Punctuator(punctuator) => punctuator.into(),
            Self::EndOfFile => "fin del archivo",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => ident.fmt(f),
            Self::Integer(int) => int.fmt(f),
            Self::Decimal(decimal) => f.write_fmt(format_args!("{decimal:?}")),
            Self::Keyword(keyword) => f.write_str(keyword.as_ref()),
            Self::Punctuator(punctuator) => punctuator.fmt(f),
            Self::StringLiteral(str) => str.fmt(f),
            Self::EndOfFile => f.write_str("fin del archivo"),
        }
    }
}

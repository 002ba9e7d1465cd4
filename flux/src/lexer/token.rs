// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use crate::{FileLocation, FileRange, Ranged};

use super::{Keyword, Punctuator, TokenKind};

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub begin: FileLocation,
    pub end: FileLocation,
}

impl Token {
    pub fn as_identifier(&self) -> Option<Ranged<String>> {
        let TokenKind::Identifier(ident) = &self.kind else {
            return None;
        };

        Some(Ranged::new(self.range(), ident.clone()))
    }

    #[must_use]
    pub fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_punctuator(&self) -> Option<Punctuator> {
        match self.kind {
            TokenKind::Punctuator(punctuator) => Some(punctuator),
            _ => None,
        }
    }

    /// The source text this token was read from.
    #[must_use]
    pub fn literal<'source>(&self, source: &'source str) -> &'source str {
        &source[self.begin.offset()..self.end.offset()]
    }
}

impl Token {
    pub fn range(&self) -> FileRange {
        (self.begin, self.end).into()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}

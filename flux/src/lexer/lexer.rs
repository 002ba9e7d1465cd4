// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{error::Error, fmt::Display, str::CharIndices};

use strum::AsRefStr;
use thiserror::Error;

use crate::{FileLocation, Keyword, Punctuator, Token, TokenKind};

use super::suggest_keyword;

/// Converts the whole input into tokens, stopping at the first illegal input.
/// The returned list always ends with exactly one [`TokenKind::EndOfFile`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    Lexer::new(input).collect_all()
}

pub struct Lexer<'source_code> {
    input: &'source_code str,
    chars: CharIndices<'source_code>,

    current: Option<(FileLocation, char)>,
    line: usize,
    column: usize,
}

impl<'source_code> Lexer<'source_code> {
    pub fn new(input: &'source_code str) -> Self {
        Self {
            input,
            chars: input.char_indices(),
            current: None,
            line: 0,
            column: 0,
        }
    }

    pub fn next_token(&mut self) -> Result<Token, LexerError> {
        self.skip_trivia();

        let Some(ch) = self.peek_char() else {
            let location = self.current_location();
            return Ok(Token {
                kind: TokenKind::EndOfFile,
                begin: location,
                end: location,
            });
        };

        let token = match ch {
            '"' | '\'' => self.consume_string(ch)?,

            c if is_identifier_start(c) => self.consume_identifier_or_keyword()?,
            '0'..='9' => self.consume_number()?,

            '(' => self.consume_single_char_token(Punctuator::LeftParenthesis),
            ')' => self.consume_single_char_token(Punctuator::RightParenthesis),
            '{' => self.consume_single_char_token(Punctuator::LeftCurlyBracket),
            '}' => self.consume_single_char_token(Punctuator::RightCurlyBracket),
            ',' => self.consume_single_char_token(Punctuator::Comma),
            '·' => self.consume_single_char_token(Punctuator::MiddleDot),
            '+' => self.consume_single_char_token(Punctuator::PlusSign),
            '-' => self.consume_single_char_token(Punctuator::HyphenMinus),
            '*' => self.consume_single_char_token(Punctuator::Asterisk),
            '/' => self.consume_single_char_token(Punctuator::Solidus),
            '%' => self.consume_single_char_token(Punctuator::PercentageSign),

            '=' => self.consume_single_or_equals_token(Punctuator::Assignment, Punctuator::Equals),
            '!' => self.consume_single_or_equals_token(Punctuator::Not, Punctuator::NotEquals),
            '<' => self.consume_single_or_equals_token(Punctuator::LessThan, Punctuator::LessThanOrEqual),
            '>' => self.consume_single_or_equals_token(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual),
            '&' => self.consume_double_char_token(Punctuator::LogicalAnd)?,
            '|' => self.consume_double_char_token(Punctuator::LogicalOr)?,

            c => match Punctuator::from_unicode_alias(c) {
                Some(punctuator) => self.consume_single_char_token(punctuator),
                None => {
                    return Err(LexerError {
                        location: self.current_location(),
                        kind: LexerErrorKind::UnexpectedCharacter { character: c },
                    });
                }
            }
        };

        log::trace!("Token {} en {}", token.kind.name(), token.begin);
        Ok(token)
    }

    #[must_use]
    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> Token {
        let begin = self.current_location();

        self.consume_char();

        let end = self.current_location();

        Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end,
        }
    }

    #[must_use]
    fn consume_single_or_equals_token(&mut self, single: Punctuator, with_equals: Punctuator) -> Token {
        let begin = self.current_location();
        self.consume_char();

        let kind = if self.peek_char() == Some('=') {
            self.consume_char();
            TokenKind::Punctuator(with_equals)
        } else {
            TokenKind::Punctuator(single)
        };

        let end = self.current_location();

        Token {
            kind,
            begin,
            end,
        }
    }

    /// Operators such as `&&` whose single-character form is not valid.
    fn consume_double_char_token(&mut self, punctuator: Punctuator) -> Result<Token, LexerError> {
        let begin = self.current_location();

        let Some(char) = self.next_char() else {
            unreachable!("the caller peeked at the first character");
        };

        if self.peek_char() != Some(char) {
            return Err(LexerError {
                location: begin,
                kind: LexerErrorKind::IncompleteOperator { character: char },
            });
        }

        self.consume_char();

        let end = self.current_location();

        Ok(Token {
            kind: TokenKind::Punctuator(punctuator),
            begin,
            end,
        })
    }

    /// Keeps the raw text including the quotes. A backslash skips the next
    /// character without interpreting it.
    fn consume_string(&mut self, quote: char) -> Result<Token, LexerError> {
        let begin = self.current_location();
        self.consume_char();

        let unterminated = LexerError {
            location: begin,
            kind: LexerErrorKind::UnterminatedString,
        };

        loop {
            match self.next_char() {
                None => return Err(unterminated),

                Some('\\') => {
                    if self.next_char().is_none() {
                        return Err(unterminated);
                    }
                }

                Some(c) if c == quote => break,
                Some(_) => (),
            }
        }

        let end = self.current_location();
        let raw = &self.input[begin.offset()..end.offset()];

        Ok(Token {
            kind: TokenKind::StringLiteral(raw.to_string()),
            begin,
            end,
        })
    }

    fn consume_identifier_or_keyword(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();

        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }

            self.consume_char();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = match Keyword::parse(str) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => {
                if let Some(suggestion) = suggest_keyword(str) {
                    return Err(LexerError {
                        location: begin,
                        kind: LexerErrorKind::MisspelledKeyword {
                            found: str.to_string(),
                            suggestion,
                        },
                    });
                }

                TokenKind::Identifier(str.to_string())
            }
        };

        Ok(Token {
            kind,
            begin,
            end,
        })
    }

    fn consume_number(&mut self) -> Result<Token, LexerError> {
        let begin = self.current_location();

        self.consume_digits();

        let is_decimal = self.peek_char() == Some('.');
        if is_decimal {
            self.consume_char();
            self.consume_digits();
        }

        let end = self.current_location();
        let str = &self.input[begin.offset()..end.offset()];

        let kind = if is_decimal {
            str.parse().map(TokenKind::Decimal).ok()
        } else {
            str.parse().map(TokenKind::Integer).ok()
        };

        let Some(kind) = kind else {
            return Err(LexerError {
                location: begin,
                kind: LexerErrorKind::InvalidNumber { text: str.to_string() },
            });
        };

        Ok(Token {
            kind,
            begin,
            end,
        })
    }

    fn consume_digits(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_ascii_digit() {
                break;
            }

            self.consume_char();
        }
    }

    /// Skips whitespace, comments and the separators `:` and `;`.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek_char() {
                Some(' ' | '\t' | '\r' | '\n' | ':' | ';') => self.consume_char(),

                Some('/') => match self.peek_second_char() {
                    Some('/') => self.consume_until_end_of_line(),
                    Some('*') => self.consume_block_comment(),
                    _ => break,
                }

                _ => break,
            }
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        if let Some((_, c)) = self.current {
            return Some(c);
        }

        self.current = self.chars.next()
            .map(|(offset, char)| {
                let location = FileLocation::new(offset, self.line, self.column);

                if char == '\n' {
                    self.line += 1;
                    self.column = 0;
                } else {
                    self.column += 1;
                }

                (location, char)
            });
        Some(self.current?.1)
    }

    fn peek_second_char(&mut self) -> Option<char> {
        self.peek_char()?;
        self.chars.clone().next().map(|(_, c)| c)
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.consume_char();
        Some(c)
    }

    fn consume_char(&mut self) {
        self.current = None;
        _ = self.peek_char();
    }

    fn current_location(&mut self) -> FileLocation {
        _ = self.peek_char();
        match self.current {
            Some((location, _)) => location,
            None => FileLocation::new(self.input.len(), self.line, self.column),
        }
    }

    fn consume_until_end_of_line(&mut self) {
        while let Some(c) = self.next_char() {
            if c == '\n' {
                break;
            }
        }
    }

    /// An unterminated block comment runs until the end of the input.
    fn consume_block_comment(&mut self) {
        self.consume_char();
        self.consume_char();

        while let Some(c) = self.next_char() {
            if c == '*' && self.peek_char() == Some('/') {
                self.consume_char();
                break;
            }
        }
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>, LexerError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_end = token.kind == TokenKind::EndOfFile;
            tokens.push(token);

            if is_end {
                return Ok(tokens);
            }
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic()
        || c == '_'
        || ('\u{00C0}'..='\u{024F}').contains(&c)
        || ('\u{1E00}'..='\u{1EFF}').contains(&c)
}

fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerError {
    pub location: FileLocation,
    pub kind: LexerErrorKind,
}

impl Display for LexerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("línea {}, columna {}: {}", self.location.line() + 1, self.location.column() + 1, self.kind))
    }
}

impl Error for LexerError {}

#[derive(Debug, Clone, PartialEq, Eq, Error, AsRefStr)]
pub enum LexerErrorKind {
    #[error("cadena no cerrada")]
    UnterminatedString,

    #[error("número inválido '{text}'")]
    InvalidNumber { text: String },

    #[error("operador incompleto '{character}', se esperaba '{character}{character}'")]
    IncompleteOperator { character: char },

    #[error("palabra clave incorrecta '{found}' (¿quisiste decir '{}'?)", .suggestion.as_ref())]
    MisspelledKeyword { found: String, suggestion: Keyword },

    #[error("carácter inesperado '{character}'")]
    UnexpectedCharacter { character: char },
}

impl LexerErrorKind {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

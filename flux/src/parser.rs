// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;

use crate::{
    AssignStatement, BiExpression, BiOperator, Block, CallExpression, Comparison, DeclareStatement, Expression, FileLocation, FileRange, FunctionStatement, IfStatement, Keyword, LogicalOperator, MathOperator, Program, Punctuator, Ranged, RepeatStatement, ReturnStatement, ShowStatement, Statement, StatementKind, Token, TokenKind, UnaryExpression, UnaryOperator, WhileStatement
};

pub type ParseResult<T> = Result<T, ParseError>;

const BI_OPERATORS: &[(Punctuator, BiOperator)] = &[
    (Punctuator::PlusSign, BiOperator::Math(MathOperator::Add)),
    (Punctuator::HyphenMinus, BiOperator::Math(MathOperator::Subtract)),
    (Punctuator::Asterisk, BiOperator::Math(MathOperator::Multiply)),
    (Punctuator::Solidus, BiOperator::Math(MathOperator::Divide)),
    (Punctuator::PercentageSign, BiOperator::Math(MathOperator::Modulo)),
    (Punctuator::Equals, BiOperator::Comparison(Comparison::Equality)),
    (Punctuator::NotEquals, BiOperator::Comparison(Comparison::Inequality)),
    (Punctuator::LessThan, BiOperator::Comparison(Comparison::LessThan)),
    (Punctuator::LessThanOrEqual, BiOperator::Comparison(Comparison::LessThanOrEqual)),
    (Punctuator::GreaterThan, BiOperator::Comparison(Comparison::GreaterThan)),
    (Punctuator::GreaterThanOrEqual, BiOperator::Comparison(Comparison::GreaterThanOrEqual)),
    (Punctuator::LogicalAnd, BiOperator::Logical(LogicalOperator::And)),
    (Punctuator::LogicalOr, BiOperator::Logical(LogicalOperator::Or)),
];

/// Parses a whole token stream. The program is always returned, but it must
/// not be run when any diagnostics were produced.
pub fn parse(tokens: &[Token]) -> (Program, Vec<ParseDiagnostic>) {
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.into_diagnostics())
}

#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    diagnostics: Vec<ParseDiagnostic>,
    end_of_file_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let end = tokens.last().map(|x| x.end).unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            diagnostics: Vec::new(),
            end_of_file_token: Token {
                kind: TokenKind::EndOfFile,
                begin: end,
                end,
            }
        }
    }

    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(statement) => program.push(statement),
                Err(error) => {
                    log::trace!("{error} en {}", self.peek_token().begin);
                    _ = self.consume_token();
                }
            }
        }

        program
    }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<ParseDiagnostic> {
        self.diagnostics
    }

    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let start = self.peek_token().begin;

        let kind = match self.peek_keyword() {
            Some(Keyword::Definir | Keyword::Constante) => StatementKind::Declare(self.parse_declare_statement()?),
            Some(Keyword::Si) => StatementKind::If(self.parse_if_statement()?),
            Some(Keyword::Mientras) => StatementKind::While(self.parse_while_statement()?),
            Some(Keyword::Repetir) => StatementKind::Repeat(self.parse_repeat_statement()?),
            Some(Keyword::Funcion) => StatementKind::Function(self.parse_function_statement()?),
            Some(Keyword::Mostrar) => StatementKind::Show(self.parse_show_statement()?),
            Some(Keyword::Retornar) => StatementKind::Return(self.parse_return_statement()?),
            _ => self.parse_identifier_or_expression_statement()?,
        };

        Ok(Statement {
            range: FileRange::new(start, self.previous_end()),
            kind,
        })
    }

    fn parse_identifier_or_expression_statement(&mut self) -> ParseResult<StatementKind> {
        if matches!(self.peek_token().kind, TokenKind::Identifier(..)) {
            match self.peek_nth_punctuator(1) {
                Some(Punctuator::Assignment) => {
                    return Ok(StatementKind::Assignment(self.parse_assign_statement()?));
                }

                Some(Punctuator::LeftParenthesis) => {
                    let call = self.parse_call_expression();
                    return Ok(StatementKind::Expression(self.require(call, "los argumentos de la llamada")?));
                }

                _ => (),
            }
        }

        match self.parse_expression() {
            Ok(expression) => Ok(StatementKind::Expression(expression)),
            Err(ParseError::MissingExpression) => {
                self.emit_diagnostic(ParseDiagnostic::UnexpectedToken { token: self.peek_token().clone() });
                Err(ParseError::StatementDiscarded)
            }
            Err(error) => Err(error),
        }
    }

    fn parse_declare_statement(&mut self) -> ParseResult<DeclareStatement> {
        let keyword = self.consume_token();
        let is_constant = keyword.as_keyword() == Some(Keyword::Constante);

        let name = self.expect_identifier(if is_constant { "'constante'" } else { "'definir'" })?;
        self.expect_assignment(&name)?;
        let expression = self.expect_expression("la declaración")?;

        Ok(DeclareStatement {
            is_constant,
            name,
            expression,
        })
    }

    fn parse_assign_statement(&mut self) -> ParseResult<AssignStatement> {
        let name = self.expect_identifier("el inicio de la instrucción")?;
        self.expect_assignment(&name)?;
        let expression = self.expect_expression("la asignación")?;

        Ok(AssignStatement {
            name,
            expression,
        })
    }

    fn parse_if_statement(&mut self) -> ParseResult<IfStatement> {
        _ = self.consume_token();
        let condition = self.expect_expression("la condición de 'si'")?;

        if !self.consume_if_keyword(Keyword::Entonces) {
            self.consume_if_keyword(Keyword::Hacer);
        }

        let then_block = self.parse_block();

        let else_block = if self.consume_if_keyword(Keyword::Sino) {
            Some(self.parse_block())
        } else {
            None
        };

        self.consume_if_keyword(Keyword::Fin);

        Ok(IfStatement {
            condition,
            then_block,
            else_block,
        })
    }

    fn parse_while_statement(&mut self) -> ParseResult<WhileStatement> {
        _ = self.consume_token();
        let condition = self.expect_expression("la condición de 'mientras'")?;

        self.consume_if_keyword(Keyword::Hacer);
        let body = self.parse_block();
        self.consume_if_keyword(Keyword::Fin);

        Ok(WhileStatement {
            condition,
            body,
        })
    }

    fn parse_repeat_statement(&mut self) -> ParseResult<RepeatStatement> {
        _ = self.consume_token();
        let iterator_name = self.expect_identifier("'repetir'")?;

        self.expect_keyword(Keyword::Desde)?;
        let from = self.expect_expression("el valor de 'desde'")?;

        self.expect_keyword(Keyword::Hasta)?;
        let to = self.expect_expression("el valor de 'hasta'")?;

        self.consume_if_keyword(Keyword::Hacer);
        let body = self.parse_block();
        self.consume_if_keyword(Keyword::Fin);

        Ok(RepeatStatement {
            iterator_name,
            from,
            to,
            body,
        })
    }

    fn parse_function_statement(&mut self) -> ParseResult<FunctionStatement> {
        _ = self.consume_token();
        let name = self.expect_identifier("'función'")?;

        let mut parameters = Vec::new();
        if self.consume_if_punctuator(Punctuator::LeftParenthesis) {
            if let Some(parameter) = self.consume_identifier() {
                parameters.push(parameter);

                while self.consume_if_punctuator(Punctuator::Comma) {
                    parameters.push(self.expect_identifier("','")?);
                }
            }

            self.consume_if_punctuator(Punctuator::RightParenthesis);
        }

        self.consume_if_keyword(Keyword::Hacer);
        let body = self.parse_block();
        self.consume_if_keyword(Keyword::Fin);

        Ok(FunctionStatement {
            name,
            parameters,
            body,
        })
    }

    fn parse_show_statement(&mut self) -> ParseResult<ShowStatement> {
        _ = self.consume_token();

        let expression = if self.consume_if_punctuator(Punctuator::LeftParenthesis) {
            let expression = self.expect_expression("'mostrar'")?;
            self.consume_if_punctuator(Punctuator::RightParenthesis);
            expression
        } else {
            self.expect_expression("'mostrar'")?
        };

        Ok(ShowStatement { expression })
    }

    fn parse_return_statement(&mut self) -> ParseResult<ReturnStatement> {
        _ = self.consume_token();

        if self.is_at_block_end() {
            return Ok(ReturnStatement { expression: None });
        }

        let reset = self.cursor;
        let expression = match self.parse_expression() {
            Ok(expression) => Some(expression),
            Err(ParseError::MissingExpression) => {
                self.cursor = reset;
                None
            }
            Err(error) => return Err(error),
        };

        Ok(ReturnStatement { expression })
    }

    /// Parses statements until `fin`, `sino` or the end of the file, none of
    /// which are consumed.
    fn parse_block(&mut self) -> Block {
        let mut block = Block::default();

        while !self.is_at_block_end() {
            match self.parse_statement() {
                Ok(statement) => block.statements.push(statement),
                Err(error) => {
                    log::trace!("{error} en {}", self.peek_token().begin);
                    if !self.is_at_block_end() {
                        _ = self.consume_token();
                    }
                }
            }
        }

        block
    }

    pub fn parse_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        self.parse_expression_with_threshold(0)
    }

    /// Precedence climbing: keeps folding operators that bind looser than
    /// `threshold`, parsing each right-hand side with a threshold just below
    /// the operator's own precedence.
    fn parse_expression_with_threshold(&mut self, threshold: u8) -> ParseResult<Ranged<Expression>> {
        let mut expression = self.parse_prefix_expression()?;

        while let Some(operator) = self.peek_bi_operator() {
            let precedence = operator.precedence();
            if precedence <= threshold {
                break;
            }

            let operator_range = self.consume_token().range();
            let operator = Ranged::new(operator_range, operator);

            let lhs = expression;
            let rhs = self.parse_expression_with_threshold(precedence - 1)?;
            let range = FileRange::new(lhs.range().start(), rhs.range().end());

            expression = Ranged::new(range, Expression::BiExpression(BiExpression {
                operator,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            }));
        }

        Ok(expression)
    }

    fn parse_prefix_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let token = self.peek_token().clone();
        let start = token.begin;

        let expression = match token.kind {
            TokenKind::Punctuator(Punctuator::Not) => {
                let operator = Ranged::new(self.consume_token().range(), UnaryOperator::Not);
                let rhs = self.parse_expression_with_threshold(1)?;
                Expression::Unary(UnaryExpression { operator, rhs: Box::new(rhs) })
            }

            TokenKind::Punctuator(Punctuator::HyphenMinus) => {
                let operator = Ranged::new(self.consume_token().range(), UnaryOperator::Negate);
                let rhs = self.parse_prefix_expression()?;
                Expression::Unary(UnaryExpression { operator, rhs: Box::new(rhs) })
            }

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                _ = self.consume_token();
                let inner = self.parse_expression()?;
                self.consume_if_punctuator(Punctuator::RightParenthesis);
                inner.into_value()
            }

            TokenKind::Identifier(name) => {
                if self.peek_nth_punctuator(1) == Some(Punctuator::LeftParenthesis) {
                    return self.parse_call_expression();
                }

                _ = self.consume_token();
                Expression::Identifier(name)
            }

            TokenKind::Integer(integer) => {
                _ = self.consume_token();
                Expression::IntegerLiteral(integer)
            }

            TokenKind::Decimal(decimal) => {
                _ = self.consume_token();
                Expression::FloatLiteral(decimal)
            }

            TokenKind::StringLiteral(raw) => {
                _ = self.consume_token();
                Expression::StringLiteral(raw.trim_matches(&['"', '\''][..]).to_string())
            }

            TokenKind::Keyword(Keyword::Verdadero) => {
                _ = self.consume_token();
                Expression::BooleanLiteral(true)
            }

            TokenKind::Keyword(Keyword::Falso) => {
                _ = self.consume_token();
                Expression::BooleanLiteral(false)
            }

            _ => return Err(ParseError::MissingExpression),
        };

        Ok(Ranged::new(FileRange::new(start, self.previous_end()), expression))
    }

    fn parse_call_expression(&mut self) -> ParseResult<Ranged<Expression>> {
        let callee_token = self.consume_token();
        let Some(callee) = callee_token.as_identifier() else {
            return Err(ParseError::MissingExpression);
        };

        let token_left_paren = self.consume_token().range();

        let mut arguments = Vec::new();
        if self.peek_punctuator() != Some(Punctuator::RightParenthesis) {
            arguments.push(self.parse_expression()?);

            while self.consume_if_punctuator(Punctuator::Comma) {
                arguments.push(self.parse_expression()?);
            }
        }

        self.consume_if_punctuator(Punctuator::RightParenthesis);

        let range = FileRange::new(callee_token.begin, self.previous_end());
        Ok(Ranged::new(range, Expression::Call(CallExpression {
            callee: Box::new(callee.map(Expression::Identifier)),
            arguments,
            token_left_paren,
        })))
    }

    fn consume_identifier(&mut self) -> Option<Ranged<String>> {
        let identifier = self.peek_token().as_identifier()?;
        _ = self.consume_token();
        Some(identifier)
    }

    fn expect_identifier(&mut self, after: &'static str) -> ParseResult<Ranged<String>> {
        match self.consume_identifier() {
            Some(identifier) => Ok(identifier),
            None => {
                self.emit_diagnostic(ParseDiagnostic::ExpectedIdentifier { token: self.peek_token().clone(), after });
                Err(ParseError::StatementDiscarded)
            }
        }
    }

    fn expect_assignment(&mut self, name: &Ranged<String>) -> ParseResult<()> {
        if self.consume_if_punctuator(Punctuator::Assignment) {
            return Ok(());
        }

        self.emit_diagnostic(ParseDiagnostic::ExpectedAssignment {
            token: self.peek_token().clone(),
            name: name.value().clone(),
        });
        Err(ParseError::StatementDiscarded)
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<()> {
        if self.consume_if_keyword(keyword) {
            return Ok(());
        }

        self.emit_diagnostic(ParseDiagnostic::ExpectedKeyword { token: self.peek_token().clone(), keyword });
        Err(ParseError::StatementDiscarded)
    }

    fn expect_expression(&mut self, context: &'static str) -> ParseResult<Ranged<Expression>> {
        let expression = self.parse_expression();
        self.require(expression, context)
    }

    /// Turns a missing expression into a diagnostic, since only statements
    /// know what the expression was needed for.
    fn require<T>(&mut self, result: ParseResult<T>, context: &'static str) -> ParseResult<T> {
        match result {
            Err(ParseError::MissingExpression) => {
                self.emit_diagnostic(ParseDiagnostic::ExpectedExpression { token: self.peek_token().clone(), context });
                Err(ParseError::StatementDiscarded)
            }
            result => result,
        }
    }

    fn emit_diagnostic(&mut self, error: ParseDiagnostic) {
        log::debug!("Diagnóstico {}: {error}", error.name());
        self.diagnostics.push(error);
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.peek_token().kind == TokenKind::EndOfFile
    }

    #[must_use]
    fn is_at_block_end(&self) -> bool {
        self.is_at_end() || self.peek_keyword().is_some_and(|keyword| keyword.ends_block())
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_file_token)
    }

    fn peek_keyword(&self) -> Option<Keyword> {
        self.peek_token().as_keyword()
    }

    fn peek_punctuator(&self) -> Option<Punctuator> {
        self.peek_token().as_punctuator()
    }

    fn peek_nth_punctuator(&self, n: usize) -> Option<Punctuator> {
        self.tokens.get(self.cursor + n)?.as_punctuator()
    }

    fn peek_bi_operator(&self) -> Option<BiOperator> {
        let punctuator = self.peek_punctuator()?;

        BI_OPERATORS.iter()
            .find(|(p, _)| *p == punctuator)
            .map(|(_, operator)| *operator)
    }

    /// Never moves past the end of the file.
    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        if token.kind != TokenKind::EndOfFile {
            self.cursor += 1;
        }
        token
    }

    fn consume_if_keyword(&mut self, keyword: Keyword) -> bool {
        if self.peek_keyword() != Some(keyword) {
            return false;
        }

        _ = self.consume_token();
        true
    }

    fn consume_if_punctuator(&mut self, punctuator: Punctuator) -> bool {
        if self.peek_punctuator() != Some(punctuator) {
            return false;
        }

        _ = self.consume_token();
        true
    }

    fn previous_end(&self) -> FileLocation {
        match self.cursor.checked_sub(1).and_then(|index| self.tokens.get(index)) {
            Some(token) => token.end,
            None => self.peek_token().begin,
        }
    }
}

#[derive(Clone, Debug, thiserror::Error, AsRefStr)]
pub enum ParseDiagnostic {
    #[error("se esperaba '=' después de '{name}', pero se encontró '{token}'")]
    ExpectedAssignment { token: Token, name: String },

    #[error("se esperaba una expresión en {context}, pero se encontró '{token}'")]
    ExpectedExpression { token: Token, context: &'static str },

    #[error("se esperaba un identificador después de {after}, pero se encontró '{token}'")]
    ExpectedIdentifier { token: Token, after: &'static str },

    #[error("se esperaba '{}', pero se encontró '{token}'", .keyword.as_ref())]
    ExpectedKeyword { token: Token, keyword: Keyword },

    #[error("token inesperado '{token}'")]
    UnexpectedToken { token: Token },
}

impl ParseDiagnostic {
    pub fn token(&self) -> &Token {
        match self {
            Self::ExpectedAssignment { token, .. } => token,
            Self::ExpectedExpression { token, .. } => token,
            Self::ExpectedIdentifier { token, .. } => token,
            Self::ExpectedKeyword { token, .. } => token,
            Self::UnexpectedToken { token } => token,
        }
    }

    pub fn range(&self) -> FileRange {
        self.token().range()
    }

    #[must_use]
    pub fn location(&self) -> FileLocation {
        self.token().begin
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

/// Why a statement could not be produced. Diagnostics are recorded separately.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("no hay expresión")]
    MissingExpression,

    #[error("instrucción descartada")]
    StatementDiscarded,
}

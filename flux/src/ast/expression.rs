// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Debug, Display, Write};

use crate::{FileRange, Ranged};

#[derive(Clone, Debug)]
pub enum Expression {
    Identifier(String),
    IntegerLiteral(i64),
    FloatLiteral(f64),

    /// Without the surrounding quotes. Escape sequences are kept as written.
    StringLiteral(String),
    BooleanLiteral(bool),

    BiExpression(BiExpression),
    Unary(UnaryExpression),
    Call(CallExpression),
}

impl Expression {
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(ident) => Some(ident),
            _ => None,
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(ident) => f.write_str(ident),
            Self::IntegerLiteral(i) => f.write_fmt(format_args!("{i}")),
            Self::FloatLiteral(d) => f.write_fmt(format_args!("{d:?}")),
            Self::StringLiteral(str) => {
                f.write_char('"')?;
                f.write_str(str)?;
                f.write_char('"')
            }
            Self::BooleanLiteral(b) => f.write_str(if *b { "verdadero" } else { "falso" }),
            Self::BiExpression(expr) => Display::fmt(expr, f),
            Self::Unary(expr) => Display::fmt(expr, f),
            Self::Call(expr) => Display::fmt(expr, f),
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnaryExpression {
    pub operator: Ranged<UnaryOperator>,
    pub rhs: Box<Ranged<Expression>>,
}

impl Display for UnaryExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.operator.as_str())?;
        Display::fmt(self.rhs.value(), f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

#[derive(Clone, Debug)]
pub struct CallExpression {
    pub callee: Box<Ranged<Expression>>,
    pub arguments: Vec<Ranged<Expression>>,

    pub token_left_paren: FileRange,
}

impl Display for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.callee.value(), f)?;
        f.write_char('(')?;

        for (idx, arg) in self.arguments.iter().enumerate() {
            if idx != 0 {
                f.write_str(", ")?;
            }

            Display::fmt(arg.value(), f)?;
        }

        f.write_char(')')
    }
}

#[derive(Clone, Debug)]
pub struct BiExpression {
    pub operator: Ranged<BiOperator>,
    pub lhs: Box<Ranged<Expression>>,
    pub rhs: Box<Ranged<Expression>>,
}

/// Always parenthesized, so the rendering shows how the operands grouped.
impl Display for BiExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('(')?;
        Display::fmt(self.lhs.value(), f)?;

        f.write_char(' ')?;
        f.write_str(self.operator.as_str())?;
        f.write_char(' ')?;

        Display::fmt(self.rhs.value(), f)?;
        f.write_char(')')
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BiOperator {
    Comparison(Comparison),
    Logical(LogicalOperator),
    Math(MathOperator),
}

impl BiOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comparison(comp) => comp.as_str(),
            Self::Logical(logical) => logical.as_str(),
            Self::Math(math) => math.as_str(),
        }
    }

    /// Binding strength used by the expression parser. Note that a higher
    /// number is looser here: `||` has the highest precedence value.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Math(MathOperator::Add | MathOperator::Subtract) => 3,
            Self::Math(MathOperator::Multiply | MathOperator::Divide | MathOperator::Modulo) => 4,
            Self::Comparison(Comparison::Equality | Comparison::Inequality) => 6,
            Self::Comparison(..) => 5,
            Self::Logical(LogicalOperator::And) => 7,
            Self::Logical(LogicalOperator::Or) => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl MathOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }
}

impl From<MathOperator> for BiOperator {
    fn from(value: MathOperator) -> Self {
        Self::Math(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
}

impl From<Comparison> for BiOperator {
    fn from(value: Comparison) -> Self {
        Self::Comparison(value)
    }
}

impl Comparison {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equality => "==",
            Self::Inequality => "!=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }
}

/// Both operands are always evaluated, there is no short-circuiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl From<LogicalOperator> for BiOperator {
    fn from(value: LogicalOperator) -> Self {
        Self::Logical(value)
    }
}

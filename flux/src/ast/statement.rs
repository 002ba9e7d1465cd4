// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Expression, FileRange, Ranged};

#[derive(Debug, Clone)]
pub struct Statement {
    pub range: FileRange,
    pub kind: StatementKind,
}

#[derive(Debug, Clone)]
pub enum StatementKind {
    Assignment(AssignStatement),
    Block(Block),
    Declare(DeclareStatement),
    Expression(Ranged<Expression>),
    Function(FunctionStatement),
    If(IfStatement),
    Repeat(RepeatStatement),
    Return(ReturnStatement),
    Show(ShowStatement),
    While(WhileStatement),
}

impl StatementKind {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Assignment(..) => "asignación",
            Self::Block(..) => "bloque",
            Self::Declare(..) => "declaración",
            Self::Expression(..) => "expresión",
            Self::Function(..) => "función",
            Self::If(..) => "si",
            Self::Repeat(..) => "repetir",
            Self::Return(..) => "retornar",
            Self::Show(..) => "mostrar",
            Self::While(..) => "mientras",
        }
    }
}

/// A sequence of statements. Blocks have no opening token, they run until
/// `fin`, `sino` or the end of the file.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

/// `definir x = ...` or `constante x = ...`
#[derive(Debug, Clone)]
pub struct DeclareStatement {
    pub is_constant: bool,
    pub name: Ranged<String>,
    pub expression: Ranged<Expression>,
}

#[derive(Debug, Clone)]
pub struct AssignStatement {
    pub name: Ranged<String>,
    pub expression: Ranged<Expression>,
}

#[derive(Debug, Clone)]
pub struct IfStatement {
    pub condition: Ranged<Expression>,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

#[derive(Debug, Clone)]
pub struct WhileStatement {
    pub condition: Ranged<Expression>,
    pub body: Block,
}

/// Counts from `from` up to and including `to`.
#[derive(Debug, Clone)]
pub struct RepeatStatement {
    pub iterator_name: Ranged<String>,
    pub from: Ranged<Expression>,
    pub to: Ranged<Expression>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct FunctionStatement {
    pub name: Ranged<String>,
    pub parameters: Vec<Ranged<String>>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct ShowStatement {
    pub expression: Ranged<Expression>,
}

#[derive(Debug, Clone)]
pub struct ReturnStatement {
    pub expression: Option<Ranged<Expression>>,
}

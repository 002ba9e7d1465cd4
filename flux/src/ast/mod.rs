// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

mod expression;
mod program;
mod statement;

pub use self::{
    expression::{
        BiExpression,
        BiOperator,
        CallExpression,
        Comparison,
        Expression,
        LogicalOperator,
        MathOperator,
        UnaryExpression,
        UnaryOperator,
    },
    program::Program,
    statement::{
        AssignStatement,
        Block,
        DeclareStatement,
        FunctionStatement,
        IfStatement,
        RepeatStatement,
        ReturnStatement,
        ShowStatement,
        Statement,
        StatementKind,
        WhileStatement,
    },
};

// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cmp::Ordering, fmt::Display, rc::Rc};

use flux::{Block, Comparison, MathOperator};

#[derive(Clone, Debug)]
pub enum Value {
    /// The result of anything that could not be computed: unknown names,
    /// invalid operands and division by zero. Falsy, but not `false`.
    Absent,

    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Function(Rc<FunctionValue>),
}

/// A declared function. It does not capture its environment: the body runs
/// in a scope nested inside the caller's scope.
#[derive(Debug)]
pub struct FunctionValue {
    pub name: String,
    pub parameters: Vec<String>,
    pub body: Block,
}

impl Value {
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Absent => false,
            Self::Bool(b) => *b,
            Self::Integer(i) => *i != 0,
            Self::Float(f) => *f != 0.0,
            Self::String(str) => !str.is_empty(),
            Self::Function(..) => true,
        }
    }

    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Absent => "nulo",
            Self::Bool(..) => "booleano",
            Self::Integer(..) => "entero",
            Self::Float(..) => "decimal",
            Self::String(..) => "cadena",
            Self::Function(..) => "función",
        }
    }

    #[must_use]
    fn as_float(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn math(&self, operator: MathOperator, rhs: &Self) -> Self {
        match operator {
            MathOperator::Add => self.add(rhs),
            MathOperator::Subtract => self.numeric(rhs, i64::wrapping_sub, |a, b| a - b),
            MathOperator::Multiply => self.numeric(rhs, i64::wrapping_mul, |a, b| a * b),
            MathOperator::Divide => self.divide(rhs),
            MathOperator::Modulo => self.modulo(rhs),
        }
    }

    fn add(&self, rhs: &Self) -> Self {
        if let Self::String(lhs) = self {
            return Self::String(format!("{lhs}{rhs}"));
        }

        self.numeric(rhs, i64::wrapping_add, |a, b| a + b)
    }

    /// Integers stay integers, anything involving a float becomes a float.
    fn numeric(&self, rhs: &Self, integer: impl FnOnce(i64, i64) -> i64, float: impl FnOnce(f64, f64) -> f64) -> Self {
        match (self, rhs) {
            (Self::Integer(lhs), Self::Integer(rhs)) => Self::Integer(integer(*lhs, *rhs)),
            (Self::Integer(lhs), Self::Float(rhs)) => Self::Float(float(*lhs as f64, *rhs)),
            (Self::Float(lhs), Self::Integer(rhs)) => Self::Float(float(*lhs, *rhs as f64)),
            (Self::Float(lhs), Self::Float(rhs)) => Self::Float(float(*lhs, *rhs)),
            _ => Self::Absent,
        }
    }

    /// Always produces a float, even for two integers.
    fn divide(&self, rhs: &Self) -> Self {
        let (Some(lhs), Some(rhs)) = (self.as_float(), rhs.as_float()) else {
            return Self::Absent;
        };

        if rhs == 0.0 {
            return Self::Absent;
        }

        Self::Float(lhs / rhs)
    }

    fn modulo(&self, rhs: &Self) -> Self {
        match (self, rhs) {
            (Self::Integer(_), Self::Integer(0)) => Self::Absent,
            (Self::Integer(lhs), Self::Integer(rhs)) => Self::Integer(lhs.wrapping_rem(*rhs)),
            _ => Self::Absent,
        }
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        match self {
            Self::Integer(i) => Self::Integer(i.wrapping_neg()),
            Self::Float(f) => Self::Float(-f),
            _ => Self::Absent,
        }
    }

    /// Equality never converts between kinds, so `3 == 3.0` is false. The
    /// ordering comparisons only apply to numbers and are false otherwise.
    #[must_use]
    pub fn compare(&self, other: &Self, comparison: Comparison) -> bool {
        match comparison {
            Comparison::Equality => return self == other,
            Comparison::Inequality => return self != other,
            _ => (),
        }

        let Some(ordering) = self.numeric_ordering(other) else {
            return false;
        };

        match comparison {
            Comparison::GreaterThan => ordering == Ordering::Greater,
            Comparison::GreaterThanOrEqual => ordering != Ordering::Less,
            Comparison::LessThan => ordering == Ordering::Less,
            Comparison::LessThanOrEqual => ordering != Ordering::Greater,
            Comparison::Equality | Comparison::Inequality => unreachable!(),
        }
    }

    fn numeric_ordering(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(this), Self::Integer(that)) => Some(this.cmp(that)),
            _ => self.as_float()?.partial_cmp(&other.as_float()?),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Absent, Self::Absent) => true,
            (Self::Bool(this), Self::Bool(that)) => this == that,
            (Self::Integer(this), Self::Integer(that)) => this == that,
            (Self::Float(this), Self::Float(that)) => this == that,
            (Self::String(this), Self::String(that)) => this == that,
            (Self::Function(this), Self::Function(that)) => Rc::ptr_eq(this, that),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => f.write_str("nulo"),
            Self::Bool(false) => f.write_str("false"),
            Self::Bool(true) => f.write_str("true"),
            Self::Integer(i) => i.fmt(f),
            Self::Float(d) => d.fmt(f),
            Self::String(str) => f.write_str(str),
            Self::Function(function) => f.write_fmt(format_args!("función({})", function.parameters.join(", "))),
        }
    }
}

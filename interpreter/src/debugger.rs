// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use flux::Statement;

use crate::{RuntimeError, Value};

/// Observer of a running program. Every method has an empty default, so
/// implementors only override what they need.
pub trait Debugger {
    fn on_statement(&mut self, statement: &Statement) { _ = statement }

    /// Called with the value of every `mostrar`, before it is written.
    fn on_show(&mut self, value: &Value) { _ = value }

    fn enter_function(&mut self, name: &str, args: &[Value]) {
        _ = name;
        _ = args;
    }

    fn leave_function(&mut self, name: &str, result: &Value) {
        _ = name;
        _ = result;
    }

    /// Called for surfaced faults and for faults absorbed inside functions.
    fn on_runtime_error(&mut self, error: &RuntimeError) {
        _ = error;
    }
}

impl Debugger for () {
}

// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{io::Write, rc::Rc};

use flux::*;

use crate::*;

pub struct Interpreter<D>
        where D: Debugger {
    debugger: D,
    scope: Scope,
    output: Box<dyn Write>,
}

impl<D> Interpreter<D>
        where D: Debugger {
    pub fn new(debugger: D) -> Self {
        Self::with_output(debugger, std::io::stdout())
    }

    /// Writes the output of `mostrar` to `output` instead of stdout.
    pub fn with_output(debugger: D, output: impl Write + 'static) -> Self {
        Self {
            debugger,
            scope: Scope::new_top_level(),
            output: Box::new(output),
        }
    }

    #[must_use]
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    #[must_use]
    pub fn debugger(&self) -> &D {
        &self.debugger
    }

    /// Runs the statements in order. A `retornar` at the top level is ignored
    /// and the next statement runs; the first fault stops the program.
    pub fn evaluate_program(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for statement in program.statements() {
            match self.execute_statement(statement) {
                Ok(StatementResult::Continue) => (),
                Ok(StatementResult::Return(value)) => {
                    log::debug!("`retornar` fuera de una función ignorado (valor {value})");
                }
                Err(error) => {
                    self.debugger.on_runtime_error(&error);
                    return Err(error);
                }
            }
        }

        if let Err(error) = self.output.flush() {
            log::error!("No se pudo vaciar la salida: {error}");
        }

        Ok(())
    }

    fn execute_statement(&mut self, statement: &Statement) -> Result<StatementResult, RuntimeError> {
        self.debugger.on_statement(statement);

        match &statement.kind {
            StatementKind::Assignment(assignment) => {
                let value = self.execute_expression(&assignment.expression);
                if value.is_absent() {
                    return Err(RuntimeError::AssignmentValue { name: assignment.name.value().clone() });
                }

                self.scope.set(assignment.name.value(), value);
                Ok(StatementResult::Continue)
            }

            StatementKind::Block(block) => {
                self.execute_block(block)
            }

            StatementKind::Declare(declaration) => {
                let value = self.execute_expression(&declaration.expression);
                if value.is_absent() {
                    return Err(RuntimeError::DeclarationValue { name: declaration.name.value().clone() });
                }

                if declaration.is_constant {
                    self.scope.set_constant(declaration.name.value(), value);
                } else {
                    self.scope.set(declaration.name.value(), value);
                }

                Ok(StatementResult::Continue)
            }

            StatementKind::Expression(expression) => {
                self.execute_expression(expression);
                Ok(StatementResult::Continue)
            }

            StatementKind::Function(function) => {
                let value = Value::Function(Rc::new(FunctionValue {
                    name: function.name.value().clone(),
                    parameters: function.parameters.iter().map(|p| p.value().clone()).collect(),
                    body: function.body.clone(),
                }));

                self.scope.set(function.name.value(), value);
                Ok(StatementResult::Continue)
            }

            StatementKind::If(statement) => {
                self.execute_if_statement(statement)
            }

            StatementKind::Repeat(statement) => {
                self.execute_repeat_statement(statement)
            }

            StatementKind::Return(statement) => {
                let value = statement.expression.as_ref()
                    .map(|expr| self.execute_expression(expr))
                    .unwrap_or(Value::Absent);

                Ok(StatementResult::Return(value))
            }

            StatementKind::Show(statement) => {
                let value = self.execute_expression(&statement.expression);
                self.debugger.on_show(&value);

                if let Err(error) = writeln!(self.output, "{value}") {
                    log::error!("No se pudo escribir la salida: {error}");
                }

                Ok(StatementResult::Continue)
            }

            StatementKind::While(statement) => {
                while self.execute_expression(&statement.condition).is_truthy() {
                    if let StatementResult::Return(value) = self.execute_block(&statement.body)? {
                        return Ok(StatementResult::Return(value));
                    }
                }

                Ok(StatementResult::Continue)
            }
        }
    }

    fn execute_block(&mut self, block: &Block) -> Result<StatementResult, RuntimeError> {
        for statement in &block.statements {
            if let StatementResult::Return(value) = self.execute_statement(statement)? {
                return Ok(StatementResult::Return(value));
            }
        }

        Ok(StatementResult::Continue)
    }

    fn execute_if_statement(&mut self, statement: &IfStatement) -> Result<StatementResult, RuntimeError> {
        if self.execute_expression(&statement.condition).is_truthy() {
            return self.execute_block(&statement.then_block);
        }

        match &statement.else_block {
            Some(block) => self.execute_block(block),
            None => Ok(StatementResult::Continue),
        }
    }

    /// The bounds are evaluated once. The loop variable is bound in the
    /// current scope and keeps its last value afterwards.
    fn execute_repeat_statement(&mut self, statement: &RepeatStatement) -> Result<StatementResult, RuntimeError> {
        let from = self.execute_expression(&statement.from);
        let to = self.execute_expression(&statement.to);

        let (Value::Integer(from), Value::Integer(to)) = (&from, &to) else {
            return Err(RuntimeError::RepeatBounds { from: from.kind_name(), to: to.kind_name() });
        };

        for value in *from..=*to {
            self.scope.set(statement.iterator_name.value(), Value::Integer(value));

            if let StatementResult::Return(value) = self.execute_block(&statement.body)? {
                return Ok(StatementResult::Return(value));
            }
        }

        Ok(StatementResult::Continue)
    }

    pub fn execute_expression(&mut self, expression: &Ranged<Expression>) -> Value {
        match expression.value() {
            Expression::BiExpression(expression) => self.execute_bi_expression(expression),
            Expression::BooleanLiteral(b) => Value::Bool(*b),
            Expression::Call(call) => self.execute_function_call(call),
            Expression::FloatLiteral(d) => Value::Float(*d),
            Expression::Identifier(name) => self.scope.find(name),
            Expression::IntegerLiteral(i) => Value::Integer(*i),
            Expression::StringLiteral(str) => Value::String(str.clone()),
            Expression::Unary(expression) => self.execute_unary_expression(expression),
        }
    }

    /// Both operands are evaluated, also for `&&` and `||`.
    fn execute_bi_expression(&mut self, expression: &BiExpression) -> Value {
        let lhs = self.execute_expression(&expression.lhs);
        let rhs = self.execute_expression(&expression.rhs);

        match *expression.operator.value() {
            BiOperator::Math(operator) => lhs.math(operator, &rhs),
            BiOperator::Comparison(comparison) => Value::Bool(lhs.compare(&rhs, comparison)),
            BiOperator::Logical(LogicalOperator::And) => Value::Bool(lhs.is_truthy() && rhs.is_truthy()),
            BiOperator::Logical(LogicalOperator::Or) => Value::Bool(lhs.is_truthy() || rhs.is_truthy()),
        }
    }

    fn execute_unary_expression(&mut self, expression: &UnaryExpression) -> Value {
        let rhs = self.execute_expression(&expression.rhs);

        match expression.operator.value() {
            UnaryOperator::Negate => rhs.negate(),
            UnaryOperator::Not => Value::Bool(!rhs.is_truthy()),
        }
    }

    fn execute_function_call(&mut self, call: &CallExpression) -> Value {
        let Some(name) = call.callee.as_identifier() else {
            return Value::Absent;
        };

        let Value::Function(function) = self.scope.find(name) else {
            log::debug!("`{name}` no es una función");
            return Value::Absent;
        };

        let mut arguments: Vec<Value> = Vec::with_capacity(call.arguments.len());
        for argument in &call.arguments {
            arguments.push(self.execute_expression(argument));
        }

        self.debugger.enter_function(&function.name, &arguments);
        let value = self.execute_function(&function, arguments);
        self.debugger.leave_function(&function.name, &value);

        value
    }

    /// Runs the body in a new scope nested inside the caller's. Extra
    /// arguments are dropped and missing ones stay unbound. A fault in the
    /// body is reported and skipped, and the next statement runs.
    fn execute_function(&mut self, function: &FunctionValue, arguments: Vec<Value>) -> Value {
        self.scope = std::mem::take(&mut self.scope).push();
        log::trace!("Ámbito de `{}` abierto (profundidad {})", function.name, self.scope.depth());

        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            self.scope.set(parameter, argument);
        }

        let mut result = Value::Absent;
        for statement in &function.body.statements {
            match self.execute_statement(statement) {
                Ok(StatementResult::Continue) => (),
                Ok(StatementResult::Return(value)) => {
                    result = value;
                    break;
                }
                Err(error) => {
                    log::warn!("Error dentro de la función `{}`: {error}", function.name);
                    self.debugger.on_runtime_error(&error);
                }
            }
        }

        self.scope = std::mem::take(&mut self.scope).pop();
        result
    }
}

#[must_use]
enum StatementResult {
    Continue,
    Return(Value),
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, io};

    use super::*;
    use rstest::rstest;

    #[derive(Clone, Default)]
    struct SharedOutput(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDebugger {
        events: Vec<String>,
    }

    impl Debugger for RecordingDebugger {
        fn enter_function(&mut self, name: &str, args: &[Value]) {
            let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
            self.events.push(format!("enter {name}({})", args.join(", ")));
        }

        fn leave_function(&mut self, name: &str, result: &Value) {
            self.events.push(format!("leave {name} = {result}"));
        }

        fn on_runtime_error(&mut self, error: &RuntimeError) {
            self.events.push(format!("error {}", error.name()));
        }
    }

    fn program(input: &str) -> Program {
        let tokens = tokenize(input).unwrap();
        let (program, diagnostics) = parse(&tokens);
        assert!(diagnostics.is_empty(), "{diagnostics:#?}");
        program
    }

    fn run(input: &str) -> (String, Result<(), RuntimeError>) {
        let output = SharedOutput::default();
        let mut interpreter = Interpreter::with_output((), output.clone());
        let result = interpreter.evaluate_program(&program(input));

        let bytes = output.0.borrow().clone();
        (String::from_utf8(bytes).unwrap(), result)
    }

    #[rstest]
    #[case("mostrar 'hola'", "hola\n")]
    #[case("mostrar 1\nmostrar 2.5", "1\n2.5\n")]
    #[case("definir a = 3\na = a * 2\nmostrar a", "6\n")]
    #[case("mostrar verdadero\nmostrar falso", "true\nfalse\n")]
    fn show_writes_lines(#[case] input: &str, #[case] expected: &str) {
        let (output, result) = run(input);
        assert_eq!(result, Ok(()));
        assert_eq!(output, expected);
    }

    #[test]
    fn fault_keeps_earlier_output() {
        let (output, result) = run("mostrar 1\ndefinir b = c\nmostrar 2");
        assert_eq!(output, "1\n");
        assert_eq!(result, Err(RuntimeError::DeclarationValue { name: "b".into() }));
    }

    #[test]
    fn debugger_sees_calls_and_absorbed_faults() {
        let mut interpreter = Interpreter::with_output(RecordingDebugger::default(), io::sink());
        let result = interpreter.evaluate_program(&program("
            función doble(n)
                definir roto = falta
                retornar n * 2
            fin
            doble(4)
        "));

        assert_eq!(result, Ok(()));
        assert_eq!(interpreter.debugger().events, [
            "enter doble(4)",
            "error DeclarationValue",
            "leave doble = 8",
        ]);
    }

    #[test]
    fn scope_is_restored_after_call() {
        let mut interpreter = Interpreter::with_output((), io::sink());
        let result = interpreter.evaluate_program(&program("
            función f(a)
                definir local = a
            fin
            f(1)
        "));

        assert_eq!(result, Ok(()));
        assert_eq!(interpreter.scope().depth(), 0);
        assert!(interpreter.scope().find("local").is_absent());
        assert!(!interpreter.scope().find("f").is_absent());
    }

    #[test]
    fn constant_declaration_marks_scope() {
        let mut interpreter = Interpreter::with_output((), io::sink());
        let result = interpreter.evaluate_program(&program("constante MAXIMO = 10\nMAXIMO = 11"));

        assert_eq!(result, Ok(()));
        assert!(interpreter.scope().is_constant("MAXIMO"));
        assert_eq!(interpreter.scope().find("MAXIMO"), Value::Integer(10));
    }
}

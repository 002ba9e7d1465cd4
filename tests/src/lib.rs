// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::sync::{Arc, Mutex};

use flux::{parse, tokenize, Expression, Parser, Program, Ranged};
use flux_interpreter::{Debugger, Interpreter, RuntimeError, Value};

pub fn init_logging() {
    _ = env_logger::builder().is_test(true).try_init();
}

fn parse_program(input: &str) -> Program {
    let tokens = tokenize(input).expect("input should lex");
    let (program, diagnostics) = parse(&tokens);
    assert!(diagnostics.is_empty(), "Diagnostics: {diagnostics:#?}");
    program
}

fn parse_expression(input: &str) -> Ranged<Expression> {
    let tokens = tokenize(input).expect("input should lex");
    let mut parser = Parser::new(&tokens);

    let expression = parser.parse_expression().expect("input should be an expression");
    assert!(parser.is_at_end());

    expression
}

pub fn interpret_expression(input: &str) -> Value {
    init_logging();

    let expression = parse_expression(input);
    Interpreter::with_output((), std::io::sink()).execute_expression(&expression)
}

/// Runs `input` and returns every line written by `mostrar`, together with
/// the fault that stopped the program, if any.
pub fn try_interpret(input: &str) -> (Vec<String>, Result<(), RuntimeError>) {
    init_logging();

    let program = parse_program(input);
    let buffer = Arc::new(Mutex::new(Vec::new()));

    let result = {
        let mut interpreter = Interpreter::with_output(TestDebugger {
            buffer: Arc::clone(&buffer),
        }, std::io::sink());

        interpreter.evaluate_program(&program)
    };

    let lines = Arc::try_unwrap(buffer).unwrap().into_inner().unwrap();
    (lines, result)
}

pub fn interpret_and_return_stdout(input: &str) -> Vec<String> {
    let (lines, result) = try_interpret(input);
    assert_eq!(result, Ok(()), "Output until the fault: {lines:#?}");
    lines
}

struct TestDebugger {
    buffer: Arc<Mutex<Vec<String>>>,
}

impl Debugger for TestDebugger {
    fn on_show(&mut self, value: &Value) {
        self.buffer.lock().unwrap().push(value.to_string());
    }
}

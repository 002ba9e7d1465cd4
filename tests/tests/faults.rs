// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use flux::{parse, tokenize, LexerErrorKind, ParseDiagnostic};
use flux_interpreter::RuntimeError;
use pretty_assertions::assert_eq;
use rstest::rstest;
use tests::try_interpret;

#[rstest]
#[case(
    "mostrar 1\ndefinir x = y\nmostrar 2",
    &["1"],
    RuntimeError::DeclarationValue { name: "x".into() },
)]
#[case(
    "definir x = 1\nx = 4 / 0\nmostrar x",
    &[],
    RuntimeError::AssignmentValue { name: "x".into() },
)]
#[case(
    "repetir i desde 1.5 hasta 3 hacer\nmostrar i\nfin",
    &[],
    RuntimeError::RepeatBounds { from: "decimal", to: "entero" },
)]
#[case(
    "repetir i desde 1 hasta 'diez' hacer\nfin",
    &[],
    RuntimeError::RepeatBounds { from: "entero", to: "cadena" },
)]
fn faults_stop_the_program(#[case] input: &str, #[case] expected_output: &[&str], #[case] expected: RuntimeError) {
    let (lines, result) = try_interpret(input);
    assert_eq!(lines, expected_output);
    assert_eq!(result, Err(expected));
}

#[rstest]
#[case("\"abc", 0, 0, "UnterminatedString")]
#[case("definir x = 5\nmostrar x &", 1, 10, "IncompleteOperator")]
#[case("definir x = 12345678901234567890", 0, 12, "InvalidNumber")]
#[case("mostar 5", 0, 0, "MisspelledKeyword")]
#[case("definir x = 5 @", 0, 14, "UnexpectedCharacter")]
fn lexer_errors_are_positioned(#[case] input: &str, #[case] line: usize, #[case] column: usize, #[case] name: &str) {
    let error = tokenize(input).unwrap_err();
    assert_eq!(error.location.line(), line);
    assert_eq!(error.location.column(), column);
    assert_eq!(error.kind.name(), name);
}

#[test]
fn misspelled_keyword_suggests_the_keyword() {
    let error = tokenize("defenir x = 1").unwrap_err();
    assert_eq!(error.to_string(), "línea 1, columna 1: palabra clave incorrecta 'defenir' (¿quisiste decir 'definir'?)");
    assert!(matches!(error.kind, LexerErrorKind::MisspelledKeyword { .. }));
}

#[test]
fn parser_recovers_after_one_error() {
    let tokens = tokenize("definir 5\nmostrar 1\nmostrar 2").unwrap();
    let (program, diagnostics) = parse(&tokens);

    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(diagnostics[0], ParseDiagnostic::ExpectedIdentifier { .. }));
    assert_eq!(diagnostics[0].location().to_string(), "1:9");

    let names: Vec<&str> = program.statements()
        .iter()
        .map(|statement| statement.kind.name())
        .collect();
    assert_eq!(names, ["mostrar", "mostrar"]);
}

#[test]
fn recovery_skips_a_single_token() {
    let tokens = tokenize("definir 5 = 3\nmostrar 1\nmostrar 2").unwrap();
    let (program, diagnostics) = parse(&tokens);

    let found: Vec<(&str, String)> = diagnostics.iter()
        .map(|diagnostic| (diagnostic.name(), diagnostic.location().to_string()))
        .collect();
    assert_eq!(found, [
        ("ExpectedIdentifier", "1:9".to_string()),
        ("UnexpectedToken", "1:11".to_string()),
    ]);

    let names: Vec<&str> = program.statements()
        .iter()
        .map(|statement| statement.kind.name())
        .collect();
    assert_eq!(names, ["expresión", "mostrar", "mostrar"]);
}

#[test]
fn missing_expression_is_reported() {
    let tokens = tokenize("definir x =\nmostrar x").unwrap();
    let (_, diagnostics) = parse(&tokens);

    assert!(matches!(diagnostics.first(), Some(ParseDiagnostic::ExpectedExpression { .. })));
}

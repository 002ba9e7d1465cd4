// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use flux_interpreter::Value;
use rstest::rstest;
use tests::interpret_expression;

#[rstest]
#[case("10", Value::Integer(10))]
#[case("5 + 2", Value::Integer(7))]
#[case("4 * 9", Value::Integer(36))]
#[case("52 % 30", Value::Integer(22))]
#[case("1 + 2.5", Value::Float(3.5))]
#[case("7 / 2", Value::Float(3.5))]
#[case("6 / 3", Value::Float(2.0))]
#[case("0 / 5", Value::Float(0.0))]
fn binary_operations(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("2 + 3 * 4", Value::Integer(14))]
#[case("2 * 3 + 4", Value::Integer(10))]
#[case("10 * 4 + 5", Value::Integer(45))]
#[case("(2 + 3) * 4", Value::Integer(20))]
#[case("10 - 3 - 2", Value::Integer(9))]
#[case("-5 + 2", Value::Integer(-3))]
#[case("-(2 * 3)", Value::Integer(-6))]
fn precedence(#[case] input: &str, #[case] expected: Value) {
    let actual = interpret_expression(input);
    assert_eq!(actual, expected);
}

#[rstest]
#[case("4 / 0")]
#[case("4.0 / 0.0")]
#[case("5 % 0")]
#[case("5.5 % 2")]
#[case("verdadero * 2")]
#[case("sin_definir")]
#[case("sin_definir(1, 2)")]
fn absent_results(#[case] input: &str) {
    assert_eq!(interpret_expression(input), Value::Absent);
}

#[rstest]
#[case("3 == 3", true)]
#[case("3 == 3.0", false)]
#[case("3 != 3.0", true)]
#[case("2 < 2.5", true)]
#[case("2 ≤ 2", true)]
#[case("3 ≥ 4", false)]
#[case("3 ≠ 4", true)]
#[case("3 ↔ 3", true)]
#[case("3 ↔ 3.0", false)]
#[case("\"a\" == 'a'", true)]
#[case("\"a\" < \"b\"", false)]
#[case("!falso", true)]
#[case("¬0", true)]
#[case("verdadero && 0", false)]
#[case("falso || 'x'", true)]
#[case("true ∧ true", true)]
#[case("false ∨ false", false)]
fn comparisons_and_logic(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(interpret_expression(input), Value::Bool(expected));
}

#[rstest]
#[case("\"hola \" + \"mundo\"", "hola mundo")]
#[case("'a' + 1", "a1")]
#[case("'x' + 2.5", "x2.5")]
#[case("'es ' + verdadero", "es true")]
fn string_concatenation(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(interpret_expression(input), Value::String(expected.to_string()));
}

#[test]
fn comparison_binds_before_addition() {
    // (1 == 1) + 1 has no numeric meaning
    assert_eq!(interpret_expression("1 == 1 + 1"), Value::Absent);
}

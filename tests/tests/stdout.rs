// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use rstest::rstest;
use tests::interpret_and_return_stdout;

#[rstest]
#[case(
    r#"
        mostrar("¡Hola, mundo!")
    "#,
    &[
        "¡Hola, mundo!",
    ],
)]
#[case(
    r#"
        definir x = 5
        mostrar x + 1
    "#,
    &[
        "6",
    ],
)]
#[case(
    r#"
        mostrar(10 - 3 - 2)
        mostrar 2 + 3 * 4
    "#,
    &[
        "9",
        "14",
    ],
)]
#[case(
    r#"
        mostrar 1 + 2.5
        mostrar 3 == 3.0
        mostrar 4 / 0
        mostrar 6 / 3
    "#,
    &[
        "3.5",
        "false",
        "nulo",
        "2",
    ],
)]
#[case(
    r#"
        constante PI = 3
        PI = 4
        mostrar PI
    "#,
    &[
        "3",
    ],
)]
#[case(
    r#"
        // comentario de línea
        mostrar: 1 /* comentario
        de bloque */
        mostrar 2;
    "#,
    &[
        "1",
        "2",
    ],
)]
fn basic_programs(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        repetir i desde 1 hasta 3 hacer
            mostrar i
        fin
    "#,
    &[
        "1",
        "2",
        "3",
    ],
)]
#[case(
    r#"
        repetir i desde 3 hasta 1 hacer
            mostrar i
        fin
        mostrar "vacío"
    "#,
    &[
        "vacío",
    ],
)]
#[case(
    r#"
        definir i = 0
        mientras i < 2 hacer
            mostrar i
            i = i + 1
        fin
    "#,
    &[
        "0",
        "1",
    ],
)]
#[case(
    r#"
        definir edad = 20
        si edad >= 18 entonces
            mostrar "adulto"
        sino
            mostrar "menor"
        fin
    "#,
    &[
        "adulto",
    ],
)]
#[case(
    r#"
        si "" entonces
            mostrar "lleno"
        sino
            mostrar "vacío"
        fin
        si 0.5 hacer
            mostrar "verdadero"
        fin
    "#,
    &[
        "vacío",
        "verdadero",
    ],
)]
fn control_flow(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        función suma(a, b)
            retornar a + b
        fin
        mostrar suma(2, 3)
    "#,
    &[
        "5",
    ],
)]
#[case(
    r#"
        funcion factorial(n)
            si n <= 1 entonces
                retornar 1
            fin
            retornar n * factorial(n - 1)
        fin
        mostrar factorial(5)
    "#,
    &[
        "120",
    ],
)]
#[case(
    r#"
        función primero()
            repetir i desde 1 hasta 10 hacer
                si i == 3 entonces
                    retornar i
                fin
            fin
            retornar 0
        fin
        mostrar primero()
    "#,
    &[
        "3",
    ],
)]
#[case(
    r#"
        función nada()
            mostrar "dentro"
        fin
        mostrar nada()
    "#,
    &[
        "dentro",
        "nulo",
    ],
)]
#[case(
    r#"
        función segundo(a, b)
            retornar b
        fin
        mostrar segundo(1)
        mostrar segundo(1, 2, 3)
    "#,
    &[
        "nulo",
        "2",
    ],
)]
#[case(
    r#"
        función saludar
            mostrar "hola"
        fin
        saludar()
        mostrar saludar
    "#,
    &[
        "hola",
        "función()",
    ],
)]
fn functions(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        definir x = 1
        función leer()
            mostrar x
        fin
        función envolver()
            definir x = 2
            leer()
        fin
        envolver()
        mostrar x
    "#,
    &[
        "2",
        "1",
    ],
)]
#[case(
    r#"
        definir x = 1
        función cambiar()
            x = 2
            mostrar x
        fin
        cambiar()
        mostrar x
    "#,
    &[
        "2",
        "1",
    ],
)]
#[case(
    r#"
        constante LIMITE = 1
        función sombra()
            definir LIMITE = 5
            mostrar LIMITE
        fin
        sombra()
        mostrar LIMITE
    "#,
    &[
        "5",
        "1",
    ],
)]
#[case(
    r#"
        repetir i desde 1 hasta 2 hacer
        fin
        mostrar i
    "#,
    &[
        "2",
    ],
)]
fn scoping(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

#[rstest]
#[case(
    r#"
        mostrar 1
        retornar 5
        mostrar 2
    "#,
    &[
        "1",
        "2",
    ],
)]
#[case(
    r#"
        función romper()
            definir y = z
            mostrar "sigue"
        fin
        romper()
        mostrar "después"
    "#,
    &[
        "sigue",
        "después",
    ],
)]
#[case(
    r#"
        función revisar()
            definir i = 0
            mientras i < 3 hacer
                mostrar i
                si verdadero entonces
                    definir y = z
                fin
                i = i + 1
            fin
            mostrar "sigue"
        fin
        revisar()
    "#,
    &[
        "0",
        "sigue",
    ],
)]
fn absorbed_signals(#[case] input: &str, #[case] expected: &[&str]) {
    let expected: Vec<String> = expected.iter().map(|x| x.to_string()).collect();
    assert_eq!(interpret_and_return_stdout(input), expected);
}

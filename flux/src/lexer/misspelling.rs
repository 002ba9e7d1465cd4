// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use super::Keyword;

/// Frequent typos of keywords, keyed by their lowercase spelling.
const COMMON_MISSPELLINGS: &[(&str, Keyword)] = &[
    ("defenir", Keyword::Definir),
    ("definr", Keyword::Definir),
    ("defnir", Keyword::Definir),
    ("defini", Keyword::Definir),
    ("definor", Keyword::Definir),
    ("constnte", Keyword::Constante),
    ("constatne", Keyword::Constante),
    ("funcio", Keyword::Funcion),
    ("funcion", Keyword::Funcion),
    ("entoces", Keyword::Entonces),
    ("entonces", Keyword::Entonces),
    ("mientas", Keyword::Mientras),
    ("repetr", Keyword::Repetir),
    ("repeti", Keyword::Repetir),
    ("mostar", Keyword::Mostrar),
    ("mostrr", Keyword::Mostrar),
    ("retornr", Keyword::Retornar),
    ("retorna", Keyword::Retornar),
];

/// Returns the keyword the identifier was probably meant to be. Only called
/// for words that are not keywords themselves, so entries that lowercase to a
/// real keyword catch capitalized spellings such as `Entonces`.
#[must_use]
pub fn suggest_keyword(identifier: &str) -> Option<Keyword> {
    let lowercase = identifier.to_lowercase();

    COMMON_MISSPELLINGS.iter()
        .find(|(misspelling, _)| *misspelling == lowercase)
        .map(|(_, keyword)| *keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("defenir", Some(Keyword::Definir))]
    #[case("DEFENIR", Some(Keyword::Definir))]
    #[case("Mostar", Some(Keyword::Mostrar))]
    #[case("Entonces", Some(Keyword::Entonces))]
    #[case("retorna", Some(Keyword::Retornar))]
    #[case("contador", None)]
    #[case("defenirr", None)]
    fn suggestions(#[case] input: &str, #[case] expected: Option<Keyword>) {
        assert_eq!(suggest_keyword(input), expected);
    }
}

// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::str::FromStr;

use strum::IntoEnumIterator;

/// Reserved words of the language. Matching is exact and case-sensitive; a few
/// words accept an alternative spelling next to the canonical one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(strum::AsRefStr, strum::EnumIter, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Keyword {
    Constante,
    Continuar,
    Definir,
    Desde,
    Entonces,
    #[strum(to_string = "falso", serialize = "false")]
    Falso,
    Fin,
    #[strum(to_string = "función", serialize = "funcion")]
    Funcion,
    Hacer,
    Hasta,
    Mientras,
    Mostrar,
    Nulo,
    Repetir,
    Retornar,
    Salir,
    Si,
    Sino,
    #[strum(to_string = "verdadero", serialize = "true")]
    Verdadero,
}

impl Keyword {
    pub fn iter_variants() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::from_str(input).ok()
    }

    /// Keywords that close the block of a compound statement.
    #[must_use]
    pub const fn ends_block(&self) -> bool {
        matches!(self, Self::Fin | Self::Sino)
    }
}

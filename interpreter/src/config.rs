// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

/// Contents of an optional `flux.toml` next to the script. Missing sections
/// and keys take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigRoot {
    pub log: ConfigSectionLog,
    pub ejecucion: ConfigSectionExecution,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionLog {
    pub debug: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigSectionExecution {
    /// Print `=== EJECUCION ===` before running the program.
    pub encabezado: bool,
}

impl ConfigRoot {
    pub const FILE_NAME: &'static str = "flux.toml";

    pub fn parse(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Reads the configuration belonging to `script`, or the defaults when
    /// there is none.
    pub fn load_for_script(script: &Path) -> anyhow::Result<Self> {
        let path = script.parent()
            .unwrap_or_else(|| Path::new(""))
            .join(Self::FILE_NAME);

        if !path.is_file() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("no se pudo leer `{}`", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("configuración inválida en `{}`", path.display()))
    }
}

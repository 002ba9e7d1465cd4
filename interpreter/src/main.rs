// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

use std::{path::{Path, PathBuf}, process::exit};

use anyhow::Context;
use colored::Colorize;
use flux_interpreter::*;
use log::LevelFilter;

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    archivo: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        use clap::Parser;
        Self::parse()
    }
}

fn main() {
    let args = Args::parse_args();

    let config = match ConfigRoot::load_for_script(&args.archivo) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {e:#}", "Error leyendo la configuración".red().bold());
            exit(1);
        }
    };

    let level = if args.verbose || config.log.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Logger::initialize(level);

    let source_code = match read_source(&args.archivo) {
        Ok(source_code) => source_code,
        Err(e) => {
            println!("Error leyendo archivo: {e:#}");
            exit(1);
        }
    };

    let program = analyze(&source_code);

    if config.ejecucion.encabezado {
        println!("=== EJECUCION ===");
    }

    let mut interpreter = Interpreter::new(());
    if let Err(e) = interpreter.evaluate_program(&program) {
        println!("Error en ejecución: {e}");
        exit(1);
    }
}

fn read_source(path: &Path) -> anyhow::Result<SourceCode> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("no se pudo abrir `{}`", path.display()))?;

    Ok(SourceCode::from_bytes(path, &bytes))
}

/// Lexes and parses the file, exiting when either stage reports a problem.
fn analyze(source_code: &SourceCode) -> Program {
    let tokens = match tokenize(source_code) {
        Ok(tokens) => tokens,
        Err(error) => {
            println!("Error en análisis léxico: {error}");

            let hint = match &error.kind {
                LexerErrorKind::MisspelledKeyword { suggestion, .. } => {
                    Some(format!("Escribe `{}` en su lugar", suggestion.as_ref()))
                }
                _ => None,
            };

            ErrorPrinter::new(source_code, error.location.as_zero_range(), &error.kind)
                .hint(hint)
                .print();
            exit(1);
        }
    };

    log::debug!("{} tokens leídos de `{}`", tokens.len(), source_code.path().display());

    let (program, diagnostics) = parse(&tokens);
    if diagnostics.is_empty() {
        return program;
    }

    for diagnostic in &diagnostics {
        let location = diagnostic.location();
        println!(
            "Error en análisis sintáctico: línea {}, columna {}: {diagnostic}",
            location.line() + 1,
            location.column() + 1,
        );

        ErrorPrinter::new(source_code, diagnostic.range(), diagnostic).print();
    }

    exit(1);
}

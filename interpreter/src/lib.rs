// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

#![deny(elided_lifetimes_in_paths)]

mod config;
mod debugger;
mod error;
mod interpreter;
mod logger;
mod scope;
mod value;

pub use flux::*;

pub use self::{
    config::{ConfigRoot, ConfigSectionExecution, ConfigSectionLog},
    debugger::Debugger,
    error::{ErrorPrinter, RuntimeError},
    interpreter::Interpreter,
    logger::Logger,
    scope::Scope,
    value::{FunctionValue, Value},
};

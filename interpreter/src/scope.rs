// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::collections::{HashMap, HashSet};

use crate::Value;

/// One level of the environment. A child owns its parent while it is pushed,
/// so the parent always outlives it.
#[derive(Default, Debug)]
pub struct Scope {
    parent: Option<Box<Scope>>,
    variables: HashMap<String, Value>,
    constants: HashSet<String>,
}

impl Scope {
    pub fn new_top_level() -> Self {
        Self::default()
    }

    pub fn push(self) -> Self {
        Self {
            parent: Some(Box::new(self)),
            ..Default::default()
        }
    }

    pub fn pop(self) -> Self {
        *self.parent.expect("Top-level scope popped!")
    }

    /// Looks the name up through the whole chain, innermost first.
    pub fn find(&self, reference: &str) -> Value {
        if let Some(value) = self.variables.get(reference) {
            return value.clone();
        }

        if let Some(parent) = self.parent.as_ref() {
            return parent.find(reference);
        }

        Value::Absent
    }

    /// Binds in this scope only. Does nothing and returns `false` when the
    /// name is a constant of this scope; constants of outer scopes can be
    /// shadowed.
    pub fn set(&mut self, name: &str, value: Value) -> bool {
        if self.constants.contains(name) {
            log::debug!("Constante `{name}` no reasignada");
            return false;
        }

        self.variables.insert(name.to_string(), value);
        true
    }

    /// Binds in this scope and marks the name constant, even when it already
    /// was one.
    pub fn set_constant(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
        self.constants.insert(name.to_string());
    }

    #[must_use]
    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.contains(name)
    }

    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Zero for the top-level scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        match &self.parent {
            Some(parent) => parent.depth() + 1,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_the_chain() {
        let mut scope = Scope::new_top_level();
        assert!(scope.set("x", Value::Integer(1)));

        let scope = scope.push();
        assert_eq!(scope.find("x"), Value::Integer(1));
        assert_eq!(scope.find("y"), Value::Absent);
        assert_eq!(scope.depth(), 1);
    }

    #[test]
    fn inner_binding_shadows_and_disappears_on_pop() {
        let mut scope = Scope::new_top_level();
        scope.set("x", Value::Integer(1));

        let mut scope = scope.push();
        scope.set("x", Value::Integer(2));
        assert_eq!(scope.find("x"), Value::Integer(2));

        let scope = scope.pop();
        assert_eq!(scope.find("x"), Value::Integer(1));
        assert_eq!(scope.depth(), 0);
    }

    #[test]
    fn constant_is_not_overwritten() {
        let mut scope = Scope::new_top_level();
        scope.set_constant("PI", Value::Integer(3));

        assert!(!scope.set("PI", Value::Integer(4)));
        assert_eq!(scope.find("PI"), Value::Integer(3));
        assert!(scope.is_constant("PI"));
    }

    #[test]
    fn constant_declaration_always_writes() {
        let mut scope = Scope::new_top_level();
        scope.set_constant("PI", Value::Integer(3));
        scope.set_constant("PI", Value::Float(2.5));

        assert_eq!(scope.find("PI"), Value::Float(2.5));
    }

    #[test]
    fn outer_constant_can_be_shadowed() {
        let mut scope = Scope::new_top_level();
        scope.set_constant("PI", Value::Integer(3));

        let mut scope = scope.push();
        assert!(scope.set("PI", Value::Integer(4)));
        assert!(scope.contains_local("PI"));
        assert_eq!(scope.find("PI"), Value::Integer(4));

        let scope = scope.pop();
        assert_eq!(scope.find("PI"), Value::Integer(3));
    }

    #[test]
    #[should_panic = "Top-level scope popped!"]
    fn popping_top_level_panics() {
        _ = Scope::new_top_level().pop();
    }
}

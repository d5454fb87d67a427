use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Symbol table: one global scope mapping variable names to values
///
/// Entries are only ever created or overwritten, never removed, except by
/// [`Environment::clear`].
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds a variable, returning the value it replaced
    pub fn define(&mut self, name: String, value: Value) -> Option<Value> {
        self.variables.insert(name, value)
    }

    /// Gets a copy of the value bound to a name
    pub fn get(&self, name: &str) -> Result<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Checks if a variable is bound
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is bound
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Removes every binding
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Bound names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variables.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

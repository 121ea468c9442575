use std::collections::HashMap;

use crate::{
    ast::Identifier,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// One scope of bindings, linked to the scope it was opened in.
///
/// A new child environment is opened for every function call, `if`/`elif`/
/// `else` branch, `while` loop and bare block, and dropped when that construct
/// finishes. Lookups walk outward through the parents; writes always land in
/// the scope they are made in.
///
/// # Example
/// ```
/// use forest::{
///     ast::Identifier,
///     interpreter::{environment::Environment, value::core::Value},
/// };
///
/// let mut global = Environment::new();
/// global.define(Identifier::new("x", 1), Value::Integer(1));
///
/// let mut local = Environment::with_parent(&global);
/// local.define(Identifier::new("y", 2), Value::Integer(2));
///
/// assert!(local.exists("x"));
/// assert!(!global.exists("y"));
/// ```
#[derive(Debug, Default)]
pub struct Environment<'p> {
    parent:   Option<&'p Environment<'p>>,
    bindings: HashMap<Identifier, Value>,
}

impl<'p> Environment<'p> {
    /// Creates an empty root environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment nested in `parent`.
    #[must_use]
    pub fn with_parent(parent: &'p Environment<'p>) -> Self {
        Self { parent:   Some(parent),
               bindings: HashMap::new(), }
    }

    /// Binds `name` to `value` in this scope, replacing any binding of the
    /// same name here. The key is replaced too, so a redeclared function's
    /// parameter list is the one later calls see.
    pub fn define(&mut self, name: Identifier, value: Value) {
        self.bindings.remove(name.name.as_str());
        self.bindings.insert(name, value);
    }

    /// Finds the nearest binding of `name`, searching outward.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.binding(name).map(|(_, value)| value)
    }

    /// Like [`get`](Self::get), but fails with `UndeclaredVariable` reported
    /// on the identifier's line.
    pub fn lookup(&self, name: &Identifier) -> EvalResult<&Value> {
        self.get(&name.name)
            .ok_or_else(|| RuntimeError::UndeclaredVariable { name: name.name.clone(),
                                                              line: name.line, })
    }

    /// Whether any enclosing scope binds `name`.
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.binding(name).is_some()
    }

    /// Returns the key `name` is bound under in the nearest scope binding it.
    ///
    /// For functions this key carries the declared parameter list.
    #[must_use]
    pub fn resolve_key(&self, name: &str) -> Option<&Identifier> {
        self.binding(name).map(|(key, _)| key)
    }

    fn binding(&self, name: &str) -> Option<(&Identifier, &Value)> {
        let mut scope = Some(self);
        while let Some(env) = scope {
            if let Some(entry) = env.bindings.get_key_value(name) {
                return Some(entry);
            }
            scope = env.parent;
        }
        None
    }
}

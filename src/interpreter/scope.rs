use std::{collections::HashMap, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// What a name in a [`Scope`] is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A plain runtime value.
    Value(Value),
    /// A nested scope record. When it carries a parent, reads of the name go
    /// through a merged view of the record over its parent.
    Scope(Scope),
}

impl From<Value> for Binding {
    fn from(v: Value) -> Self {
        Self::Value(v)
    }
}

impl From<Scope> for Binding {
    fn from(s: Scope) -> Self {
        Self::Scope(s)
    }
}

/// The variable state of a running program.
///
/// A `Scope` maps names to [`Binding`]s. Declarations and assignments only
/// ever touch this flat map; the optional `parent` link is consulted solely
/// when a binding holds a nested scope, see [`Scope::resolve`].
///
/// ## Usage
///
/// The program driver creates one top-level `Scope` per run, lends it mutably
/// to the statement executor and immutably to the expression evaluator, and
/// hands it back to the caller once the last statement has executed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    bindings: HashMap<String, Binding>,
    parent:   Option<Rc<Self>>,
}

/// An ephemeral read-only view of a nested scope layered over its parent.
///
/// Lookups see the nested scope's own bindings first and fall back to the
/// parent's own bindings. Neither scope is modified or copied.
#[derive(Debug, Clone, Copy)]
pub struct MergedView<'a> {
    own:    &'a Scope,
    parent: &'a Scope,
}

impl<'a> MergedView<'a> {
    /// Looks `name` up in the nested scope, then in its parent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a Binding> {
        self.own.get(name).or_else(|| self.parent.get(name))
    }
}

impl Scope {
    /// Creates an empty top-level scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose reads fall back to `parent`.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use impish::interpreter::{scope::Scope, value::Value};
    ///
    /// let mut outer = Scope::new();
    /// outer.declare("x", Value::Number(1.0));
    ///
    /// let inner = Scope::with_parent(Rc::new(outer));
    /// assert!(inner.parent().is_some());
    /// assert!(inner.is_empty());
    /// ```
    #[must_use]
    pub fn with_parent(parent: Rc<Self>) -> Self {
        Self { bindings: HashMap::new(),
               parent:   Some(parent), }
    }

    /// Returns the parent link, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    /// Binds `name` to `value`, overwriting any previous binding.
    pub fn declare(&mut self, name: &str, value: Value) {
        self.bindings.insert(name.to_string(), Binding::Value(value));
    }

    /// Overwrites an existing binding of `name`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnknownVariable` if `name` is not bound in this
    /// scope. The parent link is not consulted.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.bindings.get_mut(name) {
            Some(binding) => {
                *binding = Binding::Value(value);
                Ok(())
            },
            None => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                        line }),
        }
    }

    /// Binds `name` to a nested scope record, overwriting any previous
    /// binding.
    ///
    /// No statement of the language creates nested scopes; this is the entry
    /// point for hosts that want names to delegate to an enclosing scope.
    pub fn bind_scope(&mut self, name: &str, scope: Self) {
        self.bindings.insert(name.to_string(), Binding::Scope(scope));
    }

    /// Returns the binding of `name` in this scope only.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Returns the value directly bound to `name`, if it is a plain value.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<Value> {
        match self.bindings.get(name) {
            Some(Binding::Value(v)) => Some(*v),
            _ => None,
        }
    }

    /// Whether `name` is bound in this scope.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings in this scope.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether this scope has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolves `name` to a value.
    ///
    /// A name bound to a value yields that value. A name bound to a nested
    /// scope that has a parent is looked up again in the [`MergedView`] of
    /// that scope over its parent, and so on until a value is reached.
    ///
    /// # Errors
    /// - `RuntimeError::UnknownVariable` if `name` is not bound here, or is
    ///   missing from a merged view along the way.
    /// - `RuntimeError::NotAValue` if the chain ends at a nested scope without
    ///   a parent.
    ///
    /// # Example
    /// ```
    /// use std::rc::Rc;
    ///
    /// use impish::interpreter::{scope::Scope, value::Value};
    ///
    /// let mut outer = Scope::new();
    /// outer.declare("x", Value::Number(1.0));
    ///
    /// let mut state = Scope::new();
    /// state.bind_scope("x", Scope::with_parent(Rc::new(outer)));
    ///
    /// assert_eq!(state.resolve("x", 1).unwrap(), Value::Number(1.0));
    /// ```
    pub fn resolve(&self, name: &str, line: usize) -> EvalResult<Value> {
        let unknown = || RuntimeError::UnknownVariable { name: name.to_string(),
                                                         line };

        let mut binding = self.get(name).ok_or_else(unknown)?;
        loop {
            match binding {
                Binding::Value(v) => return Ok(*v),
                Binding::Scope(nested) => {
                    let Some(parent) = nested.parent() else {
                        return Err(RuntimeError::NotAValue { name: name.to_string(),
                                                             line });
                    };
                    let view = MergedView { own: nested,
                                            parent };
                    binding = view.get(name).ok_or_else(unknown)?;
                },
            }
        }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Scope {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Self { bindings: iter.into_iter()
                             .map(|(k, v)| (k.into(), Binding::Value(v)))
                             .collect(),
               parent:   None, }
    }
}

use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    ast::FunctionDef,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::foreign::ForeignFunction},
};

/// A value a name can be bound to.
#[derive(Debug, Clone)]
pub enum Binding {
    /// A plain number.
    Number(f64),
    /// A user-defined function, shared with any call frame running it.
    Function(Rc<FunctionDef>),
    /// A native function provided by the host.
    Foreign(ForeignFunction),
}

/// Renders a binding the way the diagnostic dump shows it.
impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Function(def) => write!(f, "{def}"),
            Self::Foreign(_) => write!(f, "<internal function>"),
        }
    }
}

/// One frame of the scope chain.
pub type Scope = HashMap<String, Binding>;

/// The chain of scopes used to resolve names, stored as a stack.
///
/// The bottom frame is the root scope: it always exists and holds the
/// built-in constants and functions. Every user function call pushes one
/// frame and pops it on return, so frames nest strictly and the enclosing
/// scope of a frame is simply the one below it.
///
/// Definitions always go to the top frame. Lookups walk from the top frame
/// down to the root and never modify an outer frame.
///
/// ## Example
/// ```
/// use terracalc::interpreter::environment::Environment;
///
/// let mut env = Environment::new();
/// env.define_number("x", 1.0);
/// env.push();
/// env.define_number("x", 2.0);
/// assert_eq!(env.lookup_number("x").unwrap(), 2.0);
/// env.pop();
/// assert_eq!(env.lookup_number("x").unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    frames: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only an empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![Scope::new()] }
    }

    /// Enters a new innermost scope enclosed by the current one.
    pub fn push(&mut self) {
        self.frames.push(Scope::new());
    }

    /// Leaves the innermost scope, discarding its bindings.
    ///
    /// The root scope is never popped.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of frames above the root scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// Pops frames until at most `depth` frames remain above the root.
    pub fn unwind(&mut self, depth: usize) {
        self.frames.truncate(depth + 1);
    }

    /// The innermost scope.
    #[must_use]
    pub fn current_scope(&self) -> &Scope {
        // `frames` always holds the root scope.
        &self.frames[self.frames.len() - 1]
    }

    /// Binds `name` in the innermost scope, replacing any binding it already
    /// has there.
    pub fn define(&mut self, name: &str, binding: Binding) {
        let last = self.frames.len() - 1;
        self.frames[last].insert(name.to_string(), binding);
    }

    /// Binds `name` to a number in the innermost scope.
    pub fn define_number(&mut self, name: &str, value: f64) {
        self.define(name, Binding::Number(value));
    }

    /// Binds `name` to a user function in the innermost scope.
    pub fn define_function(&mut self, name: &str, function: Rc<FunctionDef>) {
        self.define(name, Binding::Function(function));
    }

    /// Binds `name` to a native function in the innermost scope.
    pub fn define_foreign(&mut self, name: &str, function: ForeignFunction) {
        self.define(name, Binding::Foreign(function));
    }

    /// Finds the innermost binding of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.frames.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Resolves `name` to a number.
    ///
    /// # Errors
    /// Returns `UndefinedName` if the name is unbound, or if its innermost
    /// binding is a function.
    pub fn lookup_number(&self, name: &str) -> EvalResult<f64> {
        match self.get(name) {
            Some(Binding::Number(value)) => Ok(*value),
            _ => Err(RuntimeError::UndefinedName { name: name.to_string() }),
        }
    }

    /// Resolves `name` to whatever it is bound to. Callers decide whether the
    /// binding can actually be called.
    ///
    /// # Errors
    /// Returns `UndefinedName` if the name is unbound.
    pub fn lookup_callable(&self, name: &str) -> EvalResult<&Binding> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string() })
    }
}

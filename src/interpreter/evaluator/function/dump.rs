use std::{fmt::Write as _, fs, path::Path};

use crate::{
    error::RuntimeError,
    interpreter::{environment::Scope, evaluator::core::EvalResult},
};

/// Renders a scope as a brace-delimited listing, one binding per line.
///
/// Bindings are sorted by name. Numbers use the shortest round-trip format,
/// user functions their printed definition and natives a placeholder. The
/// output resembles JSON but is not meant to be valid JSON.
///
/// # Example
/// ```
/// use terracalc::interpreter::{
///     environment::{Binding, Scope},
///     evaluator::function::dump::render_scope,
/// };
///
/// let mut scope = Scope::new();
/// scope.insert("y".to_string(), Binding::Number(2.5));
/// scope.insert("x".to_string(), Binding::Number(1.0));
///
/// assert_eq!(render_scope(&scope), "{\n  \"x\": 1,\n  \"y\": 2.5,\n}\n");
/// ```
#[must_use]
pub fn render_scope(scope: &Scope) -> String {
    let mut names: Vec<_> = scope.keys().collect();
    names.sort();

    let mut out = String::from("{\n");
    for name in names {
        let _ = writeln!(out, "  \"{name}\": {},", scope[name]);
    }
    out.push_str("}\n");
    out
}

/// Writes [`render_scope`] output to `path`, replacing any existing file.
///
/// # Errors
/// Returns `Dump` with the underlying I/O error if the write fails.
pub fn write_dump(scope: &Scope, path: &Path) -> EvalResult<()> {
    fs::write(path, render_scope(scope)).map_err(|source| RuntimeError::Dump { path: path.to_path_buf(),
                                                                             source })
}

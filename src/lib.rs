//! # terracalc
//!
//! terracalc is a small calculator language written in Rust.
//! It lexes, parses and evaluates one line at a time, with support for
//! variables, single-expression user functions, native math functions and a
//! running `R` variable holding the last result.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{Error, ErrorKind, RuntimeError},
    interpreter::{
        evaluator::core::{Evaluator, EvaluatorOptions},
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, the operator enums and the
/// `FunctionDef` shared between the AST and the environment. It also provides
/// the textual pretty-printer used by the diagnostic dump.
///
/// # Responsibilities
/// - Defines one variant per language construct.
/// - Prints trees in a stable, fully bracketed form.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure is described by a structured error carrying the offending
/// token, name or message. The crate never formats user-facing text itself,
/// except in [`Calculator::evaluate`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Maps each error to its [`ErrorKind`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the scope chain and evaluation.
/// It exposes the building blocks that [`Calculator`] drives.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, environment and evaluator.
/// - Provides entry points for parsing and evaluating single lines.
pub mod interpreter;

/// A calculator session: one evaluator plus the outcome of the last line.
///
/// # Examples
/// ```
/// use terracalc::Calculator;
///
/// let mut calculator = Calculator::new();
///
/// assert_eq!(calculator.evaluate("f(a, b) = a + b"), "");
/// assert_eq!(calculator.evaluate("f(2, 3)"), "5");
/// assert_eq!(calculator.evaluate("R * 2"), "10");
/// assert_eq!(calculator.evaluate("1 / 0"), "Value Error! Division by zero is undefined.");
/// assert!(!calculator.has_result());
/// ```
#[derive(Debug, Default)]
pub struct Calculator {
    evaluator:   Evaluator,
    last_result: Option<f64>,
    successful:  bool,
}

impl Calculator {
    /// Starts a session with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EvaluatorOptions::default())
    }

    /// Starts a session with the given evaluator options.
    #[must_use]
    pub fn with_options(options: EvaluatorOptions) -> Self {
        Self { evaluator:   Evaluator::with_options(options),
               last_result: None,
               successful:  false, }
    }

    /// Evaluates one line and returns the text to show for it.
    ///
    /// A number is formatted with [`format_number`]; declarations and
    /// assignments give an empty string; failures give a fixed one-line
    /// message per [`ErrorKind`].
    pub fn evaluate(&mut self, input: &str) -> String {
        match self.try_evaluate(input) {
            Ok(Some(value)) => format_number(value),
            Ok(None) => String::new(),
            Err(err) => describe(&err),
        }
    }

    /// Evaluates one line and returns the structured outcome.
    ///
    /// # Errors
    /// Returns the lexical, parse or runtime error that aborted the line.
    pub fn try_evaluate(&mut self, input: &str) -> Result<Option<f64>, Error> {
        self.successful = false;
        let expr = parse(input)?;
        let value = self.evaluator.evaluate(expr.as_ref())?;
        self.last_result = value;
        self.successful = true;
        Ok(value)
    }

    /// Whether the last line succeeded and produced a number.
    #[must_use]
    pub const fn has_result(&self) -> bool {
        self.successful && self.last_result.is_some()
    }

    /// The value produced by the last successful line, if any.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.last_result
    }

    /// The evaluator behind this session.
    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

/// Formats a result in the shortest form that parses back to the same `f64`.
///
/// # Example
/// ```
/// use terracalc::format_number;
///
/// assert_eq!(format_number(14.0), "14");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Maps an error to the one-line message shown to the user.
///
/// # Example
/// ```
/// use terracalc::{Calculator, describe};
///
/// let mut calculator = Calculator::new();
/// let err = calculator.try_evaluate("nope + 1").unwrap_err();
/// assert_eq!(describe(&err), "Undefined name 'nope'!");
/// ```
#[must_use]
pub fn describe(err: &Error) -> String {
    match (err.kind(), err) {
        (ErrorKind::Lexical | ErrorKind::Parse, _) => "Syntax Error!".to_string(),
        (ErrorKind::Name, Error::Runtime(RuntimeError::UndefinedName { name })) => {
            format!("Undefined name '{name}'!")
        },
        (ErrorKind::Recursion, _) => "Recursion Error!".to_string(),
        (ErrorKind::Dump, _) => "Cannot dump state.".to_string(),
        (ErrorKind::Name | ErrorKind::Value | ErrorKind::ForeignCall, _) => {
            format!("Value Error! {err}")
        },
    }
}

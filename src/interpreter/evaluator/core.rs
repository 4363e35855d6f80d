use std::path::PathBuf;

use log::{debug, info};

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::unary::eval_unary,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name that every successful numeric evaluation rebinds to its result.
pub const LAST_RESULT: &str = "R";
/// File written by `dump_env` unless configured otherwise.
pub const DEFAULT_DUMP_PATH: &str = "calc_dump.txt";
/// Deepest nesting of `eval` before evaluation is aborted.
///
/// Any tree the parser accepts fits well within it; the remaining room goes
/// to user function calls.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Tunable settings of an [`Evaluator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorOptions {
    /// Where `dump_env` writes its snapshot.
    pub dump_path:      PathBuf,
    /// How deeply evaluation may nest, counting sub-expressions and user
    /// function calls alike.
    pub max_depth:      usize,
}

impl Default for EvaluatorOptions {
    fn default() -> Self {
        Self { dump_path: PathBuf::from(DEFAULT_DUMP_PATH),
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

/// Walks expression trees against a chain of scopes.
///
/// ## Usage
///
/// An `Evaluator` is created once per session and reused for every line.
/// Construction installs the native functions, evaluates the derived function
/// definitions and binds the constants `π`, `pi` and `e` in the root scope.
///
/// ```
/// use terracalc::interpreter::{evaluator::core::Evaluator, parser::core::parse};
///
/// let mut evaluator = Evaluator::new();
/// let expr = parse("2 + 3 * 4").unwrap();
///
/// assert_eq!(evaluator.evaluate(expr.as_ref()).unwrap(), Some(14.0));
/// assert_eq!(evaluator.environment().lookup_number("R").unwrap(), 14.0);
/// ```
#[derive(Debug)]
pub struct Evaluator {
    pub(crate) environment: Environment,
    pub(crate) options:     EvaluatorOptions,
    depth:                  usize,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EvaluatorOptions::default())
    }

    /// Creates an evaluator with the given options.
    #[must_use]
    pub fn with_options(options: EvaluatorOptions) -> Self {
        info!("Initializing evaluator (max depth {}, dump path '{}')",
              options.max_depth,
              options.dump_path.display());

        let mut evaluator = Self { environment: Environment::new(),
                                   options,
                                   depth: 0 };
        evaluator.install_foreign_functions();
        evaluator.install_prelude();
        evaluator
    }

    /// The scope chain as it currently stands.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The options this evaluator was created with.
    #[must_use]
    pub const fn options(&self) -> &EvaluatorOptions {
        &self.options
    }

    /// Evaluates one parsed line.
    ///
    /// `None` (an empty line) yields no result and has no effect. A numeric
    /// result is also bound to `R` in the current scope.
    ///
    /// On failure, any call frames opened during this evaluation are
    /// discarded. Bindings made before the failure point stay in place.
    ///
    /// # Errors
    /// Returns any [`RuntimeError`] raised while evaluating the tree.
    pub fn evaluate(&mut self, expr: Option<&Expr>) -> EvalResult<Option<f64>> {
        let Some(expr) = expr else {
            return Ok(None);
        };

        let depth = self.environment.depth();
        let result = self.eval(expr);
        self.environment.unwind(depth);

        let result = result?;
        if let Some(value) = result {
            debug!("Binding {LAST_RESULT} = {value}");
            self.environment.define_number(LAST_RESULT, value);
        }
        Ok(result)
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// The evaluator dispatches on the expression variant. Assignments and
    /// declarations bind names and produce no value; a call produces whatever
    /// its callee returns, which may be nothing for some native functions.
    ///
    /// Each call counts one level towards [`EvaluatorOptions::max_depth`].
    /// Parentheses and `+ - * / mod` chains do not add levels.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// `Some(f64)` for expressions that produce a value, or `None` for
    /// constructs that do not yield one.
    ///
    /// # Errors
    /// Returns `Recursion` when nesting exceeds the configured depth, plus
    /// anything the expression itself raises.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<f64>> {
        if self.depth >= self.options.max_depth {
            return Err(RuntimeError::Recursion { depth: self.depth });
        }

        self.depth += 1;
        let result = self.eval_node(expr);
        self.depth -= 1;
        result
    }

    fn eval_node(&mut self, mut expr: &Expr) -> EvalResult<Option<f64>> {
        while let Expr::Group { inner } = expr {
            expr = inner.as_ref();
        }

        match expr {
            Expr::Literal { value, .. } => Ok(Some(*value)),
            Expr::Unary { op, operand } => {
                let value = require(self.eval(operand)?)?;
                Ok(Some(eval_unary(*op, value)))
            },
            Expr::Binary { .. } => self.eval_binary_chain(expr),
            Expr::Group { inner } => self.eval(inner),
            Expr::Variable { name } => self.environment.lookup_number(name).map(Some),
            Expr::Assignment { target, value } => {
                let value = require(self.eval(value)?)?;
                self.environment.define_number(target, value);
                Ok(None)
            },
            Expr::Function(def) => {
                debug!("Defining function '{}' with {} parameters",
                       def.name,
                       def.params.len());
                self.environment.define_function(&def.name, def.clone());
                Ok(None)
            },
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
        }
    }

    /// Evaluates an expression that must produce a value.
    pub(crate) fn eval_value(&mut self, expr: &Expr) -> EvalResult<f64> {
        require(self.eval(expr)?)
    }
}

/// Turns an absent operand into a `MissingValue` error.
pub(crate) fn require(value: Option<f64>) -> EvalResult<f64> {
    match value {
        Some(value) => Ok(value),
        None => Err(RuntimeError::MissingValue),
    }
}

use std::fmt;

use log::{debug, info};

use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        function::dump::write_dump,
    },
};

/// Type alias for native function handlers.
///
/// A handler receives the evaluator and the evaluated argument values. It may
/// produce a number or nothing.
pub type ForeignFn = fn(&mut Evaluator, &[f64]) -> EvalResult<Option<f64>>;

/// A host-native callable with a fixed arity.
#[derive(Clone, Copy)]
pub struct ForeignFunction {
    /// The name the function is registered under.
    pub name:  &'static str,
    /// The exact number of arguments the function accepts.
    pub arity: usize,
    /// The implementation.
    pub func:  ForeignFn,
}

impl fmt::Debug for ForeignFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForeignFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity,
/// - a function pointer implementing the native.
///
/// The macro produces:
/// - `FOREIGN_TABLE` (static table installed into the root scope),
/// - `FOREIGN_FUNCTIONS` (public list of native names).
macro_rules! foreign_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static FOREIGN_TABLE: &[ForeignFunction] = &[
            $(
                ForeignFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const FOREIGN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

foreign_functions! {
    "abs"      => { arity: 1, func: abs },
    "sin"      => { arity: 1, func: sin },
    "cos"      => { arity: 1, func: cos },
    "tan"      => { arity: 1, func: tan },
    "asin"     => { arity: 1, func: asin },
    "acos"     => { arity: 1, func: acos },
    "atan"     => { arity: 1, func: atan },
    "sinh"     => { arity: 1, func: sinh },
    "cosh"     => { arity: 1, func: cosh },
    "tanh"     => { arity: 1, func: tanh },
    "ln"       => { arity: 1, func: ln },
    "dump_env" => { arity: 0, func: dump_env },
    "exit"     => { arity: 0, func: exit },
}

/// Generates a native wrapping a one-argument `f64` method.
///
/// # Example
/// ```
/// use terracalc::interpreter::evaluator::{core::Evaluator, function::foreign::sin};
///
/// let mut evaluator = Evaluator::new();
/// assert_eq!(sin(&mut evaluator, &[0.0]).unwrap(), Some(0.0));
/// ```
macro_rules! unary_native {
    ($($fname:ident),* $(,)?) => {
        $(
            pub fn $fname(_: &mut Evaluator, args: &[f64]) -> EvalResult<Option<f64>> {
                match args {
                    [x] => Ok(Some(x.$fname())),
                    _ => Err(RuntimeError::ArityMismatch { name:     stringify!($fname).to_string(),
                                                           expected: 1,
                                                           found:    args.len(), }),
                }
            }
        )*
    };
}

unary_native!(abs, sin, cos, tan, asin, acos, atan, sinh, cosh, tanh, ln);

/// Writes the innermost scope to the configured dump file.
///
/// # Errors
/// Returns `Dump` if the file cannot be written.
pub fn dump_env(evaluator: &mut Evaluator, _: &[f64]) -> EvalResult<Option<f64>> {
    let path = evaluator.options.dump_path.clone();
    debug!("Dumping {} bindings to '{}'",
           evaluator.environment.current_scope().len(),
           path.display());
    write_dump(evaluator.environment.current_scope(), &path)?;
    Ok(None)
}

/// Terminates the process with status 0. Never returns.
pub fn exit(_: &mut Evaluator, _: &[f64]) -> EvalResult<Option<f64>> {
    info!("exit() called, terminating");
    std::process::exit(0)
}

impl Evaluator {
    /// Binds every native function in the current scope.
    pub(crate) fn install_foreign_functions(&mut self) {
        for function in FOREIGN_TABLE {
            self.environment.define_foreign(function.name, *function);
        }
        debug!("Installed {} native functions", FOREIGN_TABLE.len());
    }
}

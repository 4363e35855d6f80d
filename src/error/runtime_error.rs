use std::path::PathBuf;

use crate::error::ErrorKind;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Looked up a name that is unbound, or bound to something other than a
    /// number where a number was required.
    UndefinedName {
        /// The name that failed to resolve.
        name: String,
    },
    /// An operand produced no value where one was required.
    MissingValue,
    /// Attempted division or `mod` by exactly zero.
    DivisionByZero,
    /// A user function was called with the wrong number of arguments.
    ArityMismatch {
        /// The function's name.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// Tried to call a name bound to a number.
    NotCallable {
        /// The name of the binding.
        name: String,
    },
    /// A native function could not be invoked or failed while running.
    ForeignCall {
        /// The native function's name.
        name:    String,
        /// What went wrong.
        failure: ForeignFailure,
    },
    /// Sub-expressions or function calls nested deeper than the evaluator
    /// allows.
    Recursion {
        /// The evaluation depth at which evaluation was aborted.
        depth: usize,
    },
    /// The diagnostic dump could not be written.
    Dump {
        /// The file the dump was written to.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}

/// Why a native function call failed.
#[derive(Debug)]
pub enum ForeignFailure {
    /// The argument count did not match the registered arity.
    Arity {
        /// The registered arity.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
    },
    /// The native implementation itself failed. The cause is kept for
    /// diagnostics only; it is never part of the displayed message.
    Failed(Box<RuntimeError>),
}

impl RuntimeError {
    /// Classifies the error into the crate-wide [`ErrorKind`] taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UndefinedName { .. } => ErrorKind::Name,
            Self::MissingValue
            | Self::DivisionByZero
            | Self::ArityMismatch { .. }
            | Self::NotCallable { .. } => ErrorKind::Value,
            Self::ForeignCall { .. } => ErrorKind::ForeignCall,
            Self::Recursion { .. } => ErrorKind::Recursion,
            Self::Dump { .. } => ErrorKind::Dump,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name } => write!(f, "Undefined name '{name}'."),
            Self::MissingValue => write!(f, "Value cannot be null."),
            Self::DivisionByZero => write!(f, "Division by zero is undefined."),
            Self::ArityMismatch { .. } => write!(f, "Invalid arity for function call."),
            Self::NotCallable { name } => write!(f, "Cannot call '{name}'"),
            Self::ForeignCall { failure, .. } => write!(f, "{failure}"),
            Self::Recursion { depth } => {
                write!(f, "Maximum evaluation depth of {depth} exceeded.")
            },
            Self::Dump { path, source } => {
                write!(f, "Cannot dump environment to '{}': {source}", path.display())
            },
        }
    }
}

impl std::fmt::Display for ForeignFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity { .. } => write!(f, "Invalid arity for function call."),
            Self::Failed(_) => write!(f, "Something went wrong."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ForeignCall { failure: ForeignFailure::Failed(cause),
                                .. } => Some(cause.as_ref()),
            Self::Dump { source, .. } => Some(source),
            _ => None,
        }
    }
}

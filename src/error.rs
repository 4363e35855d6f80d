use std::fmt;

/// Lexical errors.
///
/// Raised by the scanner when the input contains a character that cannot
/// start any token, or a number whose exponent has no digits.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// a token stream: unexpected tokens, missing delimiters and leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: undefined
/// names, division by zero, arity mismatches, failed native calls, runaway
/// recursion and failed diagnostic dumps.
pub mod runtime_error;

pub use lexical_error::{LexicalError, LexicalErrorKind};
pub use parse_error::ParseError;
pub use runtime_error::{ForeignFailure, RuntimeError};

/// The closed set of failure classes a caller has to distinguish.
///
/// Every [`Error`] maps onto exactly one kind, which is what the
/// [`Calculator`](crate::Calculator) uses to pick a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid character or malformed number literal.
    Lexical,
    /// Grammar violation or leftover tokens.
    Parse,
    /// Undefined name, or a name bound to the wrong kind of value.
    Name,
    /// Missing operand, division by zero, arity mismatch or uncallable name.
    Value,
    /// A native function rejected its arguments or failed while running.
    ForeignCall,
    /// Input or evaluation nested deeper than the configured limits.
    Recursion,
    /// The diagnostic dump could not be written.
    Dump,
}

/// Any error produced while lexing, parsing or evaluating one input line.
#[derive(Debug)]
pub enum Error {
    /// Failure in the scanner.
    Lexical(LexicalError),
    /// Failure in the parser.
    Parse(ParseError),
    /// Failure in the evaluator.
    Runtime(RuntimeError),
}

impl Error {
    /// Classifies the error.
    ///
    /// # Example
    /// ```
    /// use terracalc::{Calculator, error::ErrorKind};
    ///
    /// let mut calculator = Calculator::new();
    /// let err = calculator.try_evaluate("1 / 0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Value);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical(_) => ErrorKind::Lexical,
            Self::Parse(err) => err.kind(),
            Self::Runtime(err) => err.kind(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lexical(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
            Self::Runtime(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

impl From<LexicalError> for Error {
    fn from(err: LexicalError) -> Self {
        Self::Lexical(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<RuntimeError> for Error {
    fn from(err: RuntimeError) -> Self {
        Self::Runtime(err)
    }
}

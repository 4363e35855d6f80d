use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token the grammar does not allow at this position.
    UnexpectedToken {
        /// The lexeme of the offending token.
        token:   String,
        /// Byte offset of the token in the input.
        offset:  usize,
        /// What the parser expected instead.
        message: &'static str,
    },
    /// Reached the end of input while a production was still open.
    UnexpectedEndOfInput {
        /// What the parser expected instead.
        message: &'static str,
    },
    /// Groups, signs, exponents or argument lists nested past the parser's
    /// limit.
    NestingTooDeep {
        /// The deepest nesting the parser accepts.
        limit: usize,
    },
    /// A number literal the host could not convert to a float.
    InvalidNumber {
        /// The literal as written.
        lexeme: String,
        /// Byte offset of the literal in the input.
        offset: usize,
    },
}

impl ParseError {
    /// The human-readable message carried by the error.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { message, .. } | Self::UnexpectedEndOfInput { message } => {
                message
            },
            Self::InvalidNumber { .. } => "Invalid number literal.",
            Self::NestingTooDeep { .. } => "Expression nested too deeply.",
        }
    }

    /// Classifies the error. Excessive nesting counts as a recursion failure;
    /// everything else is a syntax error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NestingTooDeep { .. } => ErrorKind::Recursion,
            Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::InvalidNumber { .. } => ErrorKind::Parse,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token,
                                    offset,
                                    message, } => {
                write!(f, "Error at offset {offset}: {message} Found '{token}'.")
            },
            Self::UnexpectedEndOfInput { message } => {
                write!(f, "Error at end of input: {message}")
            },
            Self::NestingTooDeep { limit } => {
                write!(f, "Error: expression nested deeper than {limit} levels.")
            },
            Self::InvalidNumber { lexeme, offset } => {
                write!(f, "Error at offset {offset}: Invalid number literal '{lexeme}'.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

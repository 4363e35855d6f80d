/// Why the scanner rejected a slice of input.
///
/// `InvalidCharacter` is the default because it is what the lexer reports for
/// any byte sequence that no token rule matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexicalErrorKind {
    /// A character that cannot start any token.
    #[default]
    InvalidCharacter,
    /// A number whose exponent marker is not followed by a digit, like `1e`
    /// or `2.5E+`.
    MalformedNumber,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A lexical error, pointing at the offending slice of the input.
pub struct LexicalError {
    /// The text that could not be tokenized.
    pub slice:  String,
    /// Byte offset of `slice` in the input.
    pub offset: usize,
    /// What went wrong.
    pub kind:   LexicalErrorKind,
}

impl LexicalError {
    /// A short human-readable description of the failure.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self.kind {
            LexicalErrorKind::InvalidCharacter => "Invalid character.",
            LexicalErrorKind::MalformedNumber => "Ill-formed number literal.",
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at offset {}: {} Found '{}'.",
               self.offset,
               self.message(),
               self.slice)
    }
}

impl std::error::Error for LexicalError {}

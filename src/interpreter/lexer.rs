use logos::Logos;

use crate::error::{LexicalError, LexicalErrorKind};

/// The kind of a lexical token.
///
/// Spaces, tabs and newlines are skipped. Everything else either matches one
/// of the variants below or aborts scanning with a [`LexicalError`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = LexicalErrorKind)]
#[logos(skip r"[ \t\n]+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3`, `3.`, `3.14`, `2e10` or `2.1E-10`.
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    Number,
    /// A number whose exponent has no digits, such as `2e` or `1.5E+`.
    ///
    /// Its callback always fails, so [`scan`] reports
    /// [`LexicalErrorKind::MalformedNumber`] instead and no token of this kind
    /// ever reaches the parser.
    #[doc(hidden)]
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?", malformed_number)]
    MalformedNumber,
    /// `mod`
    #[token("mod")]
    Mod,
    /// Identifier tokens; variable or function names such as `x`, `_tmp` or
    /// `π`.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Modulo,
    /// `=`
    #[token("=")]
    Equal,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `,`
    #[token(",")]
    Comma,
}

/// A classified slice of the input.
///
/// Tokens are immutable once scanned. The `offset` is only used for error
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// Byte offset of the token in the input.
    pub offset: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> '{}'", self.kind, self.lexeme)
    }
}

/// Converts raw text into the ordered sequence of its tokens.
///
/// Scanning stops at the first lexical error; no partial token list is
/// returned.
///
/// # Errors
/// Returns a [`LexicalError`] naming the offending slice when the input holds
/// a character no token can start with, or a number with an empty exponent.
///
/// # Example
/// ```
/// use terracalc::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("x mod 2.5e3").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Mod, TokenKind::Number]);
/// assert_eq!(tokens[2].lexeme, "2.5e3");
/// assert!(scan("1e").is_err());
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);

    while let Some(kind) = lexer.next() {
        match kind {
            Ok(kind) => tokens.push(Token { kind,
                                            lexeme: lexer.slice().to_string(),
                                            offset: lexer.span().start }),
            Err(kind) => {
                return Err(LexicalError { slice: lexer.slice().to_string(),
                                          offset: lexer.span().start,
                                          kind });
            },
        }
    }

    Ok(tokens)
}

/// Rejects a number literal whose exponent marker is not followed by a digit.
fn malformed_number(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexicalErrorKind> {
    Err(LexicalErrorKind::MalformedNumber)
}

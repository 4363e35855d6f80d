use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and declaration parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
/// - `message`: Error message used when neither `,` nor `closing` follows an
///   item.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind,
    message: &'static str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if tokens.next_if(|t| t.kind == closing).is_some() {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        if tokens.next_if(|t| t.kind == TokenKind::Comma).is_none() {
            break;
        }
    }
    expect(tokens, closing, message)?;
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, "Expected identifier.").map(|t| t.lexeme.clone())
}

/// Consumes the next token if it has the given kind.
///
/// # Errors
/// Returns `UnexpectedToken` carrying `message` when another token follows,
/// or `UnexpectedEndOfInput` when the stream is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    message: &'static str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|t| t.kind == kind) {
        Some(token) => Ok(token),
        None => Err(unexpected(tokens.peek().copied(), message)),
    }
}

/// Builds the error for an unexpected token, or for the end of input when
/// there is no token.
pub(in crate::interpreter::parser) fn unexpected(token: Option<&Token>,
                                                 message: &'static str)
                                                 -> ParseError {
    match token {
        Some(token) => ParseError::UnexpectedToken { token: token.lexeme.clone(),
                                                     offset: token.offset,
                                                     message },
        None => ParseError::UnexpectedEndOfInput { message },
    }
}

use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, FunctionDef},
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, TokenKind, scan},
        parser::{
            binary::parse_term,
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply groups, prefix signs, exponents and argument lists may nest.
///
/// Chains of `+ - * / mod` at one level do not count towards it.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Lexes and parses one input line.
///
/// Every call scans `source` from scratch. Blank input yields `Ok(None)`.
/// After the top-level production any remaining token is a syntax error.
///
/// # Errors
/// Returns [`Error::Lexical`] if scanning fails and [`Error::Parse`] if the
/// tokens do not form a valid line.
///
/// # Example
/// ```
/// use terracalc::interpreter::parser::core::parse;
///
/// assert!(parse("   ").unwrap().is_none());
/// assert_eq!(parse("f(x) = x ^ 2").unwrap().unwrap().to_string(),
///            "f(x) -> (b[^]: (var: x), 2)");
/// assert!(parse("1 2").is_err());
/// ```
pub fn parse(source: &str) -> Result<Option<Expr>, Error> {
    let tokens = scan(source)?;
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none() {
        return Ok(None);
    }

    let expr = parse_top_level(&mut iter)?;

    if let Some(token) = iter.next() {
        return Err(ParseError::UnexpectedToken { token:   token.lexeme.clone(),
                                                 offset:  token.offset,
                                                 message: "Expected end of expression.", }.into());
    }

    Ok(Some(expr))
}

/// Parses the top-level production of a line.
///
/// The choice is made by fixed lookahead over the raw tokens before anything
/// is consumed:
///
/// ```text
///     line := IDENTIFIER "=" term
///           | IDENTIFIER "(" (IDENTIFIER ("," IDENTIFIER)*)? ")" "=" term
///           | term
/// ```
///
/// A parameter list that is not a clean list of identifiers falls through to
/// the plain `term` rule, where it is parsed as a call.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Assignment`], an [`Expr::Function`] or a term expression.
pub fn parse_top_level<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if starts_assignment(tokens) {
        let target = parse_identifier(tokens)?;
        expect(tokens, TokenKind::Equal, "Expected '=' after assignment target.")?;
        let value = parse_term(tokens, 0)?;

        return Ok(Expr::Assignment { target,
                                     value: Box::new(value) });
    }

    if is_function_declaration(tokens) {
        return parse_function_declaration(tokens);
    }

    parse_term(tokens, 0)
}

/// Parses `name(p1, ..., pn) = body` once the lookahead has accepted it.
fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LeftParen, "Expected '(' after function name.")?;
    let params = parse_comma_separated(tokens,
                                       parse_identifier,
                                       TokenKind::RightParen,
                                       "Expected ')' after parameters.")?;
    expect(tokens, TokenKind::Equal, "Expected '=' after function declaration.")?;
    let body = parse_term(tokens, 0)?;

    Ok(Expr::Function(Rc::new(FunctionDef { name, params, body })))
}

/// Checks for `IDENTIFIER "="` at the front of the stream.
fn starts_assignment<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut ahead = tokens.clone();
    next_is(&mut ahead, TokenKind::Identifier) && next_is(&mut ahead, TokenKind::Equal)
}

/// Checks whether the stream starts with
/// `IDENTIFIER "(" (IDENTIFIER ("," IDENTIFIER)*)? ")" "="`.
///
/// Works on a clone of the iterator, so nothing is consumed.
pub fn is_function_declaration<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut ahead = tokens.clone();

    if !(next_is(&mut ahead, TokenKind::Identifier) && next_is(&mut ahead, TokenKind::LeftParen)) {
        return false;
    }

    match ahead.next().map(|t| t.kind) {
        Some(TokenKind::RightParen) => {},
        Some(TokenKind::Identifier) => loop {
            match ahead.next().map(|t| t.kind) {
                Some(TokenKind::RightParen) => break,
                Some(TokenKind::Comma) if next_is(&mut ahead, TokenKind::Identifier) => {},
                _ => return false,
            }
        },
        _ => return false,
    }

    next_is(&mut ahead, TokenKind::Equal)
}

fn next_is<'a, I>(tokens: &mut I, kind: TokenKind) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.next().is_some_and(|t| t.kind == kind)
}

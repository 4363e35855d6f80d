use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::{parse_call, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: How many groups, signs, exponents and argument lists enclose
///   this expression.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_factor(tokens, depth)?;
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub]) {
        let right = parse_factor(tokens, depth)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/` and the keyword `mod`, all
/// on the same tier.
///
/// The rule is: `factor := unary (("*" | "/" | "mod") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_unary(tokens, depth)?;
    while let Some(op) = next_operator(tokens,
                                       &[BinaryOperator::Mul,
                                         BinaryOperator::Div,
                                         BinaryOperator::Mod])
    {
        let right = parse_unary(tokens, depth)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// The exponent is parsed at unary precedence, which makes `^`
/// right-associative (`a ^ b ^ c` parses as `a ^ (b ^ c)`) and lets a sign
/// bind to the exponent alone, as in `2 ^ -1`.
///
/// The rule is: `exponent := call ("^" unary)*`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_call(tokens, depth)?;
    while let Some(op) = next_operator(tokens, &[BinaryOperator::Pow]) {
        let right = parse_unary(tokens, depth + 1)?;
        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right) };
    }
    Ok(left)
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that never act as a binary operator.
///
/// # Example
/// ```
/// use terracalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Mod), Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::Modulo), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Asterisk => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Mod => Some(BinaryOperator::Mod),
        TokenKind::Caret => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Consumes the next token if it is one of `allowed` and returns its operator.
fn next_operator<'a, I>(tokens: &mut Peekable<I>,
                        allowed: &[BinaryOperator])
                        -> Option<BinaryOperator>
    where I: Iterator<Item = &'a Token>
{
    let op = token_to_binary_operator(tokens.peek()?.kind).filter(|op| allowed.contains(op))?;
    tokens.next();
    Some(op)
}

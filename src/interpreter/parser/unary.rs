use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{parse_exponent, parse_term},
            core::{MAX_NESTING_DEPTH, ParseResult},
            utils::{expect, parse_comma_separated, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (identity)
/// - `-`  (numeric negation)
///
/// Prefix operators are right-associative and may be stacked, so `--x` is
/// parsed as `-(-x)`.
///
/// Without a prefix operator, the function parses an exponent expression and
/// then applies at most one postfix `%`.
///
/// Every nested production passes through here, so this is where the
/// nesting limit is enforced.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | exponent "%"?
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth.
///
/// # Returns
/// An [`Expr::Unary`] or the exponent expression itself.
///
/// # Errors
/// Returns `NestingTooDeep` once `depth` exceeds [`MAX_NESTING_DEPTH`].
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    }

    let prefix = match tokens.peek().map(|t| t.kind) {
        Some(TokenKind::Plus) => Some(UnaryOperator::Plus),
        Some(TokenKind::Minus) => Some(UnaryOperator::Negate),
        _ => None,
    };

    if let Some(op) = prefix {
        tokens.next();
        let operand = parse_unary(tokens, depth + 1)?;
        return Ok(Expr::Unary { op,
                                operand: Box::new(operand) });
    }

    let expr = parse_exponent(tokens, depth)?;

    if tokens.next_if(|t| t.kind == TokenKind::Modulo).is_some() {
        return Ok(Expr::Unary { op:      UnaryOperator::Percent,
                                operand: Box::new(expr), });
    }

    Ok(expr)
}

/// Parses a function call, or falls through to a primary expression.
///
/// A call is only recognized when an identifier is immediately followed by
/// `(`. Arguments are full term expressions.
///
/// Grammar: `call := IDENTIFIER "(" (term ("," term)*)? ")" | primary`
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut ahead = tokens.clone();
    let is_call = ahead.next().is_some_and(|t| t.kind == TokenKind::Identifier)
                  && ahead.next().is_some_and(|t| t.kind == TokenKind::LeftParen);

    if !is_call {
        return parse_primary(tokens, depth);
    }

    let name = expect(tokens, TokenKind::Identifier, "Expected function name.")?.lexeme
                                                                                  .clone();
    expect(tokens, TokenKind::LeftParen, "Expected '(' after function name.")?;
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_term(tokens, depth + 1),
                                          TokenKind::RightParen,
                                          "Expected ')' after call arguments.")?;

    Ok(Expr::Call { name, arguments })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions are number literals, variable references and
/// parenthesized term expressions.
///
/// Grammar: `primary := NUMBER | IDENTIFIER | "(" term ")"`
///
/// # Errors
/// - `UnexpectedEndOfInput` if the line ends where an operand is required.
/// - `UnexpectedToken` for any token that cannot start an operand, or when a
///   group is not closed.
fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { message: "Unexpected end of string." });
    };

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            let value =
                token.lexeme
                     .parse::<f64>()
                     .map_err(|_| ParseError::InvalidNumber { lexeme: token.lexeme.clone(),
                                                              offset: token.offset, })?;
            Ok(Expr::Literal { value,
                               lexeme: token.lexeme.clone() })
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token.lexeme.clone() })
        },
        TokenKind::LeftParen => {
            tokens.next();
            let inner = parse_term(tokens, depth + 1)?;
            expect(tokens, TokenKind::RightParen, "Expected ')' to close '('.")?;
            Ok(Expr::Group { inner: Box::new(inner) })
        },
        _ => Err(unexpected(Some(token), "Expected expression.")),
    }
}

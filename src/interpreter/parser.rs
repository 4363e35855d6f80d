/// Parser entry point and top-level production.
///
/// Contains the `parse` function, the lookaheads deciding between assignment,
/// function declaration and plain expression, and the shared result type.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative term and factor tiers and the
/// right-associative exponent tier.
pub mod binary;

/// Unary, call and primary parsing.
///
/// Handles prefix signs, the postfix percent operator, function calls,
/// literals, variables and parenthesized groups.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides token expectations, identifier parsing and comma-separated list
/// parsing used by calls and declarations.
pub mod utils;

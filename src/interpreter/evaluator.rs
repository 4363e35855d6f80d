/// Core evaluation logic and context management.
///
/// Contains the `Evaluator`, its options, the top-level entry point and the
/// dispatch over expression variants.
pub mod core;

/// Unary operator evaluation.
///
/// Implements identity, negation and the postfix percent operator.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the arithmetic operators, including the zero checks for
/// division and `mod`.
pub mod binary;

/// Function evaluation.
///
/// Handles user-defined and native function calls, the native function
/// registry, the diagnostic dump and the definitions installed at startup.
pub mod function;

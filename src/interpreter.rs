/// The environment module holds the scope chain.
///
/// Names resolve to numbers, user functions or native functions. Scopes are
/// kept as a stack of frames: one root frame for the session plus one frame
/// per active function call.
///
/// # Responsibilities
/// - Defines the `Binding` and `Environment` types.
/// - Resolves names innermost-first and reports undefined names.
/// - Pushes and pops call frames with strict stack discipline.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against the environment, performs arithmetic,
/// dispatches calls to user or native functions and records the last result.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Installs the native functions, derived functions and constants.
/// - Reports runtime errors such as division by zero or arity mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads one line of raw text and produces the sequence of tokens:
/// numbers, identifiers, operators, delimiters and the `mod` keyword.
///
/// # Responsibilities
/// - Converts the input into tokens with kind, lexeme and offset.
/// - Recognizes scientific notation and Unicode identifiers.
/// - Reports lexical errors for invalid characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive descent over the token stream. It decides
/// between assignment, function declaration and plain expression by lookahead
/// before consuming anything.
///
/// # Responsibilities
/// - Converts tokens into AST nodes with the right precedence and
///   associativity.
/// - Reports syntax errors with the offending token.
pub mod parser;

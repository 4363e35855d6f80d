/// Call dispatch.
///
/// Resolves the callee and runs either a user-defined function in a fresh
/// scope or a native function over evaluated arguments.
pub mod core;
/// The native function registry.
///
/// Declares every host-provided function together with its arity.
pub mod foreign;
/// The `dump_env` diagnostic.
///
/// Writes the bindings of the innermost scope to a text file.
pub mod dump;
/// Startup definitions.
///
/// Derived functions written in the language itself, and the built-in
/// constants.
pub mod prelude;

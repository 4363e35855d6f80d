use std::f64::consts::{E, PI};

use log::{debug, error};

use crate::{
    error::Error,
    interpreter::{evaluator::core::Evaluator, parser::core::parse},
};

/// Functions defined in the language itself, as `(signature, body)` pairs.
///
/// They are parsed and evaluated once against the root scope when an
/// evaluator is created. Bodies resolve names at call time, so `sqrt` may
/// refer to `root` before `root` is defined.
pub const SEED_DEFINITIONS: &[(&str, &str)] = &[("log(base, x)", "ln(x)/ln(base)"),
                                                ("sqrt(x)", "root(x, 2)"),
                                                ("root(x, r)", "x^(1/r)")];

/// Numeric constants bound in the root scope.
pub const CONSTANTS: &[(&str, f64)] = &[("π", PI), ("pi", PI), ("e", E)];

impl Evaluator {
    /// Evaluates the seed definitions and binds the constants.
    pub(crate) fn install_prelude(&mut self) {
        for (signature, body) in SEED_DEFINITIONS {
            let source = format!("{signature}={body}");
            match self.define_seed(&source) {
                Ok(()) => debug!("Seeded '{source}'"),
                Err(err) => error!("Seed definition '{source}' failed: {err}"),
            }
        }

        for (name, value) in CONSTANTS {
            self.environment.define_number(name, *value);
        }
    }

    fn define_seed(&mut self, source: &str) -> Result<(), Error> {
        let expr = parse(source)?;
        self.evaluate(expr.as_ref())?;
        Ok(())
    }
}

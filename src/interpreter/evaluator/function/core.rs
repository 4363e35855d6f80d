use log::{debug, warn};

use crate::{
    ast::{Expr, FunctionDef},
    error::{ForeignFailure, RuntimeError},
    interpreter::{
        environment::Binding,
        evaluator::{
            core::{EvalResult, Evaluator},
            function::foreign::ForeignFunction,
        },
    },
};

impl Evaluator {
    /// Evaluates a function call.
    ///
    /// The callee is looked up through the whole scope chain. User functions
    /// run in a fresh scope; native functions run over the evaluated
    /// arguments. A name bound to a number cannot be called.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arguments`: Unevaluated argument expressions.
    ///
    /// # Returns
    /// The function result, which may be absent for natives such as
    /// `dump_env`.
    ///
    /// # Errors
    /// - `UndefinedName` if `name` is unbound.
    /// - `NotCallable` if `name` is bound to a number.
    /// - Anything raised by the callee.
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr])
                            -> EvalResult<Option<f64>> {
        let callee = self.environment.lookup_callable(name)?.clone();
        match callee {
            Binding::Function(def) => self.call_user_function(&def, arguments),
            Binding::Foreign(function) => self.call_foreign_function(function, arguments),
            Binding::Number(_) => Err(RuntimeError::NotCallable { name: name.to_string() }),
        }
    }

    /// Executes a user-defined function.
    ///
    /// The argument count must match the parameter count. A new scope is then
    /// pushed, and each parameter is bound in order to its evaluated argument.
    /// Arguments are evaluated inside the new scope, so a later argument can
    /// see the parameters bound before it. The body runs in that scope, which
    /// is popped whether or not evaluation succeeds.
    ///
    /// # Errors
    /// - `ArityMismatch` if the argument count is wrong.
    /// - Anything raised while binding arguments or running the body,
    ///   including `Recursion` once calls nest too deeply.
    fn call_user_function(&mut self,
                          def: &FunctionDef,
                          arguments: &[Expr])
                          -> EvalResult<Option<f64>> {
        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArityMismatch { name:     def.name.clone(),
                                                     expected: def.params.len(),
                                                     found:    arguments.len(), });
        }

        debug!("Entering '{}' in frame {}", def.name, self.environment.depth() + 1);
        self.environment.push();
        let result = self.bind_parameters(def, arguments)
                         .and_then(|()| self.eval(&def.body));
        self.environment.pop();
        result
    }

    fn bind_parameters(&mut self, def: &FunctionDef, arguments: &[Expr]) -> EvalResult<()> {
        for (param, argument) in def.params.iter().zip(arguments) {
            let value = self.eval_value(argument)?;
            self.environment.define_number(param, value);
        }
        Ok(())
    }

    /// Executes a native function.
    ///
    /// All arguments are evaluated first, left to right, in the caller's
    /// scope. The arity is checked afterwards. Any failure of the native
    /// itself is reported as a generic foreign-call failure; the underlying
    /// cause is logged and kept as the error's source. A failed dump is the
    /// one exception and keeps its own kind.
    ///
    /// # Errors
    /// - `ForeignCall` if the arity is wrong, an argument has no value, or the
    ///   native fails.
    /// - `Dump` if `dump_env` cannot write its file.
    fn call_foreign_function(&mut self,
                             function: ForeignFunction,
                             arguments: &[Expr])
                             -> EvalResult<Option<f64>> {
        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval(argument)?);
        }

        if values.len() != function.arity {
            let failure = ForeignFailure::Arity { expected: function.arity,
                                                  found:    values.len(), };
            return Err(RuntimeError::ForeignCall { name: function.name.to_string(),
                                                   failure });
        }

        debug!("Calling native function '{}' with {values:?}", function.name);

        let result = values.into_iter()
                           .collect::<Option<Vec<f64>>>()
                           .ok_or(RuntimeError::MissingValue)
                           .and_then(|args| (function.func)(self, &args));

        match result {
            Ok(value) => Ok(value),
            Err(err @ RuntimeError::Dump { .. }) => Err(err),
            Err(err) => {
                warn!("Native function '{}' failed: {err}", function.name);
                Err(RuntimeError::ForeignCall { name:    function.name.to_string(),
                                                failure: ForeignFailure::Failed(Box::new(err)), })
            },
        }
    }
}

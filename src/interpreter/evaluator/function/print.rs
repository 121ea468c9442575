use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator<'_> {
    /// Writes the values of `arguments` as one comma-separated line.
    ///
    /// Integers, floats, strings, booleans and characters are printed as
    /// text; floats always show a fractional digit. Nothing is written if any
    /// argument cannot be printed.
    ///
    /// # Errors
    /// - `TypeMismatch` for arrays and functions.
    /// - `Output` if the output sink fails.
    pub(in crate::interpreter::evaluator) fn eval_print(&mut self,
                                                        arguments: &[Expr],
                                                        env: &Environment<'_>,
                                                        depth: usize,
                                                        line: usize)
                                                        -> EvalResult<()> {
        let values = self.eval_expression_list(arguments, env, depth)?;
        let text = values.iter()
                         .map(|value| render(value, line))
                         .collect::<EvalResult<Vec<_>>>()?
                         .join(",");

        writeln!(self.output, "{text}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                           line })
    }
}

fn render(value: &Value, line: usize) -> EvalResult<String> {
    if value.is_scalar() {
        Ok(value.to_string())
    } else {
        Err(RuntimeError::TypeMismatch { details: format!("cannot print {}", value.kind_name()),
                                         line })
    }
}

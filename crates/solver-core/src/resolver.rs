use solver_common::Desire;

use crate::binding_fn::BindingFunction;
use crate::context::InjectionContext;
use crate::error::SolverError;

/// The per-desire fixpoint loop (spec.md §4.3): repeatedly apply binding
/// functions until a terminal, instantiable desire is reached.
///
/// Binding functions are tried in order; the first one to return a result
/// whose next-desire hasn't already been visited in `context` wins, and no
/// further functions are tried that round. A binding function proposing an
/// already-visited desire is treated as if it had returned `None`.
pub(crate) fn resolve_desire(
    binding_functions: &[Box<dyn BindingFunction>],
    desire: Desire,
    context: &mut InjectionContext,
) -> Result<Desire, SolverError> {
    let mut current = desire;

    loop {
        let mut found_binding = false;
        let mut terminate = true;

        for (idx, binding_function) in binding_functions.iter().enumerate() {
            if let Some(result) = binding_function.bind(context, &current) {
                if context.has_visited(result.next_desire()) {
                    continue;
                }
                tracing::trace!(
                    binding_index = idx,
                    from = %current,
                    to = %result.next_desire(),
                    "fixpoint step"
                );
                found_binding = true;
                context.record_desire(current.clone());
                terminate = result.terminates();
                current = result.into_next_desire();
                break;
            }
        }

        if terminate && current.instantiable() {
            context.record_desire(current.clone());
            return Ok(current);
        }

        if !found_binding {
            return Err(SolverError::unresolvable(context, &current));
        }
        // Otherwise: a binding was found but wasn't terminal+instantiable —
        // loop again with the new current desire (spec.md §4.3 step 7).
    }
}

use miette::Diagnostic;
use thiserror::Error;

use crate::context::InjectionContext;
use solver_common::Desire;

/// Errors raised while resolving a desire. Formatted per spec.md §7: the
/// failing injection point as `[qualifier:]type`, the type path (root to
/// current), and the desires visited in the fixpoint chain.
#[derive(Debug, Error, Diagnostic)]
pub enum SolverError {
    /// No binding function could produce a terminal, instantiable desire.
    #[error("no binding produced an instantiable value for {point}\n  type path: [{type_path}]\n  visited: [{visited}]")]
    #[diagnostic(code(solver::unresolvable_dependency))]
    Unresolvable {
        point: String,
        type_path: String,
        visited: String,
    },

    /// The resolution path exceeded `max_depth`.
    #[error("cyclic dependency resolving {point}: depth {depth} exceeds max_depth")]
    #[diagnostic(code(solver::cyclic_dependency))]
    Cyclic { point: String, depth: usize },

    /// A binding function returned a structurally invalid result.
    #[error("invalid binding result for {point}: {reason}")]
    #[diagnostic(code(solver::invalid_binding))]
    InvalidBinding { point: String, reason: String },

    /// A binding function could not disambiguate between candidates.
    #[error("multiple candidate bindings for {point} could not be disambiguated: [{candidates}]")]
    #[diagnostic(code(solver::multiple_bindings))]
    MultipleBindings { point: String, candidates: String },

    /// Raised by [`crate::Solver::new`] for structurally invalid configuration.
    #[error("invalid solver configuration: {0}")]
    #[diagnostic(code(solver::invalid_config))]
    InvalidConfig(&'static str),
}

impl SolverError {
    pub(crate) fn unresolvable(context: &InjectionContext, current: &Desire) -> Self {
        SolverError::Unresolvable {
            point: current.display_point(),
            type_path: context
                .type_path()
                .into_iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" -> "),
            visited: context
                .prior_desires()
                .iter()
                .map(Desire::display_point)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub(crate) fn cyclic(context: &InjectionContext, current: &Desire, depth: usize) -> Self {
        let _ = context;
        SolverError::Cyclic {
            point: current.display_point(),
            depth,
        }
    }
}

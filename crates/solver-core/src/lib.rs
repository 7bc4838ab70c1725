//! Resolution engine for the dependency solver: the injection-context data
//! structure, the per-request resolution tree, the merge algorithm that
//! folds it into the shared output graph, cycle detection, and the
//! skippable-default logic. See `solver-common` for the value types this
//! engine operates on.

pub use binding_fn::BindingFunction;
pub use context::{ContextFrame, InjectionContext};
pub use error::SolverError;
pub use graph::{Graph, GraphNode, OutputGraph, Tree};
pub use solver::Solver;

mod binding_fn;
mod context;
mod error;
mod graph;
mod merger;
mod resolver;
mod solver;
mod tree;

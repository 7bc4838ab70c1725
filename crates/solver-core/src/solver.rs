use petgraph::stable_graph::NodeIndex;

use solver_common::Desire;

use crate::binding_fn::BindingFunction;
use crate::context::InjectionContext;
use crate::error::SolverError;
use crate::graph::{OutputGraph, Tree};
use crate::merger::merge;
use crate::tree::resolve_fully;

/// The dependency solver. Owns the ordered list of binding functions and
/// the shared output graph they resolve into; each call to [`Solver::resolve`]
/// mutates that graph in place (spec.md §5 — not safe for concurrent
/// resolution of a single instance).
pub struct Solver {
    binding_functions: Vec<Box<dyn BindingFunction>>,
    max_depth: usize,
    output: OutputGraph,
}

impl Solver {
    /// Rejects `max_depth < 1` and an empty binding-function list.
    pub fn new(binding_functions: Vec<Box<dyn BindingFunction>>, max_depth: usize) -> Result<Self, SolverError> {
        if max_depth < 1 {
            return Err(SolverError::InvalidConfig("max_depth must be at least 1"));
        }
        if binding_functions.is_empty() {
            return Err(SolverError::InvalidConfig("binding_functions must not be empty"));
        }
        Ok(Self {
            binding_functions,
            max_depth,
            output: OutputGraph::new(),
        })
    }

    /// Resolves `desire` against the shared output graph, adding whatever
    /// new nodes and edges this request needs. Returns nothing on success;
    /// the resolved values live in the graph reachable from [`Solver::root_node`].
    pub fn resolve(&mut self, desire: Desire) -> Result<(), SolverError> {
        let span = tracing::debug_span!("resolve", desire = %desire);
        let _enter = span.enter();

        let mut tree = Tree::new();
        let mut context = InjectionContext::new();
        let tree_root = tree.root();

        resolve_fully(
            &self.binding_functions,
            self.max_depth,
            desire,
            tree_root,
            &mut tree,
            &mut context,
        )?;

        merge(&tree, tree_root, &mut self.output);

        tracing::debug!(
            nodes = self.output.nodes().count(),
            "resolve complete"
        );
        Ok(())
    }

    pub fn graph(&self) -> &OutputGraph {
        &self.output
    }

    pub fn root_node(&self) -> NodeIndex {
        self.output.root()
    }
}

use petgraph::stable_graph::NodeIndex;

use solver_common::{Desire, NullSatisfaction, Satisfaction};

use crate::binding_fn::BindingFunction;
use crate::context::InjectionContext;
use crate::error::SolverError;
use crate::graph::{GraphNode, Tree};
use crate::resolver::resolve_desire;

/// Recursive descent building a per-request tree (spec.md §4.4). Identical
/// satisfactions appearing in different contexts become distinct tree
/// nodes; sharing is decided later by the merger.
///
/// Also implements skippable defaults (spec.md §4.5): when a
/// skip-if-unusable satisfaction's own dependency fails with
/// [`SolverError::Unresolvable`], the subtree rooted at that satisfaction is
/// discarded and resolution retries — the already-recorded prior-desires
/// chain keeps [`resolve_desire`] from proposing the same satisfaction
/// again, so it naturally falls through to the next binding function (or to
/// a null satisfaction, if the injection point is nullable).
pub(crate) fn resolve_fully(
    binding_functions: &[Box<dyn BindingFunction>],
    max_depth: usize,
    desire: Desire,
    parent: NodeIndex,
    tree: &mut Tree,
    context: &mut InjectionContext,
) -> Result<NodeIndex, SolverError> {
    let attempted_depth = context.depth() + 1;
    if attempted_depth > max_depth {
        return Err(SolverError::cyclic(context, &desire, attempted_depth));
    }

    loop {
        let resolved = match resolve_desire(binding_functions, desire.clone(), context) {
            Ok(resolved) => resolved,
            Err(SolverError::Unresolvable { .. }) if desire.injection_point().is_nullable() => {
                return Ok(substitute_null(tree, parent, &desire));
            }
            Err(err) => return Err(err),
        };

        let satisfaction = resolved
            .satisfaction()
            .cloned()
            .expect("an instantiable desire always carries a satisfaction");
        let chain = context.prior_desires().to_vec();

        let node = tree.add_node(GraphNode::Satisfaction(satisfaction.clone()));
        tree.add_edge(parent, node, chain)?;

        let mut abandoned = None;
        for dep in satisfaction.dependencies() {
            let mut child_context = context.push(satisfaction.clone(), dep.injection_point().attributes().clone());
            match resolve_fully(binding_functions, max_depth, dep.clone(), node, tree, &mut child_context) {
                Ok(_) => {}
                Err(SolverError::Unresolvable { .. }) if satisfaction.skip_if_unusable() => {
                    abandoned = Some(dep.clone());
                    break;
                }
                Err(other) => return Err(other),
            }
        }

        if let Some(dep) = abandoned {
            tracing::warn!(
                satisfaction = %satisfaction.erased_type(),
                dependency = %dep,
                "skippable default abandoned: dependency unresolvable"
            );
            tree.remove_node(node);
            continue;
        }

        return Ok(node);
    }
}

fn substitute_null(tree: &mut Tree, parent: NodeIndex, desire: &Desire) -> NodeIndex {
    let satisfaction = Satisfaction::Null(NullSatisfaction {
        erased_type: desire.type_key().clone(),
    });
    let node = tree.add_node(GraphNode::Satisfaction(satisfaction));
    tree.add_edge(parent, node, vec![desire.clone()])
        .expect("parent and freshly-added node are both present");
    node
}

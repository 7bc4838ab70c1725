use std::collections::{BTreeSet, HashMap};

use petgraph::stable_graph::NodeIndex;

use crate::graph::{GraphNode, OutputGraph, Tree};

/// Folds a resolution tree into the shared output graph (spec.md §4.6).
///
/// Nodes are identified by `(satisfaction, set-of-resolved-dependency-
/// nodes)`: two tree nodes that would instantiate the same way and whose
/// already-merged children are the same output nodes collapse into one
/// output node.
pub(crate) fn merge(tree: &Tree, tree_root: NodeIndex, output: &mut OutputGraph) {
    let order = tree.sort(tree_root);
    let mut merged: HashMap<NodeIndex, NodeIndex> = HashMap::new();

    for t in order {
        if t == tree_root {
            for (child, chain) in tree.outgoing_edges(t) {
                let label = chain[0].clone();
                let tail = merged[&child];
                if output.outgoing_edge(output.root(), &label).is_none() {
                    output
                        .add_edge(output.root(), tail, label)
                        .expect("output root is always present");
                }
            }
            continue;
        }

        let satisfaction = tree
            .node(t)
            .satisfaction()
            .expect("non-root tree node always carries a satisfaction")
            .clone();

        let deps: BTreeSet<NodeIndex> = tree.outgoing_edges(t).map(|(child, _)| merged[&child]).collect();

        let existing = output.nodes().find(|&n| {
            n != output.root()
                && output.node(n).satisfaction() == Some(&satisfaction)
                && {
                    let tail: BTreeSet<NodeIndex> = output.outgoing_edges(n).map(|(c, _)| c).collect();
                    tail == deps
                }
        });

        let out_node = match existing {
            Some(existing) => existing,
            None => {
                let n = output.add_node(GraphNode::Satisfaction(satisfaction));
                for (child, chain) in tree.outgoing_edges(t) {
                    let label = chain[0].clone();
                    let tail = merged[&child];
                    output.add_edge(n, tail, label).expect("node just added to output");
                }
                n
            }
        };
        merged.insert(t, out_node);
    }
}

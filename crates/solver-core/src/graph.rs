use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::{DfsPostOrder, EdgeRef};
use petgraph::Direction;

use solver_common::{Desire, Satisfaction};

use crate::error::SolverError;

/// A node in a resolution tree or the shared output graph: either the
/// synthetic root (the empty label) or a chosen satisfaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphNode {
    Root,
    Satisfaction(Satisfaction),
}

impl GraphNode {
    pub fn satisfaction(&self) -> Option<&Satisfaction> {
        match self {
            GraphNode::Root => None,
            GraphNode::Satisfaction(s) => Some(s),
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, GraphNode::Root)
    }
}

/// A directed, labelled multigraph of [`GraphNode`]s. The same primitive
/// backs both the per-request resolution tree (`L = Vec<Desire>`, the full
/// fixpoint chain) and the shared output graph (`L = Desire`, just the
/// first desire of that chain) — see spec.md §3 and §4.7.
#[derive(Debug)]
pub struct Graph<L> {
    root: NodeIndex,
    inner: StableGraph<GraphNode, L>,
}

pub type Tree = Graph<Vec<Desire>>;
pub type OutputGraph = Graph<Desire>;

impl<L> Graph<L> {
    pub fn new() -> Self {
        let mut inner = StableGraph::new();
        let root = inner.add_node(GraphNode::Root);
        Self { root, inner }
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.inner[idx]
    }

    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        self.inner.add_node(node)
    }

    /// Removes a node and any incident edges. Used to discard an abandoned
    /// skip-if-unusable subtree (spec.md §4.5) before the resolver retries.
    pub fn remove_node(&mut self, idx: NodeIndex) {
        self.inner.remove_node(idx);
    }

    pub fn add_edge(&mut self, head: NodeIndex, tail: NodeIndex, label: L) -> Result<EdgeIndex, SolverError> {
        if !self.inner.contains_node(head) || !self.inner.contains_node(tail) {
            return Err(SolverError::InvalidBinding {
                point: "<graph edge>".to_string(),
                reason: "edge endpoint not present in graph".to_string(),
            });
        }
        Ok(self.inner.add_edge(head, tail, label))
    }

    pub fn outgoing_edges(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, &L)> {
        self.inner
            .edges_directed(node, Direction::Outgoing)
            .map(|e| (e.target(), e.weight()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.inner.node_indices()
    }

    /// Reverse-topological order rooted at `root` (leaves first, root last).
    pub fn sort(&self, root: NodeIndex) -> Vec<NodeIndex> {
        let mut dfs = DfsPostOrder::new(&self.inner, root);
        let mut order = Vec::new();
        while let Some(idx) = dfs.next(&self.inner) {
            order.push(idx);
        }
        order
    }
}

impl<L: PartialEq> Graph<L> {
    /// The unique outgoing edge labelled `label`, if any.
    pub fn outgoing_edge(&self, node: NodeIndex, label: &L) -> Option<NodeIndex> {
        self.outgoing_edges(node).find(|&(_, l)| l == label).map(|(tail, _)| tail)
    }
}

impl<L> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

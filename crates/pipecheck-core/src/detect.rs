//! Cycle detection — three-coloring depth-first search with an explicit stack

use std::collections::HashSet;

use crate::graph::Graph;

/// One detection run over a graph. The `visited` and `path` sets live for a
/// single run and are dropped with the detector.
///
/// `visited` holds identifiers whose reachable subtree is proven cycle-free;
/// `path` holds the ancestors of the node currently being explored. An edge
/// into a `path` member is a back-edge and therefore a cycle.
pub struct CycleDetector<'g> {
    graph: &'g Graph,
    visited: HashSet<&'g str>,
    path: HashSet<&'g str>,
}

/// Traversal frame. `Leave` fires after every successor of the node has been
/// explored, which is when the node comes off the active path.
enum Frame<'g> {
    Enter(&'g str),
    Leave(&'g str),
}

impl<'g> CycleDetector<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        CycleDetector {
            graph,
            visited: HashSet::new(),
            path: HashSet::new(),
        }
    }

    /// Probe every declared node, in declaration order, until a cycle is
    /// found or all components are proven acyclic. Disconnected components
    /// each get their own probe.
    pub fn is_dag(mut self) -> bool {
        let graph = self.graph;
        for id in graph.node_ids() {
            if self.visited.contains(id) {
                continue;
            }
            if self.probe(id) {
                return false;
            }
        }
        true
    }

    /// Depth-first probe from `root`, reporting whether a cycle is reachable.
    ///
    /// Uses an explicit frame stack rather than recursion: a long unbranched
    /// chain makes the probe O(V) deep, and a public endpoint must survive
    /// that input without exhausting the call stack.
    fn probe(&mut self, root: &'g str) -> bool {
        let mut stack = vec![Frame::Enter(root)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Enter(id) => {
                    if self.path.contains(id) {
                        // Back-edge to an ancestor on the active path.
                        return true;
                    }
                    if self.visited.contains(id) {
                        continue;
                    }
                    self.visited.insert(id);
                    self.path.insert(id);
                    stack.push(Frame::Leave(id));
                    // Reversed so successors pop in edge-supply order. A
                    // dangling target simply has no successors of its own.
                    for next in self.graph.successors(id).iter().rev() {
                        stack.push(Frame::Enter(next.as_str()));
                    }
                }
                Frame::Leave(id) => {
                    // Fully explored without a cycle; stays in `visited`.
                    self.path.remove(id);
                }
            }
        }

        false
    }
}

use data_structure::graph::graph::Graph;
use data_structure::graph::edge::Edge;

/// Iterate over edges of a graph given their positions
pub struct IterEdge<'a> {
    current_idx: usize,
    edges: &'a [usize],
    graph: &'a Graph
}

impl<'a> IterEdge<'a> {
    pub fn new(edges: &'a [usize], graph: &'a Graph) -> IterEdge<'a> {
        IterEdge {
            current_idx: 0,
            edges,
            graph
        }
    }

    pub fn empty(graph: &'a Graph) -> IterEdge<'a> {
        IterEdge {
            current_idx: 0,
            edges: &[],
            graph
        }
    }
}

impl<'a> Iterator for IterEdge<'a> {
    type Item = &'a Edge;

    fn next(&mut self) -> Option<&'a Edge> {
        if self.current_idx == self.edges.len() {
            None
        } else {
            self.current_idx += 1;
            Some(self.graph.get_edge_by_idx(self.edges[self.current_idx - 1]))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.edges.len() - self.current_idx;
        (remain, Some(remain))
    }
}

impl<'a> ExactSizeIterator for IterEdge<'a> {}

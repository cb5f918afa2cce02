use std::collections::btree_map;
use std::fmt::Debug;
use std::hash::Hash;
use std::slice::Iter;
use semgraph::prelude::{Graph, Node, IterEdge};

/// Character interval `(cfrom, cto)` of a node in the source sentence
pub type Span = (i32, i32);

/// A node of a semantic representation (EDS, DMRS, ...)
pub trait SemanticNode {
    /// Identifiers are only meaningful inside the graph that owns the node
    type Id: Eq + Hash + Debug;
    type PropertyIter<'a>: Iterator<Item=(&'a str, &'a str)> where Self: 'a;

    fn id(&self) -> &Self::Id;
    fn cfrom(&self) -> i32;
    fn cto(&self) -> i32;
    fn predicate(&self) -> &str;
    fn iter_properties<'a>(&'a self) -> Self::PropertyIter<'a>;
    fn carg(&self) -> Option<&str>;
}

/// What a graph has to provide in order to be scored.
///
/// `top` and the targets yielded by `iter_arguments` may name nodes which are not in the
/// graph, use `get_node` before dereferencing them.
pub trait SemanticRepresentation {
    type Node: SemanticNode;
    type NodeIter<'a>: Iterator<Item=&'a Self::Node> where Self: 'a;
    type ArgumentIter<'a>: Iterator<Item=(&'a str, &'a <Self::Node as SemanticNode>::Id)> where Self: 'a;

    /// Nodes in graph order
    fn iter_nodes<'a>(&'a self) -> Self::NodeIter<'a>;

    /// Outgoing `(role, target id)` pairs of a node, in order
    fn iter_arguments<'a>(&'a self, node: &'a Self::Node) -> Self::ArgumentIter<'a>;

    fn top(&self) -> Option<&<Self::Node as SemanticNode>::Id>;

    fn get_node(&self, id: &<Self::Node as SemanticNode>::Id) -> Option<&Self::Node>;

    #[inline]
    fn has_node(&self, id: &<Self::Node as SemanticNode>::Id) -> bool {
        self.get_node(id).is_some()
    }
}

#[inline]
pub fn span<N: SemanticNode + ?Sized>(node: &N) -> Span {
    (node.cfrom(), node.cto())
}

impl<'g, G: SemanticRepresentation + ?Sized> SemanticRepresentation for &'g G {
    type Node = G::Node;
    type NodeIter<'a> = G::NodeIter<'a> where Self: 'a;
    type ArgumentIter<'a> = G::ArgumentIter<'a> where Self: 'a;

    fn iter_nodes<'a>(&'a self) -> G::NodeIter<'a> {
        (**self).iter_nodes()
    }

    fn iter_arguments<'a>(&'a self, node: &'a G::Node) -> G::ArgumentIter<'a> {
        (**self).iter_arguments(node)
    }

    fn top(&self) -> Option<&<G::Node as SemanticNode>::Id> {
        (**self).top()
    }

    fn get_node(&self, id: &<G::Node as SemanticNode>::Id) -> Option<&G::Node> {
        (**self).get_node(id)
    }
}

/// `(feature, value)` pairs of a `Node`, ordered by feature
pub struct IterProperty<'a> {
    properties: btree_map::Iter<'a, String, String>
}

impl<'a> Iterator for IterProperty<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        self.properties.next().map(|(feature, value)| (feature.as_str(), value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.properties.size_hint()
    }
}

/// `(role, target id)` pairs of the outgoing edges of a `Graph` node
pub struct IterArgument<'a> {
    edges: IterEdge<'a>
}

impl<'a> Iterator for IterArgument<'a> {
    type Item = (&'a str, &'a String);

    fn next(&mut self) -> Option<(&'a str, &'a String)> {
        self.edges.next().map(|e| (e.label.as_str(), &e.target_id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl SemanticNode for Node {
    type Id = String;
    type PropertyIter<'a> = IterProperty<'a>;

    fn id(&self) -> &String { &self.id }

    fn cfrom(&self) -> i32 { self.cfrom }

    fn cto(&self) -> i32 { self.cto }

    fn predicate(&self) -> &str { &self.predicate }

    fn iter_properties<'a>(&'a self) -> IterProperty<'a> {
        IterProperty { properties: self.properties.iter() }
    }

    fn carg(&self) -> Option<&str> { self.get_carg() }
}

impl SemanticRepresentation for Graph {
    type Node = Node;
    type NodeIter<'a> = Iter<'a, Node>;
    type ArgumentIter<'a> = IterArgument<'a>;

    fn iter_nodes<'a>(&'a self) -> Iter<'a, Node> {
        Graph::iter_nodes(self)
    }

    fn iter_arguments<'a>(&'a self, node: &'a Node) -> IterArgument<'a> {
        IterArgument { edges: self.iter_outgoing_edges(&node.id) }
    }

    fn top(&self) -> Option<&String> {
        self.top.as_ref()
    }

    fn get_node(&self, id: &String) -> Option<&Node> {
        self.get_node_by_id(id)
    }
}

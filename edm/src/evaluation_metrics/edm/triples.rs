use std::fmt;
use super::representation::{SemanticNode, SemanticRepresentation, Span, span};

/// Label of name triples. Names are counted in their own category, so it never meets the labels
/// of argument or property triples.
pub const NAME_LABEL: &str = "predicate";
/// Label of the property triple holding the constant argument of a node
pub const CARG_LABEL: &str = "carg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TripleValue<'a> {
    Text(&'a str),
    Span(Span)
}

/// An atomic fact `(source span, label, value)` extracted from a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple<'a> {
    pub source: Span,
    pub label: &'a str,
    pub value: TripleValue<'a>
}

impl<'a> Triple<'a> {
    pub fn new(source: Span, label: &'a str, value: TripleValue<'a>) -> Triple<'a> {
        Triple { source, label, value }
    }

    pub fn text(source: Span, label: &'a str, value: &'a str) -> Triple<'a> {
        Triple { source, label, value: TripleValue::Text(value) }
    }

    pub fn span(source: Span, label: &'a str, target: Span) -> Triple<'a> {
        Triple { source, label, value: TripleValue::Span(target) }
    }
}

impl<'a> fmt::Display for TripleValue<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            TripleValue::Text(text) => write!(f, "{}", text),
            TripleValue::Span((cfrom, cto)) => write!(f, "<{}:{}>", cfrom, cto)
        }
    }
}

impl<'a> fmt::Display for Triple<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(<{}:{}>, {}, {})", self.source.0, self.source.1, self.label, self.value)
    }
}

/// One `(span, predicate)` triple per node
pub fn names<'a, G: SemanticRepresentation>(graph: &'a G) -> Vec<Triple<'a>> {
    graph.iter_nodes()
        .map(|node| Triple::text(span(node), NAME_LABEL, node.predicate()))
        .collect()
}

/// `(span, role, target span)` for every argument. Arguments pointing to a node which is not
/// in the graph are dropped.
pub fn arguments<'a, G: SemanticRepresentation>(graph: &'a G) -> Vec<Triple<'a>> {
    let mut triples = Vec::new();
    for node in graph.iter_nodes() {
        let source = span(node);
        for (role, target) in graph.iter_arguments(node) {
            if let Some(target) = graph.get_node(target) {
                triples.push(Triple::span(source, role, span(target)));
            }
        }
    }

    triples
}

/// `(span, feature, value)` for every property, plus `(span, carg, value)` when the node has a
/// constant argument.
pub fn properties<'a, G: SemanticRepresentation>(graph: &'a G) -> Vec<Triple<'a>> {
    let mut triples = Vec::new();
    for node in graph.iter_nodes() {
        let node_span = span(node);
        for (feature, value) in node.iter_properties() {
            triples.push(Triple::text(node_span, feature, value));
        }
        if let Some(carg) = node.carg() {
            triples.push(Triple::text(node_span, CARG_LABEL, carg));
        }
    }

    triples
}

use std::fmt;
use std::slice::Iter;
use fnv::FnvHashMap;
use serde::Serialize;
use serde::Serializer;
use serde::Deserialize;
use serde::Deserializer;
use serde::de;
use data_structure::graph::node::Node;
use data_structure::graph::edge::Edge;
use data_structure::graph::graph_iter::IterEdge;

/// Serde shape of a graph: `{id, top, nodes, edges}`
#[derive(Serialize)]
struct GraphDataRef<'a> {
    id: &'a str,
    top: &'a Option<String>,
    nodes: &'a [Node],
    edges: &'a [Edge],
}

#[derive(Deserialize)]
struct GraphData {
    #[serde(default)]
    id: String,
    #[serde(default)]
    top: Option<String>,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    edges: Vec<Edge>,
}

/// Semantic dependency graph. Nodes are kept in insertion order, and arguments of a node keep
/// the order they were added in.
///
/// Apart from rejecting duplicated node ids when deserializing, the graph doesn't validate
/// anything: the top and the targets of edges may refer to nodes
/// that don't exist.
#[derive(Debug, Clone)]
pub struct Graph {
    pub id: String,
    pub top: Option<String>,
    pub n_nodes: usize,
    pub n_edges: usize,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: FnvHashMap<String, usize>,
    outgoing_index: FnvHashMap<String, Vec<usize>>,
}

impl Graph {
    pub fn new(id: String) -> Graph {
        Graph::with_capacity(id, 16, 16)
    }

    pub fn with_capacity(id: String, estimated_n_nodes: usize, estimated_n_edges: usize) -> Graph {
        let mut node_index = FnvHashMap::default();
        node_index.reserve(estimated_n_nodes);
        let mut outgoing_index = FnvHashMap::default();
        outgoing_index.reserve(estimated_n_nodes);

        Graph {
            id,
            top: None,
            n_nodes: 0,
            n_edges: 0,
            nodes: Vec::with_capacity(estimated_n_nodes),
            edges: Vec::with_capacity(estimated_n_edges),
            node_index,
            outgoing_index,
        }
    }

    /// Add new node to graph and return its position
    pub fn add_node(&mut self, node: Node) -> usize {
        debug_assert!(!self.node_index.contains_key(&node.id), "Duplicated node id: {}", node.id);

        self.node_index.insert(node.id.clone(), self.n_nodes);
        self.nodes.push(node);
        self.n_nodes += 1;
        self.n_nodes - 1
    }

    /// Add new edge to graph and return its position
    pub fn add_edge(&mut self, edge: Edge) -> usize {
        self.outgoing_index.entry(edge.source_id.clone())
            .or_insert_with(Vec::new)
            .push(self.n_edges);
        self.edges.push(edge);
        self.n_edges += 1;
        self.n_edges - 1
    }

    pub fn add_argument(&mut self, source_id: &str, role: &str, target_id: &str) -> usize {
        self.add_edge(Edge::new(role.to_owned(), source_id.to_owned(), target_id.to_owned()))
    }

    pub fn set_top(&mut self, top_id: &str) {
        self.top = Some(top_id.to_owned());
    }

    #[inline]
    pub fn get_node_by_id(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx])
    }

    #[inline]
    pub fn has_node_with_id(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// The top node, `None` if there is no top or it refers to a missing node
    pub fn get_top_node(&self) -> Option<&Node> {
        match self.top {
            None => None,
            Some(ref top) => self.get_node_by_id(top)
        }
    }

    #[inline]
    pub fn iter_nodes(&self) -> Iter<Node> { self.nodes.iter() }

    #[inline]
    pub fn iter_edges(&self) -> Iter<Edge> { self.edges.iter() }

    pub fn iter_outgoing_edges(&self, source_id: &str) -> IterEdge {
        match self.outgoing_index.get(source_id) {
            None => IterEdge::empty(self),
            Some(edges) => IterEdge::new(edges, self)
        }
    }

    #[inline]
    pub fn get_edge_by_idx(&self, idx: usize) -> &Edge { &self.edges[idx] }

    fn from_data(data: GraphData) -> Result<Graph, String> {
        let mut graph = Graph::with_capacity(data.id, data.nodes.len(), data.edges.len());
        graph.top = data.top;
        for node in data.nodes {
            if graph.has_node_with_id(&node.id) {
                return Err(format!("Duplicated node id: {}", node.id));
            }
            graph.add_node(node);
        }
        for edge in data.edges {
            graph.add_edge(edge);
        }

        Ok(graph)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Graph(id={}, top={}\n", self.id, self.top.as_ref().map(|s| s.as_str()).unwrap_or("-"))?;
        for n in self.iter_nodes() {
            write!(f, "\t+ {}:{}<{}:{}>\n", n.id, n.predicate, n.cfrom, n.cto)?;
        }
        for e in self.iter_edges() {
            write!(f, "\t+ {}---{}---{}\n", e.source_id, e.label, e.target_id)?;
        }

        write!(f, ")")
    }
}

impl Serialize for Graph {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {

        GraphDataRef {
            id: &self.id,
            top: &self.top,
            nodes: &self.nodes,
            edges: &self.edges,
        }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D>(deserializer: D) -> Result<Graph, D::Error>
        where D: Deserializer<'de> {

        let data = GraphData::deserialize(deserializer)?;
        Graph::from_data(data).map_err(de::Error::custom)
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Graph) -> bool {
        self.id == other.id && self.top == other.top && self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for Graph {}

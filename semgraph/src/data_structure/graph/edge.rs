/// A labeled argument link. `target_id` is not required to name a node of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub label: String,
    pub source_id: String,
    pub target_id: String,
}

impl Edge {
    pub fn new(label: String, source_id: String, target_id: String) -> Edge {
        Edge { label, source_id, target_id }
    }
}

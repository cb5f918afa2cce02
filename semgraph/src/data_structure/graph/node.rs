use std::collections::BTreeMap;

/// Offset used when a node carries no surface alignment.
pub const UNKNOWN_OFFSET: i32 = -1;

fn unknown_offset() -> i32 {
    UNKNOWN_OFFSET
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub predicate: String,
    #[serde(default = "unknown_offset")]
    pub cfrom: i32,
    #[serde(default = "unknown_offset")]
    pub cto: i32,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
    #[serde(default)]
    pub carg: Option<String>,
}

impl Node {
    pub fn new(id: String, predicate: String, cfrom: i32, cto: i32) -> Node {
        Node {
            id,
            predicate,
            cfrom,
            cto,
            properties: BTreeMap::new(),
            carg: None,
        }
    }

    /// A node without surface alignment, both offsets are `UNKNOWN_OFFSET`
    pub fn new_unaligned(id: String, predicate: String) -> Node {
        Node::new(id, predicate, UNKNOWN_OFFSET, UNKNOWN_OFFSET)
    }

    pub fn set_property(&mut self, feature: &str, value: &str) {
        self.properties.insert(feature.to_owned(), value.to_owned());
    }

    pub fn set_carg(&mut self, carg: &str) {
        self.carg = Some(carg.to_owned());
    }

    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.cfrom != UNKNOWN_OFFSET && self.cto != UNKNOWN_OFFSET
    }

    /// Constant argument, an empty string counts as no carg
    pub fn get_carg(&self) -> Option<&str> {
        match self.carg {
            Some(ref carg) if !carg.is_empty() => Some(carg.as_str()),
            _ => None
        }
    }
}

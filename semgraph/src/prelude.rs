pub use data_structure::graph::{Graph, Node, Edge, IterEdge, UNKNOWN_OFFSET};

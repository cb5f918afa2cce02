//! Elementary Dependency Matching.
//!
//! Each graph is broken down into name, argument, property and top triples keyed by the
//! character spans of nodes, so a gold graph and a test graph can be compared without sharing
//! node identifiers. Counts of matched triples are summed over a corpus, weighted per category,
//! and turned into precision, recall and F1.

pub mod representation;
pub mod triples;
pub mod matching;
pub mod prf;
pub mod corpus;
pub mod diagnostics;
pub mod report;

pub use self::representation::{SemanticNode, SemanticRepresentation, Span, span, IterProperty, IterArgument};
pub use self::triples::{Triple, TripleValue, names, arguments, properties, NAME_LABEL, CARG_LABEL};
pub use self::matching::{Category, Counts, PairCounts, match_pair, match_tops, count_matches};
pub use self::prf::prf;
pub use self::corpus::{compute, compute_with, evaluate_corpus, Evaluator, Surplus};
pub use self::diagnostics::{DiagnosticsSink, LogSink, NullSink, RecordingSink, Event};
pub use self::report::EdmReport;

pub use errors::{Error, ErrorKind, Result, ResultExt};
pub use settings::{Settings, Weights, MisalignmentPolicy};
pub use evaluation_metrics::edm as edm_eval;
pub use evaluation_metrics::edm::{
    SemanticNode, SemanticRepresentation, Span, span,
    Triple, TripleValue, names, arguments, properties,
    Category, Counts, PairCounts, match_pair,
    prf, evaluate_corpus, compute, compute_with, Evaluator, Surplus,
    DiagnosticsSink, LogSink, NullSink, RecordingSink, Event,
    EdmReport
};

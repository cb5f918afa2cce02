use std::fmt;
use itertools::{Itertools, EitherOrBoth};

use errors::*;
use settings::{Settings, Weights, MisalignmentPolicy};
use super::representation::SemanticRepresentation;
use super::matching::{PairCounts, match_pair};
use super::diagnostics::{DiagnosticsSink, LogSink};
use super::report::EdmReport;

/// Side of the corpus that still had items when the other one ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surplus {
    Gold,
    Test
}

impl Surplus {
    pub fn other(&self) -> Surplus {
        match *self {
            Surplus::Gold => Surplus::Test,
            Surplus::Test => Surplus::Gold
        }
    }
}

impl fmt::Display for Surplus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Surplus::Gold => write!(f, "gold"),
            Surplus::Test => write!(f, "test")
        }
    }
}

/// Compare the i-th gold graph with the i-th test graph for every aligned pair and sum the
/// counts. The corpora are consumed lazily; iteration stops as soon as one of them is exhausted.
///
/// Negative or non-finite weights are scored as 0 (see `Weights::sanitized`), the report holds
/// the weights that were actually used.
pub fn evaluate_corpus<GI, TI, S>(golds: GI, tests: TI, weights: &Weights, sink: &mut S) -> EdmReport
    where GI: IntoIterator, GI::Item: SemanticRepresentation,
          TI: IntoIterator, TI::Item: SemanticRepresentation,
          S: DiagnosticsSink + ?Sized {

    let sanitized = weights.sanitized();
    if let Err(e) = weights.validate() {
        warn!("{}; scoring with {:?}", e, sanitized);
    }
    let weights = &sanitized;
    sink.on_start(weights);

    let mut totals = PairCounts::default();
    let mut n_pairs = 0;
    let mut surplus = None;

    for pair in golds.into_iter().zip_longest(tests) {
        match pair {
            EitherOrBoth::Both(gold, test) => {
                n_pairs += 1;
                let counts = match_pair(&gold, &test);
                sink.on_pair(n_pairs, &counts);
                totals += counts;
            },
            EitherOrBoth::Left(_) => {
                surplus = Some(Surplus::Gold);
                break;
            },
            EitherOrBoth::Right(_) => {
                surplus = Some(Surplus::Test);
                break;
            }
        }
    }

    if let Some(side) = surplus {
        sink.on_misalignment(side, n_pairs);
    }

    let report = EdmReport::new(n_pairs, surplus, *weights, totals);
    sink.on_finish(&report);
    report
}

/// EDM `(precision, recall, f1)` of a test corpus against a gold corpus, reporting progress to
/// the `log` facade.
///
/// Corpora of different lengths are truncated to the shorter one.
pub fn compute<GI, TI>(golds: GI, tests: TI, weights: &Weights) -> (f64, f64, f64)
    where GI: IntoIterator, GI::Item: SemanticRepresentation,
          TI: IntoIterator, TI::Item: SemanticRepresentation {

    compute_with(golds, tests, weights, &mut LogSink)
}

/// Same as `compute`, with an explicit diagnostics sink
pub fn compute_with<GI, TI, S>(golds: GI, tests: TI, weights: &Weights, sink: &mut S) -> (f64, f64, f64)
    where GI: IntoIterator, GI::Item: SemanticRepresentation,
          TI: IntoIterator, TI::Item: SemanticRepresentation,
          S: DiagnosticsSink + ?Sized {

    evaluate_corpus(golds, tests, weights, sink).scores()
}

/// Runs evaluations with a fixed configuration and diagnostics sink
pub struct Evaluator<S: DiagnosticsSink = LogSink> {
    settings: Settings,
    sink: S
}

impl Evaluator<LogSink> {
    pub fn new(settings: Settings) -> Result<Evaluator<LogSink>> {
        Evaluator::with_sink(settings, LogSink)
    }
}

impl<S: DiagnosticsSink> Evaluator<S> {
    pub fn with_sink(settings: Settings, sink: S) -> Result<Evaluator<S>> {
        settings.validate()?;
        Ok(Evaluator { settings, sink })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Evaluate a test corpus against a gold corpus. Misaligned corpora are an error only under
    /// `MisalignmentPolicy::Strict`.
    pub fn evaluate<GI, TI>(&mut self, golds: GI, tests: TI) -> Result<EdmReport>
        where GI: IntoIterator, GI::Item: SemanticRepresentation,
              TI: IntoIterator, TI::Item: SemanticRepresentation {

        let report = evaluate_corpus(golds, tests, &self.settings.weights, &mut self.sink);
        match (self.settings.misalignment, report.surplus) {
            (MisalignmentPolicy::Strict, Some(surplus)) => {
                bail!(ErrorKind::MisalignedCorpora(surplus, report.n_pairs))
            },
            _ => Ok(report)
        }
    }
}

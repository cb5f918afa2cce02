use log::Level;

use settings::Weights;
use super::matching::PairCounts;
use super::corpus::Surplus;
use super::report::EdmReport;

/// Receives progress of a corpus evaluation. Every method does nothing by default.
pub trait DiagnosticsSink {
    fn on_start(&mut self, _weights: &Weights) {}

    /// `index` starts from 1
    fn on_pair(&mut self, _index: usize, _counts: &PairCounts) {}

    /// One of the corpora still had items after `n_pairs` aligned pairs
    fn on_misalignment(&mut self, _surplus: Surplus, _n_pairs: usize) {}

    fn on_finish(&mut self, _report: &EdmReport) {}
}

impl<'a, S: DiagnosticsSink + ?Sized> DiagnosticsSink for &'a mut S {
    fn on_start(&mut self, weights: &Weights) {
        (**self).on_start(weights)
    }

    fn on_pair(&mut self, index: usize, counts: &PairCounts) {
        (**self).on_pair(index, counts)
    }

    fn on_misalignment(&mut self, surplus: Surplus, n_pairs: usize) {
        (**self).on_misalignment(surplus, n_pairs)
    }

    fn on_finish(&mut self, report: &EdmReport) {
        (**self).on_finish(report)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {}

/// Forward everything to the `log` facade. Per-pair tables are only built when debug logging
/// is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn on_start(&mut self, weights: &Weights) {
        info!("Computing EDM (N={}, A={}, P={}, T={})", weights.name, weights.argument, weights.property, weights.top);
    }

    fn on_pair(&mut self, index: usize, counts: &PairCounts) {
        info!("comparing pair {}", index);

        if log_enabled!(Level::Debug) {
            debug!("             gold\ttest\tboth\tPrec.\tRec.\tF-Score");
            for (category, c) in counts.iter() {
                let (precision, recall, f1) = c.prf();
                debug!("{:>11}: {:4}\t{:4}\t{:4}\t{:5.3}\t{:5.3}\t{:5.3}",
                       category.title(), c.gold, c.test, c.both, precision, recall, f1);
            }
        }
    }

    fn on_misalignment(&mut self, surplus: Surplus, n_pairs: usize) {
        warn!("more {} items than {} items; ignoring the rest (scored {} pairs)", surplus, surplus.other(), n_pairs);
    }

    fn on_finish(&mut self, report: &EdmReport) {
        info!("EDM over {} pairs: precision={:.4}, recall={:.4}, f1={:.4}",
              report.n_pairs, report.precision, report.recall, report.f1);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Start(Weights),
    Pair(usize, PairCounts),
    Misalignment(Surplus, usize),
    Finish(EdmReport)
}

/// Keep every event in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink { events: Vec::new() }
    }

    /// Counts of each pair, in the order the pairs were compared
    pub fn pair_counts(&self) -> Vec<&PairCounts> {
        self.events.iter()
            .filter_map(|e| match *e {
                Event::Pair(_, ref counts) => Some(counts),
                _ => None
            })
            .collect()
    }

    pub fn misalignment(&self) -> Option<(Surplus, usize)> {
        self.events.iter()
            .filter_map(|e| match *e {
                Event::Misalignment(surplus, n_pairs) => Some((surplus, n_pairs)),
                _ => None
            })
            .next()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn on_start(&mut self, weights: &Weights) {
        self.events.push(Event::Start(*weights));
    }

    fn on_pair(&mut self, index: usize, counts: &PairCounts) {
        self.events.push(Event::Pair(index, *counts));
    }

    fn on_misalignment(&mut self, surplus: Surplus, n_pairs: usize) {
        self.events.push(Event::Misalignment(surplus, n_pairs));
    }

    fn on_finish(&mut self, report: &EdmReport) {
        self.events.push(Event::Finish(report.clone()));
    }
}

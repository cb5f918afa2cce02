use prettytable::Table;
use serde_json;

use errors::*;

use settings::Weights;
use super::matching::{Category, PairCounts};
use super::corpus::Surplus;
use super::prf::prf;

/// Result of a corpus evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdmReport {
    /// Number of gold/test pairs that were compared
    pub n_pairs: usize,
    pub surplus: Option<Surplus>,
    pub weights: Weights,
    pub totals: PairCounts,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64
}

impl EdmReport {
    pub fn new(n_pairs: usize, surplus: Option<Surplus>, weights: Weights, totals: PairCounts) -> EdmReport {
        let (gold, test, both) = weights.weigh(&totals);
        let (precision, recall, f1) = prf(gold, test, both);

        EdmReport { n_pairs, surplus, weights, totals, precision, recall, f1 }
    }

    #[inline]
    pub fn scores(&self) -> (f64, f64, f64) {
        (self.precision, self.recall, self.f1)
    }

    /// Unweighted scores of a single category
    pub fn category_scores(&self, category: Category) -> (f64, f64, f64) {
        self.totals[category].prf()
    }

    pub fn weighted_totals(&self) -> (f64, f64, f64) {
        self.weights.weigh(&self.totals)
    }

    pub fn prettify(&self) -> String {
        let mut table = Table::new();
        table.add_row(row!["category", "weight", "gold", "test", "both", "precision", "recall", "f1"]);

        for (category, counts) in self.totals.iter() {
            let (precision, recall, f1) = counts.prf();
            table.add_row(row![
                category.title(), self.weights.get(category),
                counts.gold, counts.test, counts.both,
                format!("{:.4}", precision), format!("{:.4}", recall), format!("{:.4}", f1)
            ]);
        }

        let (gold, test, both) = self.weighted_totals();
        table.add_row(row![
            "All", "",
            gold, test, both,
            format!("{:.4}", self.precision), format!("{:.4}", self.recall), format!("{:.4}", self.f1)
        ]);

        table.to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(text: &str) -> Result<EdmReport> {
        Ok(serde_json::from_str(text)?)
    }
}

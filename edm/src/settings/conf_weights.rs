use evaluation_metrics::edm::{Category, PairCounts};
use errors::*;

/// Weight of each category of triples in the corpus totals
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub name: f64,
    pub argument: f64,
    pub property: f64,
    pub top: f64
}

impl Default for Weights {
    fn default() -> Weights {
        Weights { name: 1.0, argument: 1.0, property: 1.0, top: 1.0 }
    }
}

impl Weights {
    pub fn new(name: f64, argument: f64, property: f64, top: f64) -> Weights {
        Weights { name, argument, property, top }
    }

    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Name => self.name,
            Category::Argument => self.argument,
            Category::Property => self.property,
            Category::Top => self.top
        }
    }

    pub fn validate(&self) -> Result<()> {
        for &category in Category::ALL.iter() {
            let weight = self.get(category);
            if !weight.is_finite() || weight < 0.0 {
                bail!(ErrorKind::InvalidWeight(category, weight));
            }
        }

        Ok(())
    }

    /// Negative and non-finite weights replaced by 0. With these weights every score is in
    /// `[0, 1]`.
    pub fn sanitized(&self) -> Weights {
        let clamp = |weight: f64| if weight.is_finite() && weight >= 0.0 { weight } else { 0.0 };
        Weights::new(clamp(self.name), clamp(self.argument), clamp(self.property), clamp(self.top))
    }

    /// Weighted `(gold, test, both)` totals
    pub fn weigh(&self, totals: &PairCounts) -> (f64, f64, f64) {
        let mut gold = 0.0;
        let mut test = 0.0;
        let mut both = 0.0;

        for (category, counts) in totals.iter() {
            let weight = self.get(category);
            gold += weight * counts.gold as f64;
            test += weight * counts.test as f64;
            both += weight * counts.both as f64;
        }

        (gold, test, both)
    }
}

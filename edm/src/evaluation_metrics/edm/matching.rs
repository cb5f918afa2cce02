use std::cmp;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Index};
use std::vec::IntoIter;
use fnv::FnvHashMap;

use super::representation::{SemanticRepresentation, span};
use super::triples::{Triple, names, arguments, properties};
use super::prf::prf;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Name,
    Argument,
    Property,
    Top
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Name, Category::Argument, Category::Property, Category::Top];

    pub fn as_str(&self) -> &'static str {
        match *self {
            Category::Name => "name",
            Category::Argument => "argument",
            Category::Property => "property",
            Category::Top => "top"
        }
    }

    /// Heading used when the category is reported
    pub fn title(&self) -> &'static str {
        match *self {
            Category::Name => "Names",
            Category::Argument => "Arguments",
            Category::Property => "Properties",
            Category::Top => "Tops"
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of facts in the gold graph, in the test graph, and in both
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Counts {
    pub gold: usize,
    pub test: usize,
    pub both: usize
}

impl Counts {
    pub fn new(gold: usize, test: usize, both: usize) -> Counts {
        Counts { gold, test, both }
    }

    pub fn prf(&self) -> (f64, f64, f64) {
        prf(self.gold as f64, self.test as f64, self.both as f64)
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, other: Counts) -> Counts {
        Counts::new(self.gold + other.gold, self.test + other.test, self.both + other.both)
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, other: Counts) {
        self.gold += other.gold;
        self.test += other.test;
        self.both += other.both;
    }
}

/// Counts of every category for one gold/test pair, or summed over a corpus
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PairCounts {
    pub names: Counts,
    pub arguments: Counts,
    pub properties: Counts,
    pub tops: Counts
}

impl PairCounts {
    /// Counts of every category, in the order of `Category::ALL`
    pub fn iter(&self) -> IntoIter<(Category, Counts)> {
        Category::ALL.iter()
            .map(|&category| (category, self[category]))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl Index<Category> for PairCounts {
    type Output = Counts;

    fn index(&self, category: Category) -> &Counts {
        match category {
            Category::Name => &self.names,
            Category::Argument => &self.arguments,
            Category::Property => &self.properties,
            Category::Top => &self.tops
        }
    }
}

impl Add for PairCounts {
    type Output = PairCounts;

    fn add(self, other: PairCounts) -> PairCounts {
        PairCounts {
            names: self.names + other.names,
            arguments: self.arguments + other.arguments,
            properties: self.properties + other.properties,
            tops: self.tops + other.tops
        }
    }
}

impl AddAssign for PairCounts {
    fn add_assign(&mut self, other: PairCounts) {
        self.names += other.names;
        self.arguments += other.arguments;
        self.properties += other.properties;
        self.tops += other.tops;
    }
}

fn counter<T: Eq + Hash>(items: &[T]) -> FnvHashMap<&T, usize> {
    let mut counter: FnvHashMap<&T, usize> = Default::default();
    for item in items {
        *counter.entry(item).or_insert(0) += 1;
    }
    counter
}

/// `both` is the size of the multiset intersection: a triple repeated n times in gold and m
/// times in test matches min(n, m) times.
pub fn count_matches(gold_triples: &[Triple], test_triples: &[Triple]) -> Counts {
    let gold_counter = counter(gold_triples);
    let test_counter = counter(test_triples);

    let both = gold_counter.iter()
        .filter_map(|(triple, &n)| test_counter.get(triple).map(|&m| cmp::min(n, m)))
        .sum();

    Counts::new(gold_triples.len(), test_triples.len(), both)
}

/// A top counts when it refers to a node of its graph, and the tops match when both count and
/// cover the same span.
pub fn match_tops<G, T>(gold: &G, test: &T) -> Counts
    where G: SemanticRepresentation, T: SemanticRepresentation {

    let gold_top = gold.top().and_then(|top| gold.get_node(top));
    let test_top = test.top().and_then(|top| test.get_node(top));

    let both = match (gold_top, test_top) {
        (Some(x), Some(x_prime)) if span(x) == span(x_prime) => 1,
        _ => 0
    };

    Counts::new(gold_top.is_some() as usize, test_top.is_some() as usize, both)
}

/// Compare one gold graph with one test graph
pub fn match_pair<G, T>(gold: &G, test: &T) -> PairCounts
    where G: SemanticRepresentation, T: SemanticRepresentation {

    PairCounts {
        names: count_matches(&names(gold), &names(test)),
        arguments: count_matches(&arguments(gold), &arguments(test)),
        properties: count_matches(&properties(gold), &properties(test)),
        tops: match_tops(gold, test)
    }
}

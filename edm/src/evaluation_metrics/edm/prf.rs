/// Precision, recall and F1 from the number of gold facts, test facts and facts in both.
///
/// Returns `(0, 0, 0)` as soon as one of the counts is zero.
pub fn prf(gold: f64, test: f64, both: f64) -> (f64, f64, f64) {
    if test == 0.0 || gold == 0.0 || both == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    let precision = both / test;
    let recall = both / gold;
    let f1 = 2.0 * precision * recall / (precision + recall);

    (precision, recall, f1)
}

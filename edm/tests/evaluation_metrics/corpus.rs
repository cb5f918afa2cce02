use std::cell::Cell;
use log::{Level, LevelFilter};

use edm::prelude::*;
use super::helper::*;

#[test]
fn test_truncate_to_shorter_corpus() {
    init_logger();

    let golds = vec![dog("sg"), dog_barks_gold(), abrams_sleeps()];
    let tests = vec![dog("pl"), dog_barks_test(), abrams_sleeps(), dog("sg"), dog_barks_gold()];

    let mut sink = RecordingSink::new();
    let scores = compute_with(&golds, &tests, &Weights::default(), &mut sink);

    assert_eq!(sink.pair_counts().len(), 3);
    assert_eq!(sink.misalignment(), Some((Surplus::Test, 3)));

    // the surplus graphs do not contribute anything
    assert_eq!(scores, compute(&golds, &tests[..3], &Weights::default()));
}

#[test]
fn test_corpora_are_consumed_lazily() {
    let n_pulled = Cell::new(0);
    let golds = vec![dog("sg"), dog_barks_gold(), abrams_sleeps()];
    let tests = (0..5).map(|_| {
        n_pulled.set(n_pulled.get() + 1);
        dog("sg")
    });

    let report = evaluate_corpus(golds, tests, &Weights::default(), &mut NullSink);
    assert_eq!(report.n_pairs, 3);
    assert_eq!(report.surplus, Some(Surplus::Test));
    // one more item to find out the test corpus is longer, never the whole of it
    assert_eq!(n_pulled.get(), 4);
}

#[test]
fn test_gold_surplus() {
    let golds = vec![dog("sg"), dog("pl")];
    let tests = vec![dog("sg")];

    let mut sink = RecordingSink::new();
    assert_eq!(compute_with(&golds, &tests, &Weights::default(), &mut sink), (1.0, 1.0, 1.0));
    assert_eq!(sink.misalignment(), Some((Surplus::Gold, 1)));
}

#[test]
fn test_weights_pull_towards_category() {
    let golds = vec![dog_barks_gold()];
    let tests = vec![dog_barks_test()];

    let base = compute(&golds, &tests, &Weights::default());
    assert_close(base, (0.5, 0.5, 0.5));

    // names score 2/3 on their own
    let mut weights = Weights::default();
    weights.name = 3.0;
    let heavier_names = compute(&golds, &tests, &weights);
    assert!(heavier_names.2 > base.2);
    assert_close(heavier_names, (9.0 / 16.0, 9.0 / 16.0, 9.0 / 16.0));

    // tops score 0 on their own
    let mut weights = Weights::default();
    weights.top = 5.0;
    let heavier_tops = compute(&golds, &tests, &weights);
    assert!(heavier_tops.2 < base.2);
    assert_close(heavier_tops, (5.0 / 14.0, 5.0 / 14.0, 5.0 / 14.0));

    let mut weights = Weights::default();
    weights.property = 5.0;
    assert_close(compute(vec![dog("sg")], vec![dog("pl")], &weights), (2.0 / 7.0, 2.0 / 7.0, 2.0 / 7.0));
}

#[test]
fn test_zero_weight_ignores_category() {
    let golds = vec![dog_barks_gold()];
    let tests = vec![dog_barks_test()];

    let mut weights = Weights::default();
    weights.top = 0.0;
    weights.property = 2.0;

    // 3 + 2 + 8 gold/test facts, 2 + 1 + 4 in both
    assert_close(compute(&golds, &tests, &weights), (7.0 / 13.0, 7.0 / 13.0, 7.0 / 13.0));
}

#[test]
fn test_evaluator() {
    init_logger();

    let golds = vec![dog("sg"), dog_barks_gold()];
    let tests = vec![dog("pl"), dog_barks_test(), abrams_sleeps()];

    let settings = Settings::from_yaml_str("misalignment: truncate").unwrap();
    let mut evaluator = Evaluator::new(settings).unwrap();
    let report = evaluator.evaluate(&golds, &tests).unwrap();
    assert_eq!(report.n_pairs, 2);
    assert_eq!(report.surplus, Some(Surplus::Test));
    assert_eq!(report.totals.names, Counts::new(4, 4, 3));
    assert_eq!(report.totals.arguments, Counts::new(2, 2, 1));
    assert_eq!(report.totals.properties, Counts::new(5, 5, 2));
    assert_eq!(report.totals.tops, Counts::new(2, 2, 1));
    assert_close(report.scores(), (7.0 / 13.0, 7.0 / 13.0, 7.0 / 13.0));
    assert_eq!(report.scores(), compute(&golds, &tests, &Weights::default()));

    let settings = Settings::from_yaml_str("misalignment: strict").unwrap();
    let mut evaluator = Evaluator::with_sink(settings, RecordingSink::new()).unwrap();
    assert!(evaluator.evaluate(&golds, &tests).is_err());
    assert_eq!(evaluator.sink().misalignment(), Some((Surplus::Test, 2)));
    assert!(evaluator.evaluate(&golds, &tests[..2]).is_ok());
}

#[test]
fn test_report() {
    let golds = vec![dog_barks_gold()];
    let tests = vec![dog_barks_test()];

    let report = evaluate_corpus(&golds, &tests, &Weights::default(), &mut NullSink);
    assert_eq!(report.surplus, None);
    assert_eq!(report.weighted_totals(), (10.0, 10.0, 5.0));
    assert_close(report.scores(), (0.5, 0.5, 0.5));
    assert_close(report.category_scores(Category::Name), (2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));
    assert_eq!(report.category_scores(Category::Top), (0.0, 0.0, 0.0));

    let table = report.prettify();
    assert!(table.contains("Properties"));
    assert!(table.contains("0.5000"));
}

#[test]
fn test_scores_stay_in_unit_interval() {
    let negative = Weights::new(1.0, 1.0, -0.9, 1.0);
    let scores = compute(vec![dog("sg")], vec![dog("pl")], &negative);
    for &score in &[scores.0, scores.1, scores.2] {
        assert!(score >= 0.0 && score <= 1.0, "Score out of range: {:?}", scores);
    }

    // the negative weight is ignored: names and tops agree
    assert_eq!(scores, (1.0, 1.0, 1.0));
    assert_eq!(scores, compute(vec![dog("sg")], vec![dog("pl")], &Weights::new(1.0, 1.0, 0.0, 1.0)));

    let mut weights = Weights::default();
    weights.name = ::std::f64::INFINITY;
    let scores = compute(vec![dog_barks_gold()], vec![dog_barks_test()], &weights);
    assert_close(scores, (3.0 / 7.0, 3.0 / 7.0, 3.0 / 7.0));
}

#[test]
fn test_log_sink_at_debug_level() {
    init_logger();
    assert!(log_enabled!(Level::Debug));
    assert!(::log::max_level() >= LevelFilter::Debug);

    let mut sink = LogSink;
    let counts = match_pair(&dog_barks_gold(), &dog_barks_test());
    sink.on_pair(1, &counts);
    sink.on_misalignment(Surplus::Test, 1);

    let golds = vec![dog_barks_gold()];
    let tests = vec![dog_barks_test(), dog("sg")];
    assert_close(compute(&golds, &tests, &Weights::default()), (0.5, 0.5, 0.5));
}

use edm::prelude::*;
use semgraph::prelude::*;
use super::helper::*;

#[test]
fn test_names_one_per_node() {
    for g in &[dog("sg"), dog_barks_gold(), dog_barks_test(), abrams_sleeps()] {
        assert_eq!(names(g).len(), g.n_nodes);
    }
}

#[test]
fn test_self_match_is_perfect() {
    for g in &[dog("sg"), dog_barks_gold(), dog_barks_test(), abrams_sleeps()] {
        let counts = match_pair(g, g);
        for (category, c) in counts.iter() {
            assert_eq!(c.gold, c.both, "{} of {}", category, g.id);
            assert_eq!(c.test, c.both, "{} of {}", category, g.id);
        }

        assert_eq!(compute(Some(g), Some(g), &Weights::default()), (1.0, 1.0, 1.0));
    }
}

#[test]
fn test_intersection_is_symmetric() {
    let pairs = vec![
        (dog("sg"), dog("pl")),
        (dog_barks_gold(), dog_barks_test()),
        (dog_barks_gold(), abrams_sleeps()),
    ];

    for &(ref a, ref b) in &pairs {
        let ab = match_pair(a, b);
        let ba = match_pair(b, a);
        for &category in Category::ALL.iter() {
            assert_eq!(ab[category].both, ba[category].both);
            assert_eq!(ab[category].gold, ba[category].test);
            assert_eq!(ab[category].test, ba[category].gold);
        }
    }
}

#[test]
fn test_property_disagreement() {
    let counts = match_pair(&dog("sg"), &dog("pl"));
    assert_eq!(counts.names, Counts::new(1, 1, 1));
    assert_eq!(counts.properties, Counts::new(1, 1, 0));
    assert_eq!(counts.tops, Counts::new(1, 1, 1));
    assert_eq!(counts.names.prf().2, 1.0);
    assert_eq!(counts.properties.prf().2, 0.0);
    assert_eq!(counts.tops.prf().2, 1.0);

    assert_close(compute(Some(dog("sg")), Some(dog("pl")), &Weights::default()), (2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0));
}

#[test]
fn test_parser_output() {
    let counts = match_pair(&dog_barks_gold(), &dog_barks_test());
    assert_eq!(counts.names, Counts::new(3, 3, 2));
    // the argument to a missing node is not counted
    assert_eq!(counts.arguments, Counts::new(2, 2, 1));
    assert_eq!(counts.properties, Counts::new(4, 4, 2));
    assert_eq!(counts.tops, Counts::new(1, 1, 0));
}

#[test]
fn test_carg() {
    let gold = abrams_sleeps();
    let mut test = abrams_sleeps();
    assert_eq!(test.get_node_by_id("x3").and_then(|n| n.get_carg()), Some("Abrams"));
    assert_eq!(properties(&gold).len(), 3);

    let mut renamed = Graph::new("browne-sleeps".to_owned());
    for node in test.iter_nodes() {
        let mut node = node.clone();
        if node.id == "x3" {
            node.set_carg("Browne");
        }
        renamed.add_node(node);
    }
    for edge in test.iter_edges() {
        renamed.add_edge(edge.clone());
    }
    renamed.top = test.top.take();

    let counts = match_pair(&gold, &renamed);
    assert_eq!(counts.properties, Counts::new(3, 3, 2));
    assert_eq!(counts.names, Counts::new(3, 3, 3));
    assert_eq!(counts.arguments, Counts::new(2, 2, 2));
    assert_eq!(counts.tops, Counts::new(1, 1, 1));
}

#[test]
fn test_missing_top() {
    let gold = dog("sg");
    let mut test = dog("sg");
    test.set_top("n2");

    let counts = match_pair(&gold, &test);
    assert_eq!(counts.tops, Counts::new(1, 0, 0));

    // 3 gold facts, 2 test facts, all test facts correct
    assert_close(compute(Some(&gold), Some(&test), &Weights::default()), (1.0, 2.0 / 3.0, 0.8));
}

#[test]
fn test_empty_graphs() {
    let empty = Graph::new("empty".to_owned());
    let counts = match_pair(&empty, &empty);
    assert_eq!(counts, PairCounts::default());
    assert_eq!(compute(Some(&empty), Some(&empty), &Weights::default()), (0.0, 0.0, 0.0));
}
